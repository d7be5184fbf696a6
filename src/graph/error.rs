use thiserror::Error;

/// Failures raised while building or querying an [`UndirectedGraph`](super::UndirectedGraph).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    MissingNode(usize),
    #[error("a graph needs at least one node")]
    NoNodes,
    #[error("{order} nodes of degree {degree} give an odd degree sum")]
    OddDegreeSum { order: usize, degree: usize },
    #[error("degree {degree} is not possible on {order} nodes without loops or multi-edges")]
    DegreeTooLarge { order: usize, degree: usize },
    #[error("a tree needs a branching factor of at least one")]
    ZeroBranching,
    #[error("{order} nodes with {edges_per_step} edges per step exceed the edges a graph can hold")]
    TooManyEdges { order: usize, edges_per_step: usize },
}
