use oorandom::Rand64;

use super::{ensure_nodes, Generate};
use crate::graph::{Edge, GraphError, UndirectedGraph};
use crate::rng::rand_index;

/// Grows a random graph one node at a time, adding a fixed amount of edges per new node.
///
/// In citation mode every edge of step `i` connects node `i` to a uniformly chosen older node,
/// so the result is connected whenever at least one edge is added per step.
/// Otherwise both ends are drawn from the nodes present so far, which may leave nodes isolated.
/// Self-loops and parallel edges are possible in both modes.
pub struct GrowingRandom<'a> {
    order: usize,
    edges_per_step: usize,
    citation: bool,
    rng: &'a mut Rand64,
}

impl<'a> GrowingRandom<'a> {
    pub fn new(
        order: usize,
        edges_per_step: usize,
        citation: bool,
        rng: &'a mut Rand64,
    ) -> GrowingRandom<'a> {
        GrowingRandom {
            order,
            edges_per_step,
            citation,
            rng,
        }
    }
}

impl<'a> Generate for GrowingRandom<'a> {
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError> {
        ensure_nodes(self.order)?;
        let too_many = GraphError::TooManyEdges {
            order: self.order,
            edges_per_step: self.edges_per_step,
        };
        let edge_count = (self.order - 1)
            .checked_mul(self.edges_per_step)
            .ok_or_else(|| too_many.clone())?;
        let mut edges: Vec<Edge<usize>> = Vec::new();
        edges.try_reserve_exact(edge_count).map_err(|_| too_many)?;

        for i in 1..self.order {
            for _ in 0..self.edges_per_step {
                let edge = if self.citation {
                    (i, rand_index(self.rng, i))
                } else {
                    (rand_index(self.rng, i + 1), 1 + rand_index(self.rng, i))
                };
                edges.push(edge);
            }
        }

        UndirectedGraph::from_edges(self.order, &edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng64;

    #[test]
    fn citation_mode_is_connected() {
        let mut rng = rng64(1234);
        for seed_round in 0..20 {
            let graph = GrowingRandom::new(30, 1 + seed_round % 3, true, &mut rng)
                .generate()
                .unwrap();

            assert!(graph.is_connected(), "Citation growth should always be connected.");
        }
    }

    #[test]
    fn edge_count_is_steps_times_edges() {
        let mut rng = rng64(99);
        let connected = GrowingRandom::new(10, 3, true, &mut rng).generate().unwrap();
        let unconnected = GrowingRandom::new(10, 3, false, &mut rng).generate().unwrap();

        assert_eq!(connected.size(), 27, "9 growth steps with 3 edges each.");
        assert_eq!(unconnected.size(), 27, "9 growth steps with 3 edges each.");
    }

    #[test]
    fn edges_only_reach_existing_nodes() {
        let mut rng = rng64(5);
        let graph = GrowingRandom::new(15, 2, false, &mut rng).generate().unwrap();

        // Step i emits the edges at positions 2 * (i - 1) and 2 * (i - 1) + 1.
        for (position, &(from, to)) in graph.edges().iter().enumerate() {
            let step = position / 2 + 1;
            assert!(from <= step && to <= step, "Edge {:?} reaches beyond step {}.", (from, to), step);
            assert!(to >= 1, "The larger end is drawn from 1..=i and can never be 0.");
        }
    }

    #[test]
    fn same_seed_reproduces_graph() {
        let mut rng_a = rng64(2021);
        let mut rng_b = rng64(2021);
        let a = GrowingRandom::new(25, 2, false, &mut rng_a).generate().unwrap();
        let b = GrowingRandom::new(25, 2, false, &mut rng_b).generate().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn huge_edge_counts_error_instead_of_overflowing() {
        let mut rng = rng64(3);
        let huge = usize::MAX / 2 + 1;

        assert_eq!(
            GrowingRandom::new(3, huge, true, &mut rng).generate(),
            Err(GraphError::TooManyEdges { order: 3, edges_per_step: huge })
        );
        assert_eq!(
            GrowingRandom::new(2, usize::MAX, false, &mut rng).generate(),
            Err(GraphError::TooManyEdges { order: 2, edges_per_step: usize::MAX }),
            "A count that fits in usize but not in memory is rejected too."
        );
    }

    #[test]
    fn zero_edges_per_step_gives_isolated_nodes() {
        let mut rng = rng64(3);
        let graph = GrowingRandom::new(4, 0, true, &mut rng).generate().unwrap();

        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 0);
    }
}
