use std::collections::VecDeque;

use crate::graph::{Edge, GraphError};

/// An undirected multigraph on the nodes `0..order`.
///
/// Edges are kept in insertion order and are normalized so the smaller node id comes first.
/// Self-loops and parallel edges are allowed, a self-loop adds two to the degree of its node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndirectedGraph {
    edges: Vec<Edge<usize>>,
    adjacency: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Constructs a graph with the given amount of nodes and no edges.
    pub fn with_order(order: usize) -> Self {
        UndirectedGraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); order],
        }
    }

    /// Constructs a graph with the given amount of nodes and the given edges.
    /// Returns an error if an edge references a node outside of `0..order`.
    pub fn from_edges(order: usize, edges: &[Edge<usize>]) -> Result<Self, GraphError> {
        let mut graph = Self::with_order(order);
        graph.edges.reserve(edges.len());
        for &edge in edges {
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }

    /// Constructs a graph from a bare list of edges.
    /// The order is inferred from the largest node id, so trailing isolated nodes are lost.
    pub fn from_edge_list(edges: &[Edge<usize>]) -> Self {
        let order = edges
            .iter()
            .map(|&(from, to)| from.max(to) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::with_order(order);
        for &edge in edges {
            graph.push_edge(edge);
        }

        graph
    }

    /// Returns true if there are no nodes, or false otherwise.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of nodes in this graph.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in this graph.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over node ids.
    pub fn iter_node_ids(&self) -> impl Iterator<Item = usize> {
        0..self.order()
    }

    /// Returns an iterator over edges in insertion order.
    pub fn iter_edges(&self) -> impl Iterator<Item = Edge<usize>> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the edges of this graph in insertion order.
    pub fn edges(&self) -> &[Edge<usize>] {
        &self.edges
    }

    /// Returns true if node with id is a member, or false otherwise.
    pub fn has_node(&self, id: usize) -> bool {
        id < self.order()
    }

    /// Returns true if at least one edge connects both nodes.
    pub fn has_edge(&self, edge: Edge<usize>) -> bool {
        let (from, to) = normalized(edge);
        self.adjacency
            .get(from)
            .map_or(false, |neighbors| neighbors.contains(&to))
    }

    /// Adds a new edge to the graph.
    /// Returns an error if one of the nodes is missing.
    pub fn add_edge(&mut self, edge: Edge<usize>) -> Result<(), GraphError> {
        let (from, to) = edge;
        if !self.has_node(from) {
            return Err(GraphError::MissingNode(from));
        } else if !self.has_node(to) {
            return Err(GraphError::MissingNode(to));
        }

        self.push_edge(edge);
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge<usize>) {
        let (from, to) = normalized(edge);
        self.adjacency[from].push(to);
        self.adjacency[to].push(from);
        self.edges.push((from, to));
    }

    /// Returns the neighbors of the node with id, once per connecting edge end.
    /// Returns an error if the node is not in the graph.
    pub fn neighbors(&self, id: usize) -> Result<&[usize], GraphError> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or(GraphError::MissingNode(id))
    }

    /// Returns the count of edge ends at node with given id.
    /// Returns an error if the node is not in the graph.
    pub fn degree(&self, id: usize) -> Result<usize, GraphError> {
        Ok(self.neighbors(id)?.len())
    }

    /// Returns the degree of every node, indexed by node id.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Returns true if every node can be reached from node 0.
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let mut visited = vec![false; self.order()];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);
        let mut reached = 1;

        while let Some(node) = queue.pop_front() {
            for &neighbor in &self.adjacency[node] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    reached += 1;
                    queue.push_back(neighbor);
                }
            }
        }

        reached == self.order()
    }
}

fn normalized((from, to): Edge<usize>) -> Edge<usize> {
    if from <= to {
        (from, to)
    } else {
        (to, from)
    }
}
