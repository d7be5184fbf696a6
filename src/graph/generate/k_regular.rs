use oorandom::Rand64;
use std::collections::HashSet;

use super::{ensure_nodes, Generate};
use crate::graph::{Edge, GraphError, UndirectedGraph};
use crate::rng::rand_index;

const MAX_ATTEMPTS: usize = 100;
const FAILURES_BEFORE_CHECK: usize = 64;
const SWITCHES_PER_EDGE: usize = 10;

/// Generates a random simple graph in which every node has the same degree.
///
/// Each node starts with `degree` free edge ends (stubs). Random stub pairs are joined as long as
/// they form neither a loop nor a parallel edge. When the remaining stubs admit no such pair the
/// attempt is thrown away and pairing restarts from scratch. If every attempt gets stuck, a
/// circulant graph of the same degree is randomized by degree preserving edge switches instead.
///
/// Dense graphs (more than half of all possible neighbors) are built as the complement of the
/// sparse regular graph with degree `order - 1 - degree`, since stub pairing rarely succeeds on
/// them. Their edges are listed as `(i, j)` with `i < j`, ordered by `i` then `j`.
pub struct KRegular<'a> {
    order: usize,
    degree: usize,
    rng: &'a mut Rand64,
}

impl<'a> KRegular<'a> {
    pub fn new(order: usize, degree: usize, rng: &'a mut Rand64) -> KRegular<'a> {
        KRegular { order, degree, rng }
    }

    fn validate(&self) -> Result<(), GraphError> {
        ensure_nodes(self.order)?;
        // The degree sum is odd exactly when both factors are.
        if self.order % 2 == 1 && self.degree % 2 == 1 {
            return Err(GraphError::OddDegreeSum {
                order: self.order,
                degree: self.degree,
            });
        }
        if self.degree > 0 && self.degree >= self.order {
            return Err(GraphError::DegreeTooLarge {
                order: self.order,
                degree: self.degree,
            });
        }

        Ok(())
    }

    /// Builds a simple `degree`-regular edge set. Requires `order * degree` even and
    /// `degree < order`.
    fn sparse_regular(&mut self, degree: usize) -> Vec<Edge<usize>> {
        for attempt in 1..=MAX_ATTEMPTS {
            if let Some(edges) = self.pair_stubs(degree) {
                tracing::debug!(attempt, degree, "found regular pairing");
                return edges;
            }
        }

        tracing::debug!(
            attempts = MAX_ATTEMPTS,
            degree,
            "stub pairing kept getting stuck, switching edges of a circulant graph"
        );
        let mut edges = circulant(self.order, degree);
        self.switch_edges(&mut edges);
        edges
    }

    /// Tries to pair up all stubs. Returns None if the attempt got stuck.
    fn pair_stubs(&mut self, degree: usize) -> Option<Vec<Edge<usize>>> {
        let mut stubs: Vec<usize> = (0..self.order)
            .flat_map(|node| std::iter::repeat(node).take(degree))
            .collect();
        let mut edges = Vec::with_capacity(stubs.len() / 2);
        let mut present = HashSet::with_capacity(stubs.len() / 2);
        let mut failures = 0;

        while !stubs.is_empty() {
            let i = rand_index(self.rng, stubs.len());
            let j = rand_index(self.rng, stubs.len());
            let edge = ordered(stubs[i], stubs[j]);

            if edge.0 != edge.1 && !present.contains(&edge) {
                present.insert(edge);
                edges.push(edge);
                // Removing the higher position first keeps the lower one valid.
                stubs.swap_remove(i.max(j));
                stubs.swap_remove(i.min(j));
                failures = 0;
                continue;
            }

            failures += 1;
            if failures >= FAILURES_BEFORE_CHECK {
                if !has_suitable_pair(&stubs, &present) {
                    return None;
                }
                failures = 0;
            }
        }

        Some(edges)
    }

    /// Replaces random edge pairs `(a, b), (c, d)` by `(a, d), (c, b)` whenever that keeps the
    /// graph simple. Degrees never change.
    fn switch_edges(&mut self, edges: &mut [Edge<usize>]) {
        if edges.len() < 2 {
            return;
        }
        let mut present: HashSet<Edge<usize>> = edges.iter().copied().collect();

        for _ in 0..SWITCHES_PER_EDGE * edges.len() {
            let x = rand_index(self.rng, edges.len());
            let y = rand_index(self.rng, edges.len());
            if x == y {
                continue;
            }

            let (a, b) = edges[x];
            let (mut c, mut d) = edges[y];
            if self.rng.rand_u64() % 2 == 1 {
                std::mem::swap(&mut c, &mut d);
            }
            let first = ordered(a, d);
            let second = ordered(c, b);
            if a == d || c == b || present.contains(&first) || present.contains(&second) {
                continue;
            }

            present.remove(&edges[x]);
            present.remove(&edges[y]);
            present.insert(first);
            present.insert(second);
            edges[x] = first;
            edges[y] = second;
        }
    }
}

impl<'a> Generate for KRegular<'a> {
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError> {
        self.validate()?;

        let complement_degree = self.order - 1 - self.degree;
        if self.degree <= complement_degree {
            let edges = self.sparse_regular(self.degree);
            return UndirectedGraph::from_edges(self.order, &edges);
        }

        let missing: HashSet<Edge<usize>> =
            self.sparse_regular(complement_degree).into_iter().collect();
        let order = self.order;
        let edges: Vec<Edge<usize>> = (0..order)
            .flat_map(|i| (i + 1..order).map(move |j| (i, j)))
            .filter(|edge| !missing.contains(edge))
            .collect();

        UndirectedGraph::from_edges(order, &edges)
    }
}

fn ordered(a: usize, b: usize) -> Edge<usize> {
    (a.min(b), a.max(b))
}

/// Joins every node to its `degree / 2` successors on a circle, and for odd degrees also to the
/// opposite node. Requires `order * degree` even and `degree < order`.
fn circulant(order: usize, degree: usize) -> Vec<Edge<usize>> {
    let mut edges: Vec<Edge<usize>> = (0..order)
        .flat_map(|node| (1..=degree / 2).map(move |step| ordered(node, (node + step) % order)))
        .collect();
    if degree % 2 == 1 {
        edges.extend((0..order / 2).map(|node| (node, node + order / 2)));
    }

    edges
}

/// Checks whether any two remaining stubs could still be joined.
fn has_suitable_pair(stubs: &[usize], present: &HashSet<Edge<usize>>) -> bool {
    let mut nodes: Vec<usize> = stubs.to_vec();
    nodes.sort_unstable();
    nodes.dedup();

    nodes.iter().enumerate().any(|(pos, &a)| {
        nodes[pos + 1..]
            .iter()
            .any(|&b| !present.contains(&ordered(a, b)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng64;

    fn assert_regular(graph: &UndirectedGraph, degree: usize) {
        for node in graph.iter_node_ids() {
            assert_eq!(
                graph.degree(node),
                Ok(degree),
                "Node {} should have degree {}.",
                node,
                degree
            );
        }
    }

    fn assert_simple(graph: &UndirectedGraph) {
        let unique: HashSet<_> = graph.iter_edges().collect();

        assert_eq!(unique.len(), graph.size(), "No parallel edges expected.");
        assert!(graph.iter_edges().all(|(from, to)| from != to), "No loops expected.");
    }

    #[test]
    fn every_node_has_requested_degree() {
        let mut rng = rng64(17);
        for (order, degree) in &[(10, 3), (8, 2), (12, 5), (7, 4), (6, 5)] {
            let graph = KRegular::new(*order, *degree, &mut rng).generate().unwrap();

            assert_eq!(graph.size(), order * degree / 2);
            assert_regular(&graph, *degree);
        }
    }

    #[test]
    fn dense_degrees_work_for_every_seed() {
        for seed in 0..10 {
            let mut rng = rng64(seed);
            let cases = [(40, 38), (40, 36), (60, 56), (60, 50), (30, 26), (100, 90), (100, 96)];
            for (order, degree) in &cases {
                let graph = KRegular::new(*order, *degree, &mut rng).generate().unwrap();

                assert_eq!(graph.size(), order * degree / 2);
                assert_regular(&graph, *degree);
                assert_simple(&graph);
            }
        }
    }

    #[test]
    fn dense_edges_are_listed_in_row_order() {
        let mut rng = rng64(4);
        let graph = KRegular::new(40, 38, &mut rng).generate().unwrap();

        assert!(graph.iter_edges().all(|(from, to)| from < to));
        assert!(
            graph.edges().windows(2).all(|pair| pair[0] < pair[1]),
            "Complement edges should be ordered by first then second node."
        );
    }

    #[test]
    fn full_degree_gives_complete_graph() {
        let mut rng = rng64(2);
        let graph = KRegular::new(6, 5, &mut rng).generate().unwrap();

        assert_eq!(graph.size(), 15);
        assert_regular(&graph, 5);
    }

    #[test]
    fn result_is_simple() {
        let mut rng = rng64(8);
        let graph = KRegular::new(20, 4, &mut rng).generate().unwrap();

        assert_simple(&graph);
    }

    #[test]
    fn zero_degree_gives_empty_edge_set() {
        let mut rng = rng64(1);
        let graph = KRegular::new(5, 0, &mut rng).generate().unwrap();

        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn odd_degree_sum_errors() {
        let mut rng = rng64(1);

        assert_eq!(
            KRegular::new(5, 3, &mut rng).generate(),
            Err(GraphError::OddDegreeSum { order: 5, degree: 3 })
        );
    }

    #[test]
    fn degree_as_large_as_order_errors() {
        let mut rng = rng64(1);

        assert_eq!(
            KRegular::new(4, 4, &mut rng).generate(),
            Err(GraphError::DegreeTooLarge { order: 4, degree: 4 })
        );
    }

    #[test]
    fn huge_degrees_error_instead_of_overflowing() {
        let mut rng = rng64(1);
        let huge = usize::MAX / 2;

        assert_eq!(
            KRegular::new(3, huge, &mut rng).generate(),
            Err(GraphError::OddDegreeSum { order: 3, degree: huge })
        );
        assert_eq!(
            KRegular::new(4, huge, &mut rng).generate(),
            Err(GraphError::DegreeTooLarge { order: 4, degree: huge })
        );
        assert_eq!(
            KRegular::new(4, usize::MAX, &mut rng).generate(),
            Err(GraphError::DegreeTooLarge { order: 4, degree: usize::MAX })
        );
    }

    #[test]
    fn same_seed_reproduces_graph() {
        for (order, degree) in &[(16, 3), (20, 15)] {
            let mut rng_a = rng64(31);
            let mut rng_b = rng64(31);
            let a = KRegular::new(*order, *degree, &mut rng_a).generate().unwrap();
            let b = KRegular::new(*order, *degree, &mut rng_b).generate().unwrap();

            assert_eq!(a, b);
        }
    }

    #[test]
    fn circulant_is_regular() {
        for (order, degree) in &[(10, 3), (9, 4), (12, 11), (5, 0)] {
            let edges = circulant(*order, *degree);
            let graph = UndirectedGraph::from_edges(*order, &edges).unwrap();

            assert_regular(&graph, *degree);
            assert_simple(&graph);
        }
    }

    #[test]
    fn switching_keeps_degrees_and_simplicity() {
        let mut rng = rng64(12);
        let mut generator = KRegular::new(30, 6, &mut rng);
        let original = circulant(30, 6);
        let mut edges = original.clone();

        generator.switch_edges(&mut edges);
        let graph = UndirectedGraph::from_edges(30, &edges).unwrap();

        assert_regular(&graph, 6);
        assert_simple(&graph);
        assert_ne!(edges, original, "Switching should move at least one edge.");
    }

    #[test]
    fn suitable_pair_detection_works() {
        let present: HashSet<_> = vec![(0, 1)].into_iter().collect();

        assert!(!has_suitable_pair(&[0, 1], &present), "0 and 1 are already joined.");
        assert!(!has_suitable_pair(&[2, 2], &present), "A node cannot pair with itself.");
        assert!(has_suitable_pair(&[0, 2], &present));
    }
}
