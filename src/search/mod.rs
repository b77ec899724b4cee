//! The two search loops and the strategy entry points built on them.
pub mod graph;
pub mod strategies;
pub mod tree;

pub use graph::*;
pub use strategies::*;
pub use tree::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::Problem;

    /// A small undirected map with explicit edge costs and optional
    /// per-node estimates, shared by the loop and strategy tests.
    ///
    /// Successors are enumerated in edge-list order, which makes every
    /// strategy deterministic in the tests.
    pub struct TinyMap {
        edges: Vec<(char, char, f64)>,
        estimates: Vec<(char, f64)>,
    }

    impl TinyMap {
        pub fn new(edges: Vec<(char, char, f64)>) -> Self {
            TinyMap {
                edges,
                estimates: vec![],
            }
        }

        /// `A-B (1), B-D (1), A-C (5), C-D (1)`: two routes from A to D,
        /// a cheap two-hop one and an expensive detour.
        pub fn diamond() -> Self {
            Self::new(vec![
                ('A', 'B', 1.0),
                ('A', 'C', 5.0),
                ('B', 'D', 1.0),
                ('C', 'D', 1.0),
            ])
        }

        /// Two disconnected components, `A-B` and `C-D`.
        pub fn split() -> Self {
            Self::new(vec![('A', 'B', 1.0), ('C', 'D', 1.0)])
        }

        /// A larger weighted map with competing routes from 'A' to 'G'.
        /// The cheapest path is A-C-E-G with cost 6.
        pub fn weighted() -> Self {
            Self::new(vec![
                ('A', 'B', 4.0),
                ('A', 'C', 2.0),
                ('B', 'D', 5.0),
                ('C', 'D', 8.0),
                ('C', 'E', 3.0),
                ('D', 'G', 2.0),
                ('E', 'G', 1.0),
                ('B', 'E', 6.0),
            ])
        }

        pub fn with_estimates(mut self, estimates: Vec<(char, f64)>) -> Self {
            self.estimates = estimates;
            self
        }
    }

    impl Problem for TinyMap {
        type Node = char;

        fn successors(&self, node: &char) -> Vec<char> {
            let mut next = vec![];
            for (a, b, _) in &self.edges {
                if a == node {
                    next.push(*b);
                }
                if b == node {
                    next.push(*a);
                }
            }
            next
        }

        fn edge_cost(&self, x: &char, y: &char) -> f64 {
            for (a, b, cost) in &self.edges {
                if (a == x && b == y) || (a == y && b == x) {
                    return *cost;
                }
            }
            panic!("no edge between {:?} and {:?}", x, y)
        }

        fn estimate(&self, node: &char, _goal: &char) -> f64 {
            self.estimates
                .iter()
                .find(|(n, _)| n == node)
                .map(|(_, h)| *h)
                .unwrap_or(0.0)
        }
    }
}
