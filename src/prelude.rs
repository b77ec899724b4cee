use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use thiserror::Error;

/// The error produced when popping from an empty container.
///
/// The search loops never pop without checking the frontier size first, so
/// this error escaping a search is a programming mistake in the caller and
/// is propagated untouched rather than recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pop from an empty container")]
pub struct EmptyContainerError;

/// The problem abstraction the search loops consume: something that can
/// enumerate successors, price edges, and (optionally) estimate the
/// remaining cost to a goal.
pub trait Problem {
    type Node: Clone + Eq + Hash + Debug;

    /// All nodes one edge away from `node`.
    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// The cost of the edge between two adjacent nodes. Never negative.
    fn edge_cost(&self, a: &Self::Node, b: &Self::Node) -> f64;

    /// An optimistic guess of the cost remaining from `node` to `goal`.
    /// Never negative.
    fn estimate(&self, node: &Self::Node, goal: &Self::Node) -> f64;

    /// The total cost of a path: the sum over its consecutive edges.
    fn path_cost(&self, path: &[Self::Node]) -> f64 {
        path.windows(2).map(|e| self.edge_cost(&e[0], &e[1])).sum()
    }

    /// Returns true iff `path` visits some node twice.
    ///
    /// The check compares the number of distinct nodes to the path length,
    /// so a path that merely reaches an old node again through a different
    /// route is rejected along with true loops. The tree-like searches
    /// rely on that stricter reading.
    fn has_cycle(&self, path: &[Self::Node]) -> bool {
        let distinct: FxHashSet<&Self::Node> = path.iter().collect();
        distinct.len() < path.len()
    }
}

/// One search run's configuration: where to start, what to reach, and
/// whether the ordering may consult the problem's estimate.
///
/// A query is built immediately before a run and passed by reference, so
/// any number of searches may share a single read-only problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<N> {
    pub start: N,
    pub goal: N,
    pub heuristic: bool,
}

impl<N: Clone + Eq> Query<N> {
    pub fn new(start: N, goal: N) -> Self {
        Query {
            start,
            goal,
            heuristic: false,
        }
    }

    pub fn with_heuristic(start: N, goal: N) -> Self {
        Query {
            start,
            goal,
            heuristic: true,
        }
    }

    /// The binary goal test.
    pub fn is_goal(&self, node: &N) -> bool {
        *node == self.goal
    }

    /// The estimate recorded on candidates: the problem's estimate when
    /// this query enables the heuristic, and 0 uniformly otherwise.
    pub fn estimate<P>(&self, problem: &P, node: &N) -> f64
    where
        P: Problem<Node = N>,
    {
        if self.heuristic {
            problem.estimate(node, &self.goal)
        } else {
            0.0
        }
    }
}

/// A partial path from the start node, together with its accumulated cost
/// and the heuristic estimate of its final node.
///
/// Candidates are the only unit the graph-search frontiers store; which of
/// the three numbers orders them is the frontier's business alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<N> {
    pub path: Vec<N>,
    pub cost: f64,
    pub estimate: f64,
}

impl<N> Candidate<N> {
    /// The single-node candidate a search is seeded with.
    pub fn seed(start: N, estimate: f64) -> Self {
        Candidate {
            path: vec![start],
            cost: 0.0,
            estimate,
        }
    }

    /// The node this candidate stands on: the last element of its path.
    pub fn node(&self) -> &N {
        self.path.last().expect("a candidate path is never empty")
    }

    /// A new candidate whose path is this one's extended by `node`.
    pub fn extend(&self, node: N, edge_cost: f64, estimate: f64) -> Self
    where
        N: Clone,
    {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(node);
        Candidate {
            path,
            cost: self.cost + edge_cost,
            estimate,
        }
    }
}

/// A successful search: the full path and its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<N> {
    pub path: Vec<N>,
    pub cost: f64,
}

/// What a search run reports back.
///
/// `expanded` is the running maximum of the frontier size and the visited
/// set size over the run, a proxy for peak memory rather than a count of
/// pop operations. `pruned` records whether a depth-bounded run discarded
/// any candidate at its bound; it is independent of the presence of a
/// solution, and only the bounded variants ever set it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<N> {
    pub solution: Option<Solution<N>>,
    pub expanded: usize,
    pub pruned: bool,
}

impl<N> Outcome<N> {
    pub fn found(path: Vec<N>, cost: f64, expanded: usize) -> Self {
        Outcome {
            solution: Some(Solution { path, cost }),
            expanded,
            pruned: false,
        }
    }

    pub fn not_found(expanded: usize) -> Self {
        Outcome {
            solution: None,
            expanded,
            pruned: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.solution.is_some()
    }
}

/// The pending-candidates structure whose extraction order defines a
/// search strategy.
///
/// The search loops depend on nothing else: they push, pop and measure the
/// frontier, oblivious to whether those operations are backed by a stack,
/// a FIFO queue or a priority structure.
pub trait Frontier {
    type Item;

    /// Inserts one item.
    fn push(&mut self, item: Self::Item);

    /// Removes and returns one item according to the concrete ordering.
    fn pop(&mut self) -> Result<Self::Item, EmptyContainerError>;

    /// The number of items currently stored. O(1).
    fn len(&self) -> usize;

    /// Returns true iff the frontier is empty (len == 0).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line;
    impl Problem for Line {
        type Node = u32;

        fn successors(&self, node: &u32) -> Vec<u32> {
            vec![node + 1]
        }
        fn edge_cost(&self, a: &u32, b: &u32) -> f64 {
            (*b as f64 - *a as f64).abs()
        }
        fn estimate(&self, node: &u32, goal: &u32) -> f64 {
            (*goal as f64 - *node as f64).abs()
        }
    }

    #[test]
    fn estimate_is_zero_when_the_heuristic_is_off() {
        let on = Query::with_heuristic(0u32, 4u32);
        let off = Query::new(0u32, 4u32);

        assert_eq!(on.estimate(&Line, &1), 3.0);
        assert_eq!(off.estimate(&Line, &1), 0.0);
    }

    #[test]
    fn extending_a_candidate_accumulates_cost() {
        let seed = Candidate::seed(0u32, 0.0);
        let next = seed.extend(3, 3.0, 1.0);

        assert_eq!(next.path, vec![0, 3]);
        assert_eq!(next.cost, 3.0);
        assert_eq!(*next.node(), 3);
        // the source candidate is untouched
        assert_eq!(seed.path, vec![0]);
    }

    #[test]
    fn path_cost_sums_consecutive_edges() {
        assert_eq!(Line.path_cost(&[0, 2, 7]), 7.0);
        assert_eq!(Line.path_cost(&[5]), 0.0);
    }
}
