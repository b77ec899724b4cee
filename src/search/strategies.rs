use crate::search::graph::graph_search;
use crate::search::tree::depth_limited_search;
use crate::{
    ByCost, ByDestination, ByEstimate, ByTotal, DistinctHeap, EmptyContainerError, Outcome,
    Problem, Query, Queue, Stack,
};

/// Depth-first search: a LIFO frontier, no heuristic.
pub fn depth_first_search<P: Problem>(
    problem: &P,
    start: P::Node,
    goal: P::Node,
) -> Result<Outcome<P::Node>, EmptyContainerError> {
    let query = Query::new(start, goal);
    graph_search(problem, &query, Stack::new())
}

/// Breadth-first search: a FIFO frontier, no heuristic.
pub fn breadth_first_search<P: Problem>(
    problem: &P,
    start: P::Node,
    goal: P::Node,
) -> Result<Outcome<P::Node>, EmptyContainerError> {
    let query = Query::new(start, goal);
    graph_search(problem, &query, Queue::new())
}

/// Uniform-cost search: a distinct frontier ordered by accumulated cost
/// and keyed by destination, so at most one live path exists per reached
/// node and it is the cheapest seen so far.
pub fn uniform_cost_search<P: Problem>(
    problem: &P,
    start: P::Node,
    goal: P::Node,
) -> Result<Outcome<P::Node>, EmptyContainerError> {
    let query = Query::new(start, goal);
    graph_search(problem, &query, DistinctHeap::new(ByDestination, ByCost))
}

/// Greedy best-first search: a distinct frontier ordered by the heuristic
/// estimate alone.
pub fn greedy_search<P: Problem>(
    problem: &P,
    start: P::Node,
    goal: P::Node,
) -> Result<Outcome<P::Node>, EmptyContainerError> {
    let query = Query::with_heuristic(start, goal);
    graph_search(problem, &query, DistinctHeap::new(ByDestination, ByEstimate))
}

/// A* search: a distinct frontier ordered by accumulated cost plus
/// estimate.
pub fn a_star_search<P: Problem>(
    problem: &P,
    start: P::Node,
    goal: P::Node,
) -> Result<Outcome<P::Node>, EmptyContainerError> {
    let query = Query::with_heuristic(start, goal);
    graph_search(problem, &query, DistinctHeap::new(ByDestination, ByTotal))
}

/// Iterative-deepening search: depth-limited tree runs with limits 0, 1,
/// 2, … until one finds a solution or completes without pruning anything,
/// which proves that no solution exists at any depth.
pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
    start: P::Node,
    goal: P::Node,
) -> Result<Outcome<P::Node>, EmptyContainerError> {
    let query = Query::new(start, goal);

    let mut limit = 0;
    loop {
        let outcome = depth_limited_search(problem, &query, limit)?;
        if outcome.is_success() || !outcome.pruned {
            return Ok(outcome);
        }
        limit += 1;
    }
}
