use crate::{EmptyContainerError, Frontier, Outcome, Problem, Query, Solution, Stack};

/// Tree-like search: no visited set, so the same node may legitimately be
/// reached along unrelated branches.
///
/// Frontiers here hold bare paths; a path's cost is only computed once it
/// reaches the goal, and the goal test runs when a successor is generated
/// rather than when it is popped. Without a visited set, termination on a
/// cyclic map is not guaranteed; callers searching cyclic state spaces
/// must use [`depth_limited_search`] or
/// [`iterative_deepening_search`](crate::iterative_deepening_search)
/// instead.
pub fn tree_search<P, F>(
    problem: &P,
    query: &Query<P::Node>,
    mut frontier: F,
) -> Result<Outcome<P::Node>, EmptyContainerError>
where
    P: Problem,
    F: Frontier<Item = Vec<P::Node>>,
{
    let start = query.start.clone();
    if query.is_goal(&start) {
        return Ok(Outcome::found(vec![start], 0.0, 0));
    }

    frontier.push(vec![start]);
    let mut expanded = 1;

    while !frontier.is_empty() {
        let path = frontier.pop()?;
        let current = path.last().expect("frontier paths are never empty").clone();

        for next in problem.successors(&current) {
            let reached_goal = query.is_goal(&next);
            let mut extended = path.clone();
            extended.push(next);

            if reached_goal {
                let cost = problem.path_cost(&extended);
                return Ok(Outcome::found(extended, cost, expanded));
            }
            if problem.has_cycle(&extended) {
                continue;
            }

            frontier.push(extended);
            expanded = expanded.max(frontier.len());
        }
    }

    Ok(Outcome::not_found(expanded))
}

/// Depth-limited tree search over a LIFO frontier.
///
/// A popped path longer than `limit` nodes is discarded and recorded in
/// the outcome's `pruned` flag instead of being expanded. A run that comes
/// back unsolved *and* unpruned has exhausted every path, which is the
/// signal iterative deepening terminates on; pruning and true exhaustion
/// are deliberately reported apart.
pub fn depth_limited_search<P>(
    problem: &P,
    query: &Query<P::Node>,
    limit: usize,
) -> Result<Outcome<P::Node>, EmptyContainerError>
where
    P: Problem,
{
    let start = query.start.clone();
    if query.is_goal(&start) {
        return Ok(Outcome::found(vec![start], 0.0, 0));
    }

    let mut frontier = Stack::new();
    frontier.push(vec![start]);
    let mut expanded = 1;
    let mut pruned = false;

    while !frontier.is_empty() {
        let path = frontier.pop()?;

        if path.len() > limit {
            pruned = true;
            continue;
        }
        let current = path.last().expect("frontier paths are never empty").clone();

        for next in problem.successors(&current) {
            let reached_goal = query.is_goal(&next);
            let mut extended = path.clone();
            extended.push(next);

            if reached_goal {
                let cost = problem.path_cost(&extended);
                return Ok(Outcome {
                    solution: Some(Solution {
                        path: extended,
                        cost,
                    }),
                    expanded,
                    pruned,
                });
            }
            if problem.has_cycle(&extended) {
                continue;
            }

            frontier.push(extended);
            expanded = expanded.max(frontier.len());
        }
    }

    Ok(Outcome {
        solution: None,
        expanded,
        pruned,
    })
}
