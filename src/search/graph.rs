use rustc_hash::FxHashSet;

use crate::{Candidate, EmptyContainerError, Frontier, Outcome, Problem, Query};

/// The generalized graph-search loop: every strategy with a visited set is
/// this function with a different frontier.
///
/// The loop never inspects the ordering itself. It pops whatever the
/// frontier decides comes next, tests it against the goal, drops it when
/// its node was already expanded, and otherwise expands it. Dropping
/// already-visited pops is what lazily deletes the stale, higher-cost
/// entries a distinct frontier leaves behind for settled nodes. The
/// visited set guarantees each node is expanded at most once, hence
/// termination on finite maps with cycles.
pub fn graph_search<P, F>(
    problem: &P,
    query: &Query<P::Node>,
    mut frontier: F,
) -> Result<Outcome<P::Node>, EmptyContainerError>
where
    P: Problem,
    F: Frontier<Item = Candidate<P::Node>>,
{
    let start = query.start.clone();
    let seed = Candidate::seed(start.clone(), query.estimate(problem, &start));
    frontier.push(seed);

    let mut visited: FxHashSet<P::Node> = FxHashSet::default();
    // high-water mark of the frontier and visited-set sizes
    let mut expanded = 1;

    while !frontier.is_empty() {
        let candidate = frontier.pop()?;
        let current = candidate.node().clone();

        if query.is_goal(&current) {
            return Ok(Outcome::found(candidate.path, candidate.cost, expanded));
        }

        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        for next in problem.successors(&current) {
            if visited.contains(&next) {
                continue;
            }

            let edge = problem.edge_cost(&current, &next);
            let estimate = query.estimate(problem, &next);
            frontier.push(candidate.extend(next, edge, estimate));

            expanded = expanded.max(frontier.len()).max(visited.len());
        }
    }

    Ok(Outcome::not_found(expanded))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::TinyMap;
    use super::*;
    use crate::{Queue, Stack};

    #[test]
    fn a_reachable_goal_is_found_with_any_frontier() {
        let map = TinyMap::diamond();

        let with_queue = graph_search(&map, &Query::new('A', 'D'), Queue::new()).unwrap();
        let with_stack = graph_search(&map, &Query::new('A', 'D'), Stack::new()).unwrap();

        assert!(with_queue.is_success());
        assert!(with_stack.is_success());
    }

    #[test]
    fn an_unreachable_goal_is_an_explicit_no_solution() {
        let map = TinyMap::split();
        let outcome = graph_search(&map, &Query::new('A', 'D'), Queue::new()).unwrap();

        assert_eq!(outcome.solution, None);
        assert!(!outcome.pruned);
        assert!(outcome.expanded >= 1);
    }

    #[test]
    fn the_trivial_query_returns_the_single_node_path() {
        let map = TinyMap::diamond();
        let outcome = graph_search(&map, &Query::new('A', 'A'), Queue::new()).unwrap();

        let solution = outcome.solution.unwrap();
        assert_eq!(solution.path, vec!['A']);
        assert_eq!(solution.cost, 0.0);
    }

    #[test]
    fn cycles_do_not_prevent_termination() {
        // A-B-C-A is a cycle; the goal sits behind it
        let map = TinyMap::new(vec![
            ('A', 'B', 1.0),
            ('B', 'C', 1.0),
            ('C', 'A', 1.0),
            ('C', 'D', 1.0),
        ]);
        let outcome = graph_search(&map, &Query::new('A', 'D'), Stack::new()).unwrap();

        assert!(outcome.is_success());
    }
}
