use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

use peak_alloc::PeakAlloc;

use crate::{
    a_star_search, breadth_first_search, depth_first_search, greedy_search,
    iterative_deepening_search, uniform_cost_search, EmptyContainerError, Outcome, Problem,
};

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

/// The strategies a driver can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Dfs,
    Bfs,
    Uniform,
    Greedy,
    AStar,
    Ids,
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "uniform" => Ok(Self::Uniform),
            "greedy" => Ok(Self::Greedy),
            "astar" => Ok(Self::AStar),
            "ids" => Ok(Self::Ids),
            _ => Err("the supported strategies are 'dfs', 'bfs', 'uniform', 'greedy', 'astar' and 'ids'"),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dfs => write!(f, "dfs"),
            Self::Bfs => write!(f, "bfs"),
            Self::Uniform => write!(f, "uniform"),
            Self::Greedy => write!(f, "greedy"),
            Self::AStar => write!(f, "astar"),
            Self::Ids => write!(f, "ids"),
        }
    }
}

/// One timed search, ready to be printed as an aligned report row or as a
/// CSV record.
#[derive(Debug, Clone)]
pub struct Report<N> {
    pub strategy: Strategy,
    pub start: N,
    pub goal: N,
    pub outcome: Outcome<N>,
    pub seconds: f64,
}

/// Runs one strategy against a start/goal pair, measuring its wall-clock
/// time.
pub fn run<P: Problem>(
    problem: &P,
    strategy: Strategy,
    start: P::Node,
    goal: P::Node,
) -> Result<Report<P::Node>, EmptyContainerError> {
    let begin = Instant::now();
    let outcome = match strategy {
        Strategy::Dfs => depth_first_search(problem, start.clone(), goal.clone()),
        Strategy::Bfs => breadth_first_search(problem, start.clone(), goal.clone()),
        Strategy::Uniform => uniform_cost_search(problem, start.clone(), goal.clone()),
        Strategy::Greedy => greedy_search(problem, start.clone(), goal.clone()),
        Strategy::AStar => a_star_search(problem, start.clone(), goal.clone()),
        Strategy::Ids => iterative_deepening_search(problem, start.clone(), goal.clone()),
    }?;
    let seconds = begin.elapsed().as_secs_f64();

    Ok(Report {
        strategy,
        start,
        goal,
        outcome,
        seconds,
    })
}

/// Prints the column header matching [`Report::print_row`].
pub fn report_header() {
    println!(
        "{:>8} | {:>10} | {:>10} | {:>12} | {:>12} | {:>10} | {:>10} | {:>10}",
        "STRATEGY", "START", "GOAL", "STATUS", "COST", "TIME_(S)", "RAM_(MB)", "EXPANDED"
    );
}

/// The header line matching [`Report::csv_row`].
pub fn csv_header() -> &'static str {
    "algorithm,start,end,total distance,time cost(seconds),memo cost(number of nodes),path"
}

impl<N: Display> Report<N> {
    pub fn print_row(&self) {
        let status = if self.outcome.is_success() {
            "found"
        } else {
            "no solution"
        };
        let cost = match &self.outcome.solution {
            Some(s) => format!("{:.3}", s.cost),
            None => "-".to_owned(),
        };
        println!(
            "{:>8} | {:>10} | {:>10} | {:>12} | {:>12} | {:>10.4} | {:>10.2} | {:>10}",
            self.strategy,
            self.start,
            self.goal,
            status,
            cost,
            self.seconds,
            PEAK_ALLOC.peak_usage_as_mb(),
            self.outcome.expanded,
        );
    }

    pub fn csv_row(&self) -> String {
        let (cost, path) = match &self.outcome.solution {
            Some(s) => {
                let nodes: Vec<String> = s.path.iter().map(|n| n.to_string()).collect();
                (s.cost.to_string(), nodes.join(" "))
            }
            None => (String::new(), String::new()),
        };
        format!(
            "{},{},{},{},{},{},{}",
            self.strategy, self.start, self.goal, cost, self.seconds, self.outcome.expanded, path
        )
    }
}
