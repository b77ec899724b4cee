use std::fs::File;

use structopt::StructOpt;
use wayfinder::{csv_header, report_header, run, Strategy};

use instance::RoadNetworkInstance;
use model::RoadNetwork;

mod instance;
mod model;

#[derive(Debug, StructOpt)]
pub enum Args {
    /// Runs one strategy (or the whole battery) on a start/goal pair.
    Solve {
        /// CSV file listing `node_id,longitude,latitude` rows.
        #[structopt(short, long)]
        nodes: String,
        /// CSV file listing `edge_id,node_a,node_b` rows.
        #[structopt(short, long)]
        edges: String,
        #[structopt(short, long)]
        start: u32,
        #[structopt(short, long)]
        goal: u32,
        /// One of dfs, bfs, uniform, greedy, astar, ids. When absent, the
        /// five graph-search strategies are all run (ids is left out: it
        /// needs far more patience than the rest).
        #[structopt(short = "S", long)]
        strategy: Option<Strategy>,
        /// Emits CSV records instead of the aligned table.
        #[structopt(long)]
        csv: bool,
    },
    /// Prints the aligned report header.
    PrintHeader,
}

fn main() {
    let args = Args::from_args();

    match args {
        Args::Solve {
            nodes,
            edges,
            start,
            goal,
            strategy,
            csv,
        } => solve(nodes, edges, start, goal, strategy, csv),
        Args::PrintHeader => report_header(),
    }
}

fn solve(
    nodes: String,
    edges: String,
    start: u32,
    goal: u32,
    strategy: Option<Strategy>,
    csv: bool,
) {
    let nodes = File::open(nodes).unwrap();
    let edges = File::open(edges).unwrap();
    let network = RoadNetwork::new(RoadNetworkInstance::from_files(nodes, edges));

    let strategies = match strategy {
        Some(s) => vec![s],
        None => vec![
            Strategy::Dfs,
            Strategy::Bfs,
            Strategy::Uniform,
            Strategy::Greedy,
            Strategy::AStar,
        ],
    };

    if csv {
        println!("{}", csv_header());
    } else {
        report_header();
    }
    for strategy in strategies {
        let report = run(&network, strategy, start, goal).unwrap();
        if csv {
            println!("{}", report.csv_row());
        } else {
            report.print_row();
        }
    }
}
