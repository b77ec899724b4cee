//! This module contains everything that is necessary to parse the road
//! network CSV files and turn them into structs usable in Rust.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use rustc_hash::FxHashMap;

/// This structure represents the road network instance: the coordinates of
/// every node and the adjacency its (bidirectional) edge list induces.
#[derive(Debug, Clone, Default)]
pub struct RoadNetworkInstance {
    /// Longitude and latitude of every node, keyed by node id.
    pub positions: FxHashMap<u32, (f64, f64)>,
    /// The neighbors of every node.
    pub adjacency: FxHashMap<u32, Vec<u32>>,
}

impl RoadNetworkInstance {
    /// Parses an instance from a nodes file (`node_id,longitude,latitude`
    /// rows) and an edges file (`edge_id,node_a,node_b` rows). A header
    /// row in either file is skipped.
    pub fn from_files(nodes: File, edges: File) -> Self {
        let mut instance = RoadNetworkInstance::default();
        instance.read_nodes(BufReader::new(nodes).lines());
        instance.read_edges(BufReader::new(edges).lines());
        instance
    }

    fn read_nodes<B: BufRead>(&mut self, lines: Lines<B>) {
        for line in lines {
            let line = line.unwrap();
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(&[' ', ',', '\t']).filter(|s| !s.is_empty());
            let id = match fields.next().map(str::parse::<u32>) {
                Some(Ok(id)) => id,
                _ => continue, // header row
            };
            let longitude = fields.next().unwrap().parse::<f64>().unwrap();
            let latitude = fields.next().unwrap().parse::<f64>().unwrap();

            self.positions.insert(id, (longitude, latitude));
        }
    }

    fn read_edges<B: BufRead>(&mut self, lines: Lines<B>) {
        for line in lines {
            let line = line.unwrap();
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(&[' ', ',', '\t']).filter(|s| !s.is_empty());
            if fields.next().map(str::parse::<u32>).map_or(true, |id| id.is_err()) {
                continue; // header row
            }
            let a = fields.next().unwrap().parse::<u32>().unwrap();
            let b = fields.next().unwrap().parse::<u32>().unwrap();

            self.adjacency.entry(a).or_default().push(b);
            self.adjacency.entry(b).or_default().push(a);
        }
    }
}
