//! # Topology Model
//!
//! The in-memory graph built from neighbor observations.
//!
//! Devices are keyed by their lowercased name, links by the sorted pair of
//! the two device keys. Both collections keep first-seen order so that the
//! rendered diagram is stable for identical input.

mod edge;
mod node;
mod platform;

use indexmap::IndexMap;

pub use edge::{Edge, LinkKey};
pub use node::{Node, device_key};
pub use platform::{Platform, UNKNOWN_PLATFORM, merge};

/// Final result of a build pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Topology {
    pub nodes: IndexMap<String, Node>,
    pub edges: Vec<Edge>,
}

impl Topology {
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(&device_key(name))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
