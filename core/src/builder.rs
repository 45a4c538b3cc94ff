//! # Graph Builder
//!
//! Folds [`NeighborRecord`]s into a [`Topology`].
//!
//! Devices are merged case-insensitively; a neighbor's platform can fill in
//! an unknown one but never replaces a concrete one. Links are undirected and
//! only the first row describing a device pair produces an edge.

use std::collections::HashSet;

use indexmap::map::Entry;
use indexmap::IndexMap;
use nbrmap_common::topology::{Edge, LinkKey, Node, Platform, Topology, device_key};
use tracing::trace;

use crate::loader::NeighborRecord;

/// Counters collected while ingesting rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub rows_ingested: usize,
    pub rows_ignored: usize,
    pub duplicate_links: usize,
    pub platform_upgrades: usize,
}

#[derive(Debug, Default)]
pub struct TopologyBuilder {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
    seen_links: HashSet<LinkKey>,
    stats: BuildStats,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    ///
    /// Returns `true` when the row introduced a new link.
    pub fn ingest(&mut self, record: &NeighborRecord) -> bool {
        if !record.has_devices() {
            self.stats.rows_ignored += 1;
            return false;
        }
        self.stats.rows_ingested += 1;

        let queried = record.queried_device.as_str();
        let neighbor = record.neighbor_device.as_str();

        // Queried devices never carry a platform of their own in the dump.
        self.upsert(queried, Platform::Unknown);
        self.upsert(neighbor, Platform::from_observed(&record.neighbor_platform));

        let link = LinkKey::new(queried, neighbor);
        if !self.seen_links.insert(link) {
            self.stats.duplicate_links += 1;
            trace!(queried, neighbor, "link already recorded");
            return false;
        }

        self.edges.push(Edge::new(
            queried,
            neighbor,
            &record.local_interface,
            &record.remote_interface,
        ));
        true
    }

    fn upsert(&mut self, name: &str, platform: Platform) {
        match self.nodes.entry(device_key(name)) {
            Entry::Occupied(mut entry) => {
                if entry.get_mut().observe(platform) {
                    self.stats.platform_upgrades += 1;
                    trace!(device = name, platform = %entry.get().platform, "platform learned");
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Node::new(name, platform));
            }
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn finish(self) -> Topology {
        Topology {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl<'a> Extend<&'a NeighborRecord> for TopologyBuilder {
    fn extend<I: IntoIterator<Item = &'a NeighborRecord>>(&mut self, iter: I) {
        for record in iter {
            self.ingest(record);
        }
    }
}

impl Extend<NeighborRecord> for TopologyBuilder {
    fn extend<I: IntoIterator<Item = NeighborRecord>>(&mut self, iter: I) {
        for record in iter {
            self.ingest(&record);
        }
    }
}
