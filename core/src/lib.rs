//! # Nbrmap Core
//!
//! Turns a neighbor-discovery CSV dump into a Mermaid flowchart.
//!
//! The work happens in one sequential pass:
//! 1. [`loader`] resolves the header once and yields trimmed rows.
//! 2. [`builder`] deduplicates devices and links while keeping first-seen order.
//! 3. [`mermaid`] renders the resulting [`Topology`](nbrmap_common::topology::Topology).
//!
//! [`pipeline`] wires the three together and handles file I/O.

pub mod builder;
pub mod error;
pub mod loader;
pub mod mermaid;
pub mod pipeline;

pub use error::PipelineError;
