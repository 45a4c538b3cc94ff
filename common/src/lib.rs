//! # Nbrmap Common
//!
//! Types shared between the pipeline (`nbrmap-core`) and the command line
//! front-end (`nbrmap-cli`).
//!
//! * **[`config`]**: Run configuration assembled by the CLI.
//! * **[`topology`]**: The device/link model the graph builder produces.

pub mod config;
pub mod topology;
