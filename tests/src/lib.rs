//! End-to-end tests running the diagram pipeline over CSV files on disk.

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod util;
