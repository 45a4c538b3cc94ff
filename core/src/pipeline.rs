//! # Diagram Pipeline
//!
//! Load → build → emit, run once per invocation.

use std::fs;
use std::io::Read;
use std::path::Path;

use nbrmap_common::topology::Topology;
use tracing::{debug, info};

use crate::builder::TopologyBuilder;
use crate::error::PipelineError;
use crate::loader::RecordLoader;
use crate::mermaid;

/// What a run saw and produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub devices: usize,
    pub links: usize,
    pub duplicate_links: usize,
    pub platform_upgrades: usize,
}

#[derive(Debug, Clone)]
pub struct Diagram {
    pub script: String,
    pub topology: Topology,
    pub stats: PipelineStats,
}

/// Generates the diagram for the CSV file at `input`.
///
/// The file handle is released before the diagram text is rendered.
pub fn generate(input: &Path) -> Result<Diagram, PipelineError> {
    let loader = RecordLoader::open(input)?;
    let diagram = run(loader)?;
    info!(
        path = %input.display(),
        devices = diagram.stats.devices,
        links = diagram.stats.links,
        "diagram generated"
    );
    Ok(diagram)
}

/// Same as [`generate`] over any reader holding CSV text.
pub fn generate_from_reader<R: Read>(input: R) -> Result<Diagram, PipelineError> {
    run(RecordLoader::from_reader(input)?)
}

/// Fails as a whole when the input breaks off; no partial diagram is rendered.
fn run<R: Read>(mut loader: RecordLoader<R>) -> Result<Diagram, PipelineError> {
    let mut builder = TopologyBuilder::new();

    let mut records = loader.records();
    for record in records.by_ref() {
        builder.ingest(&record);
    }
    if let Some(err) = records.take_failure() {
        return Err(err);
    }
    let (rows_read, loader_skipped) = (records.read(), records.skipped());
    drop(loader);

    let build_stats = builder.stats();
    let topology = builder.finish();
    let stats = PipelineStats {
        rows_read,
        rows_skipped: loader_skipped + build_stats.rows_ignored,
        devices: topology.nodes.len(),
        links: topology.edges.len(),
        duplicate_links: build_stats.duplicate_links,
        platform_upgrades: build_stats.platform_upgrades,
    };
    debug!(?stats, "topology built");

    Ok(Diagram {
        script: mermaid::render(&topology),
        topology,
        stats,
    })
}

/// Writes the diagram text to `path`, replacing any existing file.
pub fn save(script: &str, path: &Path) -> Result<(), PipelineError> {
    fs::write(path, script).map_err(|source| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = script.len(), "diagram saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::FailingReader;
    use std::path::PathBuf;

    const HEADER: &str =
        "Queried_Device_Name,Neighbor_Device_ID,Neighbor_Platform,Local_Interface,Remote_Interface\n";

    #[test]
    fn stats_count_skips_and_duplicates() {
        let csv = format!(
            "{HEADER}A,B,IOS,Gi0/1,Gi0/2\nB,A,,Gi0/2,Gi0/1\n,C,IOS,Gi0/1,Gi0/2\nA,C\n"
        );
        let diagram = generate_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            diagram.stats,
            PipelineStats {
                rows_read: 4,
                rows_skipped: 2,
                devices: 2,
                links: 1,
                duplicate_links: 1,
                platform_upgrades: 0,
            }
        );
    }

    #[test]
    fn input_breaking_off_fails_the_run() {
        let input = FailingReader::new(&format!("{HEADER}A,B,IOS,Gi0/1,Gi0/2\n"));
        match generate_from_reader(input) {
            Err(PipelineError::Read(err)) => assert!(err.is_io_error()),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let path = PathBuf::from("definitely/not/here/neighbors.csv");
        match generate(&path) {
            Err(PipelineError::InputNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn save_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-dir").join("diagram.md");
        let err = save("graph TD;\n", &target).unwrap_err();
        assert!(matches!(err, PipelineError::OutputWrite { .. }));
    }

    #[test]
    fn save_writes_script() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("diagram.md");
        save("graph TD;\n", &target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "graph TD;\n");
    }
}
