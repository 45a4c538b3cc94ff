use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const HEADER: &str =
    "Queried_Device_Name,Neighbor_Device_ID,Neighbor_Platform,Local_Interface,Remote_Interface";

/// A CSV file inside a temporary directory that lives as long as the fixture.
pub struct CsvFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

pub fn csv_file(lines: &[&str]) -> anyhow::Result<CsvFixture> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("neighbors.csv");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content)?;
    Ok(CsvFixture { dir, path })
}
