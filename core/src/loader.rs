//! # Record Loader
//!
//! Reads the neighbor-discovery CSV and yields one [`NeighborRecord`] per
//! usable row.
//!
//! Column names are matched case-insensitively against the header exactly
//! once, producing a [`ColumnMap`] of indices. Rows are then read lazily;
//! rows that are unreadable, too short, or lack a device name are skipped
//! and counted instead of failing the run.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIter, Trim};
use tracing::{debug, error, warn};

use crate::error::PipelineError;

pub const QUERIED_DEVICE: &str = "Queried_Device_Name";
pub const NEIGHBOR_DEVICE: &str = "Neighbor_Device_ID";
pub const NEIGHBOR_PLATFORM: &str = "Neighbor_Platform";
pub const LOCAL_INTERFACE: &str = "local_interface";
pub const REMOTE_INTERFACE: &str = "Remote_Interface";

/// Columns that must be present for the input to be usable.
pub const MANDATORY_COLUMNS: [&str; 4] = [
    QUERIED_DEVICE,
    NEIGHBOR_DEVICE,
    LOCAL_INTERFACE,
    REMOTE_INTERFACE,
];

/// One adjacency observation, all values trimmed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NeighborRecord {
    pub queried_device: String,
    pub neighbor_device: String,
    /// Empty when the column is absent or blank.
    pub neighbor_platform: String,
    pub local_interface: String,
    pub remote_interface: String,
}

impl NeighborRecord {
    pub fn has_devices(&self) -> bool {
        !self.queried_device.trim().is_empty() && !self.neighbor_device.trim().is_empty()
    }
}

/// Header positions of the columns the builder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub queried_device: usize,
    pub neighbor_device: usize,
    pub neighbor_platform: Option<usize>,
    pub local_interface: usize,
    pub remote_interface: usize,
}

impl ColumnMap {
    /// Resolves the column indices from a header row.
    ///
    /// When a name appears more than once the first match wins.
    pub fn resolve(headers: &StringRecord) -> Result<Self, PipelineError> {
        let find = |name: &str| {
            let wanted = name.to_lowercase();
            headers.iter().position(|header| header.to_lowercase() == wanted)
        };

        match (
            find(QUERIED_DEVICE),
            find(NEIGHBOR_DEVICE),
            find(LOCAL_INTERFACE),
            find(REMOTE_INTERFACE),
        ) {
            (Some(queried_device), Some(neighbor_device), Some(local_interface), Some(remote_interface)) => {
                Ok(Self {
                    queried_device,
                    neighbor_device,
                    neighbor_platform: find(NEIGHBOR_PLATFORM),
                    local_interface,
                    remote_interface,
                })
            }
            _ => Err(PipelineError::MissingColumns {
                expected: MANDATORY_COLUMNS.iter().map(ToString::to_string).collect(),
                found: headers.iter().map(str::to_string).collect(),
            }),
        }
    }

    /// Pulls the mapped fields out of a row.
    ///
    /// Returns `None` when the row is too short to hold a mandatory column.
    pub fn extract(&self, record: &StringRecord) -> Option<NeighborRecord> {
        let field = |idx: usize| record.get(idx).map(str::trim);

        Some(NeighborRecord {
            queried_device: field(self.queried_device)?.to_string(),
            neighbor_device: field(self.neighbor_device)?.to_string(),
            neighbor_platform: self
                .neighbor_platform
                .and_then(field)
                .unwrap_or_default()
                .to_string(),
            local_interface: field(self.local_interface)?.to_string(),
            remote_interface: field(self.remote_interface)?.to_string(),
        })
    }
}

pub struct RecordLoader<R> {
    reader: csv::Reader<R>,
    columns: ColumnMap,
}

impl RecordLoader<File> {
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PipelineError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => PipelineError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        debug!(path = %path.display(), "opened input");
        Self::from_reader(file)
    }
}

impl<R: Read> RecordLoader<R> {
    pub fn from_reader(input: R) -> Result<Self, PipelineError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(input);

        let headers = reader.headers().map_err(PipelineError::Header)?.clone();
        let columns = ColumnMap::resolve(&headers)?;
        debug!(?columns, "resolved input columns");

        Ok(Self { reader, columns })
    }

    /// Lazily iterates over the usable rows.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            inner: self.reader.records(),
            columns: self.columns,
            read: 0,
            skipped: 0,
            failure: None,
        }
    }
}

/// Iterator over usable rows, keeping count of what it dropped.
pub struct Records<'r, R: Read> {
    inner: StringRecordsIter<'r, R>,
    columns: ColumnMap,
    read: usize,
    skipped: usize,
    failure: Option<csv::Error>,
}

impl<R: Read> Records<'_, R> {
    /// Data rows consumed so far, skipped ones included.
    pub fn read(&self) -> usize {
        self.read
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Error that cut the input short, if any.
    ///
    /// Iteration ends early when the underlying reader fails; the rows
    /// yielded before that must not be used on their own.
    pub fn take_failure(&mut self) -> Option<PipelineError> {
        self.failure.take().map(PipelineError::Read)
    }
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = NeighborRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() {
            return None;
        }

        for result in self.inner.by_ref() {
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => {
                    error!(error = %err, "input read failed");
                    self.failure = Some(err);
                    return None;
                }
                Err(err) => {
                    self.read += 1;
                    self.skipped += 1;
                    warn!(error = %err, "skipping unreadable row");
                    continue;
                }
            };

            self.read += 1;
            let line = record.position().map(|pos| pos.line());

            match self.columns.extract(&record) {
                Some(row) if row.has_devices() => return Some(row),
                Some(_) => {
                    self.skipped += 1;
                    debug!(?line, "skipping row without device name");
                }
                None => {
                    self.skipped += 1;
                    warn!(?line, fields = record.len(), "skipping row with missing columns");
                }
            }
        }
        None
    }
}
