use std::path::PathBuf;

/// Default location the generated diagram is written to.
pub const DEFAULT_OUTPUT: &str = "network_diagram.md";

#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file holding the neighbor-discovery dump.
    pub input: PathBuf,
    /// Where to save the diagram.
    ///
    /// `None` prints to the console only.
    pub output: Option<PathBuf>,
    /// 0 = everything, 1 = diagram with a short status line, 2 = raw diagram.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            quiet: 0,
            no_banner: false,
        }
    }
}
