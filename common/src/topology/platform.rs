use std::fmt;

/// Sentinel shown for devices whose platform was never reported.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Platform string reported for a device, e.g. `cisco WS-C3850`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Unknown,
    Known(String),
}

impl Platform {
    /// Interprets a raw column value.
    ///
    /// Empty values and the literal sentinel both mean "not reported".
    pub fn from_observed(raw: &str) -> Self {
        match raw.trim() {
            "" | UNKNOWN_PLATFORM => Self::Unknown,
            value => Self::Known(value.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => f.write_str(value),
            Self::Unknown => f.write_str(UNKNOWN_PLATFORM),
        }
    }
}

/// Merges a newly observed platform into the one already recorded.
///
/// Only an unknown platform can be replaced; once a device has a concrete
/// platform every later observation is ignored.
pub fn merge(existing: Platform, incoming: Platform) -> Platform {
    match (existing, incoming) {
        (Platform::Unknown, incoming) => incoming,
        (existing, _) => existing,
    }
}
