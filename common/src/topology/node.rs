use super::platform::{self, Platform};

/// Normalizes a device name into its dedup key.
pub fn device_key(name: &str) -> String {
    name.to_lowercase()
}

/// A device seen in at least one neighbor observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Spelling of the name the first time the device was seen.
    pub display_name: String,
    pub platform: Platform,
}

impl Node {
    pub fn new(display_name: &str, platform: Platform) -> Self {
        Self {
            display_name: display_name.to_string(),
            platform,
        }
    }

    /// Folds another observation of this device into the node.
    ///
    /// Returns `true` when the platform changed.
    pub fn observe(&mut self, platform: Platform) -> bool {
        let before = self.platform.is_known();
        self.platform = platform::merge(std::mem::take(&mut self.platform), platform);
        before != self.platform.is_known()
    }
}
