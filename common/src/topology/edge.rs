use super::node::device_key;

/// Undirected identity of a link: the two device keys in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey(String, String);

impl LinkKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (a, b) = (device_key(a), device_key(b));
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// One adjacency between two devices.
///
/// `from` and `to` keep the direction of the row that introduced the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

impl Edge {
    pub fn new(from: &str, to: &str, local_interface: &str, remote_interface: &str) -> Self {
        Self {
            from: device_key(from),
            to: device_key(to),
            label: format!("{local_interface} -- {remote_interface}"),
        }
    }
}
