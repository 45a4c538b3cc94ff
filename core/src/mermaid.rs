//! # Diagram Emitter
//!
//! Renders a [`Topology`] as a Mermaid flowchart.
//!
//! ```text
//! graph TD;
//!
//!     %% Node Definitions
//!     core_sw1["Core-SW1<br/><i>cisco WS-C3850</i>"];
//!
//!     %% Edge Definitions (Connections)
//!     core_sw1 ---|"Gi1/0/1 -- Gi0/1"| access_sw1;
//! ```

use std::fmt;

use nbrmap_common::topology::Topology;

pub const PREAMBLE: &str = "graph TD;";
const NODE_SECTION: &str = "%% Node Definitions";
const EDGE_SECTION: &str = "%% Edge Definitions (Connections)";
const INDENT: &str = "    ";

/// Turns a device key or raw device name into a token Mermaid accepts as a node id.
///
/// The input is lowercased first, so a name and its key map to the same id.
/// Every character outside `[A-Za-z0-9_]` then becomes `_`.
pub fn sanitize_id(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Labels are emitted inside double quotes.
pub fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

/// Display adapter producing the diagram text.
pub struct MermaidDiagram<'t> {
    topology: &'t Topology,
}

impl<'t> MermaidDiagram<'t> {
    pub fn new(topology: &'t Topology) -> Self {
        Self { topology }
    }
}

impl fmt::Display for MermaidDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PREAMBLE}")?;
        writeln!(f)?;

        writeln!(f, "{INDENT}{NODE_SECTION}")?;
        for (key, node) in &self.topology.nodes {
            let id = sanitize_id(key);
            match node.platform.as_known() {
                Some(platform) => writeln!(
                    f,
                    "{INDENT}{id}[\"{}<br/><i>{platform}</i>\"];",
                    node.display_name
                )?,
                None => writeln!(f, "{INDENT}{id}[\"{}\"];", node.display_name)?,
            }
        }

        writeln!(f)?;
        writeln!(f, "{INDENT}{EDGE_SECTION}")?;
        for edge in &self.topology.edges {
            writeln!(
                f,
                "{INDENT}{} ---|\"{}\"| {};",
                sanitize_id(&edge.from),
                escape_label(&edge.label),
                sanitize_id(&edge.to)
            )?;
        }
        Ok(())
    }
}

pub fn render(topology: &Topology) -> String {
    MermaidDiagram::new(topology).to_string()
}
