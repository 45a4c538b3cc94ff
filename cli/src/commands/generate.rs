use colored::*;
use tracing::{error, warn};

use crate::{mprint, terminal::{colors, print}};
use nbrmap_common::config::Config;
use nbrmap_core::PipelineError;
use nbrmap_core::pipeline::{self, Diagram, PipelineStats};

const LIVE_EDITOR: &str = "https://mermaid.live";

pub fn generate(cfg: &Config) -> anyhow::Result<()> {
    print::header("generating diagram", cfg.quiet);

    let diagram: Diagram = pipeline::generate(&cfg.input)?;
    if diagram.topology.is_empty() {
        warn!("No usable rows in {}, the diagram has no devices", cfg.input.display());
    }

    // A failed save does not undo a generated diagram.
    if let Some(path) = &cfg.output {
        match pipeline::save(&diagram.script, path) {
            Ok(()) if cfg.quiet < 2 => {
                print::success(format!("Mermaid script saved to {}", path.display()));
            }
            Ok(()) => {}
            Err(err) => error!("Error writing to file: {err}"),
        }
    }

    print_diagram(&diagram, cfg);
    Ok(())
}

fn print_diagram(diagram: &Diagram, cfg: &Config) {
    if cfg.quiet >= 2 {
        print::block(&diagram.script);
        return;
    }

    mprint!();
    print::success("Successfully generated Mermaid diagram script:");
    mprint!();
    mprint!("```mermaid");
    print::block(&diagram.script);
    mprint!("```");

    if cfg.quiet == 0 {
        print_summary(&diagram.stats);
    }
}

fn print_summary(stats: &PipelineStats) {
    print::header("summary", 0);

    let lines: [(&str, ColoredString); 6] = [
        ("Rows read", stats.rows_read.to_string().normal()),
        ("Rows skipped", stats.rows_skipped.to_string().color(colors::SKIPPED)),
        ("Devices", stats.devices.to_string().color(colors::DEVICE_COUNT).bold()),
        ("Links", stats.links.to_string().color(colors::LINK_COUNT).bold()),
        ("Duplicate links", stats.duplicate_links.to_string().normal()),
        ("Platform upgrades", stats.platform_upgrades.to_string().normal()),
    ];
    let key_width: usize = lines.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in lines {
        print::aligned_line(key, key_width, value);
    }

    print::fat_separator();
    let tip: String = format!(
        "💡 Paste the content into a Mermaid live editor: {}",
        LIVE_EDITOR.color(colors::ACCENT)
    );
    print::centerln(&tip);
    print::end_of_program();
}

/// Maps the outcome of a run to the process exit status, reporting failures on stderr.
pub fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            for line in failure_messages(err) {
                error!("{line}");
            }
            1
        }
    }
}

/// Lines explaining why a run failed.
pub fn failure_messages(err: &anyhow::Error) -> Vec<String> {
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::InputNotFound { path }) => {
            vec![format!("Error: File not found at {}", path.display())]
        }
        Some(PipelineError::MissingColumns { expected, found }) => vec![
            "Error: Required columns not found in CSV file.".to_string(),
            format!("Required columns: {}", expected.join(", ")),
            format!("Found columns: [{}]", found.join(", ")),
        ],
        Some(other) => vec![format!("An error occurred: {other}")],
        None => vec![format!("An error occurred: {err:#}")],
    }
}
