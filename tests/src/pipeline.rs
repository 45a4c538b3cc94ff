use std::fs;
use std::path::PathBuf;

use nbrmap_common::config::{Config, DEFAULT_OUTPUT};
use nbrmap_common::topology::Platform;
use nbrmap_core::PipelineError;
use nbrmap_core::pipeline;

use crate::util::{HEADER, csv_file};

const SCENARIO: [&str; 4] = [
    HEADER,
    "A,B,CiscoIOS,Gi0/1,Gi0/2",
    "B,A,,Gi0/2,Gi0/1",
    "A,C,Linux,Gi0/3,eth0",
];

#[test]
fn scenario_renders_expected_diagram() -> anyhow::Result<()> {
    let fixture = csv_file(&SCENARIO)?;
    let diagram = pipeline::generate(&fixture.path)?;

    let expected = [
        "graph TD;",
        "",
        "    %% Node Definitions",
        "    a[\"A\"];",
        "    b[\"B<br/><i>CiscoIOS</i>\"];",
        "    c[\"C<br/><i>Linux</i>\"];",
        "",
        "    %% Edge Definitions (Connections)",
        "    a ---|\"Gi0/1 -- Gi0/2\"| b;",
        "    a ---|\"Gi0/3 -- eth0\"| c;",
        "",
    ]
    .join("\n");
    assert_eq!(diagram.script, expected);
    assert_eq!(diagram.stats.devices, 3);
    assert_eq!(diagram.stats.links, 2);
    assert_eq!(diagram.stats.duplicate_links, 1);
    Ok(())
}

#[test]
fn identical_input_gives_identical_output() -> anyhow::Result<()> {
    let fixture = csv_file(&SCENARIO)?;
    let first = pipeline::generate(&fixture.path)?;
    let second = pipeline::generate(&fixture.path)?;
    assert_eq!(first.script, second.script);
    Ok(())
}

#[test]
fn missing_remote_interface_column_is_schema_error() -> anyhow::Result<()> {
    let fixture = csv_file(&[
        "Queried_Device_Name,Neighbor_Device_ID,Neighbor_Platform,Local_Interface",
        "A,B,IOS,Gi0/1",
    ])?;
    match pipeline::generate(&fixture.path) {
        Err(PipelineError::MissingColumns { expected, found }) => {
            assert_eq!(
                expected,
                vec!["Queried_Device_Name", "Neighbor_Device_ID", "local_interface", "Remote_Interface"]
            );
            assert_eq!(found.len(), 4);
        }
        other => panic!("expected a schema error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn row_with_empty_queried_device_contributes_nothing() -> anyhow::Result<()> {
    let fixture = csv_file(&[HEADER, " ,X,IOS,Gi0/1,Gi0/2", "A,B,,Gi0/1,Gi0/2"])?;
    let diagram = pipeline::generate(&fixture.path)?;

    assert!(diagram.topology.node("x").is_none());
    assert_eq!(diagram.topology.nodes.len(), 2);
    assert_eq!(diagram.topology.edges.len(), 1);
    assert_eq!(diagram.stats.rows_skipped, 1);
    assert!(!diagram.script.contains("x[\"X"));
    Ok(())
}

#[test]
fn node_ids_cover_every_distinct_device() -> anyhow::Result<()> {
    let fixture = csv_file(&[
        HEADER,
        "Core-SW1.lab,dist-sw1,cisco WS-C3850,Te1/0/1,Te1/1/1",
        "DIST-SW1,core-sw1.LAB,cisco WS-C6509,Te1/1/1,Te1/0/1",
        "dist-sw1,ap 01,AIR-AP2802I,Gi1/0/5,GigabitEthernet0",
        ",orphan,,Gi0/1,Gi0/2",
    ])?;
    let diagram = pipeline::generate(&fixture.path)?;

    let ids: Vec<&str> = diagram
        .script
        .lines()
        .filter(|line| line.ends_with("\"];"))
        .filter_map(|line| line.trim_start().split('[').next())
        .collect();
    assert_eq!(ids, vec!["core_sw1_lab", "dist_sw1", "ap_01"]);
    assert!(ids
        .iter()
        .all(|id| id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')));

    // Seen first as a queried device, then upgraded when it shows up as a neighbor.
    assert_eq!(
        diagram.topology.node("core-sw1.lab").map(|n| &n.platform),
        Some(&Platform::Known("cisco WS-C6509".into()))
    );
    assert_eq!(diagram.topology.edges.len(), 2);
    Ok(())
}

#[test]
fn save_writes_diagram_next_to_input() -> anyhow::Result<()> {
    let fixture = csv_file(&SCENARIO)?;
    let mut cfg = Config::new(&fixture.path);
    assert_eq!(cfg.output, Some(PathBuf::from(DEFAULT_OUTPUT)));
    cfg.output = Some(fixture.dir.path().join(DEFAULT_OUTPUT));

    let diagram = pipeline::generate(&cfg.input)?;
    if let Some(output) = &cfg.output {
        pipeline::save(&diagram.script, output)?;
        assert_eq!(fs::read_to_string(output)?, diagram.script);
    }
    Ok(())
}

#[test]
fn missing_input_file_is_reported() {
    let result = pipeline::generate(&PathBuf::from("does/not/exist.csv"));
    assert!(matches!(result, Err(PipelineError::InputNotFound { .. })));
}
