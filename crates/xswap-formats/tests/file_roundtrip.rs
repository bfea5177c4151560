use std::fs;

use tempfile::tempdir;
use xswap_core::Edge;
use xswap_formats::{
    load_processed_edges, load_str_edges, map_str_edges, write_edges, write_mapping,
};

#[test]
fn string_edges_skip_short_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.tsv");
    fs::write(&path, "gene_a\tgene_b\n\nlonely\ngene_b\tgene_c\textra\n").unwrap();

    let edges = load_str_edges(&path, b'\t').unwrap();
    assert_eq!(
        edges,
        vec![
            ("gene_a".to_string(), "gene_b".to_string()),
            ("gene_b".to_string(), "gene_c".to_string()),
        ]
    );
}

#[test]
fn processed_edges_roundtrip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.csv");
    let edges = vec![Edge::new(0, 1), Edge::new(7, 3), Edge::new(2, 2)];

    write_edges(&path, &edges, b',').unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "0,1\n7,3\n2,2\n");
    assert_eq!(load_processed_edges(&path).unwrap(), edges);
}

#[test]
fn malformed_rows_report_their_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.csv");
    fs::write(&path, "0,1\n2,x\n").unwrap();

    let err = load_processed_edges(&path).unwrap_err();
    assert_eq!(err.info().code, "malformed-row");
    assert_eq!(err.info().context.get("line"), Some(&"2".to_string()));
}

#[test]
fn negative_ids_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.csv");
    fs::write(&path, "0,-4\n").unwrap();

    let err = load_processed_edges(&path).unwrap_err();
    assert_eq!(err.info().code, "node-id-out-of-range");
}

#[test]
fn missing_files_surface_as_io_errors() {
    let dir = tempdir().unwrap();
    let err = load_str_edges(&dir.path().join("absent.csv"), b',').unwrap_err();
    assert_eq!(err.info().code, "edge-read");
}

#[test]
fn mapping_file_has_header_and_sorted_labels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mapping.csv");
    let mapped = map_str_edges(
        &[
            ("beta".to_string(), "alpha".to_string()),
            ("alpha".to_string(), "gamma".to_string()),
        ],
        false,
    )
    .unwrap();

    write_mapping(&path, &mapped.source_map).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "original,mapped\nalpha,0\nbeta,1\ngamma,2\n"
    );
}
