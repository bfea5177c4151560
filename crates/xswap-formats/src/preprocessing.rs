//! Delimited-text edge files and string label mapping.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use xswap_core::errors::{ErrorInfo, XswapError};
use xswap_core::Edge;

/// Edge list relabelled to dense integer ids, with the label maps used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedEdges {
    /// Relabelled edges, in input order.
    pub edges: Vec<Edge>,
    /// Label to id mapping applied to sources.
    pub source_map: BTreeMap<String, u32>,
    /// Label to id mapping applied to targets. Equal to `source_map` unless bipartite.
    pub target_map: BTreeMap<String, u32>,
}

/// Reads `(source, target)` label pairs from a delimited text file.
///
/// Rows with fewer than two fields are skipped; fields past the second are ignored.
pub fn load_str_edges(path: &Path, delimiter: u8) -> Result<Vec<(String, String)>, XswapError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|err| read_error(path, err))?;
    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| read_error(path, err))?;
        if let (Some(source), Some(target)) = (record.get(0), record.get(1)) {
            edges.push((source.to_owned(), target.to_owned()));
        }
    }
    Ok(edges)
}

/// Reads a comma separated file of integer edges, validating every id.
pub fn load_processed_edges(path: &Path) -> Result<Vec<Edge>, XswapError> {
    load_str_edges(path, b',')?
        .into_iter()
        .enumerate()
        .map(|(line, (source, target))| parse_edge(line, &source, &target))
        .collect()
}

/// Writes edges as delimited `source,target` rows without a header.
pub fn write_edges(path: &Path, edges: &[Edge], delimiter: u8) -> Result<(), XswapError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|err| write_error(path, err))?;
    for edge in edges {
        writer
            .write_record([edge.source.to_string(), edge.target.to_string()])
            .map_err(|err| write_error(path, err))?;
    }
    writer.flush().map_err(|err| write_error(path, err))
}

/// Writes a label mapping as `original,mapped` rows.
pub fn write_mapping(path: &Path, mapping: &BTreeMap<String, u32>) -> Result<(), XswapError> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|err| write_error(path, err))?;
    writer
        .write_record(["original", "mapped"])
        .map_err(|err| write_error(path, err))?;
    for (original, mapped) in mapping {
        writer
            .write_record([original.as_str(), mapped.to_string().as_str()])
            .map_err(|err| write_error(path, err))?;
    }
    writer.flush().map_err(|err| write_error(path, err))
}

/// Relabels string edges with dense integer ids assigned in sorted label order.
///
/// With `bipartite` false sources and targets share one id space, so
/// `("a", "a")` stays a self-loop. With `bipartite` true each side is mapped
/// independently and equal labels on either side denote different nodes.
pub fn map_str_edges(edges: &[(String, String)], bipartite: bool) -> Result<MappedEdges, XswapError> {
    let sources = edges.iter().map(|(source, _)| source.as_str());
    let targets = edges.iter().map(|(_, target)| target.as_str());
    let (source_map, target_map) = if bipartite {
        (label_map(sources)?, label_map(targets)?)
    } else {
        let shared = label_map(sources.chain(targets))?;
        (shared.clone(), shared)
    };
    let edges = edges
        .iter()
        .map(|(source, target)| Edge::new(source_map[source], target_map[target]))
        .collect();
    Ok(MappedEdges {
        edges,
        source_map,
        target_map,
    })
}

fn label_map<'a>(labels: impl Iterator<Item = &'a str>) -> Result<BTreeMap<String, u32>, XswapError> {
    let sorted: BTreeSet<&str> = labels.collect();
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, label)| {
            let id = u32::try_from(idx)
                .ok()
                .filter(|id| *id <= xswap_core::MAX_NODE_ID)
                .ok_or_else(|| {
                    XswapError::Input(
                        ErrorInfo::new("too-many-nodes", "node count exceeds the 32-bit id range")
                            .with_context("label", label),
                    )
                })?;
            Ok((label.to_owned(), id))
        })
        .collect()
}

fn parse_edge(line: usize, source: &str, target: &str) -> Result<Edge, XswapError> {
    let parse = |raw: &str| {
        raw.trim().parse::<i64>().map_err(|err| {
            XswapError::Input(
                ErrorInfo::new("malformed-row", err.to_string())
                    .with_context("line", (line + 1).to_string())
                    .with_context("value", raw),
            )
        })
    };
    Edge::try_from((parse(source)?, parse(target)?))
}

fn read_error(path: &Path, err: csv::Error) -> XswapError {
    XswapError::Io(
        ErrorInfo::new("edge-read", err.to_string()).with_context("path", path.display().to_string()),
    )
}

fn write_error(path: &Path, err: impl ToString) -> XswapError {
    XswapError::Io(
        ErrorInfo::new("edge-write", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(s, t)| ((*s).to_owned(), (*t).to_owned()))
            .collect()
    }

    #[test]
    fn shared_mapping_keeps_self_loops() {
        let mapped = map_str_edges(&pairs(&[("a", "b"), ("b", "c"), ("c", "c")]), false).unwrap();
        assert_eq!(
            mapped.edges,
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 2)]
        );
        assert_eq!(mapped.source_map, mapped.target_map);
        assert_eq!(mapped.source_map.len(), 3);
    }

    #[test]
    fn bipartite_mapping_separates_id_spaces() {
        let mapped = map_str_edges(&pairs(&[("1", "1"), ("2", "1"), ("2", "3")]), true).unwrap();
        assert_eq!(
            mapped.edges,
            vec![Edge::new(0, 0), Edge::new(1, 0), Edge::new(1, 1)]
        );
        assert_eq!(mapped.source_map.get("2"), Some(&1));
        assert_eq!(mapped.target_map.get("3"), Some(&1));
    }
}
