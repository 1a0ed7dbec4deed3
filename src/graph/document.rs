use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::{CoauthorGraph, NodeAttributes};

/// Node-link rendition of the graph: `nodes` carries ids plus whatever
/// attributes each node has, `links` carries endpoint pairs. `directed`
/// and `multigraph` are always false; `graph` is reserved for whole-graph
/// metadata and stays empty here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLinkDocument {
    pub directed: bool,
    pub multigraph: bool,
    pub graph: Map<String, Value>,
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
}

impl CoauthorGraph {
    /// One entry per node, one per edge, nothing invented or dropped.
    pub fn to_document(&self) -> NodeLinkDocument {
        let nodes = self
            .nodes()
            .map(|(key, attrs)| NodeEntry {
                id: key.clone(),
                country: attrs.country.clone(),
                title: attrs.title.clone(),
                year: attrs.year.clone(),
            })
            .collect();

        let links = self
            .edges()
            .map(|(source, target)| LinkEntry {
                source: source.clone(),
                target: target.clone(),
            })
            .collect();

        NodeLinkDocument {
            directed: false,
            multigraph: false,
            graph: Map::new(),
            nodes,
            links,
        }
    }

    /// Rebuild a graph from a previously written document. Node attributes
    /// keep their first occurrence if the document repeats an id; edge
    /// endpoints missing from `nodes` are created bare, as during
    /// accumulation.
    pub fn from_document(doc: &NodeLinkDocument) -> Self {
        let mut graph = Self::new();

        for node in &doc.nodes {
            graph
                .nodes
                .entry(node.id.clone())
                .or_insert_with(|| NodeAttributes {
                    country: node.country.clone(),
                    title: node.title.clone(),
                    year: node.year.clone(),
                });
        }

        for link in &doc.links {
            if link.source == link.target {
                continue;
            }
            graph.nodes.entry(link.source.clone()).or_default();
            graph.nodes.entry(link.target.clone()).or_default();
            let pair = if link.source < link.target {
                (link.source.clone(), link.target.clone())
            } else {
                (link.target.clone(), link.source.clone())
            };
            graph.edges.insert(pair);
        }

        graph
    }
}

/// Write the document next to its final path and rename into place, so a
/// failed write never leaves a readable truncated file. Pretty-printed
/// with four-space indentation; serde_json leaves non-ASCII text alone.
pub fn write_document<P: AsRef<Path>>(doc: &NodeLinkDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid output path {}", path.display()))?
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name));

    let file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    doc.serialize(&mut serializer)
        .with_context(|| format!("Failed to serialize graph to {}", tmp_path.display()))?;
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to finalize {}", path.display()))?;

    Ok(())
}

pub fn load_document<P: AsRef<Path>>(path: P) -> Result<NodeLinkDocument> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let doc = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse node-link document {}", path.display()))?;
    Ok(doc)
}
