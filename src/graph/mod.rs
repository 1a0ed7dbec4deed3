use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::AuthorAssociation;

mod document;
pub use document::{load_document, write_document, LinkEntry, NodeEntry, NodeLinkDocument};

/// Attributes a node picked up when it was first created. All three stay
/// `None` for nodes that only ever appeared as edge endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAttributes {
    pub country: Option<String>,
    pub title: Option<String>,
    pub year: Option<Value>,
}

/// The accumulated co-authorship graph: one node per author token, one edge
/// per unordered co-author pair. Simple graph, no self-loops, nothing is
/// ever removed or overwritten once inserted.
///
/// BTree storage keeps iteration order stable so repeated runs over the
/// same input serialize identically.
#[derive(Debug, Default)]
pub struct CoauthorGraph {
    nodes: BTreeMap<String, NodeAttributes>,
    edges: BTreeSet<(String, String)>,
}

impl CoauthorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarded insert of nodes from one record's associations. A key that
    /// is already present keeps the attributes it was created with, even
    /// attribute-less ones from an earlier edge endpoint: first occurrence
    /// wins for the whole run.
    pub fn record_nodes(&mut self, associations: &[AuthorAssociation]) {
        for assoc in associations {
            self.nodes
                .entry(assoc.author.clone())
                .or_insert_with(|| NodeAttributes {
                    country: Some(assoc.country.clone()),
                    title: Some(assoc.title.clone()),
                    year: assoc.year.clone(),
                });
        }
    }

    /// Add every unordered pair of distinct positions in one record's
    /// author token sequence. Endpoints not yet in the graph are created
    /// bare; pairs already present are no-ops; positions holding equal
    /// token strings are skipped so no self-loop can form.
    pub fn record_edges(&mut self, authors: &[String]) {
        for i in 0..authors.len() {
            for j in (i + 1)..authors.len() {
                let (a, b) = (&authors[i], &authors[j]);
                if a == b {
                    continue;
                }
                self.nodes.entry(a.clone()).or_default();
                self.nodes.entry(b.clone()).or_default();
                let pair = if a < b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                };
                self.edges.insert(pair);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: &str) -> Option<&NodeAttributes> {
        self.nodes.get(key)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        let pair = if a < b { (a, b) } else { (b, a) };
        self.edges
            .contains(&(pair.0.to_string(), pair.1.to_string()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&String, &NodeAttributes)> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &(String, String)> {
        self.edges.iter()
    }
}
