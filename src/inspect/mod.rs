use anyhow::Result;
use clap::Args;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::graph::{load_document, CoauthorGraph};

#[derive(Args)]
pub struct InspectArgs {
    /// Node-link JSON document produced by `build`
    #[arg(short, long)]
    pub input: PathBuf,

    /// How many highest-degree authors to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_with_country: usize,
    pub countries: BTreeSet<String>,
    /// (author token, degree), highest degree first, ties by token.
    pub top_authors: Vec<(String, usize)>,
}

pub fn summarize(graph: &CoauthorGraph, top: usize) -> GraphSummary {
    let mut degrees: HashMap<&String, usize> = HashMap::new();
    for (source, target) in graph.edges() {
        *degrees.entry(source).or_insert(0) += 1;
        *degrees.entry(target).or_insert(0) += 1;
    }

    let mut top_authors: Vec<(String, usize)> = degrees
        .into_iter()
        .map(|(author, degree)| (author.clone(), degree))
        .collect();
    top_authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_authors.truncate(top);

    let mut nodes_with_country = 0;
    let mut countries = BTreeSet::new();
    for (_, attrs) in graph.nodes() {
        if let Some(country) = &attrs.country {
            nodes_with_country += 1;
            countries.insert(country.clone());
        }
    }

    GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes_with_country,
        countries,
        top_authors,
    }
}

pub fn run(args: InspectArgs) -> Result<()> {
    let doc = load_document(&args.input)?;
    let graph = CoauthorGraph::from_document(&doc);
    let summary = summarize(&graph, args.top);

    println!("Graph: {}", args.input.display());
    println!("  Nodes: {}", summary.node_count);
    println!("  Edges: {}", summary.edge_count);
    println!(
        "  Nodes with country: {} ({} distinct countries)",
        summary.nodes_with_country,
        summary.countries.len()
    );

    if !summary.top_authors.is_empty() {
        println!("  Highest-degree authors:");
        for (author, degree) in &summary.top_authors {
            println!("    {:4}  {}", degree, author);
        }
    }

    Ok(())
}
