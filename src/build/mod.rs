use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::graph::{write_document, CoauthorGraph};
use crate::{parse, PublicationRecord};

const AUTHORS_COLUMN: &str = "Authors";
const AFFILIATIONS_COLUMN: &str = "Authors with affiliations";
const TITLE_COLUMN: &str = "Title";
const YEAR_COLUMN: &str = "Year";

#[derive(Args)]
pub struct BuildArgs {
    /// Input CSV file with one row per publication
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the node-link JSON document
    #[arg(short, long, default_value = "author_network_graph.json")]
    pub output: PathBuf,
}

struct ColumnIndices {
    title: Option<usize>,
    year: Option<usize>,
    authors: usize,
    affiliations: usize,
}

impl ColumnIndices {
    /// The two author columns are the pipeline's reason to exist, so their
    /// absence is fatal before any row is read. Title and Year are
    /// tolerated missing; affected nodes simply carry no such attribute.
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let authors = find(AUTHORS_COLUMN).with_context(|| {
            format!("Input is missing required column '{}'", AUTHORS_COLUMN)
        })?;
        let affiliations = find(AFFILIATIONS_COLUMN).with_context(|| {
            format!("Input is missing required column '{}'", AFFILIATIONS_COLUMN)
        })?;

        Ok(Self {
            title: find(TITLE_COLUMN),
            year: find(YEAR_COLUMN),
            authors,
            affiliations,
        })
    }

    fn record(&self, row: &csv::StringRecord) -> PublicationRecord {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i)).unwrap_or("").to_string()
        };
        PublicationRecord {
            title: field(self.title),
            year: field(self.year),
            authors: field(Some(self.authors)),
            affiliations: field(Some(self.affiliations)),
        }
    }
}

/// Load all rows, dropping those missing either author field. Errors on a
/// malformed CSV or an absent required column, never on row content.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<PublicationRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .clone();
    let columns = ColumnIndices::resolve(&headers)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = row.with_context(|| format!("Malformed CSV row in {}", path.display()))?;
        let record = columns.record(&row);
        if parse::passes_filter(&record) {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!("Dropped {} rows missing author fields", dropped);
    }

    Ok(records)
}

/// Fold one record into the graph: nodes from matched affiliations first,
/// then the complete pairwise co-author edges.
pub fn accumulate_record(graph: &mut CoauthorGraph, record: &PublicationRecord) {
    let authors = parse::split_authors(&record.authors);
    let associations = parse::match_affiliations(record, &authors);
    graph.record_nodes(&associations);
    graph.record_edges(&authors);
}

pub fn build_graph(records: &[PublicationRecord]) -> CoauthorGraph {
    let mut graph = CoauthorGraph::new();
    for record in records {
        accumulate_record(&mut graph, record);
    }
    graph
}

pub fn run(args: BuildArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coauthor_graph=info".parse().unwrap()),
        )
        .try_init()
        .ok();

    let records = read_records(&args.input)?;
    info!("Loaded {} usable records", records.len());

    let progress = ProgressBar::new(records.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut graph = CoauthorGraph::new();
    for record in &records {
        accumulate_record(&mut graph, record);
        progress.inc(1);
    }
    progress.finish();

    info!(
        "Accumulated {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    write_document(&graph.to_document(), &args.output)?;
    info!("Wrote node-link document to {}", args.output.display());

    Ok(())
}
