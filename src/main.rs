use anyhow::Result;
use clap::{Parser, Subcommand};
use coauthor_graph::{build, inspect};

#[derive(Parser)]
#[command(name = "coauthor-graph")]
#[command(about = "Build a co-authorship graph from tabular bibliographic records")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a publications CSV and write the node-link graph document
    Build(build::BuildArgs),
    /// Summarize a previously written graph document
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Build(args) => build::run(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}
