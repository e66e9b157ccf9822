//! ProofLedger CLI
//!
//! Command-line interface for the ProofLedger engine

use clap::{Parser, Subcommand};
use proofledger_core::{logging_facility, EngineConfig, ExError};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "proofledger")]
#[command(about = "ProofLedger - proof classification, versioning and comparison", long_about = None)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Title convention operations
    Title(commands::title::TitleArgs),
    /// Shareable slug operations
    Slug(commands::slug::SlugArgs),
    /// Import a ledger snapshot into the local mirror
    Import(commands::import::ImportArgs),
    /// List lineages grouped by category
    Lineages(commands::lineages::LineagesArgs),
    /// Compare two proofs
    Compare(commands::compare::CompareArgs),
    /// Plan a revision of an existing proof
    Update(commands::update::UpdateArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(EngineConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging_facility::init(config.log_profile);

    let result = match cli.command {
        Commands::Title(args) => commands::title::execute(args),
        Commands::Slug(args) => commands::slug::execute(args),
        Commands::Import(args) => commands::import::execute(args),
        Commands::Lineages(args) => commands::lineages::execute(args, &config),
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Update(args) => commands::update::execute(args, &config),
    };

    if let Err(e) = result {
        match e.downcast_ref::<ExError>() {
            Some(ex) => {
                eprintln!("Error: {}", ex.user_message());
                eprintln!("  {}", ex);
                if let Some(request_id) = ex.request_id() {
                    eprintln!("  request: {}", request_id);
                }
            }
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
