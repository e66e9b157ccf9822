//! Lineage listing command

use crate::commands::{open_ledger, with_context, DEFAULT_DB};
use clap::Args;
use proofledger_core::codec::encode_slug;
use proofledger_core::queries::{all_lineages, owner_lineages, OwnerViewOptions};
use proofledger_core::{CategoryIndex, CategoryRegistry, EngineConfig};
use proofledger_core_types::RequestContext;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LineagesArgs {
    /// Only records owned by this address (case-insensitive)
    #[arg(long)]
    pub owner: Option<String>,

    /// Keep records marked [DELETED]
    #[arg(long)]
    pub include_deleted: bool,

    /// Print the category index as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, default_value = DEFAULT_DB)]
    pub db: PathBuf,
}

pub fn execute(args: LineagesArgs, config: &EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    let ledger = open_ledger(&args.db)?;
    let registry = config.load_registry()?;
    let opts = OwnerViewOptions {
        include_deleted: args.include_deleted || config.include_deleted,
    };

    let index = match &args.owner {
        Some(owner) => owner_lineages(&ledger, owner, &opts),
        None => all_lineages(&ledger, &opts),
    }
    .map_err(|e| with_context(e, &ctx))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&index)?);
    } else {
        print!("{}", render_text(&index, &registry)?);
    }
    Ok(())
}

fn render_text(
    index: &CategoryIndex,
    registry: &CategoryRegistry,
) -> Result<String, Box<dyn std::error::Error>> {
    if index.is_empty() {
        return Ok("No proofs found\n".to_string());
    }

    let mut out = String::new();
    for (category, lineages) in index {
        out.push_str(&format!("{} ({})\n", registry.display_name(category), category));
        for lineage in lineages {
            let plural = if lineage.len() == 1 { "" } else { "s" };
            out.push_str(&format!(
                "  {} [{}] {} version{}, latest #{} ({})\n",
                lineage.base_title,
                lineage.document_type,
                lineage.len(),
                plural,
                lineage.latest.index,
                encode_slug(lineage.latest.index)?
            ));
        }
    }
    Ok(out)
}
