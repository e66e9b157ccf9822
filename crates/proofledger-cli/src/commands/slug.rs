//! Slug codec commands

use clap::{Args, Subcommand};
use proofledger_core::codec::{decode_slug, encode_slug, resolve_proof_ref};
use proofledger_core::{ExError, ProofLedgerError};

#[derive(Debug, Args)]
pub struct SlugArgs {
    #[command(subcommand)]
    pub command: SlugCommand,
}

#[derive(Debug, Subcommand)]
pub enum SlugCommand {
    /// Print the slug for a ledger index
    Encode { index: u64 },
    /// Print the ledger index a slug stands for
    Decode { slug: String },
    /// Accept either a plain index or a slug
    Resolve { reference: String },
}

pub fn execute(args: SlugArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SlugCommand::Encode { index } => println!("{}", encode_slug(index)?),
        SlugCommand::Decode { slug } => {
            let index = decode_slug(&slug)
                .ok_or_else(|| ExError::from(ProofLedgerError::InvalidSlug { slug }))?;
            println!("{}", index);
        }
        SlugCommand::Resolve { reference } => println!("{}", resolve_proof_ref(&reference)?),
    }
    Ok(())
}
