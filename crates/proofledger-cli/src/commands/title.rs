//! Title codec commands

use clap::{Args, Subcommand};
use proofledger_core::codec::{decode_title, encode_title, encode_update_title};

#[derive(Debug, Args)]
pub struct TitleArgs {
    #[command(subcommand)]
    pub command: TitleCommand,
}

#[derive(Debug, Subcommand)]
pub enum TitleCommand {
    /// Print the metadata recovered from a title as JSON
    Decode(DecodeArgs),
    /// Build a title in the ledger convention
    Encode(EncodeArgs),
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    pub title: String,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    #[arg(long)]
    pub category: String,

    #[arg(long = "doc-type")]
    pub document_type: String,

    #[arg(long)]
    pub title: String,

    /// Version number; omitted from the title for version 1
    #[arg(long, conflicts_with = "update_of")]
    pub version: Option<u32>,

    /// Build a revision title pointing at this ledger index
    #[arg(long)]
    pub update_of: Option<u64>,
}

pub fn execute(args: TitleArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        TitleCommand::Decode(decode_args) => {
            let metadata = decode_title(&decode_args.title);
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(())
        }
        TitleCommand::Encode(encode_args) => {
            let title = match encode_args.update_of {
                Some(reference) => encode_update_title(
                    &encode_args.category,
                    &encode_args.document_type,
                    &encode_args.title,
                    reference,
                ),
                None => encode_title(
                    &encode_args.category,
                    &encode_args.document_type,
                    &encode_args.title,
                    encode_args.version,
                ),
            };
            println!("{}", title);
            Ok(())
        }
    }
}
