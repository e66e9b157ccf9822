//! Title metadata convention.
//!
//! The ledger stores a single free-text title per record. Structure is
//! carried in it by convention:
//!
//! ```text
//! [CATEGORY] [Document Type] [UPDATE] Display title v2.0 (ref: 3)
//! ```
//!
//! Every part is optional. Decoding is total: unrecognised input falls back
//! to defaults instead of failing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_DOCUMENT_TYPE: &str = "Document";
pub const UNTITLED: &str = "Untitled proof";

const UPDATE_TAG: &str = "[UPDATE]";
const DELETED_TAG: &str = "[DELETED]";

/// Metadata recovered from a title string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMetadata {
    pub category: String,
    pub document_type: String,
    pub display_title: String,
    pub is_update: bool,
    pub reference_index: Option<String>,
    pub version: Option<String>,
}

fn leading_tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[([^\]]+)\](?:\s*\[([^\]]+)\])?").expect("leading tag pattern is valid")
    })
}

fn update_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\[UPDATE\]\s*").expect("update tag pattern is valid"))
}

fn reference_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\s*\(ref:\s*([0-9]+)\)$").expect("reference suffix pattern is valid")
    })
}

/// First version-like token: optional `v`/`version` prefix, dotted ASCII digits
pub(crate) fn version_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:version\s*|v)?([0-9]+(?:\.[0-9]+)*)").expect("version pattern is valid")
    })
}

/// Decode a title into its metadata. Never fails.
pub fn decode_title(title: &str) -> TitleMetadata {
    let mut category = DEFAULT_CATEGORY.to_string();
    let mut document_type = DEFAULT_DOCUMENT_TYPE.to_string();
    let mut working = title;

    if let Some(caps) = leading_tags().captures(title) {
        category = caps[1].to_lowercase();
        let mut consumed = caps.get(1).map_or(0, |m| m.end() + 1);

        // A second tag is the document type even when it reads UPDATE
        if let Some(doc) = caps.get(2) {
            document_type = doc.as_str().to_string();
            consumed = doc.end() + 1;
        }
        working = &title[consumed..];
    }

    let is_update = title.contains(UPDATE_TAG);
    let stripped = update_tag().replace_all(working, " ");
    let mut display = stripped.trim().to_string();

    let mut reference_index = None;
    if let Some(caps) = reference_suffix().captures(&display) {
        reference_index = Some(caps[1].to_string());
        let start = caps.get(0).map_or(display.len(), |m| m.start());
        display.truncate(start);
        display = display.trim().to_string();
    }

    if display.is_empty() {
        display = UNTITLED.to_string();
    }

    let version = version_token()
        .captures(&display)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    tracing::trace!(title, category = %category, version = ?version, "decoded title");

    TitleMetadata {
        category,
        document_type,
        display_title: display,
        is_update,
        reference_index,
        version,
    }
}

/// Build a title in the convention `decode_title` understands
///
/// The version suffix is appended only for versions above 1, so a first
/// revision carries no version token at all.
pub fn encode_title(
    category: &str,
    document_type: &str,
    title: &str,
    version: Option<u32>,
) -> String {
    let suffix = match version {
        Some(v) if v > 1 => format!(" v{}", v),
        _ => String::new(),
    };
    format!(
        "[{}] [{}] {}{}",
        category.to_uppercase(),
        document_type,
        title,
        suffix
    )
    .trim()
    .to_string()
}

/// Build the title of a revision that supersedes `reference_index`
pub fn encode_update_title(
    category: &str,
    document_type: &str,
    title: &str,
    reference_index: u64,
) -> String {
    format!(
        "[{}] [{}] {} {} (ref: {})",
        category.to_uppercase(),
        document_type,
        UPDATE_TAG,
        title.trim(),
        reference_index
    )
}

/// Whether the record has been retracted by its owner
pub fn is_deleted_title(title: &str) -> bool {
    title.contains(DELETED_TAG)
}
