//! Codecs at the engine's text boundaries: record titles and URL slugs.

pub mod slug;
pub mod title;

pub use slug::{decode_slug, encode_slug, resolve_proof_ref};
pub use title::{decode_title, encode_title, encode_update_title, is_deleted_title, TitleMetadata};
