//! Boundary types shared by the photo catalog crates.
//!
//! Values coming from outside the catalog (JSON documents, prompts, CLI arguments) are
//! normalised once, when they are turned into one of these types:
//!
//! - [`RecordId`] is the canonical identifier for photos and albums. Numeric and textual
//!   spellings of the same id (`1`, `"1"`, `" 01 "`) compare equal.
//! - [`EditText`] is a user-supplied field value that is known to be non-empty.

mod record_id;
mod text;

pub use record_id::RecordId;
pub use text::EditText;

/// Errors raised while constructing boundary types.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// The identifier was empty or contained only whitespace
    #[error("record id cannot be empty")]
    EmptyId,

    /// The input text was empty once the line terminator was removed
    #[error("text cannot be empty")]
    EmptyText,
}
