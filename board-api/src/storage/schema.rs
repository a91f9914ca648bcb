//! Table and column names for the `messages` table.
//!
//! The DDL itself lives in `migrations/`; queries are built from these names
//! so the row mapping in `sqlite.rs` stays the only place that knows column
//! positions.

pub const MESSAGES_TABLE: &str = "messages";

pub const COL_ID: &str = "id";
pub const COL_NAME: &str = "name";
pub const COL_MESSAGE: &str = "message";

/// Soft cap on `name`, counted in characters
pub const NAME_MAX_CHARS: usize = 50;
