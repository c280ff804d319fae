//! IDE queries — High-level APIs for editor-service handlers.
//!
//! Each function answers one editor request against a single parsed tree:
//! symbol-at-cursor, command-at-cursor, go-to-declaration, find-references,
//! document outline, hashtable keys, dot-sourced includes.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take the tree and parameters in, return symbols out
//! 2. **No protocol types**: results use this crate's types, converted at the
//!    transport boundary
//! 3. **Not-found is not an error**: absence comes back as `None`/empty; only
//!    genuinely invalid input (a 0 for a 1-based coordinate) fails
//!
//! Queries never mutate the tree and share no state, so any number of them
//! may run concurrently against the same tree. [`QueryEngine`] bundles the
//! configured type inference and an optional cancellation token when passing
//! them around individually gets noisy.

mod aliases;
mod declaration;
mod engine;
mod links;
mod locate;
mod outline;
mod references;

pub use aliases::AliasTable;
pub use declaration::find_declaration;
pub use engine::QueryEngine;
pub use links::{DotSourcedFile, dot_sourced_files};
pub use locate::{command_at_position, symbol_at_position};
pub use outline::{document_symbols, hashtable_keys};
pub use references::find_references;

use thiserror::Error;

/// Failure on genuinely invalid query input.
///
/// Distinct from not-found, which is an ordinary empty result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A positional query was given a 0 line or column; positions are
    /// 1-based.
    #[error("invalid cursor position {line}:{column} (lines and columns are 1-based)")]
    InvalidPosition {
        /// The offending line value.
        line: u32,
        /// The offending column value.
        column: u32,
    },
}

pub(crate) fn check_position(line: u32, column: u32) -> Result<(), QueryError> {
    if line == 0 || column == 0 {
        return Err(QueryError::InvalidPosition { line, column });
    }
    Ok(())
}
