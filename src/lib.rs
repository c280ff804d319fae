//! # shellsym-base
//!
//! Core library for shell-script AST symbol resolution and IDE queries.
//!
//! Operates on an already-parsed syntax tree of a command-oriented scripting
//! language and answers the questions an editor asks: what symbol is at this
//! cursor, where is it declared, where is it used, and what does the document
//! outline look like.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → query operations (locate, declaration, references, outline)
//!   ↓
//! traverse  → generic pre-order walk with early-stop + cancellation
//!   ↓
//! symbols   → symbol model, node→symbol extraction, matching rules
//!   ↓
//! infer     → best-effort type-inference interface
//!   ↓
//! syntax    → syntax tree handle, node kinds, structural helpers
//!   ↓
//! base      → primitives (Extent, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → infer → symbols → traverse → ide)
// ============================================================================

/// Foundation types: Extent, LineIndex
pub mod base;

/// Syntax tree: arena, node kinds, structural helpers
pub mod syntax;

/// Best-effort type inference interface
pub mod infer;

/// Symbol model: kinds, extraction, matching rules
pub mod symbols;

/// Traversal engine: pre-order walk, early stop, cancellation
pub mod traverse;

/// IDE queries: locate, declaration, references, outline, links
pub mod ide;

// Re-export foundation types
pub use base::{Extent, LineIndex};
pub use smol_str;
pub use symbols::{Symbol, SymbolKind};
pub use syntax::{NodeId, NodeKind, SyntaxTree};
