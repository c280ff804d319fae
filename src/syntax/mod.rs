//! Syntax tree handle for the command-oriented scripting language.
//!
//! The parser lives outside this crate; what arrives here is a finished,
//! immutable tree: an arena of nodes with kinds, extents, and parent links,
//! plus the source text it was parsed from.

pub mod helpers;
mod node;
mod tree;

pub use node::{HashtableEntry, NodeKind, Parameter};
pub use tree::{NodeId, SyntaxNode, SyntaxTree, TreeBuilder};
