//! The query engine — explicit configuration carried into each query.
//!
//! There is deliberately no process-wide state here: an engine is a plain
//! value owning the configured type inference and an optional cancellation
//! token, and every query call takes the tree explicitly. Cloning tokens is
//! cheap; one engine can serve concurrent queries.

use tokio_util::sync::CancellationToken;

use crate::infer::{TypeInference, UnknownTypes};
use crate::symbols::Symbol;
use crate::syntax::SyntaxTree;

use super::aliases::AliasTable;
use super::links::{DotSourcedFile, dot_sourced_files_cancellable};
use super::{QueryError, declaration, locate, outline, references};

/// Bundles the query configuration: type inference and cancellation.
///
/// The plain free functions in [`crate::ide`] are the primitive API; the
/// engine exists so callers configure inference once instead of threading
/// it through every call site.
pub struct QueryEngine {
    inference: Box<dyn TypeInference>,
    cancel: Option<CancellationToken>,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryEngine {
    /// An engine with no type inference; unresolved owners become the
    /// wildcard.
    pub fn new() -> Self {
        Self {
            inference: Box::new(UnknownTypes),
            cancel: None,
        }
    }

    /// An engine using the host's type inference.
    pub fn with_inference(inference: impl TypeInference + 'static) -> Self {
        Self {
            inference: Box::new(inference),
            cancel: None,
        }
    }

    /// Attach a cancellation token, checked between node visits.
    ///
    /// A query interrupted by the token returns whatever it accumulated;
    /// the cancelling caller is expected to discard the result.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// See [`locate::symbol_at_position`](crate::ide::symbol_at_position).
    pub fn symbol_at_position(
        &self,
        tree: &SyntaxTree,
        line: u32,
        column: u32,
        include_full_declarations: bool,
    ) -> Result<Option<Symbol>, QueryError> {
        locate::symbol_at_position_cancellable(
            tree,
            line,
            column,
            include_full_declarations,
            self.inference.as_ref(),
            self.cancel.as_ref(),
        )
    }

    /// See [`locate::command_at_position`](crate::ide::command_at_position).
    pub fn command_at_position(
        &self,
        tree: &SyntaxTree,
        line: u32,
        column: u32,
    ) -> Result<Option<Symbol>, QueryError> {
        locate::command_at_position_cancellable(tree, line, column, self.cancel.as_ref())
    }

    /// See [`declaration::find_declaration`](crate::ide::find_declaration).
    pub fn find_declaration(&self, tree: &SyntaxTree, symbol: &Symbol) -> Option<Symbol> {
        declaration::find_declaration_cancellable(tree, symbol, self.cancel.as_ref())
    }

    /// See [`references::find_references`](crate::ide::find_references).
    pub fn find_references(
        &self,
        tree: &SyntaxTree,
        symbol: &Symbol,
        aliases: Option<&AliasTable>,
    ) -> Vec<Symbol> {
        references::find_references_cancellable(
            tree,
            symbol,
            aliases,
            self.inference.as_ref(),
            self.cancel.as_ref(),
        )
    }

    /// See [`outline::document_symbols`](crate::ide::document_symbols).
    pub fn document_symbols(&self, tree: &SyntaxTree) -> Vec<Symbol> {
        outline::document_symbols_cancellable(tree, self.cancel.as_ref())
    }

    /// See [`outline::hashtable_keys`](crate::ide::hashtable_keys).
    pub fn hashtable_keys(&self, tree: &SyntaxTree) -> Vec<Symbol> {
        outline::hashtable_keys_cancellable(tree, self.cancel.as_ref())
    }

    /// See [`links::dot_sourced_files`](crate::ide::dot_sourced_files).
    pub fn dot_sourced_files(&self, tree: &SyntaxTree) -> Vec<DotSourcedFile> {
        dot_sourced_files_cancellable(tree, self.cancel.as_ref())
    }
}
