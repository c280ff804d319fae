//! Find-references query.

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::infer::TypeInference;
use crate::symbols::matching::{
    matches_member_access, matches_member_invoke, matches_method_decl, matches_property_decl,
    names_fold_eq,
};
use crate::symbols::{Symbol, SymbolKind, extract};
use crate::syntax::{NodeId, NodeKind, SyntaxTree, helpers};
use crate::traverse::{Visit, Visitor, walk_from};

use super::AliasTable;

/// Collect every reference to a symbol — declarations and usages alike —
/// in document (traversal) order.
///
/// When an [`AliasTable`] is supplied, Function-kind search also matches
/// command occurrences related through it: an alias matches its command,
/// a command its aliases, and two aliases of the same canonical command
/// match each other.
pub fn find_references(
    tree: &SyntaxTree,
    symbol: &Symbol,
    aliases: Option<&AliasTable>,
    infer: &dyn TypeInference,
) -> Vec<Symbol> {
    find_references_cancellable(tree, symbol, aliases, infer, None)
}

pub(crate) fn find_references_cancellable(
    tree: &SyntaxTree,
    symbol: &Symbol,
    aliases: Option<&AliasTable>,
    infer: &dyn TypeInference,
    cancel: Option<&CancellationToken>,
) -> Vec<Symbol> {
    trace!(name = %symbol.name, kind = ?symbol.kind, "collecting references");

    let mut collector = ReferenceCollector {
        symbol,
        aliases,
        infer,
        results: Vec::new(),
    };
    walk_from(tree, tree.root(), &mut collector, cancel);
    collector.results
}

struct ReferenceCollector<'a> {
    symbol: &'a Symbol,
    aliases: Option<&'a AliasTable>,
    infer: &'a dyn TypeInference,
    results: Vec<Symbol>,
}

impl ReferenceCollector<'_> {
    fn command_name_matches(&self, candidate: &str) -> bool {
        match self.aliases {
            Some(table) => table.names_match(&self.symbol.name, candidate),
            None => names_fold_eq(&self.symbol.name, candidate),
        }
    }

    fn push(&mut self, symbol: Option<Symbol>) {
        self.results.extend(symbol);
    }
}

impl Visitor for ReferenceCollector<'_> {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        match &tree.node(id).kind {
            NodeKind::Command { .. } => {
                if self.symbol.kind.is_callable() {
                    if let Some(name_node) = helpers::command_name_node(tree, id) {
                        let candidate = tree.node(name_node).extent.text.clone();
                        if self.command_name_matches(&candidate) {
                            self.push(extract::command_symbol(tree, id));
                        }
                    }
                }
            }
            NodeKind::FunctionDecl { name, .. } => {
                if matches!(
                    self.symbol.kind,
                    SymbolKind::Function | SymbolKind::Workflow
                ) && names_fold_eq(&self.symbol.name, name)
                {
                    self.push(extract::function_decl_symbol(tree, id, false));
                }
            }
            NodeKind::ConfigurationDecl { name, .. } => {
                if self.symbol.kind == SymbolKind::Configuration
                    && names_fold_eq(&self.symbol.name, name)
                {
                    self.push(extract::configuration_decl_symbol(tree, id, false));
                }
            }
            NodeKind::CommandParameter { .. } => {
                if self.symbol.kind == SymbolKind::Parameter
                    && names_fold_eq(&self.symbol.name, &tree.node(id).extent.text)
                {
                    self.push(extract::parameter_symbol(tree, id));
                }
            }
            NodeKind::Variable { .. } => {
                if self.symbol.kind == SymbolKind::Variable
                    && names_fold_eq(&self.symbol.name, &tree.node(id).extent.text)
                {
                    self.push(extract::variable_symbol(tree, id));
                }
            }
            NodeKind::TypeName { name } => {
                if self.symbol.kind == SymbolKind::Class && names_fold_eq(&self.symbol.name, name) {
                    self.push(extract::class_ref_symbol(tree, id));
                }
            }
            NodeKind::ClassDecl { name, .. } => {
                if self.symbol.kind == SymbolKind::Class && names_fold_eq(&self.symbol.name, name) {
                    self.push(extract::class_decl_symbol(tree, id, false));
                }
            }
            NodeKind::MemberAccess { .. } => {
                if self.symbol.kind == SymbolKind::Property
                    && matches_member_access(tree, self.symbol, id, self.infer)
                {
                    self.push(extract::property_access_symbol(tree, id, self.infer));
                }
            }
            NodeKind::MemberInvoke { .. } => {
                if matches!(
                    self.symbol.kind,
                    SymbolKind::Method | SymbolKind::Constructor
                ) && matches_member_invoke(tree, self.symbol, id, self.infer)
                {
                    self.push(extract::method_call_symbol(tree, id, self.infer));
                }
            }
            NodeKind::PropertyDecl { .. } => {
                if self.symbol.kind == SymbolKind::Property
                    && matches_property_decl(tree, self.symbol, id)
                {
                    self.push(extract::property_decl_symbol(tree, id, false));
                }
            }
            NodeKind::MethodDecl { .. } => {
                if matches!(
                    self.symbol.kind,
                    SymbolKind::Method | SymbolKind::Constructor
                ) && matches_method_decl(tree, self.symbol, id)
                {
                    self.push(extract::method_decl_symbol(tree, id, false));
                }
            }
            NodeKind::Hashtable { entries } => {
                if self.symbol.kind == SymbolKind::HashtableKey {
                    for entry in entries.clone() {
                        let Some(key_symbol) = extract::hashtable_key_symbol(tree, &entry) else {
                            continue;
                        };
                        if names_fold_eq(&self.symbol.name, &key_symbol.name) {
                            self.results.push(key_symbol);
                        }
                    }
                }
            }
            _ => {}
        }
        Visit::Continue
    }
}
