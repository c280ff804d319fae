//! Go-to-declaration query.

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::symbols::matching::{matches_method_decl, matches_property_decl, names_fold_eq};
use crate::symbols::{Symbol, SymbolKind, extract};
use crate::syntax::{NodeId, NodeKind, SyntaxTree, helpers};
use crate::traverse::{Visit, Visitor, walk_from};

/// Find the declaration of a symbol anywhere in the document.
///
/// First-match traversal over declaration-shaped nodes only: function and
/// configuration declarations, assignment targets for variables, class
/// declarations, and member declarations. Returns `None` when the document
/// does not declare the symbol — an ordinary outcome, not an error.
pub fn find_declaration(tree: &SyntaxTree, symbol: &Symbol) -> Option<Symbol> {
    find_declaration_cancellable(tree, symbol, None)
}

pub(crate) fn find_declaration_cancellable(
    tree: &SyntaxTree,
    symbol: &Symbol,
    cancel: Option<&CancellationToken>,
) -> Option<Symbol> {
    trace!(name = %symbol.name, kind = ?symbol.kind, "finding declaration");

    // `$name` / `${name}` references compare by their bare name
    let variable_name = match symbol.kind {
        SymbolKind::Variable => Some(helpers::strip_variable_sigil(&symbol.name).to_string()),
        _ => None,
    };

    let mut finder = DeclarationFinder {
        symbol,
        variable_name,
        found: None,
    };
    walk_from(tree, tree.root(), &mut finder, cancel);
    finder.found
}

struct DeclarationFinder<'a> {
    symbol: &'a Symbol,
    variable_name: Option<String>,
    found: Option<Symbol>,
}

impl Visitor for DeclarationFinder<'_> {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        match &tree.node(id).kind {
            NodeKind::FunctionDecl { name, .. } => {
                if matches!(
                    self.symbol.kind,
                    SymbolKind::Function | SymbolKind::Workflow
                ) && names_fold_eq(&self.symbol.name, name)
                {
                    self.found = extract::function_decl_symbol(tree, id, false);
                    return Visit::Stop;
                }
            }
            NodeKind::ConfigurationDecl { name, .. } => {
                if self.symbol.kind == SymbolKind::Configuration
                    && names_fold_eq(&self.symbol.name, name)
                {
                    self.found = extract::configuration_decl_symbol(tree, id, false);
                    return Visit::Stop;
                }
            }
            NodeKind::Assignment { target, .. } => {
                if let Some(variable_name) = &self.variable_name {
                    if let NodeKind::Variable { name } = &tree.node(*target).kind {
                        if names_fold_eq(name, variable_name) {
                            self.found = extract::variable_symbol(tree, *target);
                            return Visit::Stop;
                        }
                    }
                }
            }
            NodeKind::ClassDecl { name, .. } => {
                if self.symbol.kind == SymbolKind::Class && names_fold_eq(&self.symbol.name, name) {
                    self.found = extract::class_decl_symbol(tree, id, false);
                    return Visit::Stop;
                }
            }
            NodeKind::PropertyDecl { .. } => {
                if self.symbol.kind == SymbolKind::Property
                    && matches_property_decl(tree, self.symbol, id)
                {
                    self.found = extract::property_decl_symbol(tree, id, false);
                    return Visit::Stop;
                }
            }
            NodeKind::MethodDecl { .. } => {
                if matches!(
                    self.symbol.kind,
                    SymbolKind::Method | SymbolKind::Constructor
                ) && matches_method_decl(tree, self.symbol, id)
                {
                    self.found = extract::method_decl_symbol(tree, id, false);
                    return Visit::Stop;
                }
            }
            _ => {}
        }
        Visit::Continue
    }
}
