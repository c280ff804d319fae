//! Document outline queries: top-level symbols and hashtable keys.

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::symbols::{Symbol, extract};
use crate::syntax::{NodeId, NodeKind, SyntaxTree};
use crate::traverse::{Visit, Visitor, walk_from};

/// List the document's symbols in source order.
///
/// Collected: function and configuration declarations (functions nested in
/// a member declaration are the member's business, not the outline's),
/// class declarations, method and property members, and variables assigned
/// directly at script scope. The scope test is purely structural — the
/// assignment must be a direct statement of the script root.
pub fn document_symbols(tree: &SyntaxTree) -> Vec<Symbol> {
    document_symbols_cancellable(tree, None)
}

pub(crate) fn document_symbols_cancellable(
    tree: &SyntaxTree,
    cancel: Option<&CancellationToken>,
) -> Vec<Symbol> {
    trace!("listing document symbols");

    let mut collector = OutlineCollector {
        results: Vec::new(),
    };
    walk_from(tree, tree.root(), &mut collector, cancel);
    collector.results
}

struct OutlineCollector {
    results: Vec<Symbol>,
}

impl OutlineCollector {
    fn push(&mut self, symbol: Option<Symbol>) {
        self.results.extend(symbol);
    }
}

impl Visitor for OutlineCollector {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        match &tree.node(id).kind {
            NodeKind::FunctionDecl { .. } => {
                if !nested_in_member(tree, id) {
                    self.push(extract::function_decl_symbol(tree, id, true));
                }
            }
            NodeKind::ConfigurationDecl { .. } => {
                self.push(extract::configuration_decl_symbol(tree, id, true));
            }
            NodeKind::ClassDecl { .. } => {
                self.push(extract::class_decl_symbol(tree, id, true));
            }
            NodeKind::MethodDecl { .. } => {
                self.push(extract::method_decl_symbol(tree, id, false));
            }
            NodeKind::PropertyDecl { .. } => {
                self.push(extract::property_decl_symbol(tree, id, false));
            }
            NodeKind::Variable { .. } => {
                if assigned_at_script_scope(tree, id) {
                    self.push(extract::variable_symbol(tree, id));
                }
            }
            _ => {}
        }
        Visit::Continue
    }
}

fn nested_in_member(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.ancestors(id)
        .any(|ancestor| matches!(tree.node(ancestor).kind, NodeKind::MethodDecl { .. }))
}

/// True when the variable is the target of an assignment that is itself a
/// direct statement of the script root.
fn assigned_at_script_scope(tree: &SyntaxTree, id: NodeId) -> bool {
    let Some(assignment) = tree.parent(id) else {
        return false;
    };
    let NodeKind::Assignment { target, .. } = tree.node(assignment).kind else {
        return false;
    };
    if target != id {
        return false;
    }
    match tree.parent(assignment) {
        Some(holder) => tree.parent(holder).is_none(),
        None => true,
    }
}

/// List every string-literal key of every hashtable literal, in source
/// order, with extents spanning from the key to the end of its value.
///
/// Computed (non-literal) keys are skipped.
pub fn hashtable_keys(tree: &SyntaxTree) -> Vec<Symbol> {
    hashtable_keys_cancellable(tree, None)
}

pub(crate) fn hashtable_keys_cancellable(
    tree: &SyntaxTree,
    cancel: Option<&CancellationToken>,
) -> Vec<Symbol> {
    trace!("listing hashtable keys");

    let mut collector = KeyCollector {
        results: Vec::new(),
    };
    walk_from(tree, tree.root(), &mut collector, cancel);
    collector.results
}

struct KeyCollector {
    results: Vec<Symbol>,
}

impl Visitor for KeyCollector {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        if let NodeKind::Hashtable { entries } = &tree.node(id).kind {
            for entry in entries.clone() {
                self.results
                    .extend(extract::hashtable_key_symbol(tree, &entry));
            }
        }
        Visit::Continue
    }
}
