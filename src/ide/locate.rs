//! Symbol-at-position and command-at-position queries.

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::base::Extent;
use crate::infer::TypeInference;
use crate::symbols::{Symbol, extract};
use crate::syntax::{NodeId, NodeKind, SyntaxTree, helpers};
use crate::traverse::{Visit, Visitor, walk_from};

use super::{QueryError, check_position};

/// Find the symbol under the cursor, if any.
///
/// First-match traversal: the earliest node in pre-order whose relevant
/// extent contains the position wins — there is no ranking beyond traversal
/// order. Declarations hit-test their *name* window; with
/// `include_full_declarations` they hit-test (and report) their whole
/// extent instead. Usages hit-test their own extents.
///
/// Positions are 1-based; a 0 coordinate is invalid input, not not-found.
pub fn symbol_at_position(
    tree: &SyntaxTree,
    line: u32,
    column: u32,
    include_full_declarations: bool,
    infer: &dyn TypeInference,
) -> Result<Option<Symbol>, QueryError> {
    symbol_at_position_cancellable(tree, line, column, include_full_declarations, infer, None)
}

pub(crate) fn symbol_at_position_cancellable(
    tree: &SyntaxTree,
    line: u32,
    column: u32,
    include_full_declarations: bool,
    infer: &dyn TypeInference,
    cancel: Option<&CancellationToken>,
) -> Result<Option<Symbol>, QueryError> {
    check_position(line, column)?;
    trace!(line, column, include_full_declarations, "locating symbol");

    let mut locator = SymbolLocator {
        line,
        column,
        include_full_declarations,
        infer,
        found: None,
    };
    walk_from(tree, tree.root(), &mut locator, cancel);
    Ok(locator.found)
}

struct SymbolLocator<'a> {
    line: u32,
    column: u32,
    include_full_declarations: bool,
    infer: &'a dyn TypeInference,
    found: Option<Symbol>,
}

impl SymbolLocator<'_> {
    fn hit(&self, extent: &Extent) -> bool {
        extent.contains(self.line, self.column)
    }

    /// Hit-test a declaration by its name window (or full extent when
    /// configured) and build the symbol with the same extent choice.
    fn try_declaration(
        &mut self,
        tree: &SyntaxTree,
        id: NodeId,
        name: &str,
        build: fn(&SyntaxTree, NodeId, bool) -> Option<Symbol>,
    ) -> Visit {
        let window = extract::declaration_extent(
            &tree.node(id).extent,
            name,
            self.include_full_declarations,
        );
        if self.hit(&window) {
            self.found = build(tree, id, self.include_full_declarations);
            return Visit::Stop;
        }
        Visit::Continue
    }
}

impl Visitor for SymbolLocator<'_> {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        let node = tree.node(id);
        match &node.kind {
            NodeKind::Command { .. } => {
                if let Some(name_node) = helpers::command_name_node(tree, id) {
                    if self.hit(&tree.node(name_node).extent) {
                        self.found = extract::command_symbol(tree, id);
                        return Visit::Stop;
                    }
                }
                Visit::Continue
            }
            NodeKind::CommandParameter { .. } => {
                if self.hit(&node.extent) {
                    self.found = extract::parameter_symbol(tree, id);
                    return Visit::Stop;
                }
                Visit::Continue
            }
            NodeKind::Variable { .. } => {
                if self.hit(&node.extent) {
                    self.found = extract::variable_symbol(tree, id);
                    return Visit::Stop;
                }
                Visit::Continue
            }
            NodeKind::FunctionDecl { name, .. } => {
                let name = name.clone();
                self.try_declaration(tree, id, &name, extract::function_decl_symbol)
            }
            NodeKind::ConfigurationDecl { name, .. } => {
                let name = name.clone();
                self.try_declaration(tree, id, &name, extract::configuration_decl_symbol)
            }
            NodeKind::ClassDecl { name, .. } => {
                let name = name.clone();
                self.try_declaration(tree, id, &name, extract::class_decl_symbol)
            }
            NodeKind::MethodDecl { name, .. } => {
                let name = name.clone();
                self.try_declaration(tree, id, &name, extract::method_decl_symbol)
            }
            NodeKind::PropertyDecl { name, .. } => {
                let name = name.clone();
                self.try_declaration(tree, id, &name, extract::property_decl_symbol)
            }
            NodeKind::TypeName { .. } => {
                // hit-test the carved name window the symbol will report,
                // so the result always contains the queried position
                if let Some(symbol) = extract::class_ref_symbol(tree, id) {
                    if self.hit(&symbol.extent) {
                        self.found = Some(symbol);
                        return Visit::Stop;
                    }
                }
                Visit::Continue
            }
            NodeKind::MemberAccess { member, .. } => {
                if self.hit(&tree.node(*member).extent) {
                    self.found = extract::property_access_symbol(tree, id, self.infer);
                    return Visit::Stop;
                }
                Visit::Continue
            }
            NodeKind::MemberInvoke {
                receiver, member, ..
            } => {
                if self.hit(&tree.node(*member).extent) {
                    self.found = extract::method_call_symbol(tree, id, self.infer);
                    return Visit::Stop;
                }
                // cursor on a type-name receiver names the class instead
                let receiver = *receiver;
                if matches!(tree.node(receiver).kind, NodeKind::TypeName { .. }) {
                    if let Some(symbol) = extract::class_ref_symbol(tree, receiver) {
                        if self.hit(&symbol.extent) {
                            self.found = Some(symbol);
                            return Visit::Stop;
                        }
                    }
                }
                Visit::Continue
            }
            _ => Visit::Continue,
        }
    }
}

/// Find the command under the cursor in a pipeline on the given line.
///
/// A command segment's extent is extended rightward across the whitespace
/// that separates it from the next command (or the end of the line), so the
/// query matches the whole gap between commands, not only the literal token
/// span. Returns a Function reference to the command's name token.
pub fn command_at_position(
    tree: &SyntaxTree,
    line: u32,
    column: u32,
) -> Result<Option<Symbol>, QueryError> {
    command_at_position_cancellable(tree, line, column, None)
}

pub(crate) fn command_at_position_cancellable(
    tree: &SyntaxTree,
    line: u32,
    column: u32,
    cancel: Option<&CancellationToken>,
) -> Result<Option<Symbol>, QueryError> {
    check_position(line, column)?;
    trace!(line, column, "locating command");

    let mut locator = CommandLocator {
        line,
        column,
        found: None,
    };
    walk_from(tree, tree.root(), &mut locator, cancel);
    Ok(locator.found)
}

struct CommandLocator {
    line: u32,
    column: u32,
    found: Option<Symbol>,
}

impl Visitor for CommandLocator {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        let NodeKind::Pipeline { elements } = &tree.node(id).kind else {
            return Visit::Continue;
        };
        if tree.node(id).extent.start_line != self.line {
            return Visit::Continue;
        }

        // which command segment is the cursor in?
        for &element in elements {
            if !matches!(tree.node(element).kind, NodeKind::Command { .. }) {
                continue;
            }
            let extent = &tree.node(element).extent;
            let mut true_end_column = extent.end_column;

            if let Some(line_text) = tree.line_text(self.line) {
                if line_text.len() >= true_end_column as usize {
                    // whitespace between this command and the next (or the
                    // end of the line); +1 covers the position just past it
                    let remaining = line_text.get(true_end_column as usize..).unwrap_or("");
                    let gap = remaining.len() - remaining.trim_start().len();
                    true_end_column = extent.end_column + gap as u32 + 1;
                }
            }

            if extent.start_column <= self.column && true_end_column >= self.column {
                if let Some(symbol) = extract::command_symbol(tree, element) {
                    self.found = Some(symbol);
                    return Visit::Stop;
                }
            }
        }

        Visit::Continue
    }
}
