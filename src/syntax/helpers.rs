//! Structural helpers over the syntax tree.

use smol_str::SmolStr;

use super::{NodeId, NodeKind, SyntaxTree};

/// The literal name of a member token, if it is one.
///
/// Member tokens are string literals for ordinary access (`$x.Name`);
/// computed members (`$x.$prop`) have no literal name and yield `None`.
pub fn member_name(tree: &SyntaxTree, member: NodeId) -> Option<SmolStr> {
    match &tree.node(member).kind {
        NodeKind::StringLiteral { value } => Some(value.clone()),
        _ => None,
    }
}

/// The name token of a command — its first element.
///
/// A malformed command with no elements yields `None` and is skipped by
/// the queries.
pub fn command_name_node(tree: &SyntaxTree, command: NodeId) -> Option<NodeId> {
    match &tree.node(command).kind {
        NodeKind::Command { elements, .. } => elements.first().copied(),
        _ => None,
    }
}

/// The name of the class declaration enclosing `id`, walking parents.
pub fn enclosing_class_name(tree: &SyntaxTree, id: NodeId) -> Option<SmolStr> {
    tree.ancestors(id).find_map(|ancestor| {
        if let NodeKind::ClassDecl { name, .. } = &tree.node(ancestor).kind {
            Some(name.clone())
        } else {
            None
        }
    })
}

/// Strip the `$` sigil and any enclosing `{}` braces from a variable
/// reference, turning `$name` or `${name}` into `name`.
pub fn strip_variable_sigil(name: &str) -> &str {
    name.trim_start_matches('$')
        .trim_start_matches('{')
        .trim_end_matches('}')
}

/// Structural heuristic for bare data-file (manifest) documents.
///
/// True when the document is exactly one pipeline wrapping a lone hashtable
/// literal — the shape a manifest parses to. The file name is not always
/// available, so shape is all there is to go on.
pub fn is_data_file(tree: &SyntaxTree) -> bool {
    let NodeKind::Script { statements } = &tree.node(tree.root()).kind else {
        return false;
    };
    let [statement] = statements.as_slice() else {
        return false;
    };
    let NodeKind::Pipeline { elements } = &tree.node(*statement).kind else {
        return false;
    };
    let [element] = elements.as_slice() else {
        return false;
    };

    // unwrap expression wrappers the parser may interpose
    let mut current = *element;
    loop {
        match &tree.node(current).kind {
            NodeKind::Hashtable { .. } => return true,
            NodeKind::Other { children } => match children.as_slice() {
                [only] => current = *only,
                _ => return false,
            },
            _ => return false,
        }
    }
}
