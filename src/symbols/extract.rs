//! Node → symbol constructors.
//!
//! Every query builds its results through these functions so that one node
//! shape always produces one symbol shape. All of them return `Option` and
//! answer `None` for a node of the wrong kind or with a missing child — a
//! malformed node is skipped, never an error.

use smol_str::SmolStr;

use crate::base::Extent;
use crate::infer::{TypeInference, WILDCARD_TYPE};
use crate::symbols::{MemberInfo, Symbol, SymbolKind};
use crate::syntax::{HashtableEntry, NodeId, NodeKind, SyntaxTree, helpers};

/// The name sub-extent of a declaration, or its full extent when the name
/// cannot be located in the text.
fn name_or_full_extent(extent: &Extent, name: &str) -> Extent {
    extent.name_extent(name).unwrap_or_else(|| extent.clone())
}

/// Pick the declaration extent: the carved name window, or the whole
/// declaration when `full_extent` is requested.
pub(crate) fn declaration_extent(extent: &Extent, name: &str, full_extent: bool) -> Extent {
    if full_extent {
        extent.clone()
    } else {
        name_or_full_extent(extent, name)
    }
}

/// Resolve the owner type of a member node.
///
/// A literal type-name receiver names the owner directly; a `$this`
/// receiver (and a member declaration, which has no receiver) walks up to
/// the enclosing class declaration; anything else is handed to type
/// inference and falls back to the wildcard sentinel.
pub fn member_owner(tree: &SyntaxTree, id: NodeId, infer: &dyn TypeInference) -> SmolStr {
    if let NodeKind::MemberAccess { receiver, .. } | NodeKind::MemberInvoke { receiver, .. } =
        &tree.node(id).kind
    {
        let receiver = *receiver;
        if let NodeKind::TypeName { name } = &tree.node(receiver).kind {
            return name.clone();
        }
        if tree.node(receiver).extent.text != "$this" {
            return infer
                .infer_type(tree, receiver)
                .unwrap_or_else(|| WILDCARD_TYPE.into());
        }
    }

    helpers::enclosing_class_name(tree, id).unwrap_or_else(|| WILDCARD_TYPE.into())
}

/// The receiver type name when `id` is a `[Type]::new(...)` invocation.
pub fn constructor_invoke_type(tree: &SyntaxTree, id: NodeId) -> Option<SmolStr> {
    let NodeKind::MemberInvoke {
        receiver, member, ..
    } = &tree.node(id).kind
    else {
        return None;
    };
    let NodeKind::TypeName { name } = &tree.node(*receiver).kind else {
        return None;
    };
    let member = helpers::member_name(tree, *member)?;
    if member.eq_ignore_ascii_case("new") {
        Some(name.clone())
    } else {
        None
    }
}

/// Function symbol for a command invocation's name token.
pub fn command_symbol(tree: &SyntaxTree, command: NodeId) -> Option<Symbol> {
    let name = helpers::command_name_node(tree, command)?;
    let extent = tree.node(name).extent.clone();
    Some(Symbol::new(SymbolKind::Function, extent.text.clone(), extent))
}

/// Symbol for a `function`/`workflow` declaration.
pub fn function_decl_symbol(tree: &SyntaxTree, id: NodeId, full_extent: bool) -> Option<Symbol> {
    let NodeKind::FunctionDecl {
        name, is_workflow, ..
    } = &tree.node(id).kind
    else {
        return None;
    };
    let kind = if *is_workflow {
        SymbolKind::Workflow
    } else {
        SymbolKind::Function
    };
    let extent = declaration_extent(&tree.node(id).extent, name, full_extent);
    Some(Symbol::new(kind, name.clone(), extent))
}

/// Symbol for a `configuration` declaration.
pub fn configuration_decl_symbol(
    tree: &SyntaxTree,
    id: NodeId,
    full_extent: bool,
) -> Option<Symbol> {
    let NodeKind::ConfigurationDecl { name, .. } = &tree.node(id).kind else {
        return None;
    };
    let extent = declaration_extent(&tree.node(id).extent, name, full_extent);
    Some(Symbol::new(SymbolKind::Configuration, name.clone(), extent))
}

/// Class symbol for a class declaration.
pub fn class_decl_symbol(tree: &SyntaxTree, id: NodeId, full_extent: bool) -> Option<Symbol> {
    let NodeKind::ClassDecl { name, .. } = &tree.node(id).kind else {
        return None;
    };
    let extent = declaration_extent(&tree.node(id).extent, name, full_extent);
    Some(Symbol::new(SymbolKind::Class, name.clone(), extent))
}

/// Class symbol for a `[TypeName]` expression.
pub fn class_ref_symbol(tree: &SyntaxTree, id: NodeId) -> Option<Symbol> {
    let NodeKind::TypeName { name } = &tree.node(id).kind else {
        return None;
    };
    let extent = name_or_full_extent(&tree.node(id).extent, name);
    Some(Symbol::new(SymbolKind::Class, name.clone(), extent))
}

/// Method/Constructor symbol for a member declaration.
pub fn method_decl_symbol(tree: &SyntaxTree, id: NodeId, full_extent: bool) -> Option<Symbol> {
    let NodeKind::MethodDecl {
        name,
        is_static,
        is_constructor,
        parameters,
        return_type,
        ..
    } = &tree.node(id).kind
    else {
        return None;
    };
    let kind = if *is_constructor {
        SymbolKind::Constructor
    } else {
        SymbolKind::Method
    };
    let owner =
        helpers::enclosing_class_name(tree, id).unwrap_or_else(|| SmolStr::new(WILDCARD_TYPE));
    let parameter_types = parameters
        .iter()
        .map(|parameter| {
            parameter
                .type_name
                .clone()
                .unwrap_or_else(|| SmolStr::new(WILDCARD_TYPE))
        })
        .collect();
    let extent = declaration_extent(&tree.node(id).extent, name, full_extent);
    Some(Symbol::member(
        kind,
        name.clone(),
        extent,
        MemberInfo {
            owner,
            is_static: *is_static,
            parameter_types,
            return_type: return_type.clone(),
            is_constructor: *is_constructor,
        },
    ))
}

/// Method/Constructor symbol for a member invocation.
///
/// `[Type]::new(...)` invocations become Constructor symbols named after the
/// type; everything else becomes a Method symbol named after the member.
/// Argument types come from inference, one entry per argument, so the arity
/// is the call-site argument count.
pub fn method_call_symbol(
    tree: &SyntaxTree,
    id: NodeId,
    infer: &dyn TypeInference,
) -> Option<Symbol> {
    let NodeKind::MemberInvoke {
        member,
        arguments,
        is_static,
        ..
    } = &tree.node(id).kind
    else {
        return None;
    };

    let constructor_type = constructor_invoke_type(tree, id);
    let name = match &constructor_type {
        Some(type_name) => type_name.clone(),
        None => helpers::member_name(tree, *member)
            .unwrap_or_else(|| tree.node(*member).extent.text.clone()),
    };
    let owner = match &constructor_type {
        Some(type_name) => type_name.clone(),
        None => member_owner(tree, id, infer),
    };
    let parameter_types = arguments
        .iter()
        .map(|&argument| {
            infer
                .infer_type(tree, argument)
                .unwrap_or_else(|| SmolStr::new(WILDCARD_TYPE))
        })
        .collect();
    let kind = if constructor_type.is_some() {
        SymbolKind::Constructor
    } else {
        SymbolKind::Method
    };
    let extent = tree.node(*member).extent.clone();
    Some(Symbol::member(
        kind,
        name,
        extent,
        MemberInfo {
            owner,
            is_static: *is_static,
            parameter_types,
            return_type: None,
            is_constructor: constructor_type.is_some(),
        },
    ))
}

/// Property symbol for a property declaration.
pub fn property_decl_symbol(tree: &SyntaxTree, id: NodeId, full_extent: bool) -> Option<Symbol> {
    let NodeKind::PropertyDecl {
        name,
        is_static,
        type_name,
    } = &tree.node(id).kind
    else {
        return None;
    };
    let owner =
        helpers::enclosing_class_name(tree, id).unwrap_or_else(|| SmolStr::new(WILDCARD_TYPE));
    let extent = declaration_extent(&tree.node(id).extent, name, full_extent);
    Some(Symbol::member(
        SymbolKind::Property,
        name.clone(),
        extent,
        MemberInfo {
            owner,
            is_static: *is_static,
            parameter_types: Vec::new(),
            return_type: Some(
                type_name
                    .clone()
                    .unwrap_or_else(|| SmolStr::new(WILDCARD_TYPE)),
            ),
            is_constructor: false,
        },
    ))
}

/// Property symbol for a member access.
pub fn property_access_symbol(
    tree: &SyntaxTree,
    id: NodeId,
    infer: &dyn TypeInference,
) -> Option<Symbol> {
    let NodeKind::MemberAccess {
        member, is_static, ..
    } = &tree.node(id).kind
    else {
        return None;
    };
    let name = helpers::member_name(tree, *member)
        .unwrap_or_else(|| tree.node(*member).extent.text.clone());
    let owner = member_owner(tree, id, infer);
    let extent = tree.node(*member).extent.clone();
    Some(Symbol::member(
        SymbolKind::Property,
        name,
        extent,
        MemberInfo {
            owner,
            is_static: *is_static,
            parameter_types: Vec::new(),
            return_type: None,
            is_constructor: false,
        },
    ))
}

/// Variable symbol for a `$name` reference; the name keeps its sigil.
pub fn variable_symbol(tree: &SyntaxTree, id: NodeId) -> Option<Symbol> {
    let NodeKind::Variable { .. } = &tree.node(id).kind else {
        return None;
    };
    let extent = tree.node(id).extent.clone();
    Some(Symbol::new(SymbolKind::Variable, extent.text.clone(), extent))
}

/// Parameter symbol for a `-Name` command parameter; the name keeps its dash.
pub fn parameter_symbol(tree: &SyntaxTree, id: NodeId) -> Option<Symbol> {
    let NodeKind::CommandParameter { .. } = &tree.node(id).kind else {
        return None;
    };
    let extent = tree.node(id).extent.clone();
    Some(Symbol::new(
        SymbolKind::Parameter,
        extent.text.clone(),
        extent,
    ))
}

/// HashtableKey symbol for one literal-keyed entry.
///
/// The extent spans from the key to the end of its value; entries whose key
/// is not a string literal yield `None` and are skipped.
pub fn hashtable_key_symbol(tree: &SyntaxTree, entry: &HashtableEntry) -> Option<Symbol> {
    let NodeKind::StringLiteral { value: key_name } = &tree.node(entry.key).kind else {
        return None;
    };
    let key_extent = &tree.node(entry.key).extent;
    let value_extent = &tree.node(entry.value).extent;
    let extent = Extent::new(
        key_extent.start_line,
        key_extent.start_column,
        value_extent.end_line,
        value_extent.end_column,
        key_name.clone(),
    );
    Some(Symbol::new(SymbolKind::HashtableKey, key_name.clone(), extent))
}
