//! Kind-specific matching predicates between a symbol reference and a
//! candidate syntax node.
//!
//! Name comparison is always locale-insensitive case-fold equality. Member
//! matching discriminates overloads by parameter *count* only — the host's
//! type information is best-effort, so structural signature matching would
//! mostly compare wildcards.

use crate::infer::{TypeInference, WILDCARD_TYPE};
use crate::symbols::extract::{constructor_invoke_type, member_owner};
use crate::symbols::{MemberInfo, Symbol};
use crate::syntax::{NodeId, NodeKind, SyntaxTree, helpers};

/// Locale-insensitive case-fold name equality.
///
/// ASCII fast path, Unicode simple-lowercase fallback; never culture
/// dependent.
pub fn names_fold_eq(a: &str, b: &str) -> bool {
    if a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Reference-side wildcard owners match any candidate owner.
fn owner_matches(info: &MemberInfo, candidate_owner: &str) -> bool {
    info.owner_is_wildcard() || names_fold_eq(&info.owner, candidate_owner)
}

fn enclosing_owner(tree: &SyntaxTree, id: NodeId) -> smol_str::SmolStr {
    helpers::enclosing_class_name(tree, id).unwrap_or_else(|| WILDCARD_TYPE.into())
}

/// Does a Method/Constructor symbol refer to this method declaration?
pub fn matches_method_decl(tree: &SyntaxTree, symbol: &Symbol, id: NodeId) -> bool {
    let Some(info) = &symbol.member else {
        return false;
    };
    let NodeKind::MethodDecl {
        name,
        is_static,
        is_constructor,
        parameters,
        ..
    } = &tree.node(id).kind
    else {
        return false;
    };

    let candidate_owner = enclosing_owner(tree, id);

    // constructor rule: both sides constructors, reference named after the
    // owning type, arity equal — the name check doubles as the owner check
    if *is_constructor
        && info.is_constructor
        && info.arity() == parameters.len()
        && names_fold_eq(&symbol.name, &candidate_owner)
    {
        return true;
    }

    info.is_static == *is_static
        && names_fold_eq(&symbol.name, name)
        && info.arity() == parameters.len()
        && owner_matches(info, &candidate_owner)
}

/// Does a Method/Constructor symbol refer to this member invocation?
pub fn matches_member_invoke(
    tree: &SyntaxTree,
    symbol: &Symbol,
    id: NodeId,
    infer: &dyn TypeInference,
) -> bool {
    let Some(info) = &symbol.member else {
        return false;
    };
    let NodeKind::MemberInvoke {
        member,
        arguments,
        is_static,
        ..
    } = &tree.node(id).kind
    else {
        return false;
    };

    if info.is_constructor {
        // constructor references only match `[Type]::new(...)` shapes
        return match constructor_invoke_type(tree, id) {
            Some(type_name) => {
                info.arity() == arguments.len() && names_fold_eq(&symbol.name, &type_name)
            }
            None => false,
        };
    }

    let candidate_name = helpers::member_name(tree, *member)
        .unwrap_or_else(|| tree.node(*member).extent.text.clone());

    info.is_static == *is_static
        && names_fold_eq(&symbol.name, &candidate_name)
        && info.arity() == arguments.len()
        && owner_matches(info, &member_owner(tree, id, infer))
}

/// Does a Property symbol refer to this property declaration?
pub fn matches_property_decl(tree: &SyntaxTree, symbol: &Symbol, id: NodeId) -> bool {
    let Some(info) = &symbol.member else {
        return false;
    };
    let NodeKind::PropertyDecl {
        name, is_static, ..
    } = &tree.node(id).kind
    else {
        return false;
    };

    info.is_static == *is_static
        && names_fold_eq(&symbol.name, name)
        && owner_matches(info, &enclosing_owner(tree, id))
}

/// Does a Property symbol refer to this member access?
pub fn matches_member_access(
    tree: &SyntaxTree,
    symbol: &Symbol,
    id: NodeId,
    infer: &dyn TypeInference,
) -> bool {
    let Some(info) = &symbol.member else {
        return false;
    };
    let NodeKind::MemberAccess {
        member, is_static, ..
    } = &tree.node(id).kind
    else {
        return false;
    };

    let candidate_name = helpers::member_name(tree, *member)
        .unwrap_or_else(|| tree.node(*member).extent.text.clone());

    info.is_static == *is_static
        && names_fold_eq(&symbol.name, &candidate_name)
        && owner_matches(info, &member_owner(tree, id, infer))
}
