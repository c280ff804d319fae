//! Best-effort type inference — provided by the host, consumed here through
//! a narrow interface.
//!
//! The symbol queries ask for a receiver's type exactly once: when a member
//! access sits on something that is neither a literal type-name expression
//! nor `$this`. Whatever the implementation cannot resolve collapses to the
//! wildcard owner, which matches any concrete owner — precision traded for
//! availability.

use smol_str::SmolStr;

use crate::syntax::{NodeId, SyntaxTree};

/// The sentinel owner type standing in for an unresolved type.
pub const WILDCARD_TYPE: &str = "object";

/// True when an owner type name is the wildcard sentinel.
///
/// Both `object` and `unknown` are accepted; front ends differ in which one
/// they report for an unresolved receiver.
pub fn is_wildcard_owner(name: &str) -> bool {
    name.eq_ignore_ascii_case(WILDCARD_TYPE) || name.eq_ignore_ascii_case("unknown")
}

/// Interface to the host's static type inference.
///
/// Implementations are best-effort: return the inferred type name, or `None`
/// when nothing better than the wildcard is known. Must be thread-safe —
/// queries against one tree may run concurrently.
pub trait TypeInference: Send + Sync {
    /// Infer the type of an expression node, or `None` when unknown.
    fn infer_type(&self, tree: &SyntaxTree, node: NodeId) -> Option<SmolStr>;
}

/// Inference that knows nothing; every receiver resolves to the wildcard.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnknownTypes;

impl TypeInference for UnknownTypes {
    fn infer_type(&self, _tree: &SyntaxTree, _node: NodeId) -> Option<SmolStr> {
        None
    }
}
