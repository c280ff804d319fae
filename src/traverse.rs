//! The traversal engine — one generic pre-order walk for every query.
//!
//! Visitors dispatch on the node-kind discriminant and return a
//! [`Visit`] decision: `Continue` descends into children, `Stop` aborts the
//! whole walk. First-match queries stop at their first hit; collect-all
//! queries accumulate and keep continuing. That decision enum is the only
//! control signal — traversal never uses errors for flow.
//!
//! A walk runs to completion synchronously; the only interruption points
//! are the cooperative cancellation checks between node visits.

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::syntax::{NodeId, SyntaxTree};

/// Decision returned by a visitor for each node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Keep walking; the node's children are visited next.
    Continue,
    /// Abort the entire walk immediately.
    Stop,
}

/// A node-visit callback driven by the walk.
pub trait Visitor {
    /// Inspect one node and decide whether the walk continues.
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit;
}

/// How a walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every reachable node was visited.
    Completed,
    /// A visitor returned [`Visit::Stop`].
    Stopped,
    /// The cancellation token fired between node visits.
    Cancelled,
}

/// Walk the whole tree in pre-order, depth first.
pub fn walk(tree: &SyntaxTree, visitor: &mut dyn Visitor) -> WalkOutcome {
    walk_from(tree, tree.root(), visitor, None)
}

/// Walk the whole tree with cooperative cancellation.
///
/// The token is checked between node visits; a fired token ends the walk
/// early with whatever the visitor has accumulated so far.
pub fn walk_cancellable(
    tree: &SyntaxTree,
    visitor: &mut dyn Visitor,
    cancel: &CancellationToken,
) -> WalkOutcome {
    walk_from(tree, tree.root(), visitor, Some(cancel))
}

/// Walk the subtree rooted at `start`.
pub fn walk_from(
    tree: &SyntaxTree,
    start: NodeId,
    visitor: &mut dyn Visitor,
    cancel: Option<&CancellationToken>,
) -> WalkOutcome {
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                trace!(node = id.0, "walk cancelled");
                return WalkOutcome::Cancelled;
            }
        }

        if visitor.visit(tree, id) == Visit::Stop {
            return WalkOutcome::Stopped;
        }

        // push children reversed so the leftmost child is visited first
        let children = tree.node(id).kind.child_ids();
        stack.extend(children.into_iter().rev());
    }

    WalkOutcome::Completed
}
