//! Dot-sourced include collection, for document links.

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::base::Extent;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};
use crate::traverse::{Visit, Visitor, walk_from};
use smol_str::SmolStr;

/// A file pulled into the document with the dot-source operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotSourcedFile {
    /// The path as written in the script.
    pub path: SmolStr,
    /// Where the path literal sits.
    pub extent: Extent,
}

/// Collect the string-literal targets of dot-source invocations
/// (`. ./helpers.ps1`), in document order.
///
/// Dynamic targets (`. $script`) have no literal path and are skipped.
pub fn dot_sourced_files(tree: &SyntaxTree) -> Vec<DotSourcedFile> {
    dot_sourced_files_cancellable(tree, None)
}

pub(crate) fn dot_sourced_files_cancellable(
    tree: &SyntaxTree,
    cancel: Option<&CancellationToken>,
) -> Vec<DotSourcedFile> {
    trace!("collecting dot-sourced files");

    let mut collector = DotSourceCollector {
        results: Vec::new(),
    };
    walk_from(tree, tree.root(), &mut collector, cancel);
    collector.results
}

struct DotSourceCollector {
    results: Vec<DotSourcedFile>,
}

impl Visitor for DotSourceCollector {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId) -> Visit {
        if let NodeKind::Command {
            elements,
            is_dot_sourced: true,
        } = &tree.node(id).kind
        {
            if let Some(&target) = elements.first() {
                if let NodeKind::StringLiteral { value } = &tree.node(target).kind {
                    self.results.push(DotSourcedFile {
                        path: value.clone(),
                        extent: tree.node(target).extent.clone(),
                    });
                }
            }
        }
        Visit::Continue
    }
}
