//! Arena-backed syntax tree handle.
//!
//! The external parser owns the parse; this crate receives the finished tree
//! and never mutates it. Nodes live in a flat arena addressed by [`NodeId`],
//! with parent links fixed up when the builder finishes.

use crate::base::{Extent, LineIndex};

use super::NodeKind;

/// Unique identifier for a node in the arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from an index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node: kind, extent, parent link.
#[derive(Clone, Debug)]
pub struct SyntaxNode {
    /// The node kind with kind-specific children.
    pub kind: NodeKind,
    /// The source span this node covers.
    pub extent: Extent,
    parent: Option<NodeId>,
}

impl SyntaxNode {
    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An immutable, fully-parsed syntax tree plus its source text.
///
/// The source is kept so queries can recover whole-line text (the
/// command-at-position query needs the gap between a command and the next
/// one on the same line).
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    source: String,
    lines: LineIndex,
    nodes: Vec<SyntaxNode>,
    root: NodeId,
}

impl SyntaxTree {
    /// Start building a tree over the given source text.
    pub fn builder(source: impl Into<String>) -> TreeBuilder {
        TreeBuilder::new(source)
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    /// The parent of a node, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Walk the parent chain upward, nearest ancestor first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&current| self.parent(current))
    }

    /// The full source text the tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The text of a 1-based source line, without its line break.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        self.lines.line_text(&self.source, line)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena holds no nodes besides a degenerate root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Bottom-up builder for [`SyntaxTree`].
///
/// Push children before parents, then [`finish`](TreeBuilder::finish) with
/// the root id; parent links are derived from the kind-specific children.
pub struct TreeBuilder {
    source: String,
    lines: LineIndex,
    nodes: Vec<SyntaxNode>,
}

impl TreeBuilder {
    /// Create a builder over the given source text.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let lines = LineIndex::new(&source);
        Self {
            source,
            lines,
            nodes: Vec::new(),
        }
    }

    /// Append a node and get its id.
    pub fn push(&mut self, kind: NodeKind, extent: Extent) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind,
            extent,
            parent: None,
        });
        id
    }

    /// The extent a node was pushed with.
    pub fn node_extent(&self, id: NodeId) -> Extent {
        self.nodes[id.index()].extent.clone()
    }

    /// Extent of the first occurrence of `needle` on a 1-based line,
    /// starting the search at `start_column` (also 1-based).
    ///
    /// Convenience for front ends that locate tokens by text; the extent's
    /// literal text is the needle itself.
    pub fn token_extent_from(&self, line: u32, start_column: u32, needle: &str) -> Option<Extent> {
        let text = self.lines.line_text(&self.source, line)?;
        let from = (start_column.max(1) - 1) as usize;
        let index = text.get(from..)?.find(needle)? + from;
        let start_column = index as u32 + 1;
        Some(Extent::new(
            line,
            start_column,
            line,
            start_column + needle.len() as u32,
            needle,
        ))
    }

    /// Extent of the first occurrence of `needle` on a 1-based line.
    pub fn token_extent(&self, line: u32, needle: &str) -> Option<Extent> {
        self.token_extent_from(line, 1, needle)
    }

    /// Extent covering an arbitrary region, with its literal text sliced
    /// from the source. Columns are 1-based; `end_column` is exclusive.
    pub fn span_extent(
        &self,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Option<Extent> {
        let start = self.lines.offset(start_line, start_column)?;
        let end = self.lines.offset(end_line, end_column)?;
        let text = self.source.get(start..end)?;
        Some(Extent::new(
            start_line,
            start_column,
            end_line,
            end_column,
            text,
        ))
    }

    /// Finish the tree, wiring parent links by walking down from `root`.
    pub fn finish(mut self, root: NodeId) -> SyntaxTree {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            for child in self.nodes[id.index()].kind.child_ids() {
                self.nodes[child.index()].parent = Some(id);
                stack.push(child);
            }
        }
        SyntaxTree {
            source: self.source,
            lines: self.lines,
            nodes: self.nodes,
            root,
        }
    }
}
