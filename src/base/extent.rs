//! Source extents — 1-based line/column spans with their literal text.

use smol_str::SmolStr;
use std::fmt;

/// A span of source text.
///
/// Lines and columns are 1-based, matching the positions the parser reports.
/// `end_column` points one past the last character of the span. The literal
/// text of the span is carried along so callers can recover names without
/// going back to the document.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Extent {
    /// 1-based line of the first character.
    pub start_line: u32,
    /// 1-based column of the first character.
    pub start_column: u32,
    /// 1-based line of the last character.
    pub end_line: u32,
    /// 1-based column one past the last character.
    pub end_column: u32,
    /// The literal text covered by the span.
    pub text: SmolStr,
}

impl Extent {
    /// Create an extent from coordinates and text.
    pub fn new(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        text: impl Into<SmolStr>,
    ) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
            text: text.into(),
        }
    }

    /// Hit-test a cursor position against this extent.
    ///
    /// The test is single-line-biased: the cursor must sit on the extent's
    /// *start* line, so a multi-line extent only matches positions on its
    /// first line. Name-sized spans never cross lines, which is what this
    /// predicate is tuned for.
    pub fn contains(&self, line: u32, column: u32) -> bool {
        self.start_line == line
            && self.start_column <= column
            && (self.end_line > line || self.end_column >= column)
    }

    /// Carve the sub-extent of `name` out of this extent.
    ///
    /// Locates the *first case-sensitive occurrence* of `name` in the span
    /// text; line numbers are copied from the start line and columns are
    /// offset by the found byte index. If the name also occurs earlier in
    /// the text (say, inside a default value) the earlier occurrence wins —
    /// a known limitation of the substring search.
    ///
    /// Returns `None` when the name does not occur at all; callers fall back
    /// to the full extent.
    pub fn name_extent(&self, name: &str) -> Option<Extent> {
        let index = self.text.find(name)? as u32;
        let start_column = self.start_column + index;
        Some(Extent {
            start_line: self.start_line,
            start_column,
            end_line: self.start_line,
            end_column: start_column + name.len() as u32,
            text: name.into(),
        })
    }
}

impl fmt::Debug for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}..{}:{} {:?}",
            self.start_line, self.start_column, self.end_line, self.end_column, self.text
        )
    }
}
