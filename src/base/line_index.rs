//! Index for recovering whole-line text from source.

use text_size::TextSize;

/// Byte offsets of each line start in a source document.
///
/// Lines are addressed 1-based throughout this crate, matching the extent
/// convention.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self { line_starts }
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Check if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.line_starts.is_empty()
    }

    /// Convert a 1-based line/column position to a byte offset.
    ///
    /// Columns count UTF-8 bytes. Returns `None` when the line does not
    /// exist; the column is not bounds-checked against the line length.
    pub fn offset(&self, line: u32, column: u32) -> Option<usize> {
        if line == 0 || column == 0 {
            return None;
        }
        let start: usize = (*self.line_starts.get((line - 1) as usize)?).into();
        Some(start + (column - 1) as usize)
    }

    /// Get the text of a 1-based line, without its trailing line break.
    ///
    /// Returns `None` when the line number is 0 or past the end of the
    /// document.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        if line == 0 {
            return None;
        }
        let index = (line - 1) as usize;
        let start: usize = (*self.line_starts.get(index)?).into();
        let end: usize = match self.line_starts.get(index + 1) {
            Some(next) => (*next).into(),
            None => source.len(),
        };
        Some(source[start..end].trim_end_matches(['\n', '\r']))
    }
}
