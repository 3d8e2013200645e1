//! Line-oriented text buffer.
//!
//! The buffer is a plain ordered sequence of lines operating on single-width
//! ASCII characters; column arguments are byte offsets into a line and index
//! *between* characters (`0..=line_len`). Callers (the cursor model) validate
//! row/col against the current buffer shape before calling mutation ops; the
//! buffer itself only guards the append boundary (`col == line_len`).
//!
//! Invariant: the buffer never holds zero lines. Empty content is one empty
//! line.

use anyhow::{Result, bail};

/// In-memory line buffer. Lines never contain line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

/// What a backspace-style delete did, so the caller can place the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backspace {
    /// The character before `col` was removed; caller decrements its column.
    Removed,
    /// The row was appended onto the previous line and removed. `col` is the
    /// previous line's length before the join (the seam position).
    Joined { col: usize },
    /// Start of buffer; nothing changed.
    Unchanged,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// A buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a buffer from already-split lines (terminators stripped).
    /// An empty input collapses to the single-empty-line representation.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Build a buffer from raw file content, splitting on `\n` and dropping
    /// any `\r` remnants. Rejects content that is not single-byte text.
    pub fn from_content(content: &str) -> Result<Self> {
        if !content.is_ascii() {
            bail!("buffer only supports single-byte characters");
        }
        let mut lines: Vec<String> = content
            .split('\n')
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect();
        // A trailing newline yields one spurious empty tail element.
        if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Ok(Self::from_lines(lines))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of the line at `row` (0 for an out-of-range row).
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.len())
    }

    /// Text of the line at `row` ("" for an out-of-range row).
    pub fn line_text(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", |l| l.as_str())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Splice `ch` into the line at `row` before position `col`.
    /// `col == line_len(row)` appends.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let line = &mut self.lines[row];
        let col = col.min(line.len());
        line.insert(col, ch);
    }

    /// Cut the line at `row` at `col`; the right remainder becomes a new line
    /// at `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let line = &mut self.lines[row];
        let col = col.min(line.len());
        let rest = line.split_off(col);
        self.lines.insert(row + 1, rest);
    }

    /// Backspace semantics: remove the character before `col`, or join with
    /// the previous line when at column zero. The only operation that shrinks
    /// the line count.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> Backspace {
        if col > 0 {
            let line = &mut self.lines[row];
            let col = col.min(line.len());
            line.remove(col - 1);
            Backspace::Removed
        } else if row > 0 {
            let tail = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let seam = prev.len();
            prev.push_str(&tail);
            Backspace::Joined { col: seam }
        } else {
            Backspace::Unchanged
        }
    }

    /// Remove the character under `col`, staying within the line. Deleting at
    /// or past end of line is a no-op; this op never joins with the next line.
    /// Returns whether a character was removed.
    pub fn delete_char_at(&mut self, row: usize, col: usize) -> bool {
        let line = &mut self.lines[row];
        if col < line.len() {
            line.remove(col);
            true
        } else {
            false
        }
    }
}
