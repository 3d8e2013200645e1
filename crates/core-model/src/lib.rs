//! Cursor and viewport model, plus the owning `Editor` aggregate.
//!
//! The cursor addresses positions *between* characters: `col` ranges over
//! `0..=line_len(row)`. Vertical movement does not remember the column; a
//! move onto a shorter line snaps the column to that line's end and the
//! previous column is forgotten.
//!
//! Scroll offsets are recomputed once per rendered frame from the cursor and
//! the renderer-supplied text area; the computation is pure and idempotent.

use core_state::Session;
use core_text::LineBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor position and the top-left corner of the visible window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    pub scroll_row: usize,
    pub scroll_col: usize,
}

/// New scroll offset for one axis keeping `pos` inside
/// `[offset, offset + visible)`. Identity when already inside.
pub fn scroll_origin(offset: usize, pos: usize, visible: usize) -> usize {
    if visible == 0 {
        return offset;
    }
    if pos < offset {
        pos
    } else if pos >= offset + visible {
        pos + 1 - visible
    } else {
        offset
    }
}

impl Cursor {
    pub fn origin() -> Self {
        Self::default()
    }

    /// Apply one movement, honoring line-wrap at line boundaries for
    /// horizontal moves and clamping the column after every move.
    pub fn step(&mut self, dir: Direction, buffer: &LineBuffer) {
        match dir {
            Direction::Up => {
                if self.row > 0 {
                    self.row -= 1;
                }
            }
            Direction::Down => {
                if self.row + 1 < buffer.line_count() {
                    self.row += 1;
                }
            }
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = buffer.line_len(self.row);
                }
            }
            Direction::Right => {
                if self.col < buffer.line_len(self.row) {
                    self.col += 1;
                } else if self.row + 1 < buffer.line_count() {
                    self.row += 1;
                    self.col = 0;
                }
            }
        }
        self.clamp_col(buffer);
    }

    /// Re-clamp the column to the current line's length.
    pub fn clamp_col(&mut self, buffer: &LineBuffer) {
        let max = buffer.line_len(self.row);
        if self.col > max {
            self.col = max;
        }
    }

    /// Recompute scroll offsets so the cursor lies within the
    /// `visible_rows x visible_cols` window. Idempotent for an unchanged
    /// cursor and dimensions.
    pub fn scroll_into_view(&mut self, visible_rows: usize, visible_cols: usize) {
        self.scroll_row = scroll_origin(self.scroll_row, self.row, visible_rows);
        self.scroll_col = scroll_origin(self.scroll_col, self.col, visible_cols);
    }
}

/// Exclusively-owned editor aggregate threaded through the control loop.
/// No ambient or static state; the loop constructs exactly one.
#[derive(Debug, Default)]
pub struct Editor {
    pub buffer: LineBuffer,
    pub cursor: Cursor,
    pub session: Session,
}

impl Editor {
    pub fn new(buffer: LineBuffer, session: Session) -> Self {
        Self {
            buffer,
            cursor: Cursor::origin(),
            session,
        }
    }

    #[cfg(debug_assertions)]
    pub fn assert_cursor_valid(&self) {
        debug_assert!(self.cursor.row < self.buffer.line_count());
        debug_assert!(self.cursor.col <= self.buffer.line_len(self.cursor.row));
    }
}
