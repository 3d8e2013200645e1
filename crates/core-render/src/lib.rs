//! Frame rendering: text viewport, status bar, message bar, and cursor
//! placement, queued through crossterm and flushed once per frame.
//!
//! The renderer owns display geometry policy: two rows are reserved at the
//! bottom (status + message) and the remaining area is handed to the cursor
//! model for scroll clamping. It only pulls read-only snapshots from the
//! editor aggregate apart from the per-frame scroll offset update.

use anyhow::Result;
use core_model::Editor;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::time::Instant;

pub mod status;

use status::{StatusContext, build_message, build_status};

/// Rows reserved below the text area: status bar + message bar.
pub const RESERVED_ROWS: u16 = 2;

/// Render one frame to stdout using the current terminal size.
pub fn render_frame(editor: &mut Editor) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    let mut out = std::io::stdout();
    draw_frame(&mut out, editor, cols, rows, Instant::now())?;
    out.flush()?;
    Ok(())
}

/// Queue a full frame into `out` for the given dimensions. Split out from
/// `render_frame` so frames can be captured in tests.
pub fn draw_frame<W: Write>(
    out: &mut W,
    editor: &mut Editor,
    cols: u16,
    rows: u16,
    now: Instant,
) -> Result<()> {
    let width = cols as usize;
    let text_rows = rows.saturating_sub(RESERVED_ROWS) as usize;
    editor.cursor.scroll_into_view(text_rows, width);

    queue!(out, Hide)?;
    draw_text_rows(out, editor, text_rows, width)?;
    if rows >= RESERVED_ROWS {
        draw_status_bar(out, editor, rows - 2, width)?;
        draw_message_bar(out, editor, rows - 1, width, now)?;
    }
    place_cursor(out, editor, text_rows, width)?;
    queue!(out, Show)?;
    Ok(())
}

fn draw_text_rows<W: Write>(
    out: &mut W,
    editor: &Editor,
    text_rows: usize,
    width: usize,
) -> Result<()> {
    let cursor = &editor.cursor;
    for y in 0..text_rows {
        queue!(out, MoveTo(0, y as u16), Clear(ClearType::CurrentLine))?;
        let file_row = y + cursor.scroll_row;
        if file_row < editor.buffer.line_count() {
            let line = editor.buffer.line_text(file_row);
            if cursor.scroll_col < line.len() {
                let end = (cursor.scroll_col + width).min(line.len());
                queue!(out, Print(&line[cursor.scroll_col..end]))?;
            }
        } else if pristine(editor) && y == text_rows / 3 {
            draw_welcome(out, width)?;
        } else {
            queue!(out, Print("~"))?;
        }
    }
    Ok(())
}

/// Untouched startup buffer: show the welcome banner instead of a tilde row.
fn pristine(editor: &Editor) -> bool {
    editor.buffer.line_count() == 1
        && editor.buffer.line_len(0) == 0
        && !editor.session.dirty
        && editor.session.file_name.is_none()
}

fn draw_welcome<W: Write>(out: &mut W, width: usize) -> Result<()> {
    let mut welcome = format!("quill -- version {}", env!("CARGO_PKG_VERSION"));
    welcome.truncate(width.saturating_sub(1));
    let padding = width.saturating_sub(welcome.len()) / 2;
    if padding > 0 {
        queue!(out, Print("~"))?;
        let spaces: String = std::iter::repeat_n(' ', padding - 1).collect();
        queue!(out, Print(spaces))?;
    }
    queue!(out, Print(welcome))?;
    Ok(())
}

fn draw_status_bar<W: Write>(out: &mut W, editor: &Editor, y: u16, width: usize) -> Result<()> {
    let ctx = StatusContext {
        mode: editor.session.mode,
        file_name: editor.session.file_name.as_deref(),
        line_count: editor.buffer.line_count(),
        dirty: editor.session.dirty,
        row: editor.cursor.row,
        col: editor.cursor.col,
    };
    let line = build_status(&ctx, width);
    queue!(
        out,
        MoveTo(0, y),
        Clear(ClearType::CurrentLine),
        SetAttribute(Attribute::Reverse),
        Print(line),
        SetAttribute(Attribute::Reset),
    )?;
    Ok(())
}

fn draw_message_bar<W: Write>(
    out: &mut W,
    editor: &Editor,
    y: u16,
    width: usize,
    now: Instant,
) -> Result<()> {
    let text = build_message(&editor.session, now, width);
    queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine), Print(text))?;
    Ok(())
}

fn place_cursor<W: Write>(
    out: &mut W,
    editor: &Editor,
    text_rows: usize,
    width: usize,
) -> Result<()> {
    let cursor = &editor.cursor;
    let (Some(y), Some(x)) = (
        cursor.row.checked_sub(cursor.scroll_row),
        cursor.col.checked_sub(cursor.scroll_col),
    ) else {
        return Ok(());
    };
    if y < text_rows && x < width {
        queue!(out, MoveTo(x as u16, y as u16))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::Editor;
    use core_text::LineBuffer;

    fn capture_frame(editor: &mut Editor, cols: u16, rows: u16) -> String {
        let mut buf = Vec::new();
        draw_frame(&mut buf, editor, cols, rows, Instant::now()).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn frame_contains_buffer_text_and_tildes() {
        let mut ed = Editor::new(
            LineBuffer::from_lines(vec!["hello".into(), "world".into()]),
            Default::default(),
        );
        let frame = capture_frame(&mut ed, 40, 10);
        assert!(frame.contains("hello"));
        assert!(frame.contains("world"));
        assert!(frame.contains("~"));
        assert!(frame.contains("NORMAL"));
    }

    #[test]
    fn pristine_buffer_shows_welcome_banner() {
        let mut ed = Editor::default();
        let frame = capture_frame(&mut ed, 60, 12);
        assert!(frame.contains("quill -- version"));
    }

    #[test]
    fn frame_scrolls_viewport_to_cursor() {
        let lines: Vec<String> = (0..50).map(|i| format!("line{i}")).collect();
        let mut ed = Editor::new(LineBuffer::from_lines(lines), Default::default());
        ed.cursor.row = 30;
        let frame = capture_frame(&mut ed, 40, 12);
        // 10 text rows; cursor row 30 forces scroll_row to 21.
        assert_eq!(ed.cursor.scroll_row, 21);
        assert!(frame.contains("line30"));
        assert!(!frame.contains("line0\u{1b}"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut ed = Editor::default();
        capture_frame(&mut ed, 1, 1);
        capture_frame(&mut ed, 0, 0);
    }
}
