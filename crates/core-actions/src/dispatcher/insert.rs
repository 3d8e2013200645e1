//! Insert mode handling: text entry plus the backspace/newline structural
//! edits. The cursor always tracks the edit point: the buffer reports what a
//! backspace did and this layer places the cursor accordingly.

use super::{DispatchResult, arrow_direction};
use core_events::KeyCode;
use core_model::Editor;
use core_state::Mode;
use core_text::Backspace;

pub(crate) fn handle_key(key: KeyCode, editor: &mut Editor) -> DispatchResult {
    match key {
        KeyCode::Esc => {
            // Vim parity: leaving insert at end of a non-empty line retreats
            // one column so the cursor rests on a real character.
            let line_len = editor.buffer.line_len(editor.cursor.row);
            if editor.cursor.col > 0 && editor.cursor.col == line_len {
                editor.cursor.col -= 1;
            }
            editor.session.mode = Mode::Normal;
            editor.session.set_status("");
        }
        KeyCode::Backspace => {
            let (row, col) = (editor.cursor.row, editor.cursor.col);
            match editor.buffer.delete_char_before(row, col) {
                Backspace::Removed => {
                    editor.cursor.col -= 1;
                    editor.session.mark_dirty();
                }
                Backspace::Joined { col } => {
                    editor.cursor.row -= 1;
                    editor.cursor.col = col;
                    editor.session.mark_dirty();
                }
                Backspace::Unchanged => {}
            }
            tracing::trace!(target: "actions.dispatch", op = "backspace", row, col,
                to_row = editor.cursor.row, to_col = editor.cursor.col, "edit");
        }
        KeyCode::Enter => {
            let (row, col) = (editor.cursor.row, editor.cursor.col);
            editor.buffer.split_line(row, col);
            editor.cursor.row += 1;
            editor.cursor.col = 0;
            editor.session.mark_dirty();
            tracing::trace!(target: "actions.dispatch", op = "split_line", row, col, "edit");
        }
        KeyCode::Char(ch) => {
            editor.buffer.insert_char(editor.cursor.row, editor.cursor.col, ch);
            editor.cursor.col += 1;
            editor.session.mark_dirty();
        }
        key => {
            if let Some(dir) = arrow_direction(key) {
                editor.cursor.step(dir, &editor.buffer);
            }
        }
    }
    DispatchResult::running()
}
