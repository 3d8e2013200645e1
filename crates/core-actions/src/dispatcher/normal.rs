//! Normal mode handling: movement, delete-under-cursor, mode entry, and the
//! quit confirmation counter.
//!
//! Every recognized non-quit key re-arms the quit counter; unrecognized keys
//! leave it alone so a stray keystroke between `q` presses does not extend a
//! half-finished quit.

use super::{DispatchResult, arrow_direction};
use core_events::KeyCode;
use core_model::{Direction, Editor};
use core_state::Mode;

pub(crate) fn handle_key(key: KeyCode, editor: &mut Editor) -> DispatchResult {
    match key {
        KeyCode::Char('q') => return attempt_quit(editor),
        KeyCode::Char('i') => {
            editor.session.mode = Mode::Insert;
            editor.session.set_status("-- INSERT --");
        }
        KeyCode::Char(':') => {
            editor.session.mode = Mode::Command;
            editor.session.command_line.begin();
            editor.session.set_status(":");
        }
        KeyCode::Char('x') => {
            let (row, col) = (editor.cursor.row, editor.cursor.col);
            if editor.buffer.delete_char_at(row, col) {
                editor.session.mark_dirty();
                tracing::trace!(target: "actions.dispatch", op = "delete_under", row, col, "edit");
            }
        }
        key => match movement(key) {
            Some(dir) => editor.cursor.step(dir, &editor.buffer),
            // Unrecognized: no state change, counter untouched.
            None => return DispatchResult::running(),
        },
    }
    editor.session.rearm_quit_confirmations();
    DispatchResult::running()
}

/// Arrows plus the vi home-row keys.
fn movement(key: KeyCode) -> Option<Direction> {
    arrow_direction(key).or(match key {
        KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    })
}

fn attempt_quit(editor: &mut Editor) -> DispatchResult {
    let session = &mut editor.session;
    if session.dirty && session.quit_confirmations_remaining > 0 {
        let n = session.quit_confirmations_remaining;
        let plural = if n > 1 { "s" } else { "" };
        session.set_status(format!(
            "WARNING! File has unsaved changes. Press q {n} more time{plural} to quit."
        ));
        session.quit_confirmations_remaining -= 1;
        tracing::debug!(target: "actions.dispatch", remaining = session.quit_confirmations_remaining, "quit_refused");
        return DispatchResult::running();
    }
    DispatchResult::terminate()
}
