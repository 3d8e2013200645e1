//! Key dispatch entry point.
//!
//! One logical key is applied fully before the next is read: the active
//! mode's handler consumes the key, mutates the `Editor` aggregate, and
//! reports whether the session should keep running. Termination is a return
//! value, never a mode; the machine has no terminal state.
//!
//! Decomposed per mode:
//! * `normal`  - navigation, delete-under-cursor, quit confirmation
//! * `insert`  - text entry, backspace/join, newline split
//! * `command` - `:` line editing and command execution
//!
//! Unrecognized keys are silently ignored in every mode.

use core_events::KeyCode;
use core_model::{Direction, Editor};
use core_state::Mode;

mod command;
mod insert;
mod normal;

/// Continue/terminate signal returned for every dispatched key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub quit: bool,
}

impl DispatchResult {
    pub fn running() -> Self {
        Self { quit: false }
    }
    pub fn terminate() -> Self {
        Self { quit: true }
    }
}

/// Apply one key to the editor according to the active mode.
pub fn dispatch(key: KeyCode, editor: &mut Editor) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", key = %key, mode = ?editor.session.mode, "key");
    let result = match editor.session.mode {
        Mode::Normal => normal::handle_key(key, editor),
        Mode::Insert => insert::handle_key(key, editor),
        Mode::Command => command::handle_key(key, editor),
    };
    #[cfg(debug_assertions)]
    editor.assert_cursor_valid();
    result
}

/// Arrow-key movement shared by Normal and Insert mode.
fn arrow_direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
