//! Logical input events shared between the input layer and the dispatcher.
//!
//! Keys arrive already decoded: one symbolic `KeyCode` per keystroke. The
//! input backend is responsible for filtering to this vocabulary (printable
//! ASCII plus the handful of editing keys); nothing downstream ever sees raw
//! escape sequences or modifier chords.

use std::fmt;

/// Event consumed by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyCode),
    /// Terminal resize (columns, rows). The renderer re-reads dimensions every
    /// frame, so the loop only needs to trigger a redraw.
    Resize(u16, u16),
}

/// Normalized logical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable single-width character (ASCII graphic or space).
    Char(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{c:?}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Helper result type for the input layer.
pub type EventResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_code_display() {
        assert_eq!(format!("{}", KeyCode::Char('x')), "'x'");
        assert_eq!(format!("{}", KeyCode::Esc), "Esc");
    }
}
