//! Status and message bar composition.
//!
//! Pure string building so layout is unit-testable without a terminal. The
//! status bar packs a left segment (file name, line count, modified marker)
//! and a right segment (mode, 1-based row:col) padded to the full width; the
//! message bar shows the in-flight command line or the most recent status
//! message while it is display-eligible.

use core_state::{Mode, Session};
use std::time::Instant;

/// Snapshot of everything the status bar needs for one frame.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub file_name: Option<&'a std::path::Path>,
    pub line_count: usize,
    pub dirty: bool,
    /// 0-based cursor position; rendered 1-based.
    pub row: usize,
    pub col: usize,
}

/// Compose the reverse-video status line, padded/truncated to `width`.
pub fn build_status(ctx: &StatusContext<'_>, width: usize) -> String {
    let name = ctx
        .file_name
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());
    let mut left = format!(" {} - {} lines ", name, ctx.line_count);
    if ctx.dirty {
        left.push_str("[modified]");
    }
    let right = format!(" {} | {}:{} ", ctx.mode.label(), ctx.row + 1, ctx.col + 1);

    let mut line = left;
    if line.len() + right.len() <= width {
        let pad = width - line.len() - right.len();
        line.extend(std::iter::repeat_n(' ', pad));
        line.push_str(&right);
    }
    line.truncate(width);
    line
}

/// Compose the message bar content for one frame. While a command is being
/// typed it takes precedence over any status message.
pub fn build_message(session: &Session, now: Instant, width: usize) -> String {
    let mut text = if session.mode == Mode::Command {
        format!(":{}", session.command_line.text())
    } else {
        session.status_text(now).unwrap_or("").to_string()
    };
    text.truncate(width);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn ctx<'a>(file: Option<&'a Path>, dirty: bool) -> StatusContext<'a> {
        StatusContext {
            mode: Mode::Normal,
            file_name: file,
            line_count: 3,
            dirty,
            row: 1,
            col: 4,
        }
    }

    #[test]
    fn status_packs_left_and_right_segments() {
        let s = build_status(&ctx(Some(Path::new("notes.txt")), false), 48);
        assert_eq!(s.len(), 48);
        assert!(s.starts_with(" notes.txt - 3 lines "));
        assert!(s.ends_with(" NORMAL | 2:5 "));
    }

    #[test]
    fn status_marks_unnamed_and_modified() {
        let s = build_status(&ctx(None, true), 60);
        assert!(s.contains("[No Name]"));
        assert!(s.contains("[modified]"));
    }

    #[test]
    fn status_truncates_when_narrow() {
        let s = build_status(&ctx(Some(Path::new("a_rather_long_file_name.txt")), true), 20);
        assert_eq!(s.len(), 20);
    }

    #[test]
    fn message_prefers_command_line_in_command_mode() {
        let mut session = Session::default();
        session.set_status("saved");
        session.mode = Mode::Command;
        session.command_line.begin();
        session.command_line.push_char('w');
        assert_eq!(build_message(&session, Instant::now(), 80), ":w");
    }

    #[test]
    fn message_hides_expired_status() {
        let mut session = Session::default();
        session.set_status("old news");
        let later = Instant::now() + core_state::STATUS_MESSAGE_TTL;
        assert_eq!(build_message(&session, later, 80), "");
    }
}
