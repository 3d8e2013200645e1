//! Session state: mode, command line, dirty flag, file association, and the
//! ephemeral status message.
//!
//! This crate owns everything the renderer reads for the status and message
//! bars and everything the dispatcher mutates besides buffer content and the
//! cursor. File bytes never move through here directly: `Session::save`
//! delegates the actual write to a caller-supplied persistence function and
//! only records the outcome (dirty flag + status message).

use anyhow::Result;
use core_text::LineBuffer;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Interaction modes. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl Mode {
    /// Label shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}

/// Pending `:` command text. Non-empty only while in Command mode; `begin`
/// and `clear` bracket every Command mode entry and exit.
#[derive(Debug, Default, Clone)]
pub struct CommandLine {
    buffer: String,
}

impl CommandLine {
    pub fn begin(&mut self) {
        self.buffer.clear();
    }

    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Take the accumulated command, leaving the buffer cleared.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

/// How long a status message stays display-eligible.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Number of extra `q` presses required to abandon unsaved changes.
pub const QUIT_CONFIRMATIONS: u8 = 2;

/// Default save target for a buffer that was never given a name.
pub const UNNAMED_SAVE_TARGET: &str = "untitled.txt";

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    issued_at: Instant,
}

/// Aggregated per-session editor metadata.
#[derive(Debug, Clone)]
pub struct Session {
    pub mode: Mode,
    pub command_line: CommandLine,
    /// Remaining `q` presses tolerated before a dirty buffer is abandoned.
    /// Re-armed by every recognized non-quit action in Normal mode.
    pub quit_confirmations_remaining: u8,
    pub file_name: Option<PathBuf>,
    /// True iff buffer content differs from the last successful save.
    pub dirty: bool,
    status: Option<StatusMessage>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Session {
    pub fn new(file_name: Option<PathBuf>) -> Self {
        Self {
            mode: Mode::Normal,
            command_line: CommandLine::default(),
            quit_confirmations_remaining: QUIT_CONFIRMATIONS,
            file_name,
            dirty: false,
            status: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn rearm_quit_confirmations(&mut self) {
        self.quit_confirmations_remaining = QUIT_CONFIRMATIONS;
    }

    /// Overwrite the status message unconditionally (no queueing).
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            issued_at: Instant::now(),
        });
    }

    /// The message to display at `now`, if one is set, non-empty, and still
    /// within its display window.
    pub fn status_text(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| !m.text.is_empty())
            .filter(|m| now.duration_since(m.issued_at) < STATUS_MESSAGE_TTL)
            .map(|m| m.text.as_str())
    }

    pub fn status_is_visible(&self, now: Instant) -> bool {
        self.status_text(now).is_some()
    }

    /// Whether any status message has been set this session, regardless of
    /// expiry. Used at startup to avoid clobbering a load warning.
    pub fn has_status(&self) -> bool {
        self.status.as_ref().is_some_and(|m| !m.text.is_empty())
    }

    /// Attempt to persist `buffer` through `persist`. Assigns the default
    /// file name first if the session has none. On success clears the dirty
    /// flag; on failure leaves it untouched. Either way the outcome lands in
    /// the status message. Returns whether the save succeeded.
    pub fn save<F>(&mut self, buffer: &LineBuffer, persist: F) -> bool
    where
        F: FnOnce(&Path, &LineBuffer) -> Result<()>,
    {
        let path = match self.file_name.clone() {
            Some(path) => path,
            None => {
                let path = PathBuf::from(UNNAMED_SAVE_TARGET);
                self.file_name = Some(path.clone());
                self.set_status(format!("Saving as {UNNAMED_SAVE_TARGET}"));
                path
            }
        };
        match persist(&path, buffer) {
            Ok(()) => {
                self.dirty = false;
                let n = buffer.line_count();
                self.set_status(format!("Saved {} lines to {}", n, path.display()));
                tracing::info!(target: "io", path = %path.display(), lines = n, "saved");
                true
            }
            Err(e) => {
                self.set_status(format!("Error saving file: {e}"));
                tracing::error!(target: "io", path = %path.display(), error = %e, "save_failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn status_message_expires_after_ttl() {
        let mut s = Session::default();
        s.set_status("hello");
        let now = Instant::now();
        assert_eq!(s.status_text(now), Some("hello"));
        assert!(s.status_text(now + STATUS_MESSAGE_TTL).is_none());
    }

    #[test]
    fn empty_status_is_not_visible() {
        let mut s = Session::default();
        s.set_status("");
        assert!(!s.status_is_visible(Instant::now()));
        assert!(!s.has_status());
    }

    #[test]
    fn save_success_clears_dirty_and_reports_lines() {
        let mut s = Session::new(Some(PathBuf::from("notes.txt")));
        s.mark_dirty();
        let buf = LineBuffer::from_lines(vec!["a".into(), "b".into()]);
        let ok = s.save(&buf, |_, _| Ok(()));
        assert!(ok);
        assert!(!s.dirty);
        assert_eq!(
            s.status_text(Instant::now()),
            Some("Saved 2 lines to notes.txt")
        );
    }

    #[test]
    fn save_failure_preserves_dirty() {
        let mut s = Session::new(Some(PathBuf::from("notes.txt")));
        s.mark_dirty();
        let buf = LineBuffer::new();
        let ok = s.save(&buf, |_, _| Err(anyhow!("disk full")));
        assert!(!ok);
        assert!(s.dirty);
        let msg = s.status_text(Instant::now()).unwrap();
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn save_without_name_assigns_default() {
        let mut s = Session::new(None);
        let buf = LineBuffer::new();
        let mut seen = None;
        s.save(&buf, |p, _| {
            seen = Some(p.to_path_buf());
            Ok(())
        });
        assert_eq!(seen, Some(PathBuf::from(UNNAMED_SAVE_TARGET)));
        assert_eq!(s.file_name, Some(PathBuf::from(UNNAMED_SAVE_TARGET)));
    }

    #[test]
    fn command_line_take_clears_buffer() {
        let mut cl = CommandLine::default();
        cl.begin();
        cl.push_char('w');
        cl.push_char('q');
        cl.backspace();
        assert_eq!(cl.text(), "w");
        assert_eq!(cl.take(), "w");
        assert_eq!(cl.text(), "");
    }
}
