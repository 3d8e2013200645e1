//! Shared harness for dispatcher integration tests.

use core_actions::{DispatchResult, dispatch};
use core_events::KeyCode;
use core_model::Editor;
use core_text::LineBuffer;

pub fn editor_from(lines: &[&str]) -> Editor {
    Editor::new(
        LineBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect()),
        Default::default(),
    )
}

/// Feed keys in order, returning the final dispatch result.
pub fn feed(editor: &mut Editor, keys: &[KeyCode]) -> DispatchResult {
    let mut last = DispatchResult::running();
    for &key in keys {
        last = dispatch(key, editor);
    }
    last
}

/// Feed each character of `text` as a printable key.
pub fn type_chars(editor: &mut Editor, text: &str) -> DispatchResult {
    let keys: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
    feed(editor, &keys)
}

pub fn buffer_lines(editor: &Editor) -> Vec<String> {
    editor.buffer.lines().to_vec()
}
