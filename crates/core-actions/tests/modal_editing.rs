//! End-to-end modal editing scenarios driven through `dispatch`.

mod common;

use common::{buffer_lines, editor_from, feed, type_chars};
use core_events::KeyCode;
use core_state::Mode;
use pretty_assertions::assert_eq;

#[test]
fn insert_then_split_line() {
    let mut ed = editor_from(&["ab"]);
    ed.cursor.col = 1;
    feed(&mut ed, &[KeyCode::Char('i')]);
    assert_eq!(ed.session.mode, Mode::Insert);

    type_chars(&mut ed, "X");
    assert_eq!(buffer_lines(&ed), vec!["aXb"]);
    assert_eq!((ed.cursor.row, ed.cursor.col), (0, 2));

    feed(&mut ed, &[KeyCode::Enter]);
    assert_eq!(buffer_lines(&ed), vec!["aX", "b"]);
    assert_eq!((ed.cursor.row, ed.cursor.col), (1, 0));
    assert!(ed.session.dirty);
}

#[test]
fn backspace_at_line_start_joins_lines() {
    let mut ed = editor_from(&["foo", "bar"]);
    ed.cursor.row = 1;
    feed(&mut ed, &[KeyCode::Char('i'), KeyCode::Backspace]);
    assert_eq!(buffer_lines(&ed), vec!["foobar"]);
    assert_eq!((ed.cursor.row, ed.cursor.col), (0, 3));
}

#[test]
fn vertical_movement_snaps_column_to_line_end() {
    let mut ed = editor_from(&["a long first line", "ab", "another long line"]);
    ed.cursor.col = 10;
    feed(&mut ed, &[KeyCode::Char('j')]);
    assert_eq!((ed.cursor.row, ed.cursor.col), (1, 2));
    // The column is not remembered across rows.
    feed(&mut ed, &[KeyCode::Char('j')]);
    assert_eq!((ed.cursor.row, ed.cursor.col), (2, 2));
}

#[test]
fn arrows_work_in_insert_mode_but_hjkl_insert() {
    let mut ed = editor_from(&["abc"]);
    feed(&mut ed, &[KeyCode::Char('i'), KeyCode::Right, KeyCode::Right]);
    assert_eq!(ed.cursor.col, 2);
    type_chars(&mut ed, "j");
    assert_eq!(buffer_lines(&ed), vec!["abjc"]);
}

#[test]
fn escape_leaves_insert_and_keeps_edits() {
    let mut ed = editor_from(&[""]);
    feed(&mut ed, &[KeyCode::Char('i')]);
    type_chars(&mut ed, "done");
    feed(&mut ed, &[KeyCode::Esc]);
    assert_eq!(ed.session.mode, Mode::Normal);
    assert_eq!(buffer_lines(&ed), vec!["done"]);
    // End-of-line retreat applied on escape.
    assert_eq!(ed.cursor.col, 3);
}

#[test]
fn delete_under_cursor_never_crosses_lines() {
    let mut ed = editor_from(&["ab", "cd"]);
    ed.cursor.col = 2;
    feed(&mut ed, &[KeyCode::Char('x')]);
    assert_eq!(buffer_lines(&ed), vec!["ab", "cd"]);
    ed.cursor.col = 1;
    feed(&mut ed, &[KeyCode::Char('x')]);
    assert_eq!(buffer_lines(&ed), vec!["a", "cd"]);
}

#[test]
fn cursor_invariants_hold_under_mixed_editing() {
    let mut ed = editor_from(&["one", "two", "three"]);
    let keys = [
        KeyCode::Char('j'),
        KeyCode::Char('l'),
        KeyCode::Char('i'),
        KeyCode::Enter,
        KeyCode::Backspace,
        KeyCode::Char('Z'),
        KeyCode::Up,
        KeyCode::Esc,
        KeyCode::Char('x'),
        KeyCode::Char('h'),
        KeyCode::Char('k'),
    ];
    for key in keys {
        feed(&mut ed, &[key]);
        assert!(ed.cursor.row < ed.buffer.line_count());
        assert!(ed.cursor.col <= ed.buffer.line_len(ed.cursor.row));
        assert!(ed.buffer.line_count() >= 1);
    }
}
