//! Blocking input backend: reads crossterm terminal events and narrows them
//! to the editor's logical key vocabulary.
//!
//! Reading the next key is the only blocking point in the whole process; the
//! loop here parks until an event of interest arrives. Keys outside the
//! vocabulary (function keys, modifier chords, non-ASCII input) are dropped
//! at this layer so downstream handlers never see them.

use core_events::{Event, EventResult, KeyCode};
use crossterm::event::{
    Event as CtEvent, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers,
};

/// Block until the next logical event (key or resize).
pub fn next_event() -> EventResult<Event> {
    loop {
        match crossterm::event::read()? {
            CtEvent::Key(key) => {
                if let Some(code) = translate_key(&key) {
                    return Ok(Event::Key(code));
                }
            }
            CtEvent::Resize(cols, rows) => {
                tracing::debug!(target: "input", cols, rows, "resize");
                return Ok(Event::Resize(cols, rows));
            }
            _ => {}
        }
    }
}

/// Map a crossterm key event to a logical key, or `None` when it falls
/// outside the editor's vocabulary. Release events are ignored (some
/// platforms report them alongside presses).
pub fn translate_key(key: &CtKeyEvent) -> Option<KeyCode> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    // Shift is part of ordinary typing; anything else makes the key a chord
    // we do not handle.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        CtKeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Some(KeyCode::Char(c)),
        CtKeyCode::Enter => Some(KeyCode::Enter),
        CtKeyCode::Esc => Some(KeyCode::Esc),
        CtKeyCode::Backspace => Some(KeyCode::Backspace),
        CtKeyCode::Up => Some(KeyCode::Up),
        CtKeyCode::Down => Some(KeyCode::Down),
        CtKeyCode::Left => Some(KeyCode::Left),
        CtKeyCode::Right => Some(KeyCode::Right),
        _ => None,
    }
}
