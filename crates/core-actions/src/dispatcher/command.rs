//! Command line editing and execution.
//!
//! Commands are exact strings (`w`, `q`, `q!`, `wq`); there is deliberately
//! no argument grammar. Every path out of this mode clears the pending
//! command text, keeping the buffer non-empty only while Command mode is
//! active.

use super::DispatchResult;
use crate::io_ops;
use core_events::KeyCode;
use core_model::Editor;
use core_state::Mode;

pub(crate) fn handle_key(key: KeyCode, editor: &mut Editor) -> DispatchResult {
    match key {
        KeyCode::Esc => {
            editor.session.command_line.clear();
            editor.session.mode = Mode::Normal;
            editor.session.set_status("");
        }
        KeyCode::Backspace => {
            editor.session.command_line.backspace();
            let echo = format!(":{}", editor.session.command_line.text());
            editor.session.set_status(echo);
        }
        KeyCode::Enter => {
            let cmd = editor.session.command_line.take();
            editor.session.mode = Mode::Normal;
            return execute(&cmd, editor);
        }
        KeyCode::Char(ch) => {
            editor.session.command_line.push_char(ch);
            let echo = format!(":{}", editor.session.command_line.text());
            editor.session.set_status(echo);
        }
        _ => {}
    }
    DispatchResult::running()
}

fn execute(cmd: &str, editor: &mut Editor) -> DispatchResult {
    tracing::debug!(target: "actions.dispatch", command = cmd, "execute_command");
    match cmd {
        "w" => {
            save(editor);
            DispatchResult::running()
        }
        "q" => {
            if editor.session.dirty {
                editor
                    .session
                    .set_status("File has unsaved changes. Use :q! to force quit.");
                DispatchResult::running()
            } else {
                DispatchResult::terminate()
            }
        }
        "q!" => DispatchResult::terminate(),
        "wq" => {
            if save(editor) {
                DispatchResult::terminate()
            } else {
                DispatchResult::running()
            }
        }
        other => {
            editor.session.set_status(format!("Unknown command: {other}"));
            DispatchResult::running()
        }
    }
}

fn save(editor: &mut Editor) -> bool {
    editor.session.save(&editor.buffer, io_ops::write_file)
}
