//! quill entrypoint: argument parsing, logging bootstrap, terminal session,
//! and the synchronous render/read/dispatch loop.

use anyhow::Result;
use clap::Parser;
use core_actions::{dispatch, io_ops};
use core_events::Event;
use core_model::Editor;
use core_state::Session;
use core_terminal::CrosstermBackend;
use core_text::LineBuffer;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const HELP_BANNER: &str =
    "HELP: ESC = normal mode | i = insert mode | :w = save | :q = quit | :wq = save and quit";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A small modal terminal text editor")]
struct Args {
    /// Optional path to open at startup. A missing file starts an empty
    /// buffer that will be created on first save.
    pub path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", path = ?args.path, "startup");

    let mut editor = bootstrap(args.path);

    let mut backend = CrosstermBackend::new();
    let guard = backend.enter_guard()?;
    let result = run(&mut editor);
    drop(guard);

    info!(target: "runtime", "shutdown");
    result
}

/// One input event is fully processed between consecutive renders; reading
/// the next key is the only blocking point.
fn run(editor: &mut Editor) -> Result<()> {
    loop {
        core_render::render_frame(editor)?;
        match core_input::next_event()? {
            Event::Key(key) => {
                if dispatch(key, editor).quit {
                    return Ok(());
                }
            }
            // The renderer re-reads dimensions next frame.
            Event::Resize(_, _) => {}
        }
    }
}

/// Build the editor aggregate from the optional startup path. Load failures
/// are never fatal: the session starts with an empty buffer and a warning.
fn bootstrap(path: Option<PathBuf>) -> Editor {
    let mut session = Session::new(path.clone());
    let buffer = match path {
        Some(ref p) if p.exists() => match io_ops::load_file(p) {
            Ok(buffer) => buffer,
            Err(e) => {
                session.set_status(format!("Error opening file: {e:#}"));
                LineBuffer::new()
            }
        },
        Some(ref p) => {
            session.set_status(format!("New file: {}", p.display()));
            LineBuffer::new()
        }
        None => LineBuffer::new(),
    };
    if !session.has_status() {
        session.set_status(HELP_BANNER);
    }
    Editor::new(buffer, session)
}

/// File-backed tracing (stdout belongs to the frame renderer). Keep the
/// worker guard alive for the process lifetime so buffered logs flush.
fn configure_logging() -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(Path::new("."), "quill.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init()
    {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            tracing::error!(target: "runtime.panic", ?panic_info, "panic");
            default_panic(panic_info);
        }));
    });
}
