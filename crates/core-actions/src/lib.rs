//! Modal key dispatch: the state machine that turns logical key events into
//! buffer, cursor, and session mutations.

pub mod dispatcher;
pub mod io_ops;

pub use dispatcher::{DispatchResult, dispatch};
