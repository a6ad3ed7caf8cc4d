//! Reader controller and interactive session
//!
//! The controller owns the navigation cursor, the fetched chapter list, and
//! the currently displayed verse bundle; the session is the line-oriented
//! command loop driving it.

mod controller;
mod session;

pub use controller::ReaderController;
pub use session::{parse_command, parse_reference, run_session, Command};
