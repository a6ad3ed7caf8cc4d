//! Navigation state
//!
//! Tracks which chapter and verse are currently displayed and enforces the
//! bounds invariants on every transition.

mod cursor;

pub use cursor::Cursor;
