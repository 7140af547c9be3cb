//! A scientific calculator.
//!
//! [`calculator::evaluate`] is the core: a pure function from expression
//! text to a finite number or a typed error. [`session::Session`] holds the
//! presentation state (input, live preview, history, theme) and [`shell`]
//! drives it from a terminal.

pub mod calculator;
pub mod config;
pub mod session;
pub mod shell;
pub mod ui;

pub use calculator::{CalcError, CalcResult, ErrorKind, evaluate, evaluate_expression};
pub use session::{History, HistoryEntry, Session};
