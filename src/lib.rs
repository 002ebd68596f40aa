//! Four-function `i32` calculator that logs every successful operation to
//! a swappable history log, plus a small interactive shell around it.

pub mod builtins;
pub mod calculator;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod repl;
pub mod util;

pub use calculator::{Calculator, Operation, SimpleCalculator};
pub use error::ArithmeticError;
pub use history::{HistoryLog, InMemoryHistory};
