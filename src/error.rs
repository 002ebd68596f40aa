// error.rs

use thiserror::Error;

/// Failure of a checked arithmetic operation. The history log is never
/// touched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero: {a} / 0")]
    DivideByZero { a: i32 },
    #[error("integer overflow: {a} {symbol} {b}")]
    Overflow { a: i32, symbol: char, b: i32 },
}

impl ArithmeticError {
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, ArithmeticError::DivideByZero { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, ArithmeticError::Overflow { .. })
    }
}
