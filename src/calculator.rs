// calculator.rs

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::ArithmeticError;
use crate::history::HistoryLog;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
        }
    }

    /// Checked `i32` arithmetic. Division truncates toward zero.
    pub fn apply(self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        let result = match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => {
                if b == 0 {
                    return Err(ArithmeticError::DivideByZero { a });
                }
                // only i32::MIN / -1 fails here
                a.checked_div(b)
            }
        };
        result.ok_or(ArithmeticError::Overflow { a, symbol: self.symbol(), b })
    }

    /// `"<a> <symbol> <b> = <result>"`
    pub fn format_entry(self, a: i32, b: i32, result: i32) -> String {
        format!("{} {} {} = {}", a, self.symbol(), b, result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" | "+" => Ok(Operation::Add),
            "sub" | "subtract" | "-" => Ok(Operation::Subtract),
            "mul" | "multiply" | "*" => Ok(Operation::Multiply),
            "div" | "divide" | "/" => Ok(Operation::Divide),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Four-function integer calculator that reports every successful
/// operation to a history log it borrows for `'h`.
pub trait Calculator<'h> {
    fn add(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError>;
    fn subtract(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError>;
    fn multiply(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError>;
    fn divide(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError>;

    /// Later operations go to `history`; the previous log is left as is
    /// and never touched again.
    fn set_history(&mut self, history: &'h mut dyn HistoryLog);
}

pub struct SimpleCalculator<'h> {
    history: &'h mut dyn HistoryLog,
}

impl<'h> SimpleCalculator<'h> {
    pub fn new(history: &'h mut dyn HistoryLog) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &dyn HistoryLog {
        &*self.history
    }

    pub fn calculate(&mut self, op: Operation, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        match op.apply(a, b) {
            Ok(result) => {
                let entry = op.format_entry(a, b, result);
                debug!(%entry, "recording operation");
                self.history.add_entry(&entry);
                Ok(result)
            }
            Err(err) => {
                warn!(%err, "operation rejected");
                Err(err)
            }
        }
    }
}

impl<'h> Calculator<'h> for SimpleCalculator<'h> {
    fn add(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        self.calculate(Operation::Add, a, b)
    }

    fn subtract(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        self.calculate(Operation::Subtract, a, b)
    }

    fn multiply(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        self.calculate(Operation::Multiply, a, b)
    }

    fn divide(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        self.calculate(Operation::Divide, a, b)
    }

    fn set_history(&mut self, history: &'h mut dyn HistoryLog) {
        debug!("history log replaced");
        self.history = history;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InMemoryHistory;

    #[test]
    fn apply_checks_every_boundary() {
        assert_eq!(Operation::Add.apply(i32::MAX - 1, 1), Ok(i32::MAX));
        assert!(Operation::Add.apply(i32::MAX, 1).unwrap_err().is_overflow());
        assert_eq!(Operation::Subtract.apply(i32::MIN + 1, 1), Ok(i32::MIN));
        assert!(Operation::Subtract.apply(i32::MIN, 1).unwrap_err().is_overflow());
        assert_eq!(Operation::Multiply.apply(i32::MAX, 1), Ok(i32::MAX));
        assert!(Operation::Multiply.apply(i32::MAX, 2).unwrap_err().is_overflow());
        assert!(Operation::Divide.apply(i32::MIN, -1).unwrap_err().is_overflow());
        assert!(Operation::Divide.apply(5, 0).unwrap_err().is_divide_by_zero());
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Operation::Divide.apply(7, 2), Ok(3));
        assert_eq!(Operation::Divide.apply(-7, 2), Ok(-3));
        assert_eq!(Operation::Divide.apply(7, -2), Ok(-3));
    }

    #[test]
    fn parses_words_and_symbols() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("multiply".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("div".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!(
            "pow".parse::<Operation>(),
            Err(UnknownOperation("pow".to_string()))
        );
    }

    #[test]
    fn formats_negative_operands_verbatim() {
        assert_eq!(Operation::Subtract.format_entry(-1, -2, 1), "-1 - -2 = 1");
    }

    #[test]
    fn history_accessor_sees_recorded_entries() {
        let mut log = InMemoryHistory::new();
        let mut calc = SimpleCalculator::new(&mut log);
        calc.multiply(6, 7).unwrap();
        assert_eq!(calc.history().last_operations(1), vec!["6 * 7 = 42"]);
        assert_eq!(calc.history().len(), 1);
    }
}
