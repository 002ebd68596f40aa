// builtins.rs

use std::io::{self, Write};

use itertools::Itertools;

use crate::calculator::{Operation, SimpleCalculator};
use crate::history::HistoryLog;
use crate::util::writeln_ignore_broken_pipe;

pub const COMMANDS: [&str; 7] = ["add", "sub", "mul", "div", "history", "help", "exit"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Runs one command line against `calc`, writing all output to `out`.
pub fn run_builtin<W: Write>(line: &str, calc: &mut SimpleCalculator<'_>, out: &mut W) -> io::Result<Flow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => {}
        ["exit"] => return Ok(Flow::Exit(0)),
        ["exit", code] => match code.parse::<i32>() {
            Ok(code) => return Ok(Flow::Exit(code)),
            Err(_) => writeln_ignore_broken_pipe(&mut *out, format!("exit: {}: numeric argument required", code))?,
        },
        ["help"] => {
            let ops = Operation::ALL.iter().map(|op| format!("{} ({})", op.name(), op.symbol())).join(", ");
            writeln_ignore_broken_pipe(&mut *out, format!("operations: {} <a> <b>", ops))?;
            writeln_ignore_broken_pipe(&mut *out, "history [n]  show the last n operations")?;
            writeln_ignore_broken_pipe(&mut *out, "exit [code]  leave the calculator")?;
        }
        ["history"] => print_history(calc.history(), usize::MAX, out)?,
        ["history", n] => match n.parse::<usize>() {
            Ok(n) => print_history(calc.history(), n, out)?,
            Err(_) => writeln_ignore_broken_pipe(&mut *out, format!("history: {}: numeric argument required", n))?,
        },
        [command, args @ ..] => match command.parse::<Operation>() {
            Ok(op) => run_operation(op, args, calc, out)?,
            Err(_) => writeln_ignore_broken_pipe(&mut *out, format!("{}: command not found", command))?,
        },
    }
    Ok(Flow::Continue)
}

fn run_operation<W: Write>(op: Operation, args: &[&str], calc: &mut SimpleCalculator<'_>, out: &mut W) -> io::Result<()> {
    let usage = format!("usage: {} <a> <b>", op.name());
    let [a, b] = args else {
        return writeln_ignore_broken_pipe(&mut *out, usage);
    };
    let (a, b) = match (a.parse::<i32>(), b.parse::<i32>()) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return writeln_ignore_broken_pipe(&mut *out, format!("{}: operands must be 32-bit integers", op.name())),
    };
    match calc.calculate(op, a, b) {
        Ok(result) => writeln_ignore_broken_pipe(&mut *out, result.to_string()),
        Err(err) => writeln_ignore_broken_pipe(&mut *out, format!("error: {}", err)),
    }
}

fn print_history<W: Write>(history: &dyn HistoryLog, n: usize, out: &mut W) -> io::Result<()> {
    let total = history.len();
    let start = total.saturating_sub(n);
    for (i, entry) in history.last_operations(n).iter().enumerate() {
        writeln_ignore_broken_pipe(&mut *out, format!("{:>5}  {}", start + i + 1, entry))?;
    }
    Ok(())
}
