// repl.rs

use anyhow::Context as _;
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Editor};
use tracing::info;

use crate::builtins::{run_builtin, Flow};
use crate::calculator::SimpleCalculator;
use crate::completion::CommandCompleter;
use crate::config::Config;
use crate::history::{HistoryLog, InMemoryHistory};

/// Runs the interactive calculator until `exit`, Ctrl-C or Ctrl-D.
/// Returns the process exit code.
pub fn start_repl(config: &Config) -> anyhow::Result<i32> {
    let editor_config = EditorConfig::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));

    let mut log = InMemoryHistory::new();
    let mut calc = SimpleCalculator::new(&mut log);
    let mut stdout = std::io::stdout();
    info!("calculator session started");

    let code = loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed).context("failed to record input line")?;
                match run_builtin(trimmed, &mut calc, &mut stdout).context("failed to write output")? {
                    Flow::Continue => {}
                    Flow::Exit(code) => break code,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break 0,
            Err(err) => return Err(err).context("failed to read input"),
        }
    };
    info!(operations = calc.history().len(), "calculator session ended");
    Ok(code)
}
