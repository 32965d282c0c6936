//! Confirmation prompt on the controlling terminal, falling back to piped stdin.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};
use tracing::debug;

use crate::domain::{AppError, is_affirmative};
use crate::ports::ConfirmPrompt;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        let answer = if io::stdin().is_terminal() {
            read_interactive(question)?
        } else {
            print!("{}: ", question);
            io::stdout().flush()?;
            read_answer(&mut io::stdin().lock())?
        };
        debug!(?answer, "prompt answered");
        Ok(answer.is_some_and(|a| is_affirmative(&a)))
    }
}

fn read_interactive(question: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(question).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read answer: {}", err))),
    }
}

/// Read one line; `None` at end of input.
fn read_answer(reader: &mut impl BufRead) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
