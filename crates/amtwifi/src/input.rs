//! Terminal-backed line source for the password and secret prompts.

use std::io::{self, IsTerminal, StdinLock, Write};

use amtwifi_core::{LineSource, ReaderSource};

/// Hidden prompts on a terminal, plain line reads when stdin is piped.
pub enum TerminalInput {
    Interactive,
    Piped(ReaderSource<StdinLock<'static>>),
}

impl TerminalInput {
    pub fn from_stdin() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            Self::Interactive
        } else {
            Self::Piped(ReaderSource::new(stdin.lock()))
        }
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self {
            Self::Interactive => rpassword::prompt_password(prompt)
                .map_err(|err| tracing::warn!(error = %err, "failed to read from terminal"))
                .ok(),
            Self::Piped(source) => {
                if let Err(err) = writeln!(io::stderr(), "{prompt}") {
                    tracing::warn!(error = %err, "failed to write prompt");
                }
                source.read_line(prompt)
            }
        }
    }
}
