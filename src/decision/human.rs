//! Human player reading decisions from a terminal.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use tracing::debug;

use super::{DecisionProvider, DecisionResult, GameContext, ProviderError};

/// Somewhere to read one line of input from.
///
/// Every `BufRead` qualifies. [`SharedStdin`] covers the process's stdin,
/// which several human seats share.
pub trait LineInput {
    /// Append one line (including its terminator) to `buf`. Returns the
    /// number of bytes read; zero means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineInput for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each read.
#[derive(Debug)]
pub struct SharedStdin(Stdin);

impl SharedStdin {
    #[must_use]
    pub fn new() -> Self {
        Self(io::stdin())
    }
}

impl Default for SharedStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for SharedStdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Prompts on `output` and reads answers line by line from `input`.
pub struct HumanProvider<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanProvider<SharedStdin, Stdout> {
    /// A provider bound to the process's stdin and stdout. Any number of
    /// these can exist at once.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, SharedStdin::new(), io::stdout())
    }
}

impl<R: LineInput, W: Write> HumanProvider<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_line(&mut self) -> Result<String, ProviderError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProviderError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: LineInput, W: Write> DecisionProvider for HumanProvider<R, W> {
    fn discussion_text(&mut self, _context: &GameContext) -> Result<DecisionResult, ProviderError> {
        writeln!(self.output, "\n[{} - Discussion] What do you say? (Enter text):", self.name)?;
        write!(self.output, "> ")?;
        let said = self.read_line()?;

        Ok(DecisionResult::new(said.clone())
            .with_field("source", "Human")
            .with_field("raw_input", said))
    }

    fn target_selection(
        &mut self,
        _context: &GameContext,
        valid_targets: &[String],
    ) -> Result<DecisionResult, ProviderError> {
        if valid_targets.is_empty() {
            return Err(ProviderError::NoTargets);
        }

        loop {
            writeln!(self.output, "\n[{} - Selection] Choose a target from the following:", self.name)?;
            for (i, target) in valid_targets.iter().enumerate() {
                writeln!(self.output, "  {}. {}", i + 1, target)?;
            }
            write!(self.output, "Enter the number corresponding to your target: ")?;

            let choice = self.read_line()?;
            match choice.trim().parse::<usize>() {
                Ok(n) if (1..=valid_targets.len()).contains(&n) => {
                    return Ok(DecisionResult::new(valid_targets[n - 1].clone())
                        .with_field("source", "Human")
                        .with_field("raw_input", choice));
                }
                Ok(_) => writeln!(self.output, "Invalid number. Please try again.")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
            debug!(player = %self.name, input = %choice, "rejected selection input");
        }
    }
}
