//! Line-based input for the interactive shell.

use std::io::{self, BufRead, Write};

/// Source of answers for the shell's questions.
pub trait Prompt {
    /// Shows `message` and waits for one line of input.
    ///
    /// Returns `Ok(None)` once the input is exhausted. The line terminator is stripped.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Prompts on a writer and reads answers line by line from a reader.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

/// The prompt used by the binary: standard input and standard output.
pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stdout>;

impl StdinPrompt {
    pub fn stdin() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let kept = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(kept);
        Ok(Some(line))
    }
}

/// Replays canned answers and records every question asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front())
    }
}
