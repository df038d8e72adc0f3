use std::collections::VecDeque;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::ShellCompleter;
use crate::core::config::SearchPaths;
use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt; the partial line is discarded.
    Interrupted,
    Eof,
}

/// Where the read loop gets its next line from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Called once when the session ends.
    fn close(&mut self) {}
}

/// Terminal input through rustyline, with persistent history.
pub struct InteractiveInput {
    editor: Editor<ShellCompleter, FileHistory>,
    history_file: Option<PathBuf>,
    quiet: bool,
    /// rustyline stays silent when stdin is a pipe or file, so the prompt is written here.
    echo_prompt: bool,
}

impl InteractiveInput {
    pub fn new(
        search_paths: &SearchPaths,
        history_file: Option<PathBuf>,
        quiet: bool,
    ) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(search_paths)));
        editor.set_auto_add_history(true);

        if let Some(path) = &history_file {
            if let Err(e) = editor.load_history(path) {
                log::debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_file,
            quiet,
            echo_prompt: !io::stdin().is_terminal(),
        })
    }

    /// Returns the prompt rustyline should draw itself.
    fn editor_prompt<'p>(&self, prompt: &'p str, out: &mut impl Write) -> &'p str {
        if !self.echo_prompt {
            return prompt;
        }
        let _ = out.write_all(prompt.as_bytes()).and_then(|()| out.flush());
        ""
    }

    fn save_history(&mut self) -> Result<(), ReadlineError> {
        match &self.history_file {
            Some(path) => self.editor.save_history(path),
            None => Ok(()),
        }
    }
}

impl LineSource for InteractiveInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        let prompt = self.editor_prompt(prompt, &mut io::stdout());
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) {
        let Err(e) = self.save_history() else {
            return;
        };
        if let (false, Some(path)) = (self.quiet, &self.history_file) {
            eprintln!("Warning: Couldn't save history to {}: {}", path.display(), e);
        }
    }
}

/// Pre-recorded lines, ending in end-of-input once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: 0,
        }
    }

    /// Number of prompts shown so far.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts += 1;
        Ok(self
            .lines
            .pop_front()
            .map(ReadOutcome::Line)
            .unwrap_or(ReadOutcome::Eof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;

    fn interactive(history_file: Option<PathBuf>) -> InteractiveInput {
        InteractiveInput::new(&SearchPaths::default(), history_file, true).unwrap()
    }

    fn entries(input: &InteractiveInput) -> Vec<String> {
        input.editor.history().iter().cloned().collect()
    }

    #[test]
    fn test_history_survives_sessions() {
        let dir = ScratchDir::new("history_persist");
        let file = dir.path().join("history");

        let mut first = interactive(Some(file.clone()));
        first.editor.add_history_entry("cd /tmp").unwrap();
        first.editor.add_history_entry("ls -la").unwrap();
        first.close();
        assert!(file.exists());

        let second = interactive(Some(file));
        assert_eq!(entries(&second), vec!["cd /tmp", "ls -la"]);
    }

    #[test]
    fn test_missing_history_starts_empty() {
        let dir = ScratchDir::new("history_missing");
        let input = interactive(Some(dir.path().join("never_written")));
        assert!(entries(&input).is_empty());
    }

    #[test]
    fn test_unwritable_history_is_not_fatal() {
        let dir = ScratchDir::new("history_unwritable");
        let file = dir.path().join("no_such_dir").join("history");

        let mut input = interactive(Some(file.clone()));
        input.editor.add_history_entry("pwd").unwrap();
        assert!(input.save_history().is_err());

        input.close();
        assert!(!file.exists());
    }

    #[test]
    fn test_prompt_written_when_not_a_terminal() {
        let mut input = interactive(None);
        let mut out = Vec::new();

        input.echo_prompt = true;
        assert_eq!(input.editor_prompt("myshell% ", &mut out), "");
        assert_eq!(out, b"myshell% ");

        out.clear();
        input.echo_prompt = false;
        assert_eq!(input.editor_prompt("myshell% ", &mut out), "myshell% ");
        assert!(out.is_empty());
    }

    #[test]
    fn test_scripted_input_ends_with_eof() {
        let mut input = ScriptedInput::new(["pwd", "exit"]);
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("pwd".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("exit".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Eof);
        assert_eq!(input.prompts(), 3);
        assert_eq!(input.remaining(), 0);
    }
}
