mod executor;

use std::io::{self, IsTerminal};

use crate::{
    core::config::{ConfigPaths, SearchPaths},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::{InteractiveInput, LineSource, ReadOutcome},
    process::{signal, ProcessRunner},
};

use executor::CommandHandler;

pub use crate::core::commands::Flow;

pub const PROMPT: &str = "myshell% ";

/// The read-eval loop.
///
/// Everything derived from one input line (tokens, resolution, child status)
/// lives only inside that iteration; the search paths are fixed at startup.
pub struct Shell<S: LineSource> {
    pub(crate) input: S,
    pub(crate) search_paths: SearchPaths,
    pub(crate) runner: ProcessRunner,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) quiet: bool,
}

impl Shell<InteractiveInput> {
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let quiet = flags.is_set("quiet");
        let paths = ConfigPaths::new(flags.get_value("config").map(String::as_str));
        let search_paths = SearchPaths::load_or_default(&paths.config_file, quiet);

        let input = InteractiveInput::new(&search_paths, paths.history_file, quiet)?;
        signal::setup_signal_handlers()?;

        Ok(Shell::with_input(input, search_paths, quiet))
    }
}

impl<S: LineSource> Shell<S> {
    pub fn with_input(input: S, search_paths: SearchPaths, quiet: bool) -> Self {
        Shell {
            input,
            search_paths,
            runner: ProcessRunner::new(),
            highlighter: SyntaxHighlighter::for_terminal(io::stderr().is_terminal()),
            quiet,
        }
    }

    pub fn input(&self) -> &S {
        &self.input
    }

    /// Runs until end-of-input or `exit`/`quit`.
    ///
    /// Command failures are reported and never end the session; the shell's
    /// own status stays 0 whatever its children return.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let line = match self.input.read_line(PROMPT) {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::Interrupted) => continue,
                Ok(ReadOutcome::Eof) => {
                    self.banner("\nLog out");
                    break;
                }
                Err(e) => {
                    eprintln!("{}", self.highlighter.highlight_error(&format!("myshell: {}", e)));
                    break;
                }
            };

            if self.execute_command(&line) == Flow::Exit {
                self.banner("Terminating myshell...");
                break;
            }
        }

        self.input.close();
        Ok(())
    }

    fn banner(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}
