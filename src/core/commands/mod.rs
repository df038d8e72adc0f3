use std::path::PathBuf;

mod builtin;
mod cd;

pub use builtin::ExitCommand;
pub use cd::CdCommand;

/// Names handled inside the shell process instead of being exec'd.
pub const BUILTIN_NAMES: [&str; 3] = ["cd", "exit", "quit"];

#[derive(Debug)]
pub enum CommandError {
    HomeNotSet,
    DirectoryChange(PathBuf, std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::HomeNotSet => write!(f, "cd failed: HOME not set"),
            CommandError::DirectoryChange(path, err) => {
                write!(f, "cd failed: {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// What the read loop does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<Flow, CommandError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Cd(Option<String>),
}

impl Builtin {
    /// Recognizes a built-in from a tokenized line.
    pub fn parse(args: &[String]) -> Option<Self> {
        match args.first().map(String::as_str)? {
            "exit" | "quit" => Some(Builtin::Exit),
            "cd" => Some(Builtin::Cd(args.get(1).cloned())),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Exit => "exit",
            Builtin::Cd(_) => "cd",
        }
    }

    pub fn run(&self) -> Result<Flow, CommandError> {
        match self {
            Builtin::Exit => ExitCommand::new().execute(&[]),
            Builtin::Cd(target) => {
                let args: Vec<String> = target.iter().cloned().collect();
                CdCommand::new().execute(&args)
            }
        }
    }
}

pub fn is_builtin(command: &str) -> bool {
    BUILTIN_NAMES.contains(&command)
}
