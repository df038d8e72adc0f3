use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};

use super::commands::Builtin;
use super::config::SearchPaths;

/// Outcome of mapping one tokenized line to something runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// Blank line; nothing to do.
    Empty,
    Builtin(Builtin),
    /// `args[0]` is the command as typed, not the resolved path.
    External { path: PathBuf, args: Vec<String> },
    /// An explicit path that exists but cannot be executed.
    PermissionDenied(PathBuf),
    NotFound(String),
}

pub struct CommandResolver<'a> {
    search_paths: &'a SearchPaths,
}

impl<'a> CommandResolver<'a> {
    pub fn new(search_paths: &'a SearchPaths) -> Self {
        Self { search_paths }
    }

    pub fn resolve(&self, args: Vec<String>) -> ResolvedCommand {
        let Some(command) = args.first() else {
            return ResolvedCommand::Empty;
        };

        if let Some(builtin) = Builtin::parse(&args) {
            return ResolvedCommand::Builtin(builtin);
        }

        if command.contains('/') {
            let path = PathBuf::from(command);
            return match check_explicit(&path) {
                Verdict::Executable => ResolvedCommand::External { path, args },
                Verdict::NotExecutable => ResolvedCommand::PermissionDenied(path),
                Verdict::Missing => ResolvedCommand::NotFound(command.clone()),
            };
        }

        match self.search(command) {
            Some(path) => ResolvedCommand::External { path, args },
            None => ResolvedCommand::NotFound(command.clone()),
        }
    }

    /// First directory holding an executable `command` wins.
    fn search(&self, command: &str) -> Option<PathBuf> {
        for dir in self.search_paths.iter() {
            let candidate = dir.join(command);
            match check_explicit(&candidate) {
                Verdict::Executable => {
                    log::debug!("resolved {} to {}", command, candidate.display());
                    return Some(candidate);
                }
                Verdict::NotExecutable => {
                    log::debug!("skipping non-executable {}", candidate.display());
                }
                Verdict::Missing => {}
            }
        }
        None
    }
}

/// Convenience wrapper for one-off resolution.
pub fn resolve(args: Vec<String>, search_paths: &SearchPaths) -> ResolvedCommand {
    CommandResolver::new(search_paths).resolve(args)
}

enum Verdict {
    Executable,
    NotExecutable,
    Missing,
}

fn check_explicit(path: &Path) -> Verdict {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() && access(path, AccessFlags::X_OK).is_ok() => {
            Verdict::Executable
        }
        Ok(_) => Verdict::NotExecutable,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Verdict::NotExecutable,
        Err(_) => Verdict::Missing,
    }
}
