use super::{Command, CommandError, Flow};
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    /// Changes the shell's own working directory; extra arguments are ignored.
    fn execute(&self, args: &[String]) -> Result<Flow, CommandError> {
        let target = match args.first() {
            Some(path) => self.path_expander.expand(path)?,
            None => self.path_expander.home_dir()?,
        };

        env::set_current_dir(&target).map_err(|e| CommandError::DirectoryChange(target.clone(), e))?;
        log::debug!("changed directory to {}", target.display());
        Ok(Flow::Continue)
    }
}
