use super::{Command, CommandError, Flow};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    // The loop owns shutdown so history is saved before the process ends.
    fn execute(&self, _args: &[String]) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}
