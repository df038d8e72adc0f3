mod completer;
mod source;

pub use completer::ShellCompleter;
pub use source::{InteractiveInput, LineSource, ReadOutcome, ScriptedInput};
