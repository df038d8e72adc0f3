use crate::process::ProcessError;

/// Keeps the shell alive when Ctrl-C is aimed at a foreground child.
///
/// The child gets the default disposition back when it execs, so the
/// interrupt still terminates it. At the prompt the line editor consumes
/// Ctrl-C itself.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    ctrlc::set_handler(|| {
        log::debug!("interrupt received while a command was running");
    })
    .map_err(|e| ProcessError::SignalError(e.to_string()))
}
