use std::fmt;

use nix::errno::Errno;
use nix::sys::signal::Signal;

pub mod executor;
pub mod signal;

pub use executor::ProcessRunner;

/// Exit status the child uses when `execv` fails.
pub const EXEC_FAILURE_STATUS: i32 = 127;

/// How a child launched for an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildResult {
    Exited(i32),
    Signaled(Signal),
    /// The image replacement failed; the child has already been reaped.
    ExecFailed(Errno),
}

impl ChildResult {
    pub fn success(&self) -> bool {
        matches!(self, ChildResult::Exited(0))
    }
}

impl fmt::Display for ChildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildResult::Exited(code) => write!(f, "exited with status {}", code),
            ChildResult::Signaled(sig) => write!(f, "terminated by signal {}", sig),
            ChildResult::ExecFailed(errno) => write!(f, "exec failed: {}", errno.desc()),
        }
    }
}

#[derive(Debug)]
pub enum ProcessError {
    InvalidArgument(String),
    Fork(Errno),
    Wait(Errno),
    Pipe(Errno),
    Io(std::io::Error),
    SignalError(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Fork(e) => write!(f, "fork error: {}", e.desc()),
            ProcessError::Wait(e) => write!(f, "wait error: {}", e.desc()),
            ProcessError::Pipe(e) => write!(f, "pipe error: {}", e.desc()),
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
