use std::ffi::{c_char, CString};
use std::fs::File;
use std::io::{Read, Write};
use std::os::fd::OwnedFd;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use nix::errno::Errno;
use nix::fcntl::OFlag;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, pipe2, write, ForkResult, Pid};

use super::{ChildResult, ProcessError, EXEC_FAILURE_STATUS};

/// Runs one external command in a child process and waits for it.
#[derive(Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Forks exactly once and reaps that child exactly once.
    ///
    /// `args[0]` becomes the child's reported program name. An `execv` failure
    /// in the child travels back over a close-on-exec pipe, so it is told apart
    /// from a program that itself exits with [`EXEC_FAILURE_STATUS`].
    pub fn run(&self, path: &Path, args: &[String]) -> Result<ChildResult, ProcessError> {
        let program = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| ProcessError::InvalidArgument(path.display().to_string()))?;
        let argv = args
            .iter()
            .map(|arg| {
                CString::new(arg.as_str()).map_err(|_| ProcessError::InvalidArgument(arg.clone()))
            })
            .collect::<Result<Vec<CString>, ProcessError>>()?;
        let argv_ptrs: Vec<*const c_char> = argv
            .iter()
            .map(|arg| arg.as_ptr())
            .chain(std::iter::once(std::ptr::null()))
            .collect();

        let (status_reader, status_writer) = pipe2(OFlag::O_CLOEXEC).map_err(ProcessError::Pipe)?;

        let _ = std::io::stdout().flush();

        // SAFETY: every buffer the child touches is allocated above; after the
        // fork it only closes a descriptor and calls execv, write and _exit.
        match unsafe { fork() }.map_err(ProcessError::Fork)? {
            ForkResult::Child => {
                drop(status_reader);
                // SAFETY: `program` and `argv_ptrs` are NUL-terminated and outlive the call.
                unsafe { libc::execv(program.as_ptr(), argv_ptrs.as_ptr()) };
                let errno = Errno::last();
                let _ = write(&status_writer, &(errno as i32).to_ne_bytes());
                // SAFETY: leaves the forked copy without running the parent's destructors.
                unsafe { libc::_exit(EXEC_FAILURE_STATUS) }
            }
            ForkResult::Parent { child } => {
                drop(status_writer);
                log::debug!("started {} as pid {}", path.display(), child);

                let exec_error = read_exec_error(status_reader);
                let result = wait_for(child)?;
                log::debug!("pid {} {}", child, result);

                match exec_error? {
                    Some(errno) => Ok(ChildResult::ExecFailed(errno)),
                    None => Ok(result),
                }
            }
        }
    }
}

/// EOF without data means the exec went through.
fn read_exec_error(reader: OwnedFd) -> Result<Option<Errno>, ProcessError> {
    let mut file = File::from(reader);
    let mut buf = Vec::with_capacity(4);
    file.read_to_end(&mut buf)?;

    Ok(buf
        .get(..4)
        .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
        .map(|bytes| Errno::from_raw(i32::from_ne_bytes(bytes))))
}

fn wait_for(child: Pid) -> Result<ChildResult, ProcessError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(ChildResult::Exited(code)),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Ok(ChildResult::Signaled(signal)),
            Ok(_) => continue,
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(ProcessError::Wait(e)),
        }
    }
}
