use super::{Flow, Shell};
use crate::core::parser::tokenize;
use crate::core::resolver::{CommandResolver, ResolvedCommand};
use crate::error::ShellError;
use crate::input::LineSource;
use crate::process::ChildResult;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Flow;
}

impl<S: LineSource> CommandHandler for Shell<S> {
    /// One loop iteration: every error is reported here and never escapes.
    fn execute_command(&mut self, line: &str) -> Flow {
        let args = tokenize(line);
        let resolved = CommandResolver::new(&self.search_paths).resolve(args);

        match self.dispatch(resolved) {
            Ok(flow) => flow,
            Err(e) => {
                self.report(&e);
                Flow::Continue
            }
        }
    }
}

impl<S: LineSource> Shell<S> {
    pub(crate) fn dispatch(&self, resolved: ResolvedCommand) -> Result<Flow, ShellError> {
        match resolved {
            ResolvedCommand::Empty => Ok(Flow::Continue),
            ResolvedCommand::Builtin(builtin) => {
                log::debug!("running builtin {}", builtin.name());
                Ok(builtin.run()?)
            }
            ResolvedCommand::External { path, args } => {
                let result = self.runner.run(&path, &args)?;
                self.report_child(&args[0], result);
                Ok(Flow::Continue)
            }
            ResolvedCommand::PermissionDenied(path) => {
                Err(ShellError::PermissionDenied(path.display().to_string()))
            }
            ResolvedCommand::NotFound(name) => Err(ShellError::CommandNotFound(name)),
        }
    }

    fn report(&self, err: &ShellError) {
        match err {
            ShellError::CommandNotFound(_) => println!("{}", err),
            _ => eprintln!("{}", self.highlighter.highlight_error(&format!("myshell: {}", err))),
        }
    }

    /// A non-zero exit is the child's business; only abnormal ends are shown.
    fn report_child(&self, command: &str, result: ChildResult) {
        match result {
            ChildResult::Exited(0) => {}
            ChildResult::Exited(code) => log::debug!("{} exited with status {}", command, code),
            ChildResult::Signaled(_) | ChildResult::ExecFailed(_) => eprintln!(
                "{}",
                self.highlighter
                    .highlight_warning(&format!("myshell: {}: {}", command, result))
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Builtin;
    use crate::core::config::SearchPaths;
    use crate::input::ScriptedInput;
    use crate::test_support::{lock_env, CwdGuard, ScratchDir};
    use std::path::PathBuf;

    fn shell() -> Shell<ScriptedInput> {
        Shell::with_input(ScriptedInput::default(), SearchPaths::default(), true)
    }

    #[test]
    fn test_dispatch_empty() {
        assert_eq!(shell().dispatch(ResolvedCommand::Empty).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_dispatch_exit() {
        let flow = shell().dispatch(ResolvedCommand::Builtin(Builtin::Exit)).unwrap();
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn test_dispatch_not_found() {
        let result = shell().dispatch(ResolvedCommand::NotFound("nope".to_string()));
        assert!(matches!(result, Err(ShellError::CommandNotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_dispatch_permission_denied() {
        let result =
            shell().dispatch(ResolvedCommand::PermissionDenied(PathBuf::from("./script.sh")));
        assert!(matches!(result, Err(ShellError::PermissionDenied(_))));
    }

    #[test]
    fn test_dispatch_cd_failure() {
        let _lock = lock_env();
        let _cwd = CwdGuard::new();
        let result = shell().dispatch(ResolvedCommand::Builtin(Builtin::Cd(Some(
            "/nonexistent".to_string(),
        ))));
        assert!(matches!(result, Err(ShellError::CommandError(_))));
    }

    #[test]
    fn test_dispatch_external_exit_code_is_not_an_error() {
        let dir = ScratchDir::new("dispatch_exit");
        let script = dir.write_file("fail.sh", "#!/bin/sh\nexit 3\n", 0o755);
        let resolved = ResolvedCommand::External {
            path: script,
            args: vec!["fail.sh".to_string()],
        };

        assert_eq!(shell().dispatch(resolved).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_execute_command_swallows_errors() {
        let mut shell = shell();
        assert_eq!(shell.execute_command("doesnotexist123"), Flow::Continue);
        assert_eq!(shell.execute_command("   "), Flow::Continue);
        assert_eq!(shell.execute_command("quit"), Flow::Exit);
    }
}
