use crate::core::commands::CommandError;
use std::env;
use std::path::{Path, PathBuf};

/// Resolves `~` and `~/...` against the `HOME` environment variable.
///
/// This is the only expansion the shell performs; `~user` forms are left as-is.
#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, CommandError> {
        match path.strip_prefix('~') {
            Some("") => self.home_dir(),
            Some(rest) if rest.starts_with('/') => {
                let mut home_path = self.home_dir()?;
                home_path.extend(rest.split('/').filter(|part| !part.is_empty()));
                Ok(home_path)
            }
            _ => Ok(Path::new(path).to_path_buf()),
        }
    }

    /// An empty `HOME` counts as unset.
    pub fn home_dir(&self) -> Result<PathBuf, CommandError> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .ok_or(CommandError::HomeNotSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lock_env, EnvVarGuard};

    #[test]
    fn test_plain_path_untouched() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("/tmp").unwrap(), PathBuf::from("/tmp"));
        assert_eq!(expander.expand("rel/dir").unwrap(), PathBuf::from("rel/dir"));
        assert_eq!(expander.expand("~user/x").unwrap(), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_tilde_expansion() {
        let _lock = lock_env();
        let _home = EnvVarGuard::set("HOME", "/home/u");

        let expander = PathExpander::new();
        assert_eq!(expander.expand("~").unwrap(), PathBuf::from("/home/u"));
        assert_eq!(expander.expand("~/src//app").unwrap(), PathBuf::from("/home/u/src/app"));
    }

    #[test]
    fn test_missing_home() {
        let _lock = lock_env();
        let _home = EnvVarGuard::unset("HOME");

        let expander = PathExpander::new();
        assert!(matches!(expander.expand("~"), Err(CommandError::HomeNotSet)));
        assert!(matches!(expander.home_dir(), Err(CommandError::HomeNotSet)));
    }
}
