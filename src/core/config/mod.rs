use std::{
    fmt,
    path::{Path, PathBuf},
};

mod loader;
mod paths;

pub use loader::PathConfigLoader;
pub use paths::ConfigPaths;

/// Upper bound on the number of directories honored from a `PATH=` line.
pub const MAX_SEARCH_PATHS: usize = 64;

pub const DEFAULT_SEARCH_PATHS: [&str; 3] = ["/bin", "/usr/bin", "/usr/local/bin"];

/// Ordered list of directories scanned for commands without a `/`.
///
/// Built once at startup and never modified afterwards. Always holds between
/// one and [`MAX_SEARCH_PATHS`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl SearchPaths {
    /// Returns `None` for an empty list; extra entries past the limit are dropped.
    pub fn new<I, P>(dirs: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().take(MAX_SEARCH_PATHS).map(Into::into).collect();
        if dirs.is_empty() {
            None
        } else {
            Some(Self { dirs })
        }
    }

    /// Loads the configured search paths, falling back to the defaults.
    ///
    /// A failure is reported on stderr unless `quiet` is set; it never aborts startup.
    pub fn load_or_default(config_file: &Path, quiet: bool) -> Self {
        match PathConfigLoader::new(config_file).load() {
            Ok(paths) => {
                log::debug!(
                    "loaded {} search path(s) from {}",
                    paths.len(),
                    config_file.display()
                );
                paths
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: {}", e);
                    eprintln!(
                        "Warning: Using default paths ({})",
                        DEFAULT_SEARCH_PATHS.join(", ")
                    );
                }
                Self::default()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Never zero.
    pub(crate) fn len(&self) -> usize {
        self.dirs.len()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Unavailable(PathBuf, std::io::Error),
    NoPathDirective(PathBuf),
    EmptyPathDirective(PathBuf),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unavailable(path, e) => {
                write!(f, "Configuration file ({}) open failed: {}", path.display(), e)
            }
            ConfigError::NoPathDirective(path) => {
                write!(f, "No PATH= line in {}", path.display())
            }
            ConfigError::EmptyPathDirective(path) => {
                write!(f, "PATH= line in {} lists no directories", path.display())
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = SearchPaths::default();
        let dirs: Vec<&Path> = paths.iter().collect();
        assert_eq!(
            dirs,
            vec![Path::new("/bin"), Path::new("/usr/bin"), Path::new("/usr/local/bin")]
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(SearchPaths::new(Vec::<PathBuf>::new()).is_none());
    }

    #[test]
    fn test_new_is_bounded() {
        let many = (0..100).map(|i| format!("/opt/dir{}", i));
        let paths = SearchPaths::new(many).unwrap();
        assert_eq!(paths.len(), MAX_SEARCH_PATHS);
        assert_eq!(paths.iter().last().unwrap(), Path::new("/opt/dir63"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let missing = std::env::temp_dir().join("myshell_no_such_config_file");
        let paths = SearchPaths::load_or_default(&missing, true);
        assert_eq!(paths, SearchPaths::default());
    }
}
