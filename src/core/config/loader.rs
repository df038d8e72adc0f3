use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{ConfigError, SearchPaths, MAX_SEARCH_PATHS};

const PATH_DIRECTIVE: &str = "PATH=";

/// Reads the search-path directive out of a line-oriented config file.
pub struct PathConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> PathConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<SearchPaths, ConfigError> {
        let file = File::open(self.path)
            .map_err(|e| ConfigError::Unavailable(self.path.to_path_buf(), e))?;
        self.load_from(BufReader::new(file))
    }

    /// Only the first `PATH=` line counts; everything after it is not read.
    pub fn load_from<R: BufRead>(&self, mut reader: R) -> Result<SearchPaths, ConfigError> {
        let mut raw = Vec::new();
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(ConfigError::NoPathDirective(self.path.to_path_buf()));
            }

            let Ok(line) = std::str::from_utf8(&raw) else {
                log::debug!("skipping non UTF-8 line in {}", self.path.display());
                continue;
            };
            let line = line.trim_end_matches(['\n', '\r']);

            if let Some(value) = line.strip_prefix(PATH_DIRECTIVE) {
                return self.process_path_var(value);
            }
        }
    }

    fn process_path_var(&self, value: &str) -> Result<SearchPaths, ConfigError> {
        let segments: Vec<&str> = value.split(':').filter(|s| !s.is_empty()).collect();
        if segments.len() > MAX_SEARCH_PATHS {
            log::debug!(
                "dropping {} search path(s) past the limit of {}",
                segments.len() - MAX_SEARCH_PATHS,
                MAX_SEARCH_PATHS
            );
        }

        SearchPaths::new(segments)
            .ok_or_else(|| ConfigError::EmptyPathDirective(self.path.to_path_buf()))
    }
}
