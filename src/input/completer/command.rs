use std::{borrow::Cow, collections::BTreeSet, fs, os::unix::fs::PermissionsExt};

use rustyline::completion::Pair;

use crate::core::{commands::BUILTIN_NAMES, config::SearchPaths};

/// Completes the first word of a line from built-ins and search-path executables.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<Cow<'static, str>>,
}

impl CommandCompleter {
    pub fn new(search_paths: &SearchPaths) -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
        };
        completer.refresh_commands(search_paths);
        completer
    }

    fn refresh_commands(&mut self, search_paths: &SearchPaths) {
        self.commands.clear();
        self.commands.extend(BUILTIN_NAMES.iter().copied().map(Cow::Borrowed));
        self.add_path_commands(search_paths);
    }

    fn add_path_commands(&mut self, search_paths: &SearchPaths) {
        for dir in search_paths.iter() {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                // Follow symlinks; many distro binaries are links.
                let executable = fs::metadata(entry.path())
                    .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
                    .unwrap_or(false);
                if !executable {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    self.commands.insert(Cow::Owned(name.to_string()));
                }
            }
        }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
