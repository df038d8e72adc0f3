use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Filename completion for arguments after the command word.
#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = match incomplete.rfind('/') {
            Some(idx) => incomplete.split_at(idx + 1),
            None => ("", incomplete),
        };
        let dir_to_search = if dir_part.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(dir_part)
        };

        let Ok(entries) = fs::read_dir(&dir_to_search) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) {
                    return None;
                }
                // Dotfiles only when the prefix asks for them.
                if name.starts_with('.') && !file_prefix.starts_with('.') {
                    return None;
                }
                Some(completion_pair(dir_part, &name, &entry.path()))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

fn completion_pair(dir_part: &str, name: &str, path: &Path) -> Pair {
    let candidate = format!("{}{}", dir_part, name);
    if path.is_dir() {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}/", candidate),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: format!("{} ", candidate),
        }
    }
}
