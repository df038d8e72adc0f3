use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = ".myshell";
const HISTORY_FILE_NAME: &str = ".myshell_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub history_file: Option<PathBuf>,
}

impl ConfigPaths {
    /// Config is read relative to the startup directory unless overridden.
    pub fn new(config_override: Option<&str>) -> Self {
        let config_file = config_override
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        ConfigPaths {
            config_file,
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)),
        }
    }
}
