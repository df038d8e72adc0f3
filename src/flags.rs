use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    const fn new(
        name: &'static str,
        short: &'static str,
        long: &'static str,
        description: &'static str,
        takes_value: bool,
    ) -> Self {
        Flag {
            name,
            short,
            long,
            description,
            takes_value,
            value: None,
        }
    }
}

/// Command-line options of the shell binary, kept in help order.
#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<Flag>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        Flags {
            flags: vec![
                Flag::new("help", "-h", "--help", "Print this help message", false),
                Flag::new("version", "-v", "--version", "Show version information", false),
                Flag::new(
                    "config",
                    "-c",
                    "--config",
                    "Read PATH= from this file instead of ./.myshell",
                    true,
                ),
                Flag::new("quiet", "-q", "--quiet", "Suppress warnings and banners", false),
                Flag::new("debug", "-d", "--debug", "Enable debug logging", false),
            ],
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .iter_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown option {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = args
                    .next()
                    .ok_or_else(|| ShellError::FlagError(format!("Flag {} requires a value", arg)))?;
                Some(value.clone())
            } else {
                Some("true".to_string())
            };
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|flag| flag.name == name)
            .and_then(|flag| flag.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: myshell [OPTIONS]");
        println!("\nOptions:");
        for flag in &self.flags {
            let long = if flag.takes_value {
                format!("{} <FILE>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<18} {}", flag.short, long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_flags() {
        let mut flags = Flags::new();
        flags.parse(&[]).unwrap();
        assert!(!flags.is_set("quiet"));
        assert!(!flags.is_set("debug"));
        assert!(flags.get_value("config").is_none());
    }

    #[test]
    fn test_short_and_long() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"])).unwrap();
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_config_value() {
        let mut flags = Flags::new();
        flags.parse(&args(&["--config", "/etc/myshell.conf", "-q"])).unwrap();
        assert_eq!(flags.get_value("config").unwrap(), "/etc/myshell.conf");
        assert!(flags.is_set("quiet"));
    }

    #[test]
    fn test_config_requires_value() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["-c"]));
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["--bogus"]));
        assert!(matches!(result, Err(ShellError::FlagError(msg)) if msg.contains("--bogus")));
    }
}
