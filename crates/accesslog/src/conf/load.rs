//! Load: config loading from file and environment variables.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{AccessLogConfig, MalformedTaskIdPolicy};

pub const CONFIG_FILE_ENV: &str = "ACCESSLOG_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "accesslog.toml";

impl AccessLogConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self> {
        let config_path = std::env::var(CONFIG_FILE_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", config_path);
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `ACCESSLOG_*` overrides from `lookup`; unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("ACCESSLOG_LOG_DIR") {
            self.log_dir = dir.into();
        }
        if let Some(ext) = lookup("ACCESSLOG_EXTENSION") {
            self.extension = ext;
        }
        if let Some(size) = lookup("ACCESSLOG_MAX_LINE_SIZE").and_then(|s| s.parse::<usize>().ok()) {
            self.max_line_size = size;
        }
        if let Some(policy) = lookup("ACCESSLOG_MALFORMED_TASK_ID").and_then(|s| MalformedTaskIdPolicy::from_name(&s)) {
            self.malformed_task_id = policy;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            bail!("extension must not be empty");
        }
        if self.max_line_size == 0 {
            bail!("max_line_size must be > 0");
        }
        Ok(())
    }

    /// The extension as a lowercase `.ext` suffix.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.').to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_dir = \"/data/logs\"\nextension = \"txt\"").unwrap();

        let cfg = AccessLogConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.log_dir, PathBuf::from("/data/logs"));
        assert_eq!(cfg.extension, "txt");
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let err = AccessLogConfig::from_file("/nonexistent/accesslog.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_invalid_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_dir = [").unwrap();
        let err = AccessLogConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_overrides_replace_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ACCESSLOG_LOG_DIR", "/srv/logs"),
            ("ACCESSLOG_EXTENSION", "LOG"),
            ("ACCESSLOG_MAX_LINE_SIZE", "4096"),
            ("ACCESSLOG_MALFORMED_TASK_ID", "Abort"),
        ]);
        let cfg = AccessLogConfig::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.log_dir, PathBuf::from("/srv/logs"));
        assert_eq!(cfg.extension, "LOG");
        assert_eq!(cfg.max_line_size, 4096);
        assert_eq!(cfg.malformed_task_id, MalformedTaskIdPolicy::Abort);
    }

    #[test]
    fn test_policy_override_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "malformed_task_id = \"abort\"").unwrap();

        let cfg = AccessLogConfig::from_file(file.path())
            .unwrap()
            .with_overrides(|k| (k == "ACCESSLOG_MALFORMED_TASK_ID").then(|| "skip".to_string()));
        assert_eq!(cfg.malformed_task_id, MalformedTaskIdPolicy::Skip);
    }

    #[test]
    fn test_overrides_ignore_unknown_policy() {
        let cfg = AccessLogConfig::default()
            .with_overrides(|k| (k == "ACCESSLOG_MALFORMED_TASK_ID").then(|| "explode".to_string()));
        assert_eq!(cfg.malformed_task_id, MalformedTaskIdPolicy::Skip);
    }

    #[test]
    fn test_overrides_ignore_unparseable_size() {
        let cfg = AccessLogConfig::default()
            .with_overrides(|k| (k == "ACCESSLOG_MAX_LINE_SIZE").then(|| "lots".to_string()));
        assert_eq!(cfg.max_line_size, crate::parser::MAX_LINE_SIZE);
    }

    #[test]
    fn test_validate() {
        assert!(AccessLogConfig::default().validate().is_ok());

        let cfg = AccessLogConfig { extension: ".".to_string(), ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("extension"));

        let cfg = AccessLogConfig { max_line_size: 0, ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("max_line_size"));
    }

    #[test]
    fn test_suffix_is_lowercase_with_dot() {
        let cfg = AccessLogConfig { extension: "LOG".to_string(), ..Default::default() };
        assert_eq!(cfg.suffix(), ".log");
        let cfg = AccessLogConfig { extension: ".Txt".to_string(), ..Default::default() };
        assert_eq!(cfg.suffix(), ".txt");
    }
}
