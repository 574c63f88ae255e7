use crate::constants::{DEFAULT_TEMPLATE_DIR, MASTER_TEMPLATE_NAME};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for template resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory content and master templates are resolved under.
    pub template_dir: PathBuf,
    /// File the master layout is loaded from when no explicit override has
    /// been applied.
    pub master_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            master_template: MASTER_TEMPLATE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON or YAML file, chosen by extension.
    ///
    /// # Arguments
    /// * `path` - Path to the config file
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed configuration
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be read
    /// * `Error::ConfigParseError` if the contents fail to parse
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&raw).map_err(|_| Error::ConfigParseError)
            }
            _ => serde_json::from_str(&raw).map_err(|_| Error::ConfigParseError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.master_template, "master.html");
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagekit.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"template_dir": "views", "master_template": "base.html"}}"#)
            .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("views"));
        assert_eq!(config.master_template, "base.html");
    }

    #[test]
    fn test_from_yaml_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagekit.yaml");
        std::fs::write(&path, "template_dir: views\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("views"));
        assert_eq!(config.master_template, "master.html");
    }

    #[test]
    fn test_from_file_invalid_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagekit.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Config::from_file(&path), Err(Error::ConfigParseError)));
    }
}
