use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from an imagelab YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that relative script, image and CSV paths resolve against
    pub base_dir: Option<PathBuf>,

    /// Abort a script at the first failing command
    pub stop_on_error: bool,

    /// Print "Executed command: ..." after each successful command
    pub echo_status: bool,

    /// Maximum nesting of `run` commands
    pub max_script_depth: usize,
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text, falling back to defaults
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                let config = config.unwrap_or_default();
                tracing::info!(
                    base_dir = ?config.base_dir,
                    stop_on_error = config.stop_on_error,
                    max_script_depth = config.max_script_depth,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve `path` against `base_dir` unless it is absolute
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            stop_on_error: false,
            echo_status: true,
            max_script_depth: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.base_dir, None);
        assert!(!config.stop_on_error);
        assert!(config.echo_status);
        assert_eq!(config.max_script_depth, 16);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("stop_on_error: true\n");

        assert!(config.stop_on_error);
        assert!(config.echo_status);
        assert_eq!(config.max_script_depth, 16);
    }

    #[test]
    fn test_full_yaml() {
        let config = AppConfig::from_yaml(
            "base_dir: /srv/images\nstop_on_error: true\necho_status: false\nmax_script_depth: 4\n",
        );

        assert_eq!(config.base_dir, Some(PathBuf::from("/srv/images")));
        assert!(!config.echo_status);
        assert_eq!(config.max_script_depth, 4);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml(""), AppConfig::default());
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        assert_eq!(
            AppConfig::from_yaml("max_script_depth: [not, a, number]"),
            AppConfig::default()
        );
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = AppConfig::load_from_file(Path::new("/nonexistent/imagelab.yaml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_relative_path() {
        let config = AppConfig {
            base_dir: Some(PathBuf::from("res")),
            ..Default::default()
        };

        assert_eq!(
            config.resolve(Path::new("koala.ppm")),
            PathBuf::from("res/koala.ppm")
        );
        assert_eq!(
            config.resolve(Path::new("/tmp/koala.ppm")),
            PathBuf::from("/tmp/koala.ppm")
        );
        assert_eq!(
            AppConfig::default().resolve(Path::new("koala.ppm")),
            PathBuf::from("koala.ppm")
        );
    }
}
