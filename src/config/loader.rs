//! Data directory resolution and config file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::LiftlogConfig;
use crate::error::{LiftlogError, Result};

/// Name of the config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LIFTLOG_DATA_DIR";

/// Default data directory: `<platform data dir>/liftlog`, or `.liftlog` in
/// the current directory when the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("liftlog"))
        .unwrap_or_else(|| PathBuf::from(".liftlog"))
}

/// The explicit directory if given, else the default.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_data_dir)
}

/// Config file location for a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load a config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<LiftlogConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(LiftlogConfig::default());
        }
        Err(e) => return Err(LiftlogError::Io(e)),
    };

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LiftlogConfig> {
    if content.trim().is_empty() {
        return Ok(LiftlogConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LiftlogError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&config_path(temp.path())).unwrap();
        assert_eq!(config, LiftlogConfig::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = config_path(temp.path());
        fs::write(&path, "\n").unwrap();
        assert_eq!(load_config(&path).unwrap(), LiftlogConfig::default());
    }

    #[test]
    fn loads_settings() {
        let temp = TempDir::new().unwrap();
        let path = config_path(temp.path());
        fs::write(&path, "strict: true\n").unwrap();
        assert!(load_config(&path).unwrap().strict);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = config_path(temp.path());
        fs::write(&path, "strict: [not, a, bool]\n").unwrap();

        let err = load_config(&path).unwrap_err();
        match err {
            LiftlogError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/lifts")));
        assert_eq!(dir, PathBuf::from("/tmp/lifts"));
        assert!(resolve_data_dir(None).ends_with("liftlog") || resolve_data_dir(None).ends_with(".liftlog"));
    }
}
