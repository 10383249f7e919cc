//! Configuration loading and data source resolution

use std::path::PathBuf;

use crate::{Error, Result};

/// Environment variable naming the data source
pub const DATA_SOURCE_ENV: &str = "PSALTER_DATA";

/// Where the four JSON resources live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// HTTP(S) base URL; resource names are appended to it
    Url(String),
    /// Local directory holding the resource files
    Dir(PathBuf),
}

impl DataSource {
    /// Classify a raw source string: anything with an http scheme is a
    /// base URL, everything else is a local directory
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.trim_end_matches('/').to_string())
        } else {
            DataSource::Dir(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::Dir(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Data source resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. PSALTER_DATA environment variable
/// 3. `data_source` key in the TOML config file
///
/// There is no compiled default: a corpus location cannot be guessed, so an
/// unresolvable source is a startup error.
pub fn resolve_data_source(cli_arg: Option<&str>) -> Result<DataSource> {
    // Priority 1: Command-line argument
    if let Some(raw) = cli_arg {
        return Ok(DataSource::parse(raw));
    }

    // Priority 2: Environment variable
    if let Ok(raw) = std::env::var(DATA_SOURCE_ENV) {
        return Ok(DataSource::parse(&raw));
    }

    // Priority 3: TOML config file
    if let Some(config_path) = config_file_path() {
        if let Some(source) = read_config_source(&config_path)? {
            return Ok(source);
        }
    }

    Err(Error::Config(format!(
        "no data source configured; pass --data-source, set {}, or add \
         data_source to the config file",
        DATA_SOURCE_ENV
    )))
}

/// Platform config file location: `<config_dir>/psalter/config.toml`
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("psalter").join("config.toml");
    path.exists().then_some(path)
}

/// Read the `data_source` key from a TOML config file
pub fn read_config_source(path: &std::path::Path) -> Result<Option<DataSource>> {
    let content = std::fs::read_to_string(path)?;
    let config: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    Ok(config
        .get("data_source")
        .and_then(|v| v.as_str())
        .map(DataSource::parse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_parse_url_vs_dir() {
        assert_eq!(
            DataSource::parse("https://example.org/data/"),
            DataSource::Url("https://example.org/data".to_string())
        );
        assert_eq!(
            DataSource::parse("/var/lib/psalter"),
            DataSource::Dir(PathBuf::from("/var/lib/psalter"))
        );
    }

    #[test]
    fn test_cli_arg_takes_priority() {
        let source = resolve_data_source(Some("./data")).unwrap();
        assert_eq!(source, DataSource::Dir(PathBuf::from("./data")));
    }

    #[test]
    #[serial]
    fn test_env_var_source() {
        std::env::set_var(DATA_SOURCE_ENV, "https://example.org/corpus");
        let source = resolve_data_source(None);
        std::env::remove_var(DATA_SOURCE_ENV);

        assert_eq!(
            source.unwrap(),
            DataSource::Url("https://example.org/corpus".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_cli_arg_beats_env_var() {
        std::env::set_var(DATA_SOURCE_ENV, "/from/env");
        let source = resolve_data_source(Some("/from/cli"));
        std::env::remove_var(DATA_SOURCE_ENV);

        assert_eq!(source.unwrap(), DataSource::Dir(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_config_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_source = \"https://example.org/psalter\"").unwrap();

        let source = read_config_source(file.path()).unwrap();
        assert_eq!(
            source,
            Some(DataSource::Url("https://example.org/psalter".to_string()))
        );
    }

    #[test]
    fn test_config_file_without_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 5730").unwrap();

        assert_eq!(read_config_source(file.path()).unwrap(), None);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let err = read_config_source(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
