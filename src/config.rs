use crate::theme::PaletteType;
use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the analysis API
    #[arg(long, env = "YOUCHAT_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, env = "YOUCHAT_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<PaletteType>,

    /// Config file to read instead of ~/.config/youchat/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the rolling log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<PaletteType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub theme: PaletteType,
    pub log_dir: PathBuf,
}

impl Config {
    /// Reads `.env`, the command line and the config file, in that order of setup.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let cli = Cli::parse();
        let path = cli.config.clone().or_else(default_config_path);
        let file = match path {
            Some(path) => load_file(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }

    /// Command line (which already includes the environment) wins over the file,
    /// the file wins over built-in defaults.
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self> {
        let api_url = cli
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = validate_api_url(&api_url)?;

        let request_timeout = cli
            .timeout
            .or(file.request_timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            api_url,
            request_timeout,
            theme: cli.theme.or(file.theme).unwrap_or_default(),
            log_dir: cli.log_dir.unwrap_or_else(default_log_dir),
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed).with_context(|| format!("Invalid API URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("API URL must use http or https: {raw}");
    }
    Ok(trimmed.to_string())
}

pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("youchat");
        path.push("config.toml");
        path
    })
}

pub fn default_log_dir() -> PathBuf {
    home::home_dir()
        .map(|home| home.join(".local").join("share").join("youchat").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("youchat").join("logs"))
}

pub fn load_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["youchat"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(cli(&["--log-dir", "/tmp/logs"]), FileConfig::default()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.theme, PaletteType::YouTube);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            api_url: Some("http://file.example:9000".to_string()),
            request_timeout_secs: Some(30),
            theme: Some(PaletteType::Nord),
        };
        let config = Config::resolve(
            cli(&["--api-url", "https://api.example.com/", "--timeout", "5"]),
            file,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.theme, PaletteType::Nord);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig {
            api_url: Some("http://file.example:9000".to_string()),
            request_timeout_secs: Some(0),
            theme: None,
        };
        let config = Config::resolve(cli(&[]), file).unwrap();
        assert_eq!(config.api_url, "http://file.example:9000");
        // zero means no timeout
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(Config::resolve(cli(&["--api-url", "not a url"]), FileConfig::default()).is_err());
        assert!(Config::resolve(cli(&["--api-url", "ftp://host"]), FileConfig::default()).is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert_eq!(load_file(&path).unwrap(), FileConfig::default());

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_url = \"http://127.0.0.1:8123\"").unwrap();
        writeln!(file, "request_timeout_secs = 12").unwrap();
        writeln!(file, "theme = \"nord\"").unwrap();
        drop(file);

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("http://127.0.0.1:8123"));
        assert_eq!(loaded.request_timeout_secs, Some(12));
        assert_eq!(loaded.theme, Some(PaletteType::Nord));
    }

    #[test]
    fn test_load_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();
        assert!(load_file(&path).is_err());
    }
}
