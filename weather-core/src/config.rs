use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::confetti::DEFAULT_ANIMATION;

pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// seed = 42
/// latency_ms = 1000
/// confetti_ms = 3000
/// format = "text"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed RNG seed. Absent means fresh entropy on every run.
    pub seed: Option<u64>,

    /// Artificial delay before a refreshed reading becomes visible.
    pub latency_ms: u64,

    /// How long the confetti trigger stays disabled after firing.
    pub confetti_ms: u64,

    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            latency_ms: DEFAULT_LATENCY_MS,
            confetti_ms: DEFAULT_ANIMATION.as_millis() as u64,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn confetti_duration(&self) -> Duration {
        Duration::from_millis(self.confetti_ms)
    }

    /// Read the config at its platform path; a missing file means defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err).context(format!("reading {}", path.display())),
        };

        let cfg = Self::from_toml_str(&contents).context(format!("parsing {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Write as pretty TOML, creating missing parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write = || -> Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, toml::to_string_pretty(self)?)?;
            Ok(())
        };

        write().context(format!("writing {}", path.display()))?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "lovely-weather", "lovely-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();

        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.latency(), Duration::from_secs(1));
        assert_eq!(cfg.confetti_duration(), Duration::from_secs(3));
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = Config::from_toml_str("").expect("empty config must parse");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = Config::from_toml_str("seed = 42\nformat = \"json\"\n").unwrap();

        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.latency_ms, DEFAULT_LATENCY_MS);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg =
            Config { seed: Some(7), latency_ms: 0, confetti_ms: 500, format: OutputFormat::Json };

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config { seed: Some(3), format: OutputFormat::Json, ..Config::default() };

        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn broken_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "latency_ms = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("parsing"));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_format_is_rejected() {
        let err = Config::from_toml_str("format = \"yaml\"").unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
