use eyre::{Result, WrapErr, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG: &str = "srecords.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub roster: RosterConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Roster file, read from standard input when absent.
    pub path: Option<PathBuf>,
    pub delimiter: String,
    pub has_headers: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: ",".to_owned(),
            has_headers: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Number of decimals used when printing a GPA.
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl Config {
    /// Load the configuration from `file_name`, or from `srecords.toml` when
    /// no file is given. A missing default file means built-in defaults.
    pub fn load(file_name: Option<&Path>) -> Result<Config> {
        Self::load_or_default(file_name, Path::new(DEFAULT_CONFIG))
    }

    fn load_or_default(file_name: Option<&Path>, default: &Path) -> Result<Config> {
        let path = match file_name {
            Some(path) => path,
            None if default.exists() => default,
            None => {
                debug!("no configuration file, using defaults");
                return Ok(Config::default());
            }
        };
        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot load configuration file {}", path.display()))?;
        content
            .parse()
            .wrap_err_with(|| format!("cannot parse configuration file {}", path.display()))
    }
}

impl std::str::FromStr for Config {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.roster.delimiter_byte()?;
        Ok(config)
    }
}

impl RosterConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            &[b] if b.is_ascii() => Ok(b),
            _ => bail!(
                "roster.delimiter must be a single ASCII character, not {:?}",
                self.delimiter
            ),
        }
    }
}
