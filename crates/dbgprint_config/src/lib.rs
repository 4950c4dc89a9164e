//! Configuration file support.
//!
//! A config is looked up as `dbgprint.toml` in the current directory and all of
//! its ancestors, then in the system config directory. Every field is optional:
//!
//! ```toml
//! stream = "stdout"   # "stdout", "stderr" or "null"
//! enabled = true
//! ```
//!
//! The `DBGPRINT_STREAM` environment variable overrides `stream`.


use dirs_next::config_dir;
use log::trace;
use serde::{Deserialize, Serialize};
use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// The name of the config file to search for.
pub const CONFIG_NAME: &str = "dbgprint.toml";

/// The environment variable overriding the configured stream.
pub const STREAM_ENV: &str = "DBGPRINT_STREAM";

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown stream '{0}', expected one of 'stdout', 'stderr' or 'null'")]
    UnknownStream(String),
}

/// Where debug output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
    /// Output is discarded.
    Null,
}

impl Default for StreamKind {
    fn default() -> Self {
        StreamKind::Stderr
    }
}

impl FromStr for StreamKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(StreamKind::Stdout),
            "stderr" => Ok(StreamKind::Stderr),
            "null" => Ok(StreamKind::Null),
            _ => Err(Error::UnknownStream(s.to_string())),
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
            StreamKind::Null => "null",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub stream: StreamKind,
    /// When `false` every `debug!` invocation is a no-op.
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stream: StreamKind::default(),
            enabled: true,
        }
    }
}

impl Config {
    /// Parse a config from the source of a toml file.
    pub fn from_toml(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse the config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&source)
    }

    /// Search for a config and apply the environment override on top of it.
    ///
    /// # Returns
    ///
    /// The default config if no file exists, or an `Err` if the file is unreadable,
    /// its toml is invalid, or the environment names an unknown stream.
    pub fn load(no_global_config: bool) -> Result<Self, Error> {
        let cwd = env::current_dir().ok();
        Self::load_from(cwd.as_deref(), no_global_config, Self::default())
    }

    /// Like [`Config::load`], but searching from `start` instead of the current
    /// directory, and using `fallback` when no file is found. With no `start`
    /// only the system config directory is searched.
    pub fn load_from(
        start: Option<&Path>,
        no_global_config: bool,
        fallback: Self,
    ) -> Result<Self, Error> {
        Self::discover(start, no_global_config, fallback)?
            .with_stream_override(env::var(STREAM_ENV).ok().as_deref())
    }

    /// The config file found from `start`, or `fallback`. The environment is not
    /// consulted.
    pub fn discover(
        start: Option<&Path>,
        no_global_config: bool,
        fallback: Self,
    ) -> Result<Self, Error> {
        match Self::find_config_from(start, no_global_config) {
            Some(path) => {
                trace!("loading config from {}", path.display());
                Self::from_path(&path)
            }
            None => {
                trace!("no {} found, using fallback config", CONFIG_NAME);
                Ok(fallback)
            }
        }
    }

    /// Replace the configured stream with `value` if one is given.
    pub fn with_stream_override(mut self, value: Option<&str>) -> Result<Self, Error> {
        if let Some(value) = value {
            self.stream = value.parse()?;
            trace!("stream overridden to {}", self.stream);
        }
        Ok(self)
    }

    /// Find a config in the current dir and its ancestors, and if `no_global_config`
    /// is `false`, in the system config directory.
    pub fn find_config(no_global_config: bool) -> Option<PathBuf> {
        let cwd = env::current_dir().ok();
        Self::find_config_from(cwd.as_deref(), no_global_config)
    }

    fn find_config_from(start: Option<&Path>, no_global_config: bool) -> Option<PathBuf> {
        let found = start.and_then(search_ancestors);
        if found.is_some() {
            return found;
        }

        let path = config_dir()?.join(CONFIG_NAME);
        if !no_global_config && path.exists() {
            return Some(path);
        }

        None
    }
}

/// The nearest `dbgprint.toml` in `start` or one of its ancestors.
pub fn search_ancestors(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_NAME))
        .find(|path| path.is_file())
}
