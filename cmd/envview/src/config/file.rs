use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_FILE_NAME: &str = "envview.toml";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read config file {path}: {error}")]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {error}")]
    Parse {
        path: PathBuf,
        error: toml::de::Error,
    },
}

/// Contents of `envview.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub prefix: Option<String>,
    pub title: Option<String>,
    /// Relative paths are resolved against the config file's directory.
    pub env_file: Option<PathBuf>,
    #[serde(default)]
    pub serve: Serve,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Serve {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

impl ConfigFile {
    /// Reads `path` when given, which must then exist. Otherwise reads
    /// `envview.toml` from `dir` if present, or falls back to defaults.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_FILE_NAME);
                if !candidate.is_file() {
                    tracing::trace!(dir = %dir.display(), "no config file");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|error| Error::Read {
            path: path.to_path_buf(),
            error,
        })?;
        let mut config: ConfigFile = toml::from_str(&contents).map_err(|error| Error::Parse {
            path: path.to_path_buf(),
            error,
        })?;
        if let (Some(env_file), Some(base)) = (&config.env_file, path.parent()) {
            if env_file.is_relative() {
                config.env_file = Some(base.join(env_file));
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }
}
