use std::path::{Path, PathBuf};

use envview_page::{config_map, ConfigMap, EnvironmentDisplay, DEFAULT_PREFIX, DEFAULT_TITLE};

use crate::commands::HEADING_DISPLAY;

pub mod file;

pub use file::ConfigFile;

/// Loaded implicitly from the working directory unless `--no-dotenv`.
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    File(#[from] file::Error),
    #[error(transparent)]
    ConfigMap(#[from] config_map::Error),
    #[error("Failed to read current directory: {0}")]
    CurrentDir(std::io::Error),
}

/// Arguments that decide what the page shows.
#[derive(Debug, clap::Args, Clone, Default)]
#[group(skip)]
pub struct Args {
    /// Only variables whose name starts with this prefix are listed [default: REACT_APP_]
    #[arg(long, env = "ENVVIEW_PREFIX", help_heading = HEADING_DISPLAY)]
    pub prefix: Option<String>,

    /// Heading shown above the list [default: ".env Variables"]
    #[arg(long, env = "ENVVIEW_TITLE", help_heading = HEADING_DISPLAY)]
    pub title: Option<String>,

    /// Dotenv file to read variables from, in addition to the process environment.
    /// Variables already set in the environment take precedence.
    #[arg(long, env = "ENVVIEW_ENV_FILE", help_heading = HEADING_DISPLAY)]
    pub env_file: Option<PathBuf>,

    /// Do not read any env file, whether named here, in `ENVVIEW_ENV_FILE`, in the
    /// config file, or the implicit `.env` of the working directory
    #[arg(long, help_heading = HEADING_DISPLAY)]
    pub no_dotenv: bool,

    /// Config file to read defaults from [default: ./envview.toml when present]
    #[arg(long, env = "ENVVIEW_CONFIG", help_heading = HEADING_DISPLAY)]
    pub config: Option<PathBuf>,
}

/// Display settings after layering arguments over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prefix: String,
    pub title: String,
    pub env_file: EnvFile,
    pub file: ConfigFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    /// Named by the user; it must exist.
    Explicit(PathBuf),
    /// `.env` in the working directory, read only if present.
    Implicit(PathBuf),
    None,
}

impl Args {
    pub fn settings(&self) -> Result<Settings, Error> {
        let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
        self.settings_in(&cwd)
    }

    pub fn settings_in(&self, dir: &Path) -> Result<Settings, Error> {
        let file = ConfigFile::load(self.config.as_deref(), dir)?;
        let prefix = self
            .prefix
            .clone()
            .or_else(|| file.prefix.clone())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        let title = self
            .title
            .clone()
            .or_else(|| file.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let env_file = if self.no_dotenv {
            EnvFile::None
        } else if let Some(path) = self.env_file.as_ref().or(file.env_file.as_ref()) {
            EnvFile::Explicit(path.clone())
        } else {
            EnvFile::Implicit(dir.join(DEFAULT_ENV_FILE))
        };
        Ok(Settings {
            prefix,
            title,
            env_file,
            file,
        })
    }

    /// Builds the display from the process environment plus any env file.
    pub fn display(&self) -> Result<EnvironmentDisplay, Error> {
        let settings = self.settings()?;
        settings.display(ConfigMap::from_env())
    }
}

impl Settings {
    pub fn display(&self, mut config: ConfigMap) -> Result<EnvironmentDisplay, Error> {
        match &self.env_file {
            EnvFile::Explicit(path) => {
                config.merge_dotenv(path)?;
            }
            EnvFile::Implicit(path) if path.is_file() => {
                config.merge_dotenv(path)?;
            }
            EnvFile::Implicit(_) | EnvFile::None => {}
        }
        Ok(EnvironmentDisplay::new(config)
            .with_prefix(self.prefix.clone())
            .with_title(self.title.clone()))
    }
}
