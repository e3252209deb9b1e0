use std::str::FromStr;

use clap::{CommandFactory, FromArgMatches, Parser};

pub mod completion;
pub mod global;
pub mod list;
pub mod render;
pub mod serve;
pub mod version;

pub const HEADING_GLOBAL: &str = "Options (Global)";
pub const HEADING_DISPLAY: &str = "Options (Display)";

pub const ABOUT: &str = "Show the REACT_APP_* variables of the environment as a web page.";

pub const LONG_ABOUT: &str = "

Variables are read from the process environment and, when present, from a \
`.env` file in the working directory. Only names starting with the prefix \
(REACT_APP_ by default) are shown, in the order they were found.

    envview list
    envview render --out index.html
    envview serve --port 3000

Defaults can be kept in an `envview.toml` next to the `.env` file.";

#[derive(Parser, Debug)]
#[command(
    name = "envview",
    about = ABOUT,
    version = version::long(),
    long_about = ABOUT.to_string() + LONG_ABOUT,
    disable_help_subcommand = true,
)]
pub struct Root {
    #[clap(flatten)]
    pub global_args: global::Args,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Root {
    pub fn new() -> Result<Self, Error> {
        Self::try_parse().map_err(Error::Clap)
    }

    pub fn from_arg_matches<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_arg_matches_mut(&mut Self::command().no_binary_name(true).get_matches_from(itr))
    }

    pub async fn run(&self) -> Result<(), Error> {
        match &self.cmd {
            Cmd::List(list) => list.run(&self.global_args)?,
            Cmd::Render(render) => render.run(&self.global_args)?,
            Cmd::Serve(serve) => serve.run(&self.global_args).await?,
            Cmd::Version(version) => version.run(),
            Cmd::Completion(completion) => completion.run(),
        };
        Ok(())
    }
}

impl FromStr for Root {
    type Err = clap::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_arg_matches(s.split_whitespace())
    }
}

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Print the matching variables as `KEY: value` lines
    List(list::Cmd),
    /// Write the page as HTML, text or JSON
    Render(render::Cmd),
    /// Run a local webserver that shows the page
    Serve(serve::Cmd),
    /// Print version information
    Version(version::Cmd),
    /// Print shell completion code for the specified shell.
    #[command(long_about = completion::LONG_ABOUT)]
    Completion(completion::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error(transparent)]
    List(#[from] list::Error),
    #[error(transparent)]
    Render(#[from] render::Error),
    #[error(transparent)]
    Serve(#[from] serve::Error),
}
