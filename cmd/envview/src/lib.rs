#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]

mod cli;
pub use cli::main;

pub mod commands;
pub mod config;
pub mod print;

pub use commands::Root;

pub fn parse_cmd<T>(s: &str) -> Result<T, clap::Error>
where
    T: clap::CommandFactory + clap::FromArgMatches,
{
    T::from_arg_matches_mut(
        &mut T::command()
            .no_binary_name(true)
            .try_get_matches_from(s.split_whitespace())?,
    )
}
