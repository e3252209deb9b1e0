use clap::Parser;
use envview_page::Rendered;

use crate::{commands::global, config};

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    #[command(flatten)]
    pub display: config::Args,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),
}

impl Cmd {
    pub fn run(&self, _global_args: &global::Args) -> Result<(), Error> {
        let rendered = self.display.display()?.render();
        print!("{}", lines(&rendered));
        Ok(())
    }
}

/// One `KEY: value` line per entry, or the fallback message.
pub fn lines(rendered: &Rendered) -> String {
    match rendered.fallback() {
        Some(message) => format!("{message}\n"),
        None => rendered
            .lines()
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
    }
}
