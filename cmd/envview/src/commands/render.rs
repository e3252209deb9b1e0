use std::{fs, io, path::PathBuf};

use clap::{Parser, ValueEnum};
use envview_page::{document, HtmlDocument, Shell};

use crate::{commands::global, config, print::Print};

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub display: config::Args,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Standalone HTML page with the style sheet inlined
    #[default]
    Html,
    /// Heading followed by `KEY: value` lines
    Text,
    /// `{"heading", "entries", "fallback"}` object
    Json,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    Document(#[from] document::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("writing {path}: {error}")]
    CannotWriteOutput { path: PathBuf, error: io::Error },
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let output = self.render()?;
        match &self.out {
            Some(path) => {
                fs::write(path, &output).map_err(|error| Error::CannotWriteOutput {
                    path: path.clone(),
                    error,
                })?;
                print.saveln(format!("Wrote {}", path.display()));
            }
            None => print!("{output}"),
        }
        Ok(())
    }

    pub fn render(&self) -> Result<String, Error> {
        let mut shell = Shell::new(self.display.display()?);
        let rendered = shell.mount();
        tracing::debug!(format = ?self.format, entries = rendered.entries().len(), "rendering page");
        Ok(match self.format {
            Format::Html => {
                let mut html = HtmlDocument::new()?.render(&rendered, shell.container())?;
                html.push('\n');
                html
            }
            Format::Text => rendered.to_text(),
            Format::Json => serde_json::to_string_pretty(&rendered)? + "\n",
        })
    }
}
