use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

use crate::commands::Root;

pub const LONG_ABOUT: &str = "\
Print shell completion code for envview

Completes the `list`, `render`, `serve`, `version` and `completion` subcommands \
and their flags, including `--prefix`, `--title`, `--env-file`, `--no-dotenv`, \
`--config` and the `render --format` values.

Load it into the current bash session with: `source <(envview completion --shell bash)`
";

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    /// The shell type
    #[arg(long, value_enum)]
    shell: Shell,
}

impl Cmd {
    pub fn run(&self) {
        let cmd = &mut Root::command();
        generate(self.shell, cmd, "envview", &mut io::stdout());
    }
}
