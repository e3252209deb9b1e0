use clap::CommandFactory;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands;
use crate::print::Print;
use crate::Root;

#[tokio::main]
pub async fn main() {
    let root = Root::new().unwrap_or_else(|e| match e {
        commands::Error::Clap(e) => {
            let mut cmd = Root::command();
            e.format(&mut cmd).exit();
        }
        e => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    });

    // Now use root to setup the logger
    if let Some(level) = root.global_args.log_level() {
        let mut e_filter = EnvFilter::from_default_env()
            .add_directive("hyper=off".parse().unwrap())
            .add_directive(format!("envview={level}").parse().unwrap())
            .add_directive(format!("envview_page={level}").parse().unwrap());

        for filter in &root.global_args.filter_logs {
            e_filter = e_filter.add_directive(filter.parse().unwrap_or_else(|e| {
                eprintln!("{e}: {filter}");
                std::process::exit(1);
            }));
        }

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(e_filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set the global tracing subscriber");
    }

    let printer = Print::new(root.global_args.quiet);
    if let Err(e) = root.run().await {
        printer.errorln(format!("error: {e}"));
        std::process::exit(1);
    }
}
