use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use clap::Parser;
use envview_page::{document, HtmlDocument, Shell};
use warp::{http::StatusCode, Filter, Reply};

use crate::{commands::global, config, print::Print};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3000;

const STYLESHEET_PATH: &str = "container.css";

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Address to listen on [default: 127.0.0.1]
    #[arg(long, env = "ENVVIEW_HOST")]
    pub host: Option<IpAddr>,

    /// Port to listen for requests on [default: 3000]
    #[arg(long, env = "ENVVIEW_PORT")]
    pub port: Option<u16>,

    #[command(flatten)]
    pub display: config::Args,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    Document(#[from] document::Error),
    #[error("binding {addr}: {error}")]
    CannotBind { addr: SocketAddr, error: warp::Error },
}

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let settings = self.display.settings()?;
        let addr = SocketAddr::new(
            self.host.or(settings.file.serve.host).unwrap_or(DEFAULT_HOST),
            self.port.or(settings.file.serve.port).unwrap_or(DEFAULT_PORT),
        );

        let display = settings.display(envview_page::ConfigMap::from_env())?;
        let page = Arc::new(Page::new(Shell::new(display))?);

        let (bound, server) = warp::serve(routes(page))
            .try_bind_ephemeral(addr)
            .map_err(|error| Error::CannotBind { addr, error })?;
        print.globeln(format!("Listening on: http://{bound}/"));
        server.await;
        Ok(())
    }
}

/// A mounted page. The mapping is fixed when the shell is built; every
/// request renders from it again.
pub struct Page {
    shell: Shell,
    document: HtmlDocument,
}

impl Page {
    pub fn new(mut shell: Shell) -> Result<Self, document::Error> {
        shell.mount();
        let document = HtmlDocument::new()?.with_stylesheet_href(format!("/{STYLESHEET_PATH}"));
        Ok(Self { shell, document })
    }

    pub fn html(&self) -> Result<String, document::Error> {
        self.document
            .render(&self.shell.rerender(), self.shell.container())
    }
}

pub fn routes(
    page: Arc<Page>,
) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    let with_page = warp::any().map(move || page.clone());

    let index = warp::get()
        .and(warp::path::end())
        .and(with_page.clone())
        .map(|page: Arc<Page>| match page.html() {
            Ok(html) => warp::reply::html(html).into_response(),
            Err(e) => {
                tracing::error!("rendering page: {e}");
                warp::reply::with_status("internal server error", StatusCode::INTERNAL_SERVER_ERROR)
                    .into_response()
            }
        });

    let stylesheet = warp::get()
        .and(warp::path(STYLESHEET_PATH))
        .and(warp::path::end())
        .map(|| {
            warp::reply::with_header(
                document::STYLESHEET,
                "content-type",
                "text/css; charset=utf-8",
            )
        });

    let entries = warp::get()
        .and(warp::path("entries.json"))
        .and(warp::path::end())
        .and(with_page)
        .map(|page: Arc<Page>| warp::reply::json(&page.shell.rerender()));

    index
        .or(stylesheet)
        .or(entries)
        .with(warp::trace::request())
}
