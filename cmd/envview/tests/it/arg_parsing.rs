use envview::commands::{render::Format, Cmd};
use envview::Root;
use std::net::IpAddr;

#[test]
fn parses_render_args() {
    let root: Root = envview::parse_cmd("-v render --format json --prefix VITE_ --no-dotenv").unwrap();
    assert!(root.global_args.verbose);
    let Cmd::Render(render) = root.cmd else {
        panic!("expected render");
    };
    assert_eq!(render.format, Format::Json);
    assert_eq!(render.display.prefix.as_deref(), Some("VITE_"));
    assert!(render.display.no_dotenv);
    assert!(render.out.is_none());
}

#[test]
fn no_dotenv_accepted_with_env_file() {
    let root: Root = envview::parse_cmd("list --no-dotenv --env-file .env.local").unwrap();
    let Cmd::List(list) = root.cmd else {
        panic!("expected list");
    };
    assert!(list.display.no_dotenv);
    assert_eq!(
        list.display.env_file.as_deref(),
        Some(std::path::Path::new(".env.local"))
    );
}

#[test]
fn serve_port() {
    let root: Root = envview::parse_cmd("serve --port 8080 --host 0.0.0.0").unwrap();
    let Cmd::Serve(serve) = root.cmd else {
        panic!("expected serve");
    };
    assert_eq!(serve.port, Some(8080));
    assert_eq!(serve.host, Some(IpAddr::from([0u8, 0, 0, 0])));
}
