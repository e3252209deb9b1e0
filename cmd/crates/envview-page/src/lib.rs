#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]
//! A single page listing the environment variables that carry a fixed
//! prefix, with a one-time fade-in on the root container.
//!
//! The display never reads the process environment itself: hosts build a
//! [`ConfigMap`] and hand it to [`EnvironmentDisplay::new`].

pub mod config_map;
pub mod display;
pub mod document;
pub mod entry;
pub mod shell;
pub mod transition;

pub use config_map::ConfigMap;
pub use display::{visible_entries, Body, EnvironmentDisplay, Rendered};
pub use document::HtmlDocument;
pub use entry::EnvEntry;
pub use shell::Shell;
pub use transition::{enter, Container, Style, Transition};

/// Keys without this prefix are never displayed.
pub const DEFAULT_PREFIX: &str = "REACT_APP_";

/// Heading shown above the list.
pub const DEFAULT_TITLE: &str = ".env Variables";
