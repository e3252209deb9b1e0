use handlebars::Handlebars;
use serde::Serialize;

use crate::{Container, EnvEntry, Rendered};

/// Base appearance of the page. The container starts transparent and
/// offset; the inline style set by the enter transition is the end state.
pub const STYLESHEET: &str = include_str!("../templates/container.css");

const INDEX_TEMPLATE: &str = "index";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("template render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Serialize)]
struct TemplateData<'a> {
    heading: &'a str,
    has_list: bool,
    entries: &'a [EnvEntry],
    fallback: Option<&'a str>,
    container_class: &'a str,
    container_style: String,
    stylesheet: &'static str,
    stylesheet_href: Option<&'a str>,
}

/// Renders a [`Rendered`] page into a complete HTML document.
///
/// Keys and values go through the template engine's HTML escaping.
pub struct HtmlDocument {
    handlebars: Handlebars<'static>,
    stylesheet_href: Option<String>,
}

impl HtmlDocument {
    pub fn new() -> Result<Self, Error> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(INDEX_TEMPLATE, include_str!("../templates/index.html.hbs"))
            .map_err(Box::new)?;
        Ok(Self {
            handlebars,
            stylesheet_href: None,
        })
    }

    /// Link the style sheet from `href` instead of inlining it.
    #[must_use]
    pub fn with_stylesheet_href(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = Some(href.into());
        self
    }

    /// A missing container is drawn with the base style.
    pub fn render(&self, page: &Rendered, container: Option<&Container>) -> Result<String, Error> {
        let base = Container::new();
        let container = container.unwrap_or(&base);
        let data = TemplateData {
            heading: page.heading(),
            has_list: page.has_list(),
            entries: page.entries(),
            fallback: page.fallback(),
            container_class: &container.class,
            container_style: container.style.to_css(),
            stylesheet: STYLESHEET,
            stylesheet_href: self.stylesheet_href.as_deref(),
        };
        Ok(self.handlebars.render(INDEX_TEMPLATE, &data)?)
    }
}
