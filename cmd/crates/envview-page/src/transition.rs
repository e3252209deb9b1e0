//! The one-time "enter" transition applied to the page's root container.

use std::{
    fmt::{self, Display},
    time::Duration,
};

/// Class the style sheet targets for the pre-transition appearance.
pub const CONTAINER_CLASS: &str = "container";

/// Vertical offset, in pixels, the container starts from.
pub const BASE_OFFSET_PX: f32 = 20.0;

pub const ENTER_DURATION: Duration = Duration::from_millis(600);

pub const ENTER_TIMING_FUNCTION: &str = "ease-out";

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub property: String,
    pub duration: Duration,
    /// CSS `transition-timing-function`, e.g. `ease-out`.
    pub timing_function: String,
}

impl Transition {
    pub fn enter() -> Self {
        Self {
            property: "all".to_string(),
            duration: ENTER_DURATION,
            timing_function: ENTER_TIMING_FUNCTION.to_string(),
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {}",
            self.property,
            self.duration.as_secs_f32(),
            self.timing_function
        )
    }
}

/// Inline style of the container.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub opacity: f32,
    /// Vertical offset in pixels, rendered as `translateY`.
    pub translate_y: f32,
    pub transition: Option<Transition>,
}

impl Style {
    /// Appearance before the transition runs, as provided by the style sheet.
    pub fn base() -> Self {
        Self {
            opacity: 0.0,
            translate_y: BASE_OFFSET_PX,
            transition: None,
        }
    }

    pub fn to_css(&self) -> String {
        let mut decls = vec![
            format!("opacity: {}", self.opacity),
            format!("transform: translateY({}px)", self.translate_y),
        ];
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {transition}"));
        }
        decls.join("; ")
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::base()
    }
}

/// The page's root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub class: String,
    pub style: Style,
}

impl Container {
    pub fn new() -> Self {
        Self {
            class: CONTAINER_CLASS.to_string(),
            style: Style::base(),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Fades the container in: fully opaque, no offset, 0.6s ease-out.
///
/// Returns `false` without doing anything when there is no container.
pub fn enter(container: Option<&mut Container>) -> bool {
    let Some(container) = container else {
        tracing::debug!("no container to transition");
        return false;
    };
    container.style.opacity = 1.0;
    container.style.translate_y = 0.0;
    container.style.transition = Some(Transition::enter());
    tracing::trace!(style = %container.style.to_css(), "applied enter transition");
    true
}
