use crate::{transition, Container, EnvironmentDisplay, Rendered};

/// Hosts a display and its root container.
///
/// The enter transition runs on the first [`Shell::mount`] only; later
/// mounts and every [`Shell::rerender`] just render.
#[derive(Debug, Clone)]
pub struct Shell {
    display: EnvironmentDisplay,
    container: Option<Container>,
    mounted: bool,
    transitions: usize,
}

impl Shell {
    pub fn new(display: EnvironmentDisplay) -> Self {
        Self {
            display,
            container: Some(Container::new()),
            mounted: false,
            transitions: 0,
        }
    }

    /// A shell whose root container is missing; mounting still renders.
    pub fn without_container(display: EnvironmentDisplay) -> Self {
        Self {
            container: None,
            ..Self::new(display)
        }
    }

    pub fn display(&self) -> &EnvironmentDisplay {
        &self.display
    }

    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// How many times an enter function has been invoked. Never above one.
    pub fn transitions_applied(&self) -> usize {
        self.transitions
    }

    pub fn mount(&mut self) -> Rendered {
        self.mount_with(|container| {
            transition::enter(container);
        })
    }

    /// Like [`Shell::mount`] but with the caller's enter function.
    pub fn mount_with<F>(&mut self, enter: F) -> Rendered
    where
        F: FnOnce(Option<&mut Container>),
    {
        let rendered = self.display.render();
        if self.mounted {
            tracing::debug!("already mounted, skipping enter transition");
        } else {
            enter(self.container.as_mut());
            self.mounted = true;
            self.transitions += 1;
        }
        rendered
    }

    pub fn rerender(&self) -> Rendered {
        self.display.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigMap, Style};

    fn shell() -> Shell {
        let config: ConfigMap = [("REACT_APP_NAME", "demo"), ("OTHER", "x")]
            .into_iter()
            .collect();
        Shell::new(EnvironmentDisplay::new(config))
    }

    #[test]
    fn mount_applies_transition_once() {
        let mut shell = shell();
        assert_eq!(shell.container().unwrap().style, Style::base());

        let rendered = shell.mount();

        assert_eq!(rendered.lines(), vec!["REACT_APP_NAME: demo".to_string()]);
        assert!(shell.is_mounted());
        let style = &shell.container().unwrap().style;
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y, 0.0);
        assert_eq!(shell.transitions_applied(), 1);
    }

    #[test]
    fn rerender_does_not_invoke_enter() {
        let mut shell = shell();
        let mut calls = 0;
        shell.mount_with(|_| calls += 1);
        let first = shell.rerender();
        let second = shell.rerender();
        shell.mount_with(|_| calls += 1);

        assert_eq!(calls, 1);
        assert_eq!(shell.transitions_applied(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn rerender_leaves_container_untouched() {
        let shell = shell();
        shell.rerender();
        assert!(!shell.is_mounted());
        assert_eq!(shell.container().unwrap().style, Style::base());
    }

    #[test]
    fn missing_container_is_silent() {
        let mut shell = Shell::without_container(EnvironmentDisplay::new(ConfigMap::new()));
        let rendered = shell.mount();
        assert!(shell.container().is_none());
        assert!(shell.is_mounted());
        assert_eq!(rendered.fallback(), Some("No REACT_APP_* variables found."));
    }
}
