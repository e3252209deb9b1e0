use serde::Serialize;

use crate::{ConfigMap, EnvEntry, DEFAULT_PREFIX, DEFAULT_TITLE};

/// Entries of `map` whose key starts with `prefix`, in the map's order.
pub fn visible_entries(map: &ConfigMap, prefix: &str) -> Vec<EnvEntry> {
    map.iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| EnvEntry::new(key, value))
        .collect()
}

/// Lists the prefixed variables of an injected [`ConfigMap`].
#[derive(Debug, Clone)]
pub struct EnvironmentDisplay {
    config: ConfigMap,
    prefix: String,
    title: String,
}

impl EnvironmentDisplay {
    pub fn new(config: ConfigMap) -> Self {
        Self {
            config,
            prefix: DEFAULT_PREFIX.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Message shown when no key carries the prefix.
    pub fn fallback_message(&self) -> String {
        format!("No {}* variables found.", self.prefix)
    }

    /// Recomputed on every call; nothing is cached between renders.
    pub fn compute_visible_entries(&self) -> Vec<EnvEntry> {
        visible_entries(&self.config, &self.prefix)
    }

    pub fn render(&self) -> Rendered {
        let entries = self.compute_visible_entries();
        tracing::debug!(
            prefix = %self.prefix,
            visible = entries.len(),
            total = self.config.len(),
            "rendering environment display"
        );
        let body = if entries.is_empty() {
            Body::Fallback(self.fallback_message())
        } else {
            Body::List(entries)
        };
        Rendered {
            heading: self.title.clone(),
            body,
        }
    }
}

/// Output of a single render: a heading plus either a list or a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    heading: String,
    body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    List(Vec<EnvEntry>),
    Fallback(String),
}

impl Rendered {
    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn has_list(&self) -> bool {
        matches!(self.body, Body::List(_))
    }

    pub fn entries(&self) -> &[EnvEntry] {
        match &self.body {
            Body::List(entries) => entries,
            Body::Fallback(_) => &[],
        }
    }

    pub fn fallback(&self) -> Option<&str> {
        match &self.body {
            Body::List(_) => None,
            Body::Fallback(message) => Some(message),
        }
    }

    /// The `key: value` lines of the list, empty when the fallback is shown.
    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(ToString::to_string).collect()
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.heading);
        match &self.body {
            Body::List(entries) => {
                for entry in entries {
                    out.push_str(&format!("{entry}\n"));
                }
            }
            Body::Fallback(message) => {
                out.push_str(message);
                out.push('\n');
            }
        }
        out
    }
}

impl Serialize for Rendered {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            heading: &'a str,
            entries: &'a [EnvEntry],
            fallback: Option<&'a str>,
        }
        Repr {
            heading: &self.heading,
            entries: self.entries(),
            fallback: self.fallback(),
        }
        .serialize(serializer)
    }
}
