use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reading env file {path}: {error}")]
    CannotReadEnvFile {
        path: PathBuf,
        error: dotenvy::Error,
    },
}

/// Read-only key/value mapping the display is built from.
///
/// Iteration follows insertion order. Inserting a key that is already
/// present keeps its original position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: Vec<(String, String)>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment, in the order the OS reports it.
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_env() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: String, value: String) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *existing = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Appends the variables of a dotenv file that are not already present.
    ///
    /// Returns the number of keys added. Keys that are already in the map
    /// keep their value, the same way a dotenv loader leaves variables that
    /// are already set in the process environment alone.
    pub fn merge_dotenv(&mut self, path: &Path) -> Result<usize, Error> {
        let cannot_read = |error: dotenvy::Error| Error::CannotReadEnvFile {
            path: path.to_path_buf(),
            error,
        };
        let mut added = 0;
        for item in dotenvy::from_path_iter(path).map_err(cannot_read)? {
            let (key, value) = item.map_err(cannot_read)?;
            if self.contains_key(&key) {
                tracing::trace!(%key, "env file value shadowed by existing variable");
                continue;
            }
            self.entries.push((key, value));
            added += 1;
        }
        tracing::debug!(path = %path.display(), added, "merged env file");
        Ok(added)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (k, v) in iter {
            map.insert(k.into(), v.into());
        }
        map
    }
}
