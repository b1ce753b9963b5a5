use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde_json::{Map, Value};
use tracing::{debug, error};

use super::{Entry, RegistryLoadError};
use crate::install::{self, EnvValues, ResolvedInstallation};

/// In-memory registry, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
    /// Entries in document order.
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Read and parse the registry document at `path`.
    pub fn load(path: &Path) -> Result<Self, RegistryLoadError> {
        let content = fs::read_to_string(path).map_err(|cause| RegistryLoadError::Read {
            path: path.to_path_buf(),
            cause,
        })?;
        Self::from_json_str(path, &content)
    }

    /// Parse a registry document. `path` is only used for error reporting.
    pub fn from_json_str(path: &Path, content: &str) -> Result<Self, RegistryLoadError> {
        let value: Value =
            serde_json::from_str(content).map_err(|cause| RegistryLoadError::Parse {
                path: path.to_path_buf(),
                cause,
            })?;

        let Value::Object(map) = value else {
            return Err(RegistryLoadError::Shape {
                path: path.to_path_buf(),
                reason: "expected a JSON object keyed by entry id".to_string(),
            });
        };

        Self::from_map(path, map)
    }

    fn from_map(path: &Path, map: Map<String, Value>) -> Result<Self, RegistryLoadError> {
        let mut entries = Vec::with_capacity(map.len());
        let mut index = HashMap::with_capacity(map.len());

        for (id, value) in map {
            let mut entry: Entry =
                serde_json::from_value(value).map_err(|e| RegistryLoadError::Shape {
                    path: path.to_path_buf(),
                    reason: format!("entry \"{}\": {}", id, e),
                })?;
            entry.id = id.clone();
            index.insert(id, entries.len());
            entries.push(entry);
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries as an owned list, in document order.
    pub fn list(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|e| e.category.as_deref())
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolve the installation of `id`.
    ///
    /// `None` when the id is unknown or the entry has no installation data.
    pub fn resolve_args(&self, id: &str, env: &EnvValues) -> Option<ResolvedInstallation> {
        self.get(id).and_then(|entry| install::resolve_args(entry, env))
    }

    /// Shell-ready command line for `id`, or `None` when it can't be resolved.
    pub fn build_command_line(&self, id: &str, env: &EnvValues) -> Option<String> {
        self.get(id)
            .and_then(|entry| install::build_command_line(entry, env))
    }
}

/// Once-initialized holder for the registry at a given path.
///
/// The document is read on the first successful [`RegistryCache::get`] and
/// never again. A failed load leaves the cache empty.
#[derive(Debug)]
pub struct RegistryCache {
    path: PathBuf,
    cell: OnceLock<Registry>,
}

impl RegistryCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Build a cache that is already populated.
    pub fn with_registry(registry: Registry) -> Self {
        let cell = OnceLock::new();
        let path = registry.path.clone();
        let _ = cell.set(registry);
        Self { path, cell }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<&Registry, RegistryLoadError> {
        if let Some(registry) = self.cell.get() {
            debug!(path = %self.path.display(), "registry cache hit");
            return Ok(registry);
        }

        let registry = Registry::load(&self.path).inspect_err(|e| {
            error!("Error loading MCP registry from {}: {}", self.path.display(), e);
        })?;
        debug!(
            path = %self.path.display(),
            entries = registry.len(),
            "registry loaded"
        );

        // A concurrent initializer may have won; either value is the same document.
        Ok(self.cell.get_or_init(|| registry))
    }
}
