use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use super::args::CommonArgs;
use crate::{
    config::{ConfigLoadResult, load_config},
    registry::{Registry, RegistryCache, RegistryLoadError},
};

/// Configuration and registry access shared by the registry commands.
///
/// Command line flags win over `.mcpverserc.json`, which wins over defaults.
/// The registry itself is loaded lazily on first use.
pub struct CommandContext {
    pub config: ConfigLoadResult,
    /// Working directory command line paths are resolved against.
    pub cwd: PathBuf,
    cache: RegistryCache,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let config = load_config(&cwd)?;

        let registry_path = match &common.registry {
            Some(path) => cwd.join(path),
            None => config.registry_path(),
        };
        debug!(
            registry = %registry_path.display(),
            from_config_file = config.from_file,
            "resolved registry path"
        );

        Ok(Self {
            config,
            cwd,
            cache: RegistryCache::new(registry_path),
        })
    }

    pub fn registry_path(&self) -> PathBuf {
        self.cache.path().to_path_buf()
    }

    pub fn registry(&self) -> Result<&Registry, RegistryLoadError> {
        self.cache.get()
    }
}
