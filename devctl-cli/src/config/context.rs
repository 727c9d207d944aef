use super::{CliConfig, ContextConfig, file};
use anyhow::Result;
use std::path::Path;

/// Context management operations
pub struct ContextManager {
    config: CliConfig,
    config_path: Option<std::path::PathBuf>,
}

impl ContextManager {
    /// Create a new context manager with loaded configuration
    pub async fn new() -> Result<Self> {
        let config = super::load_or_create_config().await?;
        Ok(Self {
            config,
            config_path: None,
        })
    }

    #[allow(unused)]
    /// Create a new context manager with a specific config path (useful for testing)
    pub async fn with_config_path<P: AsRef<Path>>(
        config_path: P,
    ) -> Result<Self> {
        let config =
            super::load_or_create_config_from_path(config_path.as_ref())
                .await?;
        Ok(Self {
            config,
            config_path: Some(config_path.as_ref().to_path_buf()),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Save configuration changes
    pub async fn save(&self) -> Result<()> {
        if let Some(config_path) = &self.config_path {
            file::save_config_to_path(&self.config, config_path).await
        } else {
            file::save_config(&self.config).await
        }
    }

    /// Set context values
    pub async fn set_context(
        &mut self,
        name: Option<String>,
        kube_context: Option<String>,
        namespace: Option<String>,
    ) -> Result<()> {
        let context_name =
            name.unwrap_or_else(|| self.config.current_context.clone());

        // Get existing context or create new one
        let mut context = self
            .config
            .get_context(&context_name)
            .cloned()
            .unwrap_or_default();

        // Update provided fields
        if let Some(kube_context) = kube_context {
            context.kube_context = Some(kube_context);
        }
        if let Some(namespace) = namespace {
            context.namespace = Some(namespace);
        }

        self.config.set_context(context_name.clone(), context);

        // If the current context no longer exists, adopt this one
        if !self
            .config
            .contexts
            .contains_key(&self.config.current_context)
        {
            self.config.current_context = context_name;
        }

        self.save().await
    }

    /// Switch to a different context
    pub async fn select_context(&mut self, name: String) -> Result<()> {
        self.config.set_current_context(name)?;
        self.save().await
    }

    /// Get current context configuration
    pub fn get_current_context(&self) -> Option<&ContextConfig> {
        self.config.current_context()
    }

    /// Current context configuration, falling back to an empty one so
    /// cluster commands can still run on inferred settings
    pub fn active_context(&self) -> ContextConfig {
        self.get_current_context().cloned().unwrap_or_default()
    }
}
