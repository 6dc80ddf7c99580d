//! Application container for lintent

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::OutputContext;
use crate::error::MessageError;
use crate::models::config::LintentConfig;
use crate::models::message::Message;
use crate::services::config::{ConfigService, DefaultConfigService};
use crate::services::intentions::IntentionCollector;
use crate::services::messages::MessageSource;

pub struct App {
    root: PathBuf,
    pub(crate) output: OutputContext,
    pub(crate) messages: MessageSource,
    pub(crate) config_service: Arc<dyn ConfigService>,
    pub(crate) config: LintentConfig,
    messages_override: Option<PathBuf>,
}

impl App {
    pub async fn new(messages_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::open(root, messages_override).await)
    }

    /// Build the container for `root`. A broken config falls back to defaults
    /// so `config init --force` and `config edit` can still repair it.
    pub async fn open(root: PathBuf, messages_override: Option<PathBuf>) -> Self {
        tracing::debug!("Initializing lintent at {:?}", root);

        let config_service = Arc::new(DefaultConfigService::new(&root));
        let config = config_service.load(false).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring invalid configuration, using defaults");
            LintentConfig::default()
        });
        let output = OutputContext::new(root.clone(), config.output.pretty);
        let messages = MessageSource::new(&root);

        tracing::info!(
            boundary = %config.intentions.range_boundary,
            "lintent initialized"
        );

        Self {
            root,
            output,
            messages,
            config_service,
            config,
            messages_override,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LintentConfig {
        &self.config
    }

    /// Messages file from `--messages`, falling back to configuration
    pub fn messages_path(&self) -> &Path {
        self.messages_override
            .as_deref()
            .unwrap_or(&self.config.messages.path)
    }

    pub async fn load_messages(&self) -> Result<Vec<Message>, MessageError> {
        self.messages.load(self.messages_path()).await
    }

    /// A collector primed with the current linter messages
    pub async fn collector(&self) -> Result<IntentionCollector, MessageError> {
        let mut collector =
            IntentionCollector::with_boundary(self.config.intentions.range_boundary);
        collector.update(self.load_messages().await?);
        Ok(collector)
    }
}
