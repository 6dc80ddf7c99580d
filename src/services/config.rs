//! Configuration service for lintent

use std::path::{Path, PathBuf};
use std::process::Command;

use async_trait::async_trait;

use crate::error::ConfigError;
use crate::models::config::LintentConfig;

/// Directory holding project-local state
pub const PROJECT_DIR: &str = ".lintent";

#[async_trait]
pub trait ConfigService: Send + Sync {
    async fn load(&self, global_only: bool) -> Result<LintentConfig, ConfigError>;
    fn config_path(&self, global: bool) -> PathBuf;
    async fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError>;
    async fn edit(&self, global: bool) -> Result<PathBuf, ConfigError>;
}

pub struct DefaultConfigService {
    root: PathBuf,
}

impl DefaultConfigService {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn global_config_path() -> PathBuf {
        // XDG standard: ~/.config/lintent/config.toml
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lintent")
            .join("config.toml")
    }

    fn project_config_path(&self) -> PathBuf {
        self.root.join(PROJECT_DIR).join("config.toml")
    }

    async fn load_from_path(path: &Path) -> Result<Option<LintentConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(path).await?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    async fn write_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let config = LintentConfig::default();
        let content =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    fn get_editor() -> String {
        std::env::var("EDITOR").unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        })
    }
}

#[async_trait]
impl ConfigService for DefaultConfigService {
    async fn load(&self, global_only: bool) -> Result<LintentConfig, ConfigError> {
        let global = Self::load_from_path(&Self::global_config_path())
            .await?
            .unwrap_or_default();
        if global_only {
            return Ok(global);
        }

        let config = match Self::load_from_path(&self.project_config_path()).await? {
            Some(project) => merge_config(global, project),
            None => global,
        };
        apply_overrides(config, |key| std::env::var(key).ok())
    }

    fn config_path(&self, global: bool) -> PathBuf {
        if global {
            Self::global_config_path()
        } else {
            self.project_config_path()
        }
    }

    async fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError> {
        let path = self.config_path(global);

        if path.exists() && !force {
            return Err(ConfigError::InvalidValue {
                key: "config".to_string(),
                message: format!(
                    "Config already exists: {}. Use --force to overwrite.",
                    path.display()
                ),
            });
        }

        Self::write_default_config(&path).await?;
        Ok(path)
    }

    async fn edit(&self, global: bool) -> Result<PathBuf, ConfigError> {
        let path = self.config_path(global);

        if !path.exists() {
            return Err(ConfigError::NotFound(format!(
                "Config file does not exist: {}\nRun: lintent config init{}",
                path.display(),
                if global { " --global" } else { "" }
            )));
        }

        let editor = Self::get_editor();
        let status =
            Command::new(&editor)
                .arg(&path)
                .status()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "editor".to_string(),
                    message: format!("Failed to launch editor '{}': {}", editor, e),
                })?;

        if !status.success() {
            return Err(ConfigError::InvalidValue {
                key: "editor".to_string(),
                message: "Editor exited with error".to_string(),
            });
        }

        Ok(path)
    }
}

/// Project settings win; output preferences stay personal (global only).
fn merge_config(base: LintentConfig, overlay: LintentConfig) -> LintentConfig {
    LintentConfig {
        intentions: overlay.intentions,
        messages: overlay.messages,
        output: base.output,
    }
}

fn apply_overrides(
    mut config: LintentConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LintentConfig, ConfigError> {
    if let Some(val) = lookup("LINTENT_RANGE_BOUNDARY") {
        config.intentions.range_boundary =
            val.parse().map_err(|message| ConfigError::InvalidValue {
                key: "LINTENT_RANGE_BOUNDARY".to_string(),
                message,
            })?;
    }
    if let Some(val) = lookup("LINTENT_MESSAGES") {
        config.messages.path = PathBuf::from(val);
    }
    if let Some(val) = lookup("LINTENT_SORT")
        && let Ok(sort) = val.parse()
    {
        config.intentions.sort_by_priority = sort;
    }
    Ok(config)
}
