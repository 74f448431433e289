//! Configuration loader with dual-location support.

use crate::config::schema::DeskConfig;
use crate::{DeskError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Loads configuration from the user and project locations, project taking
/// precedence. Both files are optional; absent files fall back to
/// defaults.
pub struct ConfigLoader {
    user_config_path: PathBuf,
    project_config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            user_config_path: Self::user_config_path(),
            project_config_path: Self::project_config_path(),
        }
    }

    /// User-level config path (`~/.deskline/deskline.toml`)
    fn user_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".deskline")
            .join("deskline.toml")
    }

    /// Project-level config path (`./.deskline/deskline.toml`)
    fn project_config_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".deskline")
            .join("deskline.toml")
    }

    /// Load configuration from both locations with project taking
    /// precedence.
    pub async fn load(&self) -> Result<DeskConfig> {
        let mut config = DeskConfig::default();

        if let Ok(user_config) = load_file(&self.user_config_path).await {
            config.merge(user_config);
        }

        if let Ok(project_config) = load_file(&self.project_config_path).await {
            config.merge(project_config);
        }

        Ok(config)
    }

    pub fn get_user_config_path(&self) -> &PathBuf {
        &self.user_config_path
    }

    pub fn get_project_config_path(&self) -> &PathBuf {
        &self.project_config_path
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from an explicit path. Unlike [`ConfigLoader::load`],
/// a missing or malformed file here is an error.
pub async fn load_file(path: &Path) -> Result<DeskConfig> {
    if !path.exists() {
        return Err(DeskError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).await?;
    let config: DeskConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn load_file_reads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[assist]\nmodel = \"gemini-pro\"\nbase_url = \"http://localhost:9\"\napi_key_env = \"K\"\ntimeout_secs = 9\n\n[ui]\ntick_rate_ms = 100"
        )
        .unwrap();

        let config = load_file(file.path()).await.unwrap();
        assert_eq!(config.assist.model, "gemini-pro");
        assert_eq!(config.assist.timeout_secs, 9);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[tokio::test]
    async fn load_file_rejects_missing_path() {
        let result = load_file(Path::new("/nonexistent/deskline.toml")).await;
        assert!(matches!(result, Err(DeskError::Config(_))));
    }

    #[tokio::test]
    async fn load_file_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();
        assert!(matches!(
            load_file(file.path()).await,
            Err(DeskError::Toml(_))
        ));
    }
}
