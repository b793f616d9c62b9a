use crate::error::{NutriScanError, Result};
use nutriscan_common::Endpoints;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_SEARCH_URL: &str = "NUTRISCAN_SEARCH_URL";
pub const ENV_DETECTION_URL: &str = "NUTRISCAN_DETECTION_URL";
pub const ENV_NUTRITION_URL: &str = "NUTRISCAN_NUTRITION_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,
    pub timeout_seconds: u64,
    /// チャット開始時に挨拶を表示
    pub welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::local(),
            timeout_seconds: 30,
            welcome: true,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// 指定パスから読み込み（ファイルが無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NutriScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("nutriscan").join("config.json"))
    }

    /// 環境変数（またはそれに相当するlookup）を優先
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = present(ENV_SEARCH_URL) {
            self.endpoints.search = url;
        }
        if let Some(url) = present(ENV_DETECTION_URL) {
            self.endpoints.detection = url;
        }
        if let Some(url) = present(ENV_NUTRITION_URL) {
            self.endpoints.nutrition = url;
        }
    }

    pub fn set_search_url(&mut self, url: String) -> Result<()> {
        self.endpoints.search = validate_base_url(url)?;
        Ok(())
    }

    pub fn set_detection_url(&mut self, url: String) -> Result<()> {
        self.endpoints.detection = validate_base_url(url)?;
        Ok(())
    }

    pub fn set_nutrition_url(&mut self, url: String) -> Result<()> {
        self.endpoints.nutrition = validate_base_url(url)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

/// ベースURLの検証（末尾のスラッシュは除去）
pub fn validate_base_url(url: String) -> Result<String> {
    let trimmed = url.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(NutriScanError::InvalidUrl(url));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
