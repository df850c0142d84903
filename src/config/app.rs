use std::path::PathBuf;
use std::time::Duration;
use once_cell::sync::Lazy;
use reqwest::Url;
use crate::config::dismissal::DismissalConfig;
use crate::config::env::*;
use crate::domain::TtlDays;

static DEFAULT_STORE_PATH: Lazy<PathBuf> = Lazy::new(|| PathBuf::from("regulate-dismissals.json"));

#[derive(Clone)]
pub struct AppConfig {
    pub dismissal: DismissalConfig,
    pub api: ApiConfig,
    pub snapshot_file: PathBuf,
}

#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let ttl = get_env_value_or_default("ANNOUNCEMENT_TTL_DAYS", TtlDays::literal(0));
        let base_url = get_env_mandatory_value("REGULATE_BASE_URL")?;
        let timeout_secs = get_env_value_or_default("API_TIMEOUT_SECS", 10u64);
        let snapshot_file: PathBuf = get_env_mandatory_value("SNAPSHOT_FILE")?;
        Ok(Self {
            dismissal: DismissalConfig::new(ttl),
            api: ApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            snapshot_file,
        })
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let path = std::env::var("DISMISSAL_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| DEFAULT_STORE_PATH.clone());
        Self { path }
    }
}
