use crate::core::source::{PriceSource, SchemaKind};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_PRIMARY_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

const DEFAULT_BACKUP_URLS: [&str; 4] = [
    "https://api.coindesk.com/v2/bpi/currentprice.json",
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd,eur,gbp,jpy,cny",
    "https://blockchain.info/ticker",
    "https://api.coinbase.com/v2/exchange-rates?currency=BTC",
];

/// One configured endpoint. When `schema` is omitted it is derived from
/// the URL text, which covers the stock public APIs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceEntry {
    pub url: String,
    #[serde(default)]
    pub schema: Option<SchemaKind>,
}

impl SourceEntry {
    fn bare(url: &str) -> Self {
        SourceEntry {
            url: url.to_string(),
            schema: None,
        }
    }

    pub fn resolve(&self) -> PriceSource {
        match self.schema {
            Some(kind) => PriceSource::new(self.url.clone(), kind),
            None => PriceSource::from_url(self.url.clone()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourcesConfig {
    #[serde(default = "default_primary")]
    pub primary: SourceEntry,
    #[serde(default = "default_backups")]
    pub backups: Vec<SourceEntry>,
}

impl SourcesConfig {
    /// Fallback candidates in attempt order: the primary (or the user's
    /// override of it) first, then the fixed backups.
    pub fn candidates(&self, override_url: Option<&str>) -> Vec<PriceSource> {
        let primary = match override_url {
            Some(url) => PriceSource::from_url(url),
            None => self.primary.resolve(),
        };
        let mut candidates = vec![primary];
        candidates.extend(self.backups.iter().map(SourceEntry::resolve));
        candidates
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            primary: default_primary(),
            backups: default_backups(),
        }
    }
}

fn default_primary() -> SourceEntry {
    SourceEntry::bare(DEFAULT_PRIMARY_URL)
}

fn default_backups() -> Vec<SourceEntry> {
    DEFAULT_BACKUP_URLS.iter().map(|url| SourceEntry::bare(url)).collect()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_report_file")]
    pub file: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            file: default_report_file(),
        }
    }
}

fn default_report_file() -> PathBuf {
    PathBuf::from("btc_price_report.txt")
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NetworkConfig {
    /// Per-request budget for a single fetch attempt.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// TCP probe target for the pre-flight connectivity check. An empty
    /// string disables the probe.
    #[serde(default = "default_probe")]
    pub connectivity_probe: String,
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            timeout_secs: default_timeout_secs(),
            connectivity_probe: default_probe(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_probe() -> String {
    "1.1.1.1:53".to_string()
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using built-in defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "btcq", "btcq")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
