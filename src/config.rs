use config::{Config, ConfigError, Environment, File};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional settings file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "draft_stats.toml";

/// Prefix of the environment variables that override settings
pub const ENV_PREFIX: &str = "DRAFT_STATS";

/// Settings that may be overridden at runtime
#[derive(Debug, Deserialize)]
struct TransportSettings {
    scryfall_api: String,
    seventeen_lands_api: String,
    page_delay_ms: u64,
    request_timeout_secs: u64,
    user_agent: String,
}

/// Run configuration shared by the fetchers, the merger and the writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStatsConfig {
    /// Set code used for both the Scryfall query and the 17Lands expansion
    pub set_code: String,
    /// Path of the generated JSON dataset
    pub output_file: PathBuf,
    pub scryfall_api: String,
    pub seventeen_lands_api: String,
    /// 17Lands event type filter
    pub event_type: String,
    /// Minimum spacing between paginated Scryfall requests
    pub page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl DraftStatsConfig {
    pub const SET_CODE: &'static str = "ECL";
    pub const OUTPUT_FILE: &'static str = "src/data/ecl-data.json";
    pub const SCRYFALL_API: &'static str = "https://api.scryfall.com";
    pub const SEVENTEEN_LANDS_API: &'static str = "https://www.17lands.com/card_ratings/data";
    pub const EVENT_TYPE: &'static str = "PremierDraft";
    pub const PAGE_DELAY_MS: u64 = 100;
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    pub const USER_AGENT: &'static str = concat!("mtg-draft-stats/", env!("CARGO_PKG_VERSION"));

    /// Load the configuration from the default file name and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// Compiled defaults with the transport settings overlaid by `path` (if it
    /// exists) and then by `DRAFT_STATS_*` environment variables.
    ///
    /// The set code, output file and event type are compile-time constants;
    /// keys naming them in the file or environment are ignored.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading transport settings from {}", path.display());

        let transport: TransportSettings = Config::builder()
            .set_default("scryfall_api", Self::SCRYFALL_API)?
            .set_default("seventeen_lands_api", Self::SEVENTEEN_LANDS_API)?
            .set_default("page_delay_ms", Self::PAGE_DELAY_MS)?
            .set_default("request_timeout_secs", Self::REQUEST_TIMEOUT_SECS)?
            .set_default("user_agent", Self::USER_AGENT)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            scryfall_api: transport.scryfall_api,
            seventeen_lands_api: transport.seventeen_lands_api,
            page_delay_ms: transport.page_delay_ms,
            request_timeout_secs: transport.request_timeout_secs,
            user_agent: transport.user_agent,
            ..Self::default()
        })
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for DraftStatsConfig {
    fn default() -> Self {
        Self {
            set_code: Self::SET_CODE.to_string(),
            output_file: PathBuf::from(Self::OUTPUT_FILE),
            scryfall_api: Self::SCRYFALL_API.to_string(),
            seventeen_lands_api: Self::SEVENTEEN_LANDS_API.to_string(),
            event_type: Self::EVENT_TYPE.to_string(),
            page_delay_ms: Self::PAGE_DELAY_MS,
            request_timeout_secs: Self::REQUEST_TIMEOUT_SECS,
            user_agent: Self::USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = DraftStatsConfig::default();
        assert_eq!(config.set_code, "ECL");
        assert_eq!(config.output_file, PathBuf::from("src/data/ecl-data.json"));
        assert_eq!(config.event_type, "PremierDraft");
        assert_eq!(config.page_delay(), Duration::from_millis(100));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("mtg-draft-stats/"));
    }

    #[test]
    fn test_load_from_file_overrides_transport_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft_stats.toml");
        fs::write(
            &path,
            "set_code = \"BLB\"\noutput_file = \"out/blb.json\"\nevent_type = \"QuickDraft\"\n\
             scryfall_api = \"http://localhost:9000\"\npage_delay_ms = 250\n",
        )
        .unwrap();

        let config = DraftStatsConfig::load_from(&path).unwrap();
        assert_eq!(config.scryfall_api, "http://localhost:9000");
        assert_eq!(config.page_delay_ms, 250);
        assert_eq!(config.set_code, DraftStatsConfig::SET_CODE);
        assert_eq!(config.output_file, PathBuf::from(DraftStatsConfig::OUTPUT_FILE));
        assert_eq!(config.event_type, DraftStatsConfig::EVENT_TYPE);
        assert_eq!(config.seventeen_lands_api, DraftStatsConfig::SEVENTEEN_LANDS_API);
    }

    #[test]
    fn test_environment_cannot_change_set_or_output() {
        env::set_var("DRAFT_STATS_SET_CODE", "XYZ");
        env::set_var("DRAFT_STATS_OUTPUT_FILE", "/tmp/elsewhere.json");

        let config = DraftStatsConfig::load_from("/nonexistent/draft_stats.toml");

        env::remove_var("DRAFT_STATS_SET_CODE");
        env::remove_var("DRAFT_STATS_OUTPUT_FILE");

        let config = config.unwrap();
        assert_eq!(config.set_code, "ECL");
        assert_eq!(config.output_file, PathBuf::from("src/data/ecl-data.json"));
    }

    #[test]
    fn test_load_from_rejects_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft_stats.toml");
        fs::write(&path, "page_delay_ms = \"soon\"\n").unwrap();

        assert!(DraftStatsConfig::load_from(&path).is_err());
    }
}
