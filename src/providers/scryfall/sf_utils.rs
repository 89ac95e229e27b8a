use log::debug;
use std::collections::HashMap;

use crate::config::DraftStatsConfig;

/// Construct the request headers Scryfall expects from API clients.
/// Scryfall rejects requests that carry no `User-Agent` or `Accept` header.
pub fn build_http_header(config: &DraftStatsConfig) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), config.user_agent.clone());
    headers.insert("Accept".to_string(), "application/json".to_string());
    debug!("Scryfall requests use User-Agent {}", config.user_agent);
    headers
}

/// Search query selecting every print of a set
pub fn set_search_query(set_code: &str) -> String {
    format!("set:{}", set_code)
}
