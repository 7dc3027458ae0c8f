//! Dashboard Configuration
//!
//! Backend base URLs are fixed at build time (`API_BASE_URL`,
//! `API_V1_BASE_URL`) and fall back to a local development server.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_V1_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Autocomplete never queries for shorter terms
pub const AUTOCOMPLETE_MIN_CHARS: usize = 2;
/// Server-side cap on suggestions per query
pub const AUTOCOMPLETE_LIMIT: u32 = 10;
/// Quiet period after the last keystroke before querying
pub const AUTOCOMPLETE_DEBOUNCE_MS: u32 = 300;

pub const STATE_LEADERS_LIMIT: u32 = 100;
pub const FEDERAL_HISTORY_LIMIT: u32 = 500;

/// Seats reserved for women on the slate
pub const FEMALE_QUOTA: usize = 21;
pub const TOTAL_SEATS: usize = 71;

// Unreserved characters per RFC 3986 stay as-is
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub v1_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_API_V1_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, v1_base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            v1_base_url: v1_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time environment, with defaults for anything unset or blank
    pub fn from_env() -> Self {
        let base = option_env!("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        let v1 = option_env!("API_V1_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_API_V1_BASE_URL);
        Self::new(base, v1)
    }

    pub fn candidates_url(&self) -> String {
        format!("{}/candidatos", self.base_url)
    }

    pub fn create_candidate_url(&self) -> String {
        format!("{}/candidato/cadastrar", self.base_url)
    }

    pub fn update_candidate_url(&self, id: i64) -> String {
        format!("{}/candidato/{}", self.base_url, id)
    }

    pub fn suggestions_url(&self, term: &str) -> String {
        format!(
            "{}/candidatos2022sp?nome_candidato={}&limit={}",
            self.v1_base_url,
            utf8_percent_encode(term, QUERY_VALUE),
            AUTOCOMPLETE_LIMIT
        )
    }

    pub fn state_leaders_url(&self) -> String {
        format!("{}/estaduais-nao-eleitos-sp?limit={}", self.v1_base_url, STATE_LEADERS_LIMIT)
    }

    pub fn federal_history_url(&self) -> String {
        format!("{}/candidatos-sp-22-24?limit={}", self.v1_base_url, FEDERAL_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.candidates_url(), "http://localhost:8000/api/candidatos");
        assert_eq!(config.create_candidate_url(), "http://localhost:8000/api/candidato/cadastrar");
        assert_eq!(config.update_candidate_url(42), "http://localhost:8000/api/candidato/42");
        assert_eq!(
            config.state_leaders_url(),
            "http://localhost:8000/api/v1/estaduais-nao-eleitos-sp?limit=100"
        );
        assert_eq!(
            config.federal_history_url(),
            "http://localhost:8000/api/v1/candidatos-sp-22-24?limit=500"
        );
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ApiConfig::new("https://example.org/api/", "https://example.org/api/v1//");
        assert_eq!(config.candidates_url(), "https://example.org/api/candidatos");
        assert_eq!(
            config.federal_history_url(),
            "https://example.org/api/v1/candidatos-sp-22-24?limit=500"
        );
    }

    #[test]
    fn test_suggestion_term_is_encoded() {
        let config = ApiConfig::default();
        assert_eq!(
            config.suggestions_url("Ana Lúcia&co"),
            "http://localhost:8000/api/v1/candidatos2022sp?nome_candidato=Ana%20L%C3%BAcia%26co&limit=10"
        );
    }
}
