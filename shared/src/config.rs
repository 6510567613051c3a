use serde::{Deserialize, Serialize};

/// Runtime configuration of the frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for backend calls; empty means same origin
    pub api_base_url: String,
    /// ISO currency code used for every displayed amount
    pub currency: String,
    /// User id fetched when the page does not provide one
    pub default_user_id: i64,
    pub payment_reload_delay_ms: u32,
    pub fee_structure_reload_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub debug_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            currency: "INR".to_string(),
            default_user_id: 1,
            payment_reload_delay_ms: 3000,
            fee_structure_reload_delay_ms: 2000,
            toast_duration_ms: 5000,
            debug_logging: false,
        }
    }
}

impl AppConfig {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Join the base URL and an absolute API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.currency, "INR");
        assert_eq!(config.default_user_id, 1);
        assert_eq!(config.payment_reload_delay_ms, 3000);
        assert_eq!(config.fee_structure_reload_delay_ms, 2000);
        assert_eq!(config.toast_duration_ms, 5000);
        assert!(!config.debug_logging);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base_url":"http://localhost:8000/","debug_logging":true}"#).unwrap();
        assert!(config.debug_logging);
        assert_eq!(config.currency, "INR");
        assert_eq!(config.endpoint("/api/users/1"), "http://localhost:8000/api/users/1");
    }

    #[test]
    fn test_same_origin_endpoint() {
        assert_eq!(AppConfig::default().endpoint("/api/payments"), "/api/payments");
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
