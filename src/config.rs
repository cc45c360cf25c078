use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the store backend
    pub api_url: String,
    /// Seconds between directory poll cycles
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Skip destructive-action confirmation prompts (scripted runs)
    pub auto_confirm: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            poll_interval_secs: 5,
            request_timeout_secs: 10,
            auto_confirm: false,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let api_url = std::env::var("STOREDASH_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    let poll_interval_secs = std::env::var("STOREDASH_POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| "5".to_string())
        .parse()
        .unwrap_or(5);

    let request_timeout_secs = std::env::var("STOREDASH_REQUEST_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    let auto_confirm = std::env::var("STOREDASH_AUTO_CONFIRM")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        api_url,
        poll_interval_secs,
        request_timeout_secs,
        auto_confirm,
        debug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.api_url, "http://localhost:8080");
        assert_eq!(cfg.poll_interval_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert!(!cfg.auto_confirm);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_defaults() {
        std::env::remove_var("STOREDASH_API_URL");
        std::env::remove_var("STOREDASH_POLL_INTERVAL_SECS");

        let cfg = load_config().unwrap();
        assert_eq!(cfg.api_url, "http://localhost:8080");
        assert_eq!(cfg.poll_interval_secs, 5);
    }

    #[test]
    fn test_load_config_with_custom_api_url() {
        std::env::set_var("STOREDASH_API_URL", "http://10.0.0.5:9000");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.api_url, "http://10.0.0.5:9000");
        std::env::remove_var("STOREDASH_API_URL");
    }

    #[test]
    fn test_load_config_with_poll_interval() {
        std::env::set_var("STOREDASH_POLL_INTERVAL_SECS", "30");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.poll_interval_secs, 30);
        std::env::remove_var("STOREDASH_POLL_INTERVAL_SECS");
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        std::env::set_var("STOREDASH_POLL_INTERVAL_SECS", "not_a_number");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.poll_interval_secs, 5); // default
        std::env::remove_var("STOREDASH_POLL_INTERVAL_SECS");
    }

    #[test]
    fn test_load_config_auto_confirm_variants() {
        std::env::set_var("STOREDASH_AUTO_CONFIRM", "true");
        assert!(load_config().unwrap().auto_confirm);

        std::env::set_var("STOREDASH_AUTO_CONFIRM", "1");
        assert!(load_config().unwrap().auto_confirm);

        std::env::set_var("STOREDASH_AUTO_CONFIRM", "0");
        assert!(!load_config().unwrap().auto_confirm);

        std::env::remove_var("STOREDASH_AUTO_CONFIRM");
    }

    #[test]
    fn test_config_clone() {
        let cfg = Config::default();
        let cloned = cfg.clone();
        assert_eq!(cfg.api_url, cloned.api_url);
        assert_eq!(cfg.poll_interval_secs, cloned.poll_interval_secs);
    }
}
