use std::str::FromStr;

use once_cell::sync::OnceCell;

use crate::domain::logging::LogLevel;
use crate::domain::market_data::TimePeriod;

/// Prefix every backend call is issued under. The dev server proxies
/// `/backend` to the API process.
pub const DEFAULT_API_BASE: &str = "/backend/api/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    /// Data for the most recent days is not published yet.
    pub data_lag_days: u64,
    pub default_period: TimePeriod,
    pub search_limit: u32,
    pub redirect_delay_ms: u32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            data_lag_days: 2,
            default_period: TimePeriod::ThreeMonths,
            search_limit: 10,
            redirect_delay_ms: 1000,
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `INVESTMENT_LENS_API_BASE` and
    /// `INVESTMENT_LENS_LOG_LEVEL` from the build environment.
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("INVESTMENT_LENS_API_BASE"), option_env!("INVESTMENT_LENS_LOG_LEVEL"))
    }

    /// Blank or unparsable overrides keep the default.
    pub fn with_overrides(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| LogLevel::from_str(l.trim()).ok()) {
            config.log_level = level;
        }
        config
    }
}

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Process-wide config, resolved from the build environment on first use.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_when_present() {
        let config = AppConfig::with_overrides(Some("https://lens.example.com/api/v1/"), Some("warn"));
        assert_eq!(config.api_base, "https://lens.example.com/api/v1");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.search_limit, 10);
    }

    #[test]
    fn blank_or_bad_overrides_keep_defaults() {
        let config = AppConfig::with_overrides(Some("  "), Some("chatty"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, AppConfig::default().log_level);
        assert_eq!(config.default_period, TimePeriod::ThreeMonths);
    }
}
