//! Build configuration.
//!
//! The navigation strategy is read at compile time so that the server render
//! and the WASM client produced by one build always agree on it.

use crate::app::navigation::NavigationMode;
use crate::shared::errors::Result;
use crate::shared::logging::{log_config_fallback, log_navigation_mode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub navigation: NavigationMode,
}

impl AppConfig {
    /// Build a config from the raw `STOREFRONT_NAVIGATION` value, if any
    pub fn parse(navigation: Option<&str>) -> Result<Self> {
        let navigation = match navigation {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => NavigationMode::default(),
        };
        Ok(Self { navigation })
    }

    /// Config baked into this build. An invalid value falls back to the default.
    pub fn load() -> Self {
        let raw = option_env!("STOREFRONT_NAVIGATION");
        let config = match Self::parse(raw) {
            Ok(config) => config,
            Err(e) => {
                let fallback = Self::default();
                log_config_fallback(
                    raw.unwrap_or_default(),
                    fallback.navigation.as_str(),
                    &e.to_string(),
                );
                fallback
            }
        };
        log_navigation_mode(config.navigation.as_str());
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn test_parse_defaults_to_in_app() {
        assert_eq!(AppConfig::parse(None).unwrap().navigation, NavigationMode::InApp);
        assert_eq!(AppConfig::parse(Some("  ")).unwrap().navigation, NavigationMode::InApp);
    }

    #[test]
    fn test_parse_full_reload() {
        let config = AppConfig::parse(Some("full-reload")).unwrap();
        assert_eq!(config.navigation, NavigationMode::FullReload);
    }

    #[test]
    fn test_parse_invalid_value() {
        assert!(matches!(
            AppConfig::parse(Some("teleport")),
            Err(AppError::InvalidNavigationMode(_))
        ));
    }

    #[test]
    fn test_load_never_fails() {
        let config = AppConfig::load();
        assert!(matches!(
            config.navigation,
            NavigationMode::FullReload | NavigationMode::InApp
        ));
    }
}
