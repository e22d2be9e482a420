//! Locale registry: Single source of truth for all supported UI locales.
//!
//! The registry is built once on first access (`OnceLock`) and is immutable
//! afterwards, so it can be shared by every request without locking.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code as it appears in the first path segment (e.g., "en", "ko")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean")
    pub name: &'static str,

    /// Label shown in the language switcher (e.g., "한국어")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "ko_KR")
    pub og_locale: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its exact code.
    ///
    /// Matching is exact: "en-US" does not resolve to "en".
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All enabled locales, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// The default locale configuration.
    ///
    /// # Panics
    /// Panics if zero or several locales are flagged as default. The table
    /// below is static, so this can only trip on an edit to it.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            og_locale: "ko_KR",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            og_locale: "es_ES",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_korean() {
        let config = LocaleRegistry::get()
            .get_by_code("ko")
            .expect("Korean should be registered");
        assert_eq!(config.name, "Korean");
        assert_eq!(config.native_name, "한국어");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("en-US").is_none());
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("e").is_none());
    }

    #[test]
    fn test_list_enabled_order() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|locale| locale.code)
            .collect();
        assert_eq!(codes, vec!["en", "ko", "es"]);
    }

    #[test]
    fn test_default_is_english() {
        let default = LocaleRegistry::get().default_locale();
        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("ko"));
        assert!(registry.is_enabled("es"));
        assert!(!registry.is_enabled("xx"));
        assert!(!registry.is_enabled(""));
    }
}
