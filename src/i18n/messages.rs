//! Message lookup with default-locale fallback.

use crate::i18n::strings::{table_for, MessageKey, MessageTable, TableSource};
use crate::i18n::{FallbackMetrics, Locale};
use serde_json::{Map, Value};

/// Read-only access to the message tables.
pub struct Messages;

impl Messages {
    /// Resolve a dotted key for a locale.
    ///
    /// Looks in `locale`'s table, then in the default locale's table, and
    /// finally returns `key` itself so a missing translation is visible in
    /// the UI.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Messages::resolve("nav.home", Locale::KOREAN), "홈");
    /// assert_eq!(Messages::resolve("no.such.key", Locale::ENGLISH), "no.such.key");
    /// ```
    pub fn resolve<'a>(key: &'a str, locale: Locale) -> &'a str {
        Self::resolve_in(table_for, key, locale)
    }

    /// `resolve` against an explicit table source.
    pub fn resolve_in<'a>(tables: TableSource, key: &'a str, locale: Locale) -> &'a str {
        match MessageKey::from_key(key) {
            Some(message_key) => Self::text_in(tables, message_key, locale),
            None => {
                FallbackMetrics::global().record_unknown_key();
                key
            }
        }
    }

    /// Resolve a typed key. Never fails: falls back to the default locale,
    /// then to the dotted key.
    pub fn text(key: MessageKey, locale: Locale) -> &'static str {
        Self::text_in(table_for, key, locale)
    }

    pub fn text_in(tables: TableSource, key: MessageKey, locale: Locale) -> &'static str {
        if let Some(text) = Self::lookup_in(tables, key, locale) {
            return text;
        }

        let default = Locale::default_locale();
        if locale != default {
            if let Some(text) = Self::lookup_in(tables, key, default) {
                FallbackMetrics::global().record_default_fallback();
                return text;
            }
        }

        FallbackMetrics::global().record_unknown_key();
        key.as_str()
    }

    /// Look up a key in exactly one locale's table, without fallback.
    pub fn lookup(key: MessageKey, locale: Locale) -> Option<&'static str> {
        Self::lookup_in(table_for, key, locale)
    }

    fn lookup_in(tables: TableSource, key: MessageKey, locale: Locale) -> Option<&'static str> {
        tables(locale).and_then(|table| find(table, key))
    }

    /// Every key resolved for `locale`, nested by section
    /// (`{"nav": {"home": "홈", ...}, ...}`) for use in templates as
    /// `t.nav.home`.
    pub fn template_map(locale: Locale) -> Value {
        let mut sections = Map::new();
        for key in MessageKey::ALL {
            let (section, name) = key
                .as_str()
                .split_once('.')
                .unwrap_or(("common", key.as_str()));
            let entry = sections
                .entry(section.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(fields) = entry {
                fields.insert(
                    name.to_string(),
                    Value::String(Self::text(key, locale).to_string()),
                );
            }
        }
        Value::Object(sections)
    }
}

fn find(table: MessageTable, key: MessageKey) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale_table() {
        assert_eq!(Messages::resolve("nav.home", Locale::KOREAN), "홈");
        assert_eq!(Messages::resolve("nav.home", Locale::SPANISH), "Inicio");
        assert_eq!(Messages::resolve("nav.home", Locale::ENGLISH), "Home");
    }

    #[test]
    fn test_resolve_unknown_key_returns_key() {
        assert_eq!(Messages::resolve("no.such.key", Locale::ENGLISH), "no.such.key");
        assert_eq!(Messages::resolve("no.such.key", Locale::KOREAN), "no.such.key");
    }

    #[test]
    fn test_resolve_is_exact_key_match() {
        assert_eq!(Messages::resolve("nav.home ", Locale::KOREAN), "nav.home ");
        assert_eq!(Messages::resolve("NAV.HOME", Locale::KOREAN), "NAV.HOME");
    }

    #[test]
    fn test_text_matches_resolve() {
        for locale in Locale::all() {
            for key in MessageKey::ALL {
                assert_eq!(Messages::text(key, locale), Messages::resolve(key.as_str(), locale));
            }
        }
    }

    #[test]
    fn test_lookup_has_no_fallback() {
        assert_eq!(
            Messages::lookup(MessageKey::SearchTitle, Locale::KOREAN),
            Some("검색")
        );
    }

    const PARTIAL_ENGLISH: MessageTable =
        &[(MessageKey::NavHome, "Home"), (MessageKey::SearchTitle, "Search")];
    const PARTIAL_KOREAN: MessageTable = &[(MessageKey::NavHome, "홈")];

    fn partial_tables(locale: Locale) -> Option<MessageTable> {
        match locale.code() {
            "en" => Some(PARTIAL_ENGLISH),
            "ko" => Some(PARTIAL_KOREAN),
            _ => None,
        }
    }

    #[test]
    fn test_missing_translation_falls_back_to_default_locale() {
        let before = FallbackMetrics::global().default_fallbacks();

        // Present in the Korean table
        assert_eq!(
            Messages::text_in(partial_tables, MessageKey::NavHome, Locale::KOREAN),
            "홈"
        );
        // Missing in Korean, present in English
        assert_eq!(
            Messages::text_in(partial_tables, MessageKey::SearchTitle, Locale::KOREAN),
            "Search"
        );
        assert_eq!(
            Messages::resolve_in(partial_tables, "search.title", Locale::KOREAN),
            "Search"
        );
        assert!(FallbackMetrics::global().default_fallbacks() >= before + 2);
    }

    #[test]
    fn test_locale_without_table_falls_back_to_default_locale() {
        assert_eq!(
            Messages::text_in(partial_tables, MessageKey::NavHome, Locale::SPANISH),
            "Home"
        );
    }

    #[test]
    fn test_key_missing_everywhere_renders_key() {
        assert_eq!(
            Messages::text_in(partial_tables, MessageKey::NavMusic, Locale::KOREAN),
            "nav.music"
        );
        assert_eq!(
            Messages::text_in(partial_tables, MessageKey::NavMusic, Locale::ENGLISH),
            "nav.music"
        );
    }

    #[test]
    fn test_template_map_nesting() {
        let map = Messages::template_map(Locale::KOREAN);
        assert_eq!(map["nav"]["home"], "홈");
        assert_eq!(map["home"]["title"], "한국 인디 아티스트를 만나보세요");
        assert_eq!(map["search"]["no_results"], "검색 결과가 없습니다");
    }

    #[test]
    fn test_template_map_covers_every_key() {
        let map = Messages::template_map(Locale::SPANISH);
        for key in MessageKey::ALL {
            let (section, name) = key.as_str().split_once('.').unwrap();
            assert!(map[section][name].is_string(), "{} missing", key.as_str());
        }
    }
}
