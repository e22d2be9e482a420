//! Request-scoped locale context.
//!
//! The active locale is an explicit value threaded from the router into the
//! renderer; there is no process-wide "current locale".

use crate::i18n::strings::MessageKey;
use crate::i18n::{Locale, Messages};
use tracing::debug;

/// The locale a page is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleContext {
    active: Locale,
}

impl LocaleContext {
    pub fn new(locale: Locale) -> Self {
        Self { active: locale }
    }

    /// Initialize from a persisted preference (e.g. the `locale` cookie).
    ///
    /// An absent or unsupported preference yields the default locale; an
    /// invalid code never reaches the dictionary.
    pub fn from_preference(preference: Option<&str>) -> Self {
        let active = match preference.map(Locale::from_code) {
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                debug!("Ignoring persisted locale preference: {}", e);
                Locale::default_locale()
            }
            None => Locale::default_locale(),
        };
        Self { active }
    }

    /// Switch to an explicitly selected locale. Unsupported codes leave the
    /// context unchanged and return `false`.
    pub fn select(&mut self, code: &str) -> bool {
        match Locale::from_code(code) {
            Ok(locale) => {
                self.active = locale;
                true
            }
            Err(_) => false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.active
    }

    /// Value for the document's `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        self.active.code()
    }

    pub fn t(&self, key: MessageKey) -> &'static str {
        Messages::text(key, self.active)
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Locale::default_locale())
    }
}

impl From<Locale> for LocaleContext {
    fn from(locale: Locale) -> Self {
        Self::new(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preference_supported() {
        let ctx = LocaleContext::from_preference(Some("ko"));
        assert_eq!(ctx.locale(), Locale::KOREAN);
        assert_eq!(ctx.html_lang(), "ko");
    }

    #[test]
    fn test_from_preference_absent_uses_default() {
        let ctx = LocaleContext::from_preference(None);
        assert_eq!(ctx.locale(), Locale::ENGLISH);
    }

    #[test]
    fn test_from_preference_unsupported_uses_default() {
        for bad in ["xx", "en-US", "", "KO"] {
            let ctx = LocaleContext::from_preference(Some(bad));
            assert_eq!(ctx.locale(), Locale::ENGLISH, "preference {:?}", bad);
        }
    }

    #[test]
    fn test_select_updates_lang_and_strings() {
        let mut ctx = LocaleContext::default();
        assert_eq!(ctx.t(MessageKey::NavHome), "Home");

        assert!(ctx.select("es"));
        assert_eq!(ctx.html_lang(), "es");
        assert_eq!(ctx.t(MessageKey::NavHome), "Inicio");
    }

    #[test]
    fn test_select_unsupported_keeps_current() {
        let mut ctx = LocaleContext::new(Locale::KOREAN);
        assert!(!ctx.select("fr"));
        assert_eq!(ctx.locale(), Locale::KOREAN);
    }
}
