//! Locale-in-path route resolution.
//!
//! Every page lives under `/{locale}/...`. This module decides, from the raw
//! request path alone, whether a request carries a supported locale, should
//! be redirected to the default-locale path, or is not found.

use crate::i18n::Locale;

/// First path segments that name a page section. A path starting with one
/// of these has no locale segment and is redirected rather than rejected.
pub const SECTIONS: [&str; 5] = ["artists", "music", "posts", "search", "admin"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The first segment is a supported locale. `rest` is the normalized
    /// remainder (`""` for the locale root, otherwise starting with `/`).
    Localized { locale: Locale, rest: String },

    /// No locale segment; redirect to this default-locale path.
    Redirect(String),

    /// The first segment is neither a locale nor a known section.
    NotFound,
}

/// Strip trailing slashes so `/en/artists/` and `/en/artists` resolve the same.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn resolve(path: &str) -> Resolution {
    let path = normalize(path);
    if path == "/" {
        return Resolution::Redirect(format!("/{}", Locale::default_locale()));
    }

    let without_root = path.trim_start_matches('/');
    let (first, rest) = match without_root.find('/') {
        Some(idx) => (&without_root[..idx], &without_root[idx..]),
        None => (without_root, ""),
    };

    if let Ok(locale) = Locale::from_code(first) {
        return Resolution::Localized {
            locale,
            rest: rest.to_string(),
        };
    }

    if SECTIONS.contains(&first) {
        return Resolution::Redirect(format!("/{}{}", Locale::default_locale(), path));
    }

    Resolution::NotFound
}

/// Re-attach a query string to a redirect target.
pub fn with_query(target: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", target, q),
        _ => target.to_string(),
    }
}

/// Rewrite a same-site path so it points at `locale`.
///
/// Used by the language switcher. Anything that is not a local absolute
/// path (`//host`, `http://...`) collapses to the locale root.
pub fn swap_locale(next: &str, locale: Locale) -> String {
    if !next.starts_with('/') || next.starts_with("//") {
        return format!("/{}", locale);
    }

    let (path, query) = match next.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (next, None),
    };

    let target = match resolve(path) {
        Resolution::Localized { rest, .. } => format!("/{}{}", locale, rest),
        Resolution::Redirect(_) if normalize(path) != "/" => {
            format!("/{}{}", locale, normalize(path))
        }
        _ => format!("/{}", locale),
    };

    with_query(&target, query)
}
