//! URL slugs derived from names and titles.

use chrono::Utc;
use regex::Regex;
use std::future::Future;
use std::sync::OnceLock;

static NON_SLUG_CHARS: OnceLock<Regex> = OnceLock::new();

/// Lowercase `text`, turn every run of characters outside `[a-z0-9]` into a
/// single `-`, and strip leading/trailing dashes. An empty result (e.g. an
/// all-Hangul name) falls back to `fallback`.
pub fn slugify(text: &str, fallback: &str) -> String {
    let regex = NON_SLUG_CHARS.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = text.to_lowercase();
    let slug = regex.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.to_string()
    }
}

/// Pick a free slug for `base`.
///
/// `base` itself if unused, otherwise `{base}-{unix millis}`, bumping the
/// suffix until `is_taken` reports it free. The store's unique index is the
/// final guard; this only avoids the common collision.
pub async fn unique_slug<F, Fut, E>(base: &str, mut is_taken: F) -> Result<String, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    if !is_taken(base.to_string()).await? {
        return Ok(base.to_string());
    }

    let mut suffix = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !is_taken(candidate.clone()).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
