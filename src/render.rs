//! Server-side HTML rendering with `tera`.
//!
//! Templates are compiled into the binary. Every page gets the shared chrome
//! (document language, navigation strings, language switcher, signed-in user)
//! and its `<head>` metadata on top of its own view model.

use crate::i18n::{Locale, LocaleContext, Messages};
use crate::meta::PageMeta;
use crate::models::User;
use anyhow::{Context as _, Result};
use serde_json::json;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 10] = [
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("artists.html", include_str!("../templates/artists.html")),
    ("artist.html", include_str!("../templates/artist.html")),
    ("music.html", include_str!("../templates/music.html")),
    ("posts.html", include_str!("../templates/posts.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("search.html", include_str!("../templates/search.html")),
    ("admin.html", include_str!("../templates/admin.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Per-request values shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub locale: LocaleContext,
    pub user: Option<&'a User>,
    /// Current path and query, posted back by the language switcher.
    pub path: &'a str,
}

pub struct Renderer {
    tera: Tera,
    /// Public origin for absolute links in `<head>`
    base_url: String,
}

impl Renderer {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .context("Failed to compile templates")?;
        Ok(Self {
            tera,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Render `template` with the page's own `data` plus the shared chrome.
    pub fn render(
        &self,
        template: &str,
        chrome: &Chrome<'_>,
        meta: &PageMeta,
        mut data: Context,
    ) -> Result<String> {
        let locale = chrome.locale.locale();

        data.insert("locale", locale.code());
        data.insert("lang", chrome.locale.html_lang());
        data.insert("t", &Messages::template_map(locale));
        data.insert("locales", &locale_options(locale));
        data.insert("current_path", chrome.path);
        data.insert("meta", &meta.head(chrome.locale, chrome.path, &self.base_url));
        data.insert(
            "user",
            &chrome.user.map(|user| {
                json!({
                    "displayName": user.display_name(),
                    "isAdmin": user.is_admin(),
                })
            }),
        );

        self.tera
            .render(template, &data)
            .context(format!("Failed to render {}", template))
    }
}

fn locale_options(active: Locale) -> Vec<serde_json::Value> {
    Locale::all()
        .into_iter()
        .map(|locale| {
            json!({
                "code": locale.code(),
                "nativeName": locale.native_name(),
                "selected": locale == active,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageKey;
    use crate::models::Role;
    use chrono::Utc;

    fn renderer() -> Renderer {
        Renderer::new("https://kindie.example").unwrap()
    }

    fn chrome(locale: Locale) -> Chrome<'static> {
        Chrome {
            locale: LocaleContext::new(locale),
            user: None,
            path: "/en",
        }
    }

    #[test]
    fn test_templates_compile() {
        assert!(Renderer::new("https://kindie.example/").is_ok());
    }

    #[test]
    fn test_html_lang_matches_locale() {
        let renderer = renderer();
        for locale in Locale::all() {
            let mut data = Context::new();
            data.insert("status", &404);
            data.insert("title", "x");
            data.insert("message", "y");
            let html = renderer.render("error.html", &chrome(locale), &PageMeta::default(), data).unwrap();
            assert!(html.contains(&format!("<html lang=\"{}\">", locale.code())));
        }
    }

    #[test]
    fn test_navigation_is_translated() {
        let renderer = renderer();
        let mut data = Context::new();
        data.insert("status", &404);
        data.insert("title", "x");
        data.insert("message", "y");
        let html = renderer
            .render("error.html", &chrome(Locale::KOREAN), &PageMeta::default(), data)
            .unwrap();
        assert!(html.contains("홈"));
        assert!(html.contains("한국어"));
        assert!(html.contains("Español"));
    }

    #[test]
    fn test_signed_in_admin_sees_admin_link() {
        let renderer = renderer();
        let admin = User {
            id: 1,
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            name: Some("Site Admin".to_string()),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        let chrome = Chrome {
            locale: LocaleContext::new(Locale::ENGLISH),
            user: Some(&admin),
            path: "/en",
        };
        let mut data = Context::new();
        data.insert("status", &404);
        data.insert("title", "x");
        data.insert("message", "y");
        let html = renderer.render("error.html", &chrome, &PageMeta::default(), data).unwrap();
        assert!(html.contains("href=\"/en/admin\""));
        assert!(html.contains("Site Admin"));
    }

    #[test]
    fn test_output_is_escaped() {
        let renderer = renderer();
        let mut data = Context::new();
        data.insert("status", &404);
        data.insert("title", "<script>alert(1)</script>");
        data.insert("message", "y");
        let html = renderer
            .render("error.html", &chrome(Locale::ENGLISH), &PageMeta::default(), data)
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_head_links_every_locale() {
        let chrome = Chrome {
            locale: LocaleContext::new(Locale::KOREAN),
            user: None,
            path: "/ko/music",
        };
        let mut data = Context::new();
        data.insert("status", &404);
        data.insert("title", "x");
        data.insert("message", "y");
        let meta = PageMeta::new(MessageKey::MusicSubtitle);
        let html = renderer().render("error.html", &chrome, &meta, data).unwrap();

        for code in ["en", "ko", "es", "x-default"] {
            assert!(
                html.contains(&format!("hreflang=\"{}\"", code)),
                "missing hreflang {}",
                code
            );
        }
        // Tera escapes `/` in interpolated values
        let canonical = "https://kindie.example/ko/music".replace('/', "&#x2F;");
        assert!(html.contains(&format!("<link rel=\"canonical\" href=\"{}\">", canonical)));
        assert!(html.contains("<meta property=\"og:locale\" content=\"ko_KR\">"));
        assert!(html.contains(&format!(
            "<meta name=\"description\" content=\"{}\">",
            Messages::text(MessageKey::MusicSubtitle, Locale::KOREAN)
        )));
    }
}
