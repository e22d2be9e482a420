//! `<head>` metadata: description, canonical and hreflang links, Open Graph
//! tags, and schema.org JSON-LD for artist pages.
//!
//! Handlers describe the page with a [`PageMeta`]; the renderer turns it into
//! a [`Head`] once the locale and request path are known.

use crate::i18n::{Locale, LocaleContext, MessageKey};
use crate::models::Artist;
use crate::routing;
use serde::Serialize;
use serde_json::{json, Value};

pub const SITE_NAME: &str = "K-Indie Hub";

/// Search engines cut descriptions around this length.
const DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Profile,
    Article,
}

#[derive(Debug, Clone, PartialEq)]
enum Description {
    Message(MessageKey),
    Text(String),
}

/// What a page says about itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    description: Description,
    og_type: OgType,
    image: Option<String>,
}

impl PageMeta {
    /// A page described by a translated message.
    pub fn new(description: MessageKey) -> Self {
        Self {
            description: Description::Message(description),
            og_type: OgType::Website,
            image: None,
        }
    }

    /// Use `text` (an artist bio, a post excerpt) when it has content,
    /// otherwise the translated `fallback`.
    pub fn described(text: Option<&str>, fallback: MessageKey) -> Self {
        match text.map(str::trim).filter(|text| !text.is_empty()) {
            Some(text) => Self {
                description: Description::Text(truncate(text)),
                ..Self::new(fallback)
            },
            None => Self::new(fallback),
        }
    }

    pub fn og_type(mut self, og_type: OgType) -> Self {
        self.og_type = og_type;
        self
    }

    pub fn image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self
    }

    /// Resolve against the request: `path` is the current path (query is
    /// ignored), `base_url` the public origin without a trailing slash.
    pub fn head(&self, locale: LocaleContext, path: &str, base_url: &str) -> Head {
        let page_path = path.split_once('?').map_or(path, |(path, _)| path);
        let active = locale.locale();
        let url_in = |target: Locale| format!("{}{}", base_url, routing::swap_locale(page_path, target));

        let mut alternates: Vec<Alternate> = Locale::all()
            .into_iter()
            .map(|target| Alternate {
                hreflang: target.code(),
                href: url_in(target),
            })
            .collect();
        alternates.push(Alternate {
            hreflang: "x-default",
            href: url_in(Locale::default_locale()),
        });

        let description = match &self.description {
            Description::Message(key) => locale.t(*key).to_string(),
            Description::Text(text) => text.clone(),
        };

        Head {
            description,
            canonical: url_in(active),
            alternates,
            og_type: self.og_type,
            og_locale: active.og_locale(),
            og_locale_alternates: Locale::all()
                .into_iter()
                .filter(|other| *other != active)
                .map(|other| other.og_locale())
                .collect(),
            image: self.image.as_deref().map(|image| absolute(image, base_url)),
            site_name: SITE_NAME,
        }
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self::new(MessageKey::HomeSubtitle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// Template-ready head values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Head {
    pub description: String,
    pub canonical: String,
    /// One link per enabled locale plus `x-default`.
    pub alternates: Vec<Alternate>,
    pub og_type: OgType,
    pub og_locale: &'static str,
    pub og_locale_alternates: Vec<&'static str>,
    pub image: Option<String>,
    pub site_name: &'static str,
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

fn absolute(url: &str, base_url: &str) -> String {
    if url.starts_with('/') && !url.starts_with("//") {
        format!("{}{}", base_url, url)
    } else {
        url.to_string()
    }
}

/// schema.org `MusicGroup` for an artist page.
pub fn artist_structured_data(artist: &Artist) -> Value {
    let same_as: Vec<&str> = [
        &artist.instagram,
        &artist.youtube,
        &artist.spotify,
        &artist.soundcloud,
    ]
    .into_iter()
    .flatten()
    .map(String::as_str)
    .collect();

    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "MusicGroup",
        "name": artist.name,
        "sameAs": same_as,
        "genre": "Indie",
        "foundingLocation": {
            "@type": "Country",
            "name": "South Korea",
        },
    });
    if let Some(fields) = data.as_object_mut() {
        if let Some(bio) = &artist.bio {
            fields.insert("description".to_string(), json!(bio));
        }
        if let Some(website) = &artist.website {
            fields.insert("url".to_string(), json!(website));
        }
        if let Some(image) = &artist.image {
            fields.insert("image".to_string(), json!(image));
        }
    }
    data
}

/// Serialize JSON-LD for embedding in a `<script>` element. `<` is escaped
/// so no string value can close the element.
pub fn json_ld(data: &Value) -> String {
    data.to_string().replace('<', "\\u003c")
}
