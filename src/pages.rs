//! Page handlers under `/{locale}/...`.
//!
//! Each handler composes a view model from the store and hands it to the
//! renderer together with the request's [`LocaleContext`]. Failures render
//! the localized error page instead of JSON.

use crate::error::{AppError, AppResult};
use crate::i18n::{Locale, LocaleContext, MessageKey};
use crate::meta::{self, OgType, PageMeta};
use crate::models::{ArtistListItem, PageRequest, Pagination, SongListItem, User};
use crate::render::{Chrome, Renderer};
use crate::routing::{self, Resolution};
use crate::search::{compose_search, SearchParams, SearchQuery};
use crate::server::AppState;
use crate::session::{cookie_value, optional_user};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{header, request::Parts, HeaderMap, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tera::Context;
use tracing::{debug, error};

pub const LOCALE_COOKIE: &str = "locale";

const HOME_ARTISTS: i64 = 3;
const HOME_SONGS: i64 = 6;
const CARD_SONGS: i64 = 3;
const ARTIST_POSTS: i64 = 5;
const DASHBOARD_RECENT: i64 = 5;

/// Locale stored by the language switcher, or the default.
pub fn preferred_locale(headers: &HeaderMap) -> LocaleContext {
    LocaleContext::from_preference(cookie_value(headers, LOCALE_COOKIE).as_deref())
}

fn path_and_query(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

// ==================== Error page ====================

/// A failed page request, shown as the error page in `locale`.
#[derive(Debug)]
pub struct PageError {
    pub locale: LocaleContext,
    pub error: AppError,
}

impl PageError {
    pub fn new(locale: LocaleContext, error: AppError) -> Self {
        Self { locale, error }
    }

    pub fn render(self, renderer: &Renderer, user: Option<&User>, path: &str) -> Response {
        self.error.log();
        let status = self.error.status();
        let (title, message) = match &self.error {
            AppError::NotFound(_) => (
                self.locale.t(MessageKey::ErrorNotFoundTitle).to_string(),
                self.locale.t(MessageKey::ErrorNotFoundBody).to_string(),
            ),
            AppError::Unauthorized => (
                self.locale.t(MessageKey::CommonError).to_string(),
                self.locale.t(MessageKey::ErrorUnauthorized).to_string(),
            ),
            other => (
                self.locale.t(MessageKey::CommonError).to_string(),
                other.public_message(),
            ),
        };

        let mut data = Context::new();
        data.insert("status", &status.as_u16());
        data.insert("title", &title);
        data.insert("message", &message);

        let chrome = Chrome {
            locale: self.locale,
            user,
            path,
        };
        match renderer.render("error.html", &chrome, &PageMeta::default(), data) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render error page: {:#}", e);
                (status, message).into_response()
            }
        }
    }
}

// ==================== Page extractor ====================

/// A page's view model plus what it says about itself in `<head>`.
pub struct PageView {
    pub meta: PageMeta,
    pub data: Context,
}

impl PageView {
    pub fn new(meta: PageMeta, data: Context) -> Self {
        Self { meta, data }
    }
}

/// Everything a page handler needs besides the store: the locale taken from
/// the path, the signed-in user and the current path.
///
/// Paths without a locale segment are redirected; unsupported locales get
/// the not-found page in the visitor's preferred locale.
pub struct Page {
    pub locale: LocaleContext,
    pub user: Option<User>,
    pub path: String,
    renderer: Arc<Renderer>,
}

#[async_trait]
impl FromRequestParts<AppState> for Page {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let path = path_and_query(&parts.uri);

        let locale = match routing::resolve(parts.uri.path()) {
            Resolution::Localized { locale, .. } => LocaleContext::new(locale),
            Resolution::Redirect(target) => {
                let target = routing::with_query(&target, parts.uri.query());
                return Err(Redirect::temporary(&target).into_response());
            }
            Resolution::NotFound => {
                let locale = preferred_locale(&parts.headers);
                return Err(PageError::new(locale, AppError::not_found("Locale"))
                    .render(&state.renderer, None, &path));
            }
        };

        let user = match optional_user(state, &parts.headers).await {
            Ok(user) => user,
            Err(e) => return Err(PageError::new(locale, e).render(&state.renderer, None, &path)),
        };

        Ok(Page {
            locale,
            user,
            path,
            renderer: state.renderer.clone(),
        })
    }
}

impl Page {
    fn chrome(&self) -> Chrome<'_> {
        Chrome {
            locale: self.locale,
            user: self.user.as_ref(),
            path: &self.path,
        }
    }

    /// Render `template` with the composed view, or the error page if
    /// composing failed.
    pub fn respond(self, template: &str, view: AppResult<PageView>) -> Response {
        let rendered = view.and_then(|view| {
            self.renderer
                .render(template, &self.chrome(), &view.meta, view.data)
                .map_err(AppError::from)
        });
        match rendered {
            Ok(html) => Html(html).into_response(),
            Err(e) => PageError::new(self.locale, e).render(&self.renderer, self.user.as_ref(), &self.path),
        }
    }
}

// ==================== Handlers ====================

/// `/` always lands on the default-locale home page.
pub async fn root(uri: Uri) -> Redirect {
    let target = format!("/{}", Locale::default_locale());
    Redirect::temporary(&routing::with_query(&target, uri.query()))
}

/// Anything no route matched.
pub async fn fallback(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    if uri.path().starts_with("/api/") {
        return AppError::not_found("Route").into_response();
    }

    let path = path_and_query(&uri);
    let locale = match routing::resolve(uri.path()) {
        Resolution::Redirect(target) => {
            return Redirect::temporary(&routing::with_query(&target, uri.query())).into_response();
        }
        Resolution::Localized { locale, .. } => LocaleContext::new(locale),
        Resolution::NotFound => preferred_locale(&headers),
    };
    PageError::new(locale, AppError::not_found("Page")).render(&state.renderer, None, &path)
}

#[derive(Debug, Deserialize)]
pub struct LocaleForm {
    pub locale: String,
    pub next: Option<String>,
}

/// Language switcher: remember the choice and reload `next` in that locale.
pub async fn set_locale(headers: HeaderMap, Form(form): Form<LocaleForm>) -> Response {
    let mut context = preferred_locale(&headers);
    if !context.select(&form.locale) {
        debug!("Ignoring unsupported locale selection {:?}", form.locale);
    }
    let locale = context.locale();

    let cookie = Cookie::build((LOCALE_COOKIE, locale.code()))
        .path("/")
        .permanent()
        .same_site(SameSite::Lax)
        .build();
    let target = routing::swap_locale(form.next.as_deref().unwrap_or("/"), locale);

    ([(header::SET_COOKIE, cookie.to_string())], Redirect::to(&target)).into_response()
}

pub async fn home(State(state): State<AppState>, page: Page) -> Response {
    page.respond("home.html", home_data(&state).await)
}

async fn home_data(state: &AppState) -> AppResult<PageView> {
    let (artists, songs) = futures::try_join!(
        state.db.newest_active_artists(HOME_ARTISTS),
        state.db.list_active_songs(Some(HOME_SONGS)),
    )?;

    let mut data = Context::new();
    data.insert("artists", &artists);
    data.insert("songs", &songs);
    Ok(PageView::new(PageMeta::new(MessageKey::HomeSubtitle), data))
}

/// Artist card on the artists page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtistCard {
    #[serde(flatten)]
    artist: ArtistListItem,
    latest_songs: Vec<SongListItem>,
}

pub async fn artists(State(state): State<AppState>, page: Page) -> Response {
    page.respond("artists.html", artists_data(&state).await)
}

async fn artists_data(state: &AppState) -> AppResult<PageView> {
    let artists = state.db.list_active_artists().await?;
    let latest = futures::future::try_join_all(
        artists
            .iter()
            .map(|item| state.db.songs_for_artist(item.artist.id, Some(CARD_SONGS))),
    )
    .await?;

    let cards: Vec<ArtistCard> = artists
        .into_iter()
        .zip(latest)
        .map(|(artist, latest_songs)| ArtistCard {
            artist,
            latest_songs,
        })
        .collect();

    let mut data = Context::new();
    data.insert("artists", &cards);
    Ok(PageView::new(PageMeta::new(MessageKey::ArtistsSubtitle), data))
}

pub async fn artist(
    State(state): State<AppState>,
    Path((_, slug)): Path<(String, String)>,
    page: Page,
) -> Response {
    page.respond("artist.html", artist_data(&state, &slug).await)
}

async fn artist_data(state: &AppState, slug: &str) -> AppResult<PageView> {
    let artist = state
        .db
        .get_artist_by_slug(slug)
        .await?
        .filter(|artist| artist.is_active)
        .ok_or_else(|| AppError::not_found("Artist"))?;

    let (songs, posts) = futures::try_join!(
        state.db.songs_for_artist(artist.id, None),
        state.db.posts_for_artist(artist.id, ARTIST_POSTS),
    )?;

    let head = PageMeta::described(artist.bio.as_deref(), MessageKey::ArtistsSubtitle)
        .og_type(OgType::Profile)
        .image(artist.image.as_deref());

    let mut data = Context::new();
    data.insert(
        "structured_data",
        &meta::json_ld(&meta::artist_structured_data(&artist)),
    );
    data.insert("artist", &artist);
    data.insert("songs", &songs);
    data.insert("posts", &posts);
    Ok(PageView::new(head, data))
}

pub async fn music(State(state): State<AppState>, page: Page) -> Response {
    page.respond("music.html", music_data(&state).await)
}

async fn music_data(state: &AppState) -> AppResult<PageView> {
    let songs = state.db.list_active_songs(None).await?;
    let mut data = Context::new();
    data.insert("songs", &songs);
    Ok(PageView::new(PageMeta::new(MessageKey::MusicSubtitle), data))
}

#[derive(Debug, Default, Deserialize)]
pub struct PostsPageQuery {
    pub page: Option<i64>,
}

pub async fn posts(
    State(state): State<AppState>,
    page: Page,
    Query(query): Query<PostsPageQuery>,
) -> Response {
    page.respond("posts.html", posts_data(&state, query).await)
}

async fn posts_data(state: &AppState, query: PostsPageQuery) -> AppResult<PageView> {
    let request = PageRequest::new(query.page, Some(state.config.posts_per_page));
    let (posts, total) = state.db.published_posts_page(request).await?;

    let pagination = Pagination::new(request, total);
    let mut data = Context::new();
    data.insert("posts", &posts);
    data.insert("pagination", &pagination);
    data.insert("has_previous", &pagination.has_previous());
    data.insert("has_next", &pagination.has_next());
    Ok(PageView::new(PageMeta::new(MessageKey::CommunitySubtitle), data))
}

pub async fn post(
    State(state): State<AppState>,
    Path((_, slug)): Path<(String, String)>,
    page: Page,
) -> Response {
    page.respond("post.html", post_data(&state, &slug).await)
}

async fn post_data(state: &AppState, slug: &str) -> AppResult<PageView> {
    let post = state
        .db
        .get_published_post_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::not_found("Post"))?;
    let comments = state.db.comments_for_post(post.post.id).await?;

    let head = PageMeta::described(post.post.excerpt.as_deref(), MessageKey::CommunitySubtitle)
        .og_type(OgType::Article);

    let mut data = Context::new();
    data.insert("post", &post);
    data.insert("comments", &comments);
    Ok(PageView::new(head, data))
}

pub async fn search(
    State(state): State<AppState>,
    page: Page,
    Query(query): Query<SearchQuery>,
) -> Response {
    page.respond("search.html", search_data(&state, &query).await)
}

async fn search_data(state: &AppState, query: &SearchQuery) -> AppResult<PageView> {
    let params = SearchParams::from(query);
    let view = compose_search(&state.db, &params, state.config.search_result_limit).await?;

    let mut data = Context::new();
    data.insert("query", &params.query);
    data.insert("view", &view);
    Ok(PageView::new(PageMeta::new(MessageKey::SearchPrompt), data))
}

pub async fn admin(State(state): State<AppState>, page: Page) -> Response {
    let data = match &page.user {
        Some(user) if user.is_admin() => admin_data(&state).await,
        _ => Err(AppError::Unauthorized),
    };
    page.respond("admin.html", data)
}

async fn admin_data(state: &AppState) -> AppResult<PageView> {
    let (totals, posts, comments) = futures::try_join!(
        state.db.dashboard_totals(),
        state.db.recent_posts(DASHBOARD_RECENT),
        state.db.recent_comments(DASHBOARD_RECENT),
    )?;

    let mut data = Context::new();
    data.insert("totals", &totals);
    data.insert("posts", &posts);
    data.insert("comments", &comments);
    Ok(PageView::new(PageMeta::new(MessageKey::AdminSubtitle), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_preferred_locale_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("locale=ko"));
        assert_eq!(preferred_locale(&headers).locale(), Locale::KOREAN);
    }

    #[test]
    fn test_preferred_locale_ignores_unsupported() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("locale=fr"));
        assert_eq!(preferred_locale(&headers).locale(), Locale::default_locale());
        assert_eq!(
            preferred_locale(&HeaderMap::new()).locale(),
            Locale::default_locale()
        );
    }

    #[test]
    fn test_path_and_query() {
        let uri: Uri = "/ko/search?q=iu&type=songs".parse().unwrap();
        assert_eq!(path_and_query(&uri), "/ko/search?q=iu&type=songs");
        let uri: Uri = "/es".parse().unwrap();
        assert_eq!(path_and_query(&uri), "/es");
    }

    #[test]
    fn test_error_page_status_and_language() {
        let renderer = Renderer::new("https://kindie.example").unwrap();
        let response = PageError::new(
            LocaleContext::new(Locale::SPANISH),
            AppError::not_found("Artist"),
        )
        .render(&renderer, None, "/es/artists/nobody");
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

        let response = PageError::new(LocaleContext::default(), AppError::Unauthorized)
            .render(&renderer, None, "/en/admin");
        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
