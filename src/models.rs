//! Store rows and the view models composed from them.
//!
//! JSON field names are camelCase to match the REST contract.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ==================== Users ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown next to posts and comments.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// Author fields embedded in post and comment views.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    #[sqlx(rename = "author_id")]
    pub id: i64,
    #[sqlx(rename = "author_username")]
    pub username: String,
    #[sqlx(rename = "author_name")]
    pub name: Option<String>,
}

// ==================== Artists ====================

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub spotify: Option<String>,
    pub soundcloud: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Artist with relation counts, as listed by the API and search.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtistListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub artist: Artist,
    pub song_count: i64,
    pub post_count: i64,
}

/// Fields of a new artist.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArtist {
    #[serde(default)]
    pub name: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub spotify: Option<String>,
    pub soundcloud: Option<String>,
    pub is_active: Option<bool>,
}

// ==================== Songs ====================

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub youtube_url: Option<String>,
    pub duration: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub artist_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Song joined with its artist and like count.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SongListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub song: Song,
    pub artist_name: String,
    pub artist_slug: String,
    pub like_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSong {
    #[serde(default)]
    pub title: String,
    pub artist_id: Option<i64>,
    pub description: Option<String>,
    pub youtube_url: Option<String>,
    pub duration: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

// ==================== Posts ====================

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author_id: i64,
    pub artist_id: Option<i64>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Post with author, artist, tags and counts.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    #[sqlx(flatten)]
    pub author: AuthorSummary,
    pub artist_name: Option<String>,
    pub artist_slug: Option<String>,
    pub comment_count: i64,
    pub like_count: i64,
    #[sqlx(skip)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    pub artist_id: Option<i64>,
    #[serde(default)]
    pub selected_tags: Vec<i64>,
    #[serde(default)]
    pub is_published: bool,
}

// ==================== Tags ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
}

// ==================== Comments ====================

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment with its author and, for top-level comments, its replies.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub comment: Comment,
    #[sqlx(flatten)]
    pub author: AuthorSummary,
    #[sqlx(skip)]
    pub replies: Vec<CommentView>,
}

/// Comment with the title of the post it belongs to (admin dashboard).
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentComment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub comment: Comment,
    #[sqlx(flatten)]
    pub author: AuthorSummary,
    pub post_title: String,
    pub post_slug: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(default)]
    pub content: String,
    pub post_id: Option<i64>,
    pub parent_id: Option<i64>,
}

// ==================== Likes ====================

/// What a like points at. Exactly one target per like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Post(i64),
    Song(i64),
}

impl LikeTarget {
    /// Build a target from the request's two optional ids.
    ///
    /// Returns `None` unless exactly one id is present.
    pub fn from_ids(post_id: Option<i64>, song_id: Option<i64>) -> Option<LikeTarget> {
        match (post_id, song_id) {
            (Some(id), None) => Some(LikeTarget::Post(id)),
            (None, Some(id)) => Some(LikeTarget::Song(id)),
            _ => None,
        }
    }

    /// Value stored in `likes.target_kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            LikeTarget::Post(_) => "post",
            LikeTarget::Song(_) => "song",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            LikeTarget::Post(id) | LikeTarget::Song(id) => *id,
        }
    }
}

// ==================== Pagination ====================

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Page request after defaulting and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// `page` defaults to 1 (minimum 1); `limit` defaults to
    /// `DEFAULT_PAGE_LIMIT` and is clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let pages = if total <= 0 {
            0
        } else {
            (total + request.limit - 1) / request.limit
        };
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// List response envelope: `{ items, pagination }`.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

// ==================== Admin ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub artists: i64,
    pub songs: i64,
    pub posts: i64,
    pub users: i64,
}
