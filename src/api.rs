//! JSON REST handlers under `/api`.

use crate::error::{AppError, AppResult};
use crate::i18n::{FallbackMetrics, MetricsReport};
use crate::models::{
    Artist, ArtistListItem, Comment, LikeTarget, NewArtist, NewComment, NewPost, NewSong, PageRequest,
    Paginated, Pagination, Post, PostListItem, Song,
};
use crate::server::AppState;
use crate::session::{AdminUser, CurrentUser};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct ArtistListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub published: bool,
}

pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ArtistListQuery>,
) -> AppResult<Json<Paginated<ArtistListItem>>> {
    let page = PageRequest::new(query.page, query.limit);
    let (items, total) = state.db.list_artists(query.active, page).await?;
    Ok(Json(Paginated {
        items,
        pagination: Pagination::new(page, total),
    }))
}

pub async fn create_artist(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(input): Json<NewArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }

    let artist = state.db.create_artist(&input).await?;
    info!("Artist {} created by {}", artist.slug, admin.username);
    Ok((StatusCode::CREATED, Json(artist)))
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> AppResult<Json<Paginated<PostListItem>>> {
    let page = PageRequest::new(query.page, query.limit);
    let (items, total) = state.db.list_posts(query.published, page).await?;
    Ok(Json(Paginated {
        items,
        pagination: Pagination::new(page, total),
    }))
}

pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(author): CurrentUser,
    Json(input): Json<NewPost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    if input.title.trim().is_empty() || input.content.trim().is_empty() {
        return Err(AppError::validation("Title and content are required"));
    }
    if let Some(artist_id) = input.artist_id {
        if state.db.get_artist(artist_id).await?.is_none() {
            return Err(AppError::validation("Unknown artist"));
        }
    }

    let post = state.db.create_post(author.id, &input).await?;
    info!("Post {} created by {}", post.slug, author.username);
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn create_song(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(input): Json<NewSong>,
) -> AppResult<(StatusCode, Json<Song>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    let artist_id = input
        .artist_id
        .ok_or_else(|| AppError::validation("Artist is required"))?;
    if state.db.get_artist(artist_id).await?.is_none() {
        return Err(AppError::validation("Unknown artist"));
    }

    let song = state.db.create_song(&input).await?;
    info!("Song {} created by {}", song.slug, admin.username);
    Ok((StatusCode::CREATED, Json(song)))
}

pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(author): CurrentUser,
    Json(input): Json<NewComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    if input.content.trim().is_empty() {
        return Err(AppError::validation("Content is required"));
    }
    let post_id = input
        .post_id
        .ok_or_else(|| AppError::validation("postId is required"))?;
    // Drafts are invisible to readers, so they take no comments either
    match state.db.get_post(post_id).await? {
        Some(post) if post.is_published => {}
        _ => return Err(AppError::not_found("Post")),
    }

    // Replies are one level deep and stay on the parent's post
    if let Some(parent_id) = input.parent_id {
        let parent = state.db.get_comment(parent_id).await?;
        let valid = matches!(
            &parent,
            Some(parent) if parent.post_id == post_id && parent.parent_id.is_none()
        );
        if !valid {
            return Err(AppError::validation("Invalid parent comment"));
        }
    }

    let comment = state.db.create_comment(author.id, &input).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub post_id: Option<i64>,
    pub song_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub liked: bool,
}

/// Flip the caller's like on exactly one post or song.
pub async fn toggle_like(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<LikeRequest>,
) -> AppResult<Json<LikeResponse>> {
    let target = LikeTarget::from_ids(input.post_id, input.song_id)
        .ok_or_else(|| AppError::validation("Exactly one of postId or songId is required"))?;

    if !state.db.like_target_visible(target).await? {
        return Err(AppError::not_found(match target {
            LikeTarget::Post(_) => "Post",
            LikeTarget::Song(_) => "Song",
        }));
    }

    let liked = state.db.toggle_like(user.id, target).await?;
    Ok(Json(LikeResponse { liked }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub i18n: MetricsReport,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        i18n: FallbackMetrics::global().report(),
    })
}
