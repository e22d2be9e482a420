use super::artists::{ARTIST_COLUMNS, ARTIST_COUNTS};
use super::posts::POST_LIST_SELECT;
use super::songs::SONG_LIST_SELECT;
use super::{like_pattern, Database};
use crate::models::{ArtistListItem, PostListItem, SongListItem};
use crate::search::{CatalogSearch, SortKey};
use anyhow::Result;

// Artists have no likes, so `popular` falls through to the newest order.
fn artist_order(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Alphabetical => "a.name ASC, a.id ASC",
        _ => "a.created_at DESC, a.id DESC",
    }
}

fn song_order(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Popular => "like_count DESC, s.created_at DESC, s.id DESC",
        SortKey::Alphabetical => "s.title ASC, s.id ASC",
        _ => "s.created_at DESC, s.id DESC",
    }
}

fn post_order(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Popular => "like_count DESC, p.published_at DESC, p.id DESC",
        SortKey::Alphabetical => "p.title ASC, p.id ASC",
        _ => "p.published_at DESC, p.id DESC",
    }
}

impl CatalogSearch for Database {
    async fn search_artists(
        &self,
        query: &str,
        sort: SortKey,
        limit: i64,
    ) -> Result<Vec<ArtistListItem>> {
        let artists = sqlx::query_as::<_, ArtistListItem>(&format!(
            "SELECT {ARTIST_COLUMNS}, {ARTIST_COUNTS}
             FROM artists a
             WHERE a.is_active = 1
               AND (a.name_folded LIKE ?1 ESCAPE '\\' OR a.bio_folded LIKE ?1 ESCAPE '\\')
             ORDER BY {}
             LIMIT ?2",
            artist_order(sort)
        ))
        .bind(like_pattern(query))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(artists)
    }

    async fn search_songs(
        &self,
        query: &str,
        sort: SortKey,
        limit: i64,
    ) -> Result<Vec<SongListItem>> {
        let songs = sqlx::query_as::<_, SongListItem>(&format!(
            "{SONG_LIST_SELECT}
             WHERE s.is_active = 1
               AND (s.title_folded LIKE ?1 ESCAPE '\\'
                    OR s.description_folded LIKE ?1 ESCAPE '\\'
                    OR a.name_folded LIKE ?1 ESCAPE '\\')
             ORDER BY {}
             LIMIT ?2",
            song_order(sort)
        ))
        .bind(like_pattern(query))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(songs)
    }

    async fn search_posts(
        &self,
        query: &str,
        sort: SortKey,
        limit: i64,
    ) -> Result<Vec<PostListItem>> {
        let posts = sqlx::query_as::<_, PostListItem>(&format!(
            "{POST_LIST_SELECT}
             WHERE p.is_published = 1
               AND (p.title_folded LIKE ?1 ESCAPE '\\'
                    OR p.content_folded LIKE ?1 ESCAPE '\\'
                    OR p.excerpt_folded LIKE ?1 ESCAPE '\\')
             ORDER BY {}
             LIMIT ?2",
            post_order(sort)
        ))
        .bind(like_pattern(query))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        self.with_tags(posts).await
    }
}
