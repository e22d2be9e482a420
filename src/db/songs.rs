use super::{fold, fold_opt, now, Database};
use crate::models::{NewSong, Song, SongListItem};
use crate::slug::{slugify, unique_slug};
use anyhow::{Context, Result};
use sqlx::Row;

pub(crate) const SONG_COLUMNS: &str = "s.id AS id, s.title AS title, s.slug AS slug,
    s.description AS description, s.youtube_url AS youtube_url, s.duration AS duration,
    s.release_date AS release_date, s.artist_id AS artist_id, s.is_active AS is_active,
    s.created_at AS created_at";

/// Song list rows: song columns, artist name/slug and like count.
pub(crate) const SONG_LIST_SELECT: &str = "SELECT s.id AS id, s.title AS title, s.slug AS slug,
    s.description AS description, s.youtube_url AS youtube_url, s.duration AS duration,
    s.release_date AS release_date, s.artist_id AS artist_id, s.is_active AS is_active,
    s.created_at AS created_at, a.name AS artist_name, a.slug AS artist_slug,
    (SELECT COUNT(*) FROM likes l WHERE l.target_kind = 'song' AND l.target_id = s.id) AS like_count
    FROM songs s
    JOIN artists a ON a.id = s.artist_id";

impl Database {
    /// Insert a song for an existing artist. Slug rules match artists.
    pub async fn create_song(&self, song: &NewSong) -> Result<Song> {
        let artist_id = song.artist_id.context("Song needs an artist")?;
        let base = slugify(&song.title, "song");
        let slug = unique_slug(&base, |candidate| self.song_slug_exists(candidate)).await?;

        let id: i64 = sqlx::query(
            "INSERT INTO songs (title, slug, description, youtube_url, duration, release_date,
                                artist_id, is_active, created_at, title_folded, description_folded)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             RETURNING id",
        )
        .bind(song.title.trim())
        .bind(&slug)
        .bind(&song.description)
        .bind(&song.youtube_url)
        .bind(&song.duration)
        .bind(song.release_date)
        .bind(artist_id)
        .bind(song.is_active.unwrap_or(true))
        .bind(now())
        .bind(fold(song.title.trim()))
        .bind(fold_opt(&song.description))
        .fetch_one(&self.pool)
        .await
        .context(format!("Failed to create song {}", slug))?
        .try_get("id")?;

        self.get_song(id).await?.context("Created song disappeared")
    }

    async fn song_slug_exists(&self, slug: String) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM songs WHERE slug = ?1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("count")? > 0)
    }

    pub async fn get_song(&self, id: i64) -> Result<Option<Song>> {
        let song = sqlx::query_as::<_, Song>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs s WHERE s.id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(song)
    }

    /// Active songs, newest first, optionally capped (music and home pages).
    pub async fn list_active_songs(&self, limit: Option<i64>) -> Result<Vec<SongListItem>> {
        let songs = sqlx::query_as::<_, SongListItem>(&format!(
            "{SONG_LIST_SELECT}
             WHERE s.is_active = 1
             ORDER BY s.created_at DESC, s.id DESC
             LIMIT ?1"
        ))
        .bind(limit.unwrap_or(-1))
        .fetch_all(&self.pool)
        .await?;
        Ok(songs)
    }

    /// An artist's active songs, newest first, optionally capped.
    pub async fn songs_for_artist(
        &self,
        artist_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<SongListItem>> {
        let songs = sqlx::query_as::<_, SongListItem>(&format!(
            "{SONG_LIST_SELECT}
             WHERE s.artist_id = ?1 AND s.is_active = 1
             ORDER BY s.created_at DESC, s.id DESC
             LIMIT ?2"
        ))
        .bind(artist_id)
        .bind(limit.unwrap_or(-1))
        .fetch_all(&self.pool)
        .await?;
        Ok(songs)
    }

    pub async fn count_songs(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM songs")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}
