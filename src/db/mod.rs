//! Relational store access over an `sqlx` SQLite pool.
//!
//! One `Database` handle is shared by every request; each entity's queries
//! live in their own submodule as `impl Database` blocks.

mod artists;
mod comments;
mod likes;
mod posts;
mod search;
mod songs;
mod users;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

const SCHEMA: [&str; 13] = [
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL UNIQUE,
        name TEXT,
        role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('admin', 'user')),
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS sessions (
        token TEXT PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        expires_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS artists (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        bio TEXT,
        name_folded TEXT NOT NULL DEFAULT '',
        bio_folded TEXT,
        image TEXT,
        website TEXT,
        instagram TEXT,
        youtube TEXT,
        spotify TEXT,
        soundcloud TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS songs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        description TEXT,
        title_folded TEXT NOT NULL DEFAULT '',
        description_folded TEXT,
        youtube_url TEXT,
        duration TEXT,
        release_date TEXT,
        artist_id INTEGER NOT NULL REFERENCES artists(id),
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        content TEXT NOT NULL,
        excerpt TEXT,
        title_folded TEXT NOT NULL DEFAULT '',
        content_folded TEXT NOT NULL DEFAULT '',
        excerpt_folded TEXT,
        author_id INTEGER NOT NULL REFERENCES users(id),
        artist_id INTEGER REFERENCES artists(id),
        is_published INTEGER NOT NULL DEFAULT 0,
        published_at TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        color TEXT
    )",
    "CREATE TABLE IF NOT EXISTS post_tags (
        post_id INTEGER NOT NULL REFERENCES posts(id),
        tag_id INTEGER NOT NULL REFERENCES tags(id),
        PRIMARY KEY (post_id, tag_id)
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        post_id INTEGER NOT NULL REFERENCES posts(id),
        author_id INTEGER NOT NULL REFERENCES users(id),
        parent_id INTEGER REFERENCES comments(id),
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS likes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        target_kind TEXT NOT NULL CHECK (target_kind IN ('post', 'song')),
        target_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE (user_id, target_kind, target_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_songs_artist ON songs(artist_id)",
    "CREATE INDEX IF NOT EXISTS idx_posts_artist ON posts(artist_id)",
    "CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(post_id)",
    "CREATE INDEX IF NOT EXISTS idx_likes_target ON likes(target_kind, target_id)",
];

impl Database {
    /// Open (creating if missing) the database at `database_url` and make
    /// sure every table exists.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .context(format!("Invalid database URL {}", database_url))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context(format!("Failed to open database at {}", database_url))?;

        let db = Self { pool };
        db.create_schema().await?;
        info!("Database ready at {}", database_url);
        Ok(db)
    }

    async fn create_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to create schema")?;
        }
        Ok(())
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Fixed-width UTC timestamp so `ORDER BY` on the text column is chronological.
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn now() -> String {
    timestamp(Utc::now())
}

/// Unicode lowercase form stored in the `*_folded` search columns.
///
/// SQLite's `LOWER()` and `LIKE` only fold ASCII, so `Ángel` would never
/// match `ángel` if the folding were left to the database.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}

pub(crate) fn fold_opt(text: &Option<String>) -> Option<String> {
    text.as_deref().map(fold)
}

/// Fold, escape `LIKE` wildcards and wrap in `%...%` for a substring match
/// against a `*_folded` column. Pair with `ESCAPE '\'` in the query.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in fold(query).chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_database_creation() {
        let (db, _temp_dir) = create_test_db().await;
        let totals = db.dashboard_totals().await.expect("Should count");
        assert_eq!(totals.artists, 0);
        assert_eq!(totals.songs, 0);
        assert_eq!(totals.posts, 0);
        assert_eq!(totals.users, 0);
    }

    #[tokio::test]
    async fn test_database_reopening() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        {
            let db = Database::connect(&url).await.expect("Failed to create database");
            artist(&db, "IU").await;
            db.close().await;
        }

        {
            let db = Database::connect(&url).await.expect("Failed to reopen database");
            let totals = db.dashboard_totals().await.expect("Should count");
            assert_eq!(totals.artists, 1, "Artist should persist");
        }
    }

    #[tokio::test]
    async fn test_invalid_database_path() {
        let result = Database::connect("sqlite:///non/existent/path/db.db").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_is_fixed_width() {
        let a = timestamp("2024-01-01T00:00:00Z".parse().unwrap());
        let b = timestamp("2024-01-01T00:00:00.5Z".parse().unwrap());
        assert_eq!(a.len(), b.len());
        assert!(a < b);
        assert_eq!(a, "2024-01-01T00:00:00.000000Z");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("IU"), "%iu%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn test_fold_handles_non_ascii_capitals() {
        assert_eq!(fold("Ángel Ñu"), "ángel ñu");
        assert_eq!(fold("ÉTÉ"), "été");
        assert_eq!(fold("아이유 IU"), "아이유 iu");
        assert_eq!(like_pattern("ÁNGEL"), "%ángel%");
        assert_eq!(fold_opt(&None), None);
    }
}
