use super::{fold, fold_opt, now, Database};
use crate::models::{Artist, ArtistListItem, NewArtist, PageRequest};
use crate::slug::{slugify, unique_slug};
use anyhow::{Context, Result};
use sqlx::Row;

pub(crate) const ARTIST_COLUMNS: &str = "a.id AS id, a.name AS name, a.slug AS slug, a.bio AS bio,
    a.image AS image, a.website AS website, a.instagram AS instagram, a.youtube AS youtube,
    a.spotify AS spotify, a.soundcloud AS soundcloud, a.is_active AS is_active,
    a.created_at AS created_at";

pub(crate) const ARTIST_COUNTS: &str =
    "(SELECT COUNT(*) FROM songs s WHERE s.artist_id = a.id) AS song_count,
    (SELECT COUNT(*) FROM posts p WHERE p.artist_id = a.id) AS post_count";

impl Database {
    /// Insert an artist under a fresh slug derived from its name.
    ///
    /// A name whose slug is already taken gets a timestamp-suffixed slug;
    /// the existing row is never touched.
    pub async fn create_artist(&self, artist: &NewArtist) -> Result<Artist> {
        let base = slugify(&artist.name, "artist");
        let slug = unique_slug(&base, |candidate| self.artist_slug_exists(candidate)).await?;

        let id: i64 = sqlx::query(
            "INSERT INTO artists (name, slug, bio, image, website, instagram, youtube, spotify,
                                  soundcloud, is_active, created_at, name_folded, bio_folded)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
             RETURNING id",
        )
        .bind(artist.name.trim())
        .bind(&slug)
        .bind(&artist.bio)
        .bind(&artist.image)
        .bind(&artist.website)
        .bind(&artist.instagram)
        .bind(&artist.youtube)
        .bind(&artist.spotify)
        .bind(&artist.soundcloud)
        .bind(artist.is_active.unwrap_or(true))
        .bind(now())
        .bind(fold(artist.name.trim()))
        .bind(fold_opt(&artist.bio))
        .fetch_one(&self.pool)
        .await
        .context(format!("Failed to create artist {}", slug))?
        .try_get("id")?;

        self.get_artist(id)
            .await?
            .context("Created artist disappeared")
    }

    async fn artist_slug_exists(&self, slug: String) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM artists WHERE slug = ?1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("count")? > 0)
    }

    pub async fn get_artist(&self, id: i64) -> Result<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists a WHERE a.id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(artist)
    }

    pub async fn get_artist_by_slug(&self, slug: &str) -> Result<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists a WHERE a.slug = ?1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(artist)
    }

    /// One page of artists by name, with song/post counts, plus the total
    /// matching row count. Both queries run concurrently.
    pub async fn list_artists(
        &self,
        active_only: bool,
        page: PageRequest,
    ) -> Result<(Vec<ArtistListItem>, i64)> {
        let sql = format!(
            "SELECT {ARTIST_COLUMNS}, {ARTIST_COUNTS}
             FROM artists a
             WHERE (?1 = 0 OR a.is_active = 1)
             ORDER BY a.name ASC, a.id ASC
             LIMIT ?2 OFFSET ?3"
        );
        let items = sqlx::query_as::<_, ArtistListItem>(&sql)
            .bind(active_only)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool);

        let total =
            sqlx::query("SELECT COUNT(*) AS count FROM artists WHERE (?1 = 0 OR is_active = 1)")
                .bind(active_only)
                .fetch_one(&self.pool);

        let (items, total) = futures::try_join!(items, total)?;
        Ok((items, total.try_get("count")?))
    }

    /// Every active artist by name (artists page).
    pub async fn list_active_artists(&self) -> Result<Vec<ArtistListItem>> {
        let artists = sqlx::query_as::<_, ArtistListItem>(&format!(
            "SELECT {ARTIST_COLUMNS}, {ARTIST_COUNTS}
             FROM artists a
             WHERE a.is_active = 1
             ORDER BY a.name ASC, a.id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(artists)
    }

    /// Most recently added active artists (home page).
    pub async fn newest_active_artists(&self, limit: i64) -> Result<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists a
             WHERE a.is_active = 1
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(artists)
    }

    pub async fn count_artists(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM artists")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::*;
    use crate::models::{NewArtist, PageRequest, Role};

    #[tokio::test]
    async fn test_create_artist_defaults() {
        let (db, _temp_dir) = create_test_db().await;
        let created = db
            .create_artist(&NewArtist {
                name: "  Hyukoh ".to_string(),
                bio: Some("Seoul indie rock band".to_string()),
                instagram: Some("https://instagram.com/hyukoh".to_string()),
                ..Default::default()
            })
            .await
            .expect("Should create");

        assert_eq!(created.name, "Hyukoh");
        assert_eq!(created.slug, "hyukoh");
        assert!(created.is_active);
        assert_eq!(created.bio.as_deref(), Some("Seoul indie rock band"));
        assert!(created.website.is_none());
    }

    #[tokio::test]
    async fn test_create_artist_slug_collision_gets_suffix() {
        let (db, _temp_dir) = create_test_db().await;
        let first = artist(&db, "IU").await;
        let second = artist(&db, "iu").await;

        assert_eq!(first.slug, "iu");
        assert_ne!(second.slug, first.slug);
        assert!(second.slug.starts_with("iu-"));

        // The original row is untouched
        let original = db.get_artist_by_slug("iu").await.unwrap().unwrap();
        assert_eq!(original.id, first.id);
        assert_eq!(original.name, "IU");
    }

    #[tokio::test]
    async fn test_create_artist_hangul_name() {
        let (db, _temp_dir) = create_test_db().await;
        let a = artist(&db, "아이유").await;
        let b = artist(&db, "잔나비").await;

        assert_eq!(a.slug, "artist");
        assert!(b.slug.starts_with("artist-"));
    }

    #[tokio::test]
    async fn test_create_inactive_artist() {
        let (db, _temp_dir) = create_test_db().await;
        let created = db
            .create_artist(&NewArtist {
                name: "Retired".to_string(),
                is_active: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!created.is_active);
    }

    #[tokio::test]
    async fn test_get_artist_by_slug_missing() {
        let (db, _temp_dir) = create_test_db().await;
        assert!(db.get_artist_by_slug("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_artists_pagination_and_order() {
        let (db, _temp_dir) = create_test_db().await;
        for name in ["Dean", "Heize", "IU", "Adoy", "Se So Neon"] {
            artist(&db, name).await;
        }

        let (page1, total) = db
            .list_artists(false, PageRequest::new(Some(1), Some(2)))
            .await
            .unwrap();
        assert_eq!(total, 5);
        let names: Vec<_> = page1.iter().map(|a| a.artist.name.as_str()).collect();
        assert_eq!(names, vec!["Adoy", "Dean"]);

        let (page3, _) = db
            .list_artists(false, PageRequest::new(Some(3), Some(2)))
            .await
            .unwrap();
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].artist.name, "Se So Neon");
    }

    #[tokio::test]
    async fn test_list_artists_active_filter() {
        let (db, _temp_dir) = create_test_db().await;
        artist(&db, "Active").await;
        db.create_artist(&NewArtist {
            name: "Hidden".to_string(),
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

        let (all, all_total) = db.list_artists(false, PageRequest::new(None, None)).await.unwrap();
        let (active, active_total) = db.list_artists(true, PageRequest::new(None, None)).await.unwrap();

        assert_eq!((all.len(), all_total), (2, 2));
        assert_eq!((active.len(), active_total), (1, 1));
        assert_eq!(active[0].artist.name, "Active");
    }

    #[tokio::test]
    async fn test_list_artists_counts() {
        let (db, _temp_dir) = create_test_db().await;
        let iu = artist(&db, "IU").await;
        let admin = user(&db, "admin", Role::Admin).await;
        song(&db, "Palette", iu.id).await;
        song(&db, "Blueming", iu.id).await;
        db.create_post(
            admin.id,
            &crate::models::NewPost {
                title: "IU interview".to_string(),
                content: "...".to_string(),
                artist_id: Some(iu.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let artists = db.list_active_artists().await.unwrap();
        assert_eq!(artists[0].song_count, 2);
        assert_eq!(artists[0].post_count, 1);
    }

    #[tokio::test]
    async fn test_newest_active_artists() {
        let (db, _temp_dir) = create_test_db().await;
        artist(&db, "First").await;
        artist(&db, "Second").await;
        artist(&db, "Third").await;

        let newest = db.newest_active_artists(2).await.unwrap();
        let names: Vec<_> = newest.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Third", "Second"]);
    }

    #[tokio::test]
    async fn test_sql_injection_in_slug_lookup() {
        let (db, _temp_dir) = create_test_db().await;
        artist(&db, "IU").await;

        let result = db.get_artist_by_slug("iu' OR '1'='1").await.unwrap();
        assert!(result.is_none());
        assert_eq!(db.count_artists().await.unwrap(), 1);
    }
}
