use super::{fold, fold_opt, now, Database};
use crate::models::{DashboardTotals, NewPost, PageRequest, Post, PostListItem, Tag};
use crate::slug::{slugify, unique_slug};
use anyhow::{Context, Result};
use sqlx::{FromRow, Row};
use std::collections::HashMap;

pub(crate) const POST_COLUMNS: &str = "p.id AS id, p.title AS title, p.slug AS slug,
    p.content AS content, p.excerpt AS excerpt, p.author_id AS author_id,
    p.artist_id AS artist_id, p.is_published AS is_published,
    p.published_at AS published_at, p.created_at AS created_at";

/// Post list rows: post columns, author, artist summary, comment and like counts.
pub(crate) const POST_LIST_SELECT: &str = "SELECT p.id AS id, p.title AS title, p.slug AS slug,
    p.content AS content, p.excerpt AS excerpt, p.author_id AS author_id,
    p.artist_id AS artist_id, p.is_published AS is_published,
    p.published_at AS published_at, p.created_at AS created_at,
    u.username AS author_username, u.name AS author_name,
    a.name AS artist_name, a.slug AS artist_slug,
    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id AND c.is_active = 1) AS comment_count,
    (SELECT COUNT(*) FROM likes l WHERE l.target_kind = 'post' AND l.target_id = p.id) AS like_count
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN artists a ON a.id = p.artist_id";

#[derive(FromRow)]
struct PostTagRow {
    post_id: i64,
    #[sqlx(flatten)]
    tag: Tag,
}

impl Database {
    /// Insert a post and link its tags in one transaction.
    ///
    /// `published_at` is only set for published posts. Tag ids that name no
    /// tag are skipped. The HTML body is sanitized before it is stored, since
    /// the post page renders it unescaped.
    pub async fn create_post(&self, author_id: i64, post: &NewPost) -> Result<Post> {
        let content = ammonia::clean(&post.content);
        let base = slugify(&post.title, "post");
        let slug = unique_slug(&base, |candidate| self.post_slug_exists(candidate)).await?;
        let created_at = now();
        let published_at = post.is_published.then(|| created_at.clone());

        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query(
            "INSERT INTO posts (title, slug, content, excerpt, author_id, artist_id,
                                is_published, published_at, created_at,
                                title_folded, content_folded, excerpt_folded)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             RETURNING id",
        )
        .bind(post.title.trim())
        .bind(&slug)
        .bind(&content)
        .bind(&post.excerpt)
        .bind(author_id)
        .bind(post.artist_id)
        .bind(post.is_published)
        .bind(published_at)
        .bind(created_at)
        .bind(fold(post.title.trim()))
        .bind(fold(&content))
        .bind(fold_opt(&post.excerpt))
        .fetch_one(&mut *tx)
        .await
        .context(format!("Failed to create post {}", slug))?
        .try_get("id")?;

        for tag_id in &post.selected_tags {
            sqlx::query(
                "INSERT OR IGNORE INTO post_tags (post_id, tag_id)
                 SELECT ?1, id FROM tags WHERE id = ?2",
            )
            .bind(id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.get_post(id).await?.context("Created post disappeared")
    }

    async fn post_slug_exists(&self, slug: String) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE slug = ?1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("count")? > 0)
    }

    pub async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    /// One page of posts, newest first, plus the total matching row count.
    pub async fn list_posts(
        &self,
        published_only: bool,
        page: PageRequest,
    ) -> Result<(Vec<PostListItem>, i64)> {
        let sql = format!(
            "{POST_LIST_SELECT}
             WHERE (?1 = 0 OR p.is_published = 1)
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT ?2 OFFSET ?3"
        );
        let items = sqlx::query_as::<_, PostListItem>(&sql)
            .bind(published_only)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool);

        let total =
            sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE (?1 = 0 OR is_published = 1)")
                .bind(published_only)
                .fetch_one(&self.pool);

        let (items, total) = futures::try_join!(items, total)?;
        Ok((self.with_tags(items).await?, total.try_get("count")?))
    }

    /// One page of published posts by publish time (community page).
    pub async fn published_posts_page(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<PostListItem>, i64)> {
        let sql = format!(
            "{POST_LIST_SELECT}
             WHERE p.is_published = 1
             ORDER BY p.published_at DESC, p.id DESC
             LIMIT ?1 OFFSET ?2"
        );
        let items = sqlx::query_as::<_, PostListItem>(&sql)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool);

        let total = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE is_published = 1")
            .fetch_one(&self.pool);

        let (items, total) = futures::try_join!(items, total)?;
        Ok((self.with_tags(items).await?, total.try_get("count")?))
    }

    /// A published post by slug. Drafts are reported as missing.
    pub async fn get_published_post_by_slug(&self, slug: &str) -> Result<Option<PostListItem>> {
        let post = sqlx::query_as::<_, PostListItem>(&format!(
            "{POST_LIST_SELECT} WHERE p.slug = ?1 AND p.is_published = 1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        match post {
            Some(post) => Ok(self.with_tags(vec![post]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Latest published posts about an artist.
    pub async fn posts_for_artist(&self, artist_id: i64, limit: i64) -> Result<Vec<PostListItem>> {
        let posts = sqlx::query_as::<_, PostListItem>(&format!(
            "{POST_LIST_SELECT}
             WHERE p.artist_id = ?1 AND p.is_published = 1
             ORDER BY p.published_at DESC, p.id DESC
             LIMIT ?2"
        ))
        .bind(artist_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        self.with_tags(posts).await
    }

    /// Most recently created posts, drafts included (admin dashboard).
    pub async fn recent_posts(&self, limit: i64) -> Result<Vec<PostListItem>> {
        let posts = sqlx::query_as::<_, PostListItem>(&format!(
            "{POST_LIST_SELECT}
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// Fill in `tags` for each post with one query.
    pub(crate) async fn with_tags(&self, mut posts: Vec<PostListItem>) -> Result<Vec<PostListItem>> {
        if posts.is_empty() {
            return Ok(posts);
        }

        let ids: Vec<i64> = posts.iter().map(|p| p.post.id).collect();
        let rows = sqlx::query_as::<_, PostTagRow>(
            "SELECT pt.post_id AS post_id, t.id AS id, t.name AS name, t.slug AS slug,
                    t.color AS color
             FROM post_tags pt
             JOIN tags t ON t.id = pt.tag_id
             WHERE pt.post_id IN (SELECT value FROM json_each(?1))
             ORDER BY t.name ASC",
        )
        .bind(serde_json::to_string(&ids)?)
        .fetch_all(&self.pool)
        .await?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_post.entry(row.post_id).or_default().push(row.tag);
        }
        for post in &mut posts {
            post.tags = by_post.remove(&post.post.id).unwrap_or_default();
        }
        Ok(posts)
    }

    pub async fn create_tag(&self, name: &str, color: Option<&str>) -> Result<Tag> {
        let base = slugify(name, "tag");
        let slug = unique_slug(&base, |candidate| self.tag_slug_exists(candidate)).await?;

        let tag = sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name, slug, color) VALUES (?1, ?2, ?3)
             RETURNING id, name, slug, color",
        )
        .bind(name.trim())
        .bind(&slug)
        .bind(color)
        .fetch_one(&self.pool)
        .await
        .context(format!("Failed to create tag {}", slug))?;
        Ok(tag)
    }

    async fn tag_slug_exists(&self, slug: String) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM tags WHERE slug = ?1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("count")? > 0)
    }

    pub async fn count_tags(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM tags")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    pub async fn count_posts(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    /// Entity totals for the admin dashboard, counted concurrently.
    pub async fn dashboard_totals(&self) -> Result<DashboardTotals> {
        let (artists, songs, posts, users) = futures::try_join!(
            self.count_artists(),
            self.count_songs(),
            self.count_posts(),
            self.count_users(),
        )?;
        Ok(DashboardTotals {
            artists,
            songs,
            posts,
            users,
        })
    }
}
