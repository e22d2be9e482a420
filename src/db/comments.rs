use super::{now, Database};
use crate::models::{Comment, CommentView, NewComment, RecentComment};
use anyhow::{Context, Result};
use std::collections::HashMap;

const COMMENT_COLUMNS: &str = "c.id AS id, c.content AS content, c.post_id AS post_id,
    c.author_id AS author_id, c.parent_id AS parent_id, c.is_active AS is_active,
    c.created_at AS created_at";

impl Database {
    /// Insert a comment. Callers check that the post exists and that the
    /// parent (if any) is a top-level comment on the same post.
    pub async fn create_comment(&self, author_id: i64, comment: &NewComment) -> Result<Comment> {
        let post_id = comment.post_id.context("Comment needs a post")?;

        let created = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (content, post_id, author_id, parent_id, is_active, created_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5)
             RETURNING id, content, post_id, author_id, parent_id, is_active, created_at",
        )
        .bind(comment.content.trim())
        .bind(post_id)
        .bind(author_id)
        .bind(comment.parent_id)
        .bind(now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create comment")?;

        Ok(created)
    }

    pub async fn get_comment(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(comment)
    }

    /// Active comments on a post as a one-level thread: top-level comments
    /// newest first, each with its active replies oldest first.
    pub async fn comments_for_post(&self, post_id: i64) -> Result<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentView>(&format!(
            "SELECT {COMMENT_COLUMNS}, u.username AS author_username, u.name AS author_name
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.post_id = ?1 AND c.is_active = 1
             ORDER BY c.created_at ASC, c.id ASC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        let (mut top_level, replies): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|c| c.comment.parent_id.is_none());

        let mut by_parent: HashMap<i64, Vec<CommentView>> = HashMap::new();
        for reply in replies {
            if let Some(parent_id) = reply.comment.parent_id {
                by_parent.entry(parent_id).or_default().push(reply);
            }
        }

        top_level.reverse();
        for comment in &mut top_level {
            comment.replies = by_parent.remove(&comment.comment.id).unwrap_or_default();
        }
        Ok(top_level)
    }

    /// Latest comments across all posts with their post titles.
    pub async fn recent_comments(&self, limit: i64) -> Result<Vec<RecentComment>> {
        let comments = sqlx::query_as::<_, RecentComment>(&format!(
            "SELECT {COMMENT_COLUMNS}, u.username AS author_username, u.name AS author_name,
                    p.title AS post_title, p.slug AS post_slug
             FROM comments c
             JOIN users u ON u.id = c.author_id
             JOIN posts p ON p.id = c.post_id
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::*;
    use crate::models::{NewComment, Role};

    fn reply(post_id: i64, parent_id: Option<i64>, content: &str) -> NewComment {
        NewComment {
            content: content.to_string(),
            post_id: Some(post_id),
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_create_comment_trims_content() {
        let (db, _temp_dir) = create_test_db().await;
        let author = user(&db, "fan", Role::User).await;
        let p = post(&db, "Show review", author.id, true).await;

        let comment = db
            .create_comment(author.id, &reply(p.id, None, "  great show  "))
            .await
            .unwrap();
        assert_eq!(comment.content, "great show");
        assert_eq!(comment.post_id, p.id);
        assert!(comment.parent_id.is_none());
        assert!(comment.is_active);

        let loaded = db.get_comment(comment.id).await.unwrap().unwrap();
        assert_eq!(loaded.content, "great show");
    }

    #[tokio::test]
    async fn test_comments_for_post_threading() {
        let (db, _temp_dir) = create_test_db().await;
        let author = user(&db, "fan", Role::User).await;
        let p = post(&db, "Show review", author.id, true).await;

        let first = db.create_comment(author.id, &reply(p.id, None, "first")).await.unwrap();
        let second = db.create_comment(author.id, &reply(p.id, None, "second")).await.unwrap();
        db.create_comment(author.id, &reply(p.id, Some(first.id), "reply a"))
            .await
            .unwrap();
        db.create_comment(author.id, &reply(p.id, Some(first.id), "reply b"))
            .await
            .unwrap();

        let thread = db.comments_for_post(p.id).await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].comment.id, second.id);
        assert!(thread[0].replies.is_empty());
        assert_eq!(thread[1].comment.id, first.id);
        let replies: Vec<_> = thread[1].replies.iter().map(|r| r.comment.content.as_str()).collect();
        assert_eq!(replies, vec!["reply a", "reply b"]);
        assert_eq!(thread[1].author.username, "fan");
    }

    #[tokio::test]
    async fn test_recent_comments_include_post_title() {
        let (db, _temp_dir) = create_test_db().await;
        let author = user(&db, "fan", Role::User).await;
        let p = post(&db, "Show review", author.id, true).await;
        db.create_comment(author.id, &reply(p.id, None, "one")).await.unwrap();
        db.create_comment(author.id, &reply(p.id, None, "two")).await.unwrap();

        let recent = db.recent_comments(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].comment.content, "two");
        assert_eq!(recent[0].post_title, "Show review");
        assert_eq!(recent[0].post_slug, p.slug);
    }
}
