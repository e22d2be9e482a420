use super::{now, Database};
use crate::models::LikeTarget;
use anyhow::Result;
use sqlx::Row;
use tracing::debug;

impl Database {
    /// Flip a user's like on a target. Returns the new state (`true` = liked).
    ///
    /// Runs as one transaction: a conditional delete, then an insert only if
    /// nothing was deleted. The `(user, kind, target)` uniqueness constraint
    /// keeps concurrent double submissions from creating duplicate rows.
    pub async fn toggle_like(&self, user_id: i64, target: LikeTarget) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            "DELETE FROM likes WHERE user_id = ?1 AND target_kind = ?2 AND target_id = ?3",
        )
        .bind(user_id)
        .bind(target.kind())
        .bind(target.id())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let liked = if removed > 0 {
            false
        } else {
            sqlx::query(
                "INSERT INTO likes (user_id, target_kind, target_id, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (user_id, target_kind, target_id) DO NOTHING",
            )
            .bind(user_id)
            .bind(target.kind())
            .bind(target.id())
            .bind(now())
            .execute(&mut *tx)
            .await?;
            true
        };

        tx.commit().await?;
        debug!(user_id, kind = target.kind(), id = target.id(), liked, "Toggled like");
        Ok(liked)
    }

    /// Whether the post or song a like would point at exists and is public:
    /// drafts and inactive songs cannot be liked.
    pub async fn like_target_visible(&self, target: LikeTarget) -> Result<bool> {
        let sql = match target {
            LikeTarget::Post(_) => {
                "SELECT COUNT(*) AS count FROM posts WHERE id = ?1 AND is_published = 1"
            }
            LikeTarget::Song(_) => {
                "SELECT COUNT(*) AS count FROM songs WHERE id = ?1 AND is_active = 1"
            }
        };
        let row = sqlx::query(sql)
            .bind(target.id())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("count")? > 0)
    }

    pub async fn count_likes(&self, target: LikeTarget) -> Result<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM likes WHERE target_kind = ?1 AND target_id = ?2",
        )
        .bind(target.kind())
        .bind(target.id())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("count")?)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::*;
    use crate::models::{LikeTarget, NewSong, Role};

    #[tokio::test]
    async fn test_toggle_like_twice_restores_count() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;
        let dean = artist(&db, "Dean").await;
        let track = song(&db, "Instagram", dean.id).await;
        let target = LikeTarget::Song(track.id);

        let before = db.count_likes(target).await.unwrap();
        assert!(db.toggle_like(fan.id, target).await.unwrap());
        assert_eq!(db.count_likes(target).await.unwrap(), before + 1);
        assert!(!db.toggle_like(fan.id, target).await.unwrap());
        assert_eq!(db.count_likes(target).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_likes_are_per_user_and_kind() {
        let (db, _temp_dir) = create_test_db().await;
        let a = user(&db, "a", Role::User).await;
        let b = user(&db, "b", Role::User).await;
        let p = post(&db, "Hello", a.id, true).await;

        assert!(db.toggle_like(a.id, LikeTarget::Post(p.id)).await.unwrap());
        assert!(db.toggle_like(b.id, LikeTarget::Post(p.id)).await.unwrap());
        assert_eq!(db.count_likes(LikeTarget::Post(p.id)).await.unwrap(), 2);
        // Same id, other kind
        assert_eq!(db.count_likes(LikeTarget::Song(p.id)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_toggles_never_duplicate() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;
        let p = post(&db, "Hello", fan.id, true).await;
        let target = LikeTarget::Post(p.id);

        let (first, second) = tokio::join!(
            db.toggle_like(fan.id, target),
            db.toggle_like(fan.id, target)
        );
        // With SQLite's single writer the toggles serialize or one fails busy
        let succeeded = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert!(succeeded >= 1, "At least one toggle should commit: {:?} {:?}", first, second);

        // Two committed toggles cancel out; one leaves a single like
        let expected = (succeeded % 2) as i64;
        assert_eq!(db.count_likes(target).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_like_target_visible() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;
        let p = post(&db, "Hello", fan.id, true).await;

        assert!(db.like_target_visible(LikeTarget::Post(p.id)).await.unwrap());
        assert!(!db.like_target_visible(LikeTarget::Song(p.id)).await.unwrap());
        assert!(!db.like_target_visible(LikeTarget::Post(999)).await.unwrap());
    }

    #[tokio::test]
    async fn test_drafts_and_inactive_songs_are_not_likeable() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;
        let draft = post(&db, "Draft", fan.id, false).await;
        let dean = artist(&db, "Dean").await;
        let hidden = db
            .create_song(&NewSong {
                title: "Unreleased".to_string(),
                artist_id: Some(dean.id),
                is_active: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!db.like_target_visible(LikeTarget::Post(draft.id)).await.unwrap());
        assert!(!db.like_target_visible(LikeTarget::Song(hidden.id)).await.unwrap());
    }
}
