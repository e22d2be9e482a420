use super::{now, timestamp, Database};
use crate::models::{Role, User};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use sqlx::Row;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, username, name, role, created_at";

impl Database {
    pub async fn create_user(
        &self,
        email: &str,
        username: &str,
        name: Option<&str>,
        role: Role,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, username, name, role, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(username)
        .bind(name)
        .bind(role)
        .bind(now())
        .fetch_one(&self.pool)
        .await
        .context(format!("Failed to create user {}", username))?;

        Ok(user)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Issue a session token for `user_id` valid for `ttl_hours`.
    pub async fn create_session(&self, user_id: i64, ttl_hours: i64) -> Result<String> {
        let token = Uuid::new_v4().simple().to_string();
        let expires_at = timestamp(Utc::now() + Duration::hours(ttl_hours));

        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?1, ?2, ?3)")
            .bind(&token)
            .bind(user_id)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .context("Failed to create session")?;

        Ok(token)
    }

    /// The user owning an unexpired session, if any.
    pub async fn user_for_session(&self, token: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.email, u.username, u.name, u.role, u.created_at
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.token = ?1 AND s.expires_at > ?2",
        )
        .bind(token)
        .bind(now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Drop expired sessions. Returns how many were removed.
    pub async fn purge_expired_sessions(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?1")
            .bind(now())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count_users(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::*;
    use crate::models::Role;

    #[tokio::test]
    async fn test_create_user() {
        let (db, _temp_dir) = create_test_db().await;
        let admin = user(&db, "admin", Role::Admin).await;

        assert_eq!(admin.username, "admin");
        assert_eq!(admin.email, "admin@example.com");
        assert!(admin.is_admin());
        assert_eq!(db.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (db, _temp_dir) = create_test_db().await;
        user(&db, "fan", Role::User).await;

        let result = db
            .create_user("fan@example.com", "other", None, Role::User)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let (db, _temp_dir) = create_test_db().await;
        let created = user(&db, "fan", Role::User).await;

        let found = db.get_user_by_email("fan@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(created.id));
        assert!(db.get_user_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;

        let token = db.create_session(fan.id, 24).await.unwrap();
        let found = db.user_for_session(&token).await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(fan.id));
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let (db, _temp_dir) = create_test_db().await;
        assert!(db.user_for_session("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_purged() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;

        let token = db.create_session(fan.id, -1).await.unwrap();
        assert!(db.user_for_session(&token).await.unwrap().is_none());

        assert_eq!(db.purge_expired_sessions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_session_tokens_are_unique() {
        let (db, _temp_dir) = create_test_db().await;
        let fan = user(&db, "fan", Role::User).await;

        let a = db.create_session(fan.id, 1).await.unwrap();
        let b = db.create_session(fan.id, 1).await.unwrap();
        assert_ne!(a, b);
    }
}
