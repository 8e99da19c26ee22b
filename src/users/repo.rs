use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::users::validate::NewUser;

/// Role a user plays in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Teacher,
    Student,
    Parent,
    PrivateTutor,
}

impl UserType {
    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "TEACHER" => Some(Self::Teacher),
            "STUDENT" => Some(Self::Student),
            "PARENT" => Some(Self::Parent),
            "PRIVATE_TUTOR" => Some(Self::PrivateTutor),
            _ => None,
        }
    }
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// User as returned by lookups. The password hash is projected out at the
/// query level, not merely hidden at serialization time.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Insert one user; the database generates `id` and `created_at`.
    pub async fn create(db: &PgPool, new: &NewUser, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, user_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, user_type, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(password_hash)
        .bind(new.user_type)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Remove every user. Seed-tool only.
    pub async fn delete_all(db: &PgPool) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM users").execute(db).await?;
        Ok(res.rows_affected())
    }
}

impl PublicUser {
    pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<PublicUser>> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, email, user_type, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<PublicUser>> {
        let rows = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, email, user_type, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
