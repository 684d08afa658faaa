use sqlx::PgPool;

use crate::error::DbError;
use crate::models::User;

#[tracing::instrument(skip(pool))]
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DbError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[tracing::instrument(skip(pool))]
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, DbError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[tracing::instrument(skip(pool, password))]
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, DbError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
