use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    FromRow, Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};

use crate::domain::{models::Signup, repositories::SignupRepository};

pub type SqlitePool = Pool<Sqlite>;

pub async fn connect(database_path: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(2000))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS email_signups (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          email TEXT NOT NULL UNIQUE,
          created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(Clone)]
pub struct SqliteSignupRepository {
    pool: SqlitePool,
}

impl SqliteSignupRepository {
    pub fn new(pool: SqlitePool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl SignupRepository for SqliteSignupRepository {
    async fn insert_if_absent(
        &self,
        email: &str,
        created_at: DateTime<Utc>,
    ) -> anyhow::Result<Signup> {
        let inserted = sqlx::query_as::<_, SignupRecord>(
            r#"
            INSERT INTO email_signups (email, created_at)
            VALUES (?, ?)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .bind(created_at.to_rfc3339())
        .fetch_optional(&self.pool)
        .await?;

        if let Some(record) = inserted {
            return record.try_into();
        }

        // Lost the insert race or the email was already present; either way
        // the winning row is the canonical one.
        let existing = sqlx::query_as::<_, SignupRecord>(
            r#"
            SELECT id, email, created_at
            FROM email_signups
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        existing.try_into()
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Signup>> {
        let rows = sqlx::query_as::<_, SignupRecord>(
            r#"
            SELECT id, email, created_at
            FROM email_signups
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(|record| record.try_into()).collect()
    }
}

#[derive(FromRow)]
struct SignupRecord {
    id: i64,
    email: String,
    created_at: String,
}

impl TryFrom<SignupRecord> for Signup {
    type Error = anyhow::Error;

    fn try_from(value: SignupRecord) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&value.created_at)
            .map_err(|err| anyhow::anyhow!("bad created_at {:?}: {err}", value.created_at))?
            .with_timezone(&Utc);
        Ok(Self {
            id: value.id,
            email: value.email,
            created_at,
        })
    }
}
