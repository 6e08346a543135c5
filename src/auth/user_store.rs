//! User Storage
//! Mission: Store and manage user accounts with SQLite

use crate::auth::models::User;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::info;

/// User storage with SQLite backend
pub struct UserStore {
    db_path: String,
}

impl UserStore {
    /// Create a new user store and initialize database
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                secret TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get user by username
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, username, secret, created_at
             FROM users WHERE username = ?1",
        )?;

        let user_result = stmt.query_row(params![username], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                secret: row.get(2)?,
                created_at: row.get(3)?,
            })
        });

        match user_result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify username and secret. Exact byte-for-byte comparison,
    /// case-sensitive, no trimming.
    pub fn verify_secret(&self, username: &str, secret: &str) -> Result<bool> {
        match self.get_user_by_username(username)? {
            Some(user) => Ok(user.secret == secret),
            None => Ok(false),
        }
    }

    /// Create a new user. Fails if the username is already taken; the
    /// existing row is never overwritten.
    pub fn create_user(&self, username: &str, secret: &str) -> Result<User> {
        let created_at = Utc::now().to_rfc3339();

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO users (username, secret, created_at)
             VALUES (?1, ?2, ?3)",
            params![username, secret, created_at],
        )
        .context("Failed to insert user")?;

        let user = User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            secret: secret.to_string(),
            created_at,
        };

        info!("✅ Created user: {} (id {})", user.username, user.id);

        Ok(user)
    }
}
