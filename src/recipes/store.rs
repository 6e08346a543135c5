//! Recipe Storage
//! Mission: SQLite-backed recipe collection with filtered reads and
//! partial updates
//!
//! A single connection guarded by a mutex serializes all access, which
//! makes update/delete on the same id linearizable.

use crate::recipes::models::{CreateRecipeRequest, Recipe, RecipeQuery, UpdateRecipeRequest};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::{params, params_from_iter, Connection, OpenFlags, ToSql};
use std::sync::Arc;
use tracing::info;

const SCHEMA_SQL: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;

CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    time_minutes INTEGER NOT NULL
);
"#;

/// Recipe storage
pub struct RecipeStore {
    conn: Arc<Mutex<Connection>>,
}

impl RecipeStore {
    /// Create new recipe storage and initialize schema
    pub fn new(db_path: &str) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX; // We handle our own locking

        let conn = Connection::open_with_flags(db_path, flags)
            .with_context(|| format!("Failed to open database at {}", db_path))?;

        conn.execute_batch(SCHEMA_SQL)
            .context("Failed to apply recipe schema")?;

        info!("📦 Recipe storage initialized at: {}", db_path);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a new recipe with a fresh server-assigned id
    pub fn insert(&self, new: &CreateRecipeRequest) -> Result<Recipe> {
        let conn = self.conn.lock();

        conn.execute(
            "INSERT INTO recipes (title, description, time_minutes)
             VALUES (?1, ?2, ?3)",
            params![new.title, new.description, new.time_minutes],
        )
        .context("Failed to insert recipe")?;

        Ok(Recipe {
            id: conn.last_insert_rowid(),
            title: new.title.clone(),
            description: new.description.clone(),
            time_minutes: new.time_minutes,
        })
    }

    /// List recipes matching the optional filters.
    ///
    /// `description` is a case-insensitive substring match, `max_time` an
    /// inclusive upper bound on `time_minutes`; both combine with AND.
    /// Results come back in insertion order (ascending id).
    pub fn list(&self, filter: &RecipeQuery) -> Result<Vec<Recipe>> {
        let conn = self.conn.lock();

        let mut sql = String::from("SELECT id, title, description, time_minutes FROM recipes");
        let mut clauses: Vec<&str> = Vec::new();
        let mut bindings: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(needle) = filter.description.as_deref() {
            clauses.push("instr(lower(description), lower(?)) > 0");
            bindings.push(Box::new(needle.to_string()));
        }
        if let Some(max_time) = filter.max_time {
            clauses.push("time_minutes <= ?");
            bindings.push(Box::new(max_time));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = conn.prepare(&sql)?;
        let recipes = stmt
            .query_map(params_from_iter(bindings), Self::row_to_recipe)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Get a single recipe by id
    pub fn get(&self, id: i64) -> Result<Option<Recipe>> {
        let conn = self.conn.lock();
        Self::get_with_conn(&conn, id)
    }

    /// Apply a partial update. Only the supplied fields change; absent
    /// fields keep their stored values. Returns `None` if the id does
    /// not exist (nothing is written in that case).
    pub fn update(&self, id: i64, changes: &UpdateRecipeRequest) -> Result<Option<Recipe>> {
        let conn = self.conn.lock();

        let Some(mut recipe) = Self::get_with_conn(&conn, id)? else {
            return Ok(None);
        };

        if let Some(title) = &changes.title {
            recipe.title = title.clone();
        }
        if let Some(description) = &changes.description {
            recipe.description = description.clone();
        }
        if let Some(time_minutes) = changes.time_minutes {
            recipe.time_minutes = time_minutes;
        }

        conn.execute(
            "UPDATE recipes SET title = ?1, description = ?2, time_minutes = ?3 WHERE id = ?4",
            params![recipe.title, recipe.description, recipe.time_minutes, id],
        )
        .context("Failed to update recipe")?;

        Ok(Some(recipe))
    }

    /// Delete a recipe by id. Returns false if it did not exist, so a
    /// repeated delete on the same id reports not-found.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock();

        let rows_affected = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id])?;

        Ok(rows_affected > 0)
    }

    fn get_with_conn(conn: &Connection, id: i64) -> Result<Option<Recipe>> {
        let mut stmt = conn
            .prepare("SELECT id, title, description, time_minutes FROM recipes WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_recipe) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn row_to_recipe(row: &rusqlite::Row) -> rusqlite::Result<Recipe> {
        Ok(Recipe {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            time_minutes: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (RecipeStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = RecipeStore::new(db_path).unwrap();
        (store, temp_file)
    }

    fn soup() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: "Soup".to_string(),
            description: "Hot soup".to_string(),
            time_minutes: 20,
        }
    }

    fn salad() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: "Salad".to_string(),
            description: "Cold greens".to_string(),
            time_minutes: 10,
        }
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let (store, _temp) = create_test_store();

        let a = store.insert(&soup()).unwrap();
        let b = store.insert(&soup()).unwrap();

        // No uniqueness constraint on content; ids differ
        assert_ne!(a.id, b.id);
        assert_eq!(store.list(&RecipeQuery::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_list_without_filters_returns_everything_in_order() {
        let (store, _temp) = create_test_store();

        let a = store.insert(&soup()).unwrap();
        let b = store.insert(&salad()).unwrap();

        let all = store.list(&RecipeQuery::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[1].id, b.id);
    }

    #[test]
    fn test_max_time_filter_is_inclusive() {
        let (store, _temp) = create_test_store();

        store.insert(&soup()).unwrap(); // 20 min
        store.insert(&salad()).unwrap(); // 10 min

        let filter = RecipeQuery {
            max_time: Some(10),
            ..Default::default()
        };
        let matched = store.list(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Salad");

        // Exactly at the bound counts
        let filter = RecipeQuery {
            max_time: Some(20),
            ..Default::default()
        };
        assert_eq!(store.list(&filter).unwrap().len(), 2);

        let filter = RecipeQuery {
            max_time: Some(9),
            ..Default::default()
        };
        assert!(store.list(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_description_filter_is_case_insensitive_contains() {
        let (store, _temp) = create_test_store();

        store.insert(&soup()).unwrap(); // "Hot soup"
        store.insert(&salad()).unwrap(); // "Cold greens"

        let filter = RecipeQuery {
            description: Some("hot".to_string()),
            ..Default::default()
        };
        let matched = store.list(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Soup");

        // Substring in the middle, mixed case
        let filter = RecipeQuery {
            description: Some("GREEN".to_string()),
            ..Default::default()
        };
        assert_eq!(store.list(&filter).unwrap().len(), 1);

        let filter = RecipeQuery {
            description: Some("stew".to_string()),
            ..Default::default()
        };
        assert!(store.list(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_combined_filters_intersect() {
        let (store, _temp) = create_test_store();

        store.insert(&soup()).unwrap(); // Hot soup, 20 min
        store.insert(&salad()).unwrap(); // Cold greens, 10 min
        store
            .insert(&CreateRecipeRequest {
                title: "Stew".to_string(),
                description: "Hot stew".to_string(),
                time_minutes: 90,
            })
            .unwrap();

        let filter = RecipeQuery {
            description: Some("hot".to_string()),
            max_time: Some(30),
        };
        let matched = store.list(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Soup");
    }

    #[test]
    fn test_partial_update_touches_only_supplied_fields() {
        let (store, _temp) = create_test_store();

        let recipe = store.insert(&soup()).unwrap();

        let changes = UpdateRecipeRequest {
            title: Some("Broth".to_string()),
            ..Default::default()
        };
        let updated = store.update(recipe.id, &changes).unwrap().unwrap();

        assert_eq!(updated.title, "Broth");
        assert_eq!(updated.description, "Hot soup");
        assert_eq!(updated.time_minutes, 20);

        // Stored state matches the returned record
        let stored = store.get(recipe.id).unwrap().unwrap();
        assert_eq!(stored.title, "Broth");
        assert_eq!(stored.time_minutes, 20);
    }

    #[test]
    fn test_update_missing_id_is_rejected_without_writes() {
        let (store, _temp) = create_test_store();

        let recipe = store.insert(&soup()).unwrap();

        let changes = UpdateRecipeRequest {
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(store.update(recipe.id + 100, &changes).unwrap().is_none());

        // Existing record untouched
        let stored = store.get(recipe.id).unwrap().unwrap();
        assert_eq!(stored.title, "Soup");
    }

    #[test]
    fn test_delete_then_delete_again() {
        let (store, _temp) = create_test_store();

        let recipe = store.insert(&soup()).unwrap();

        assert!(store.delete(recipe.id).unwrap());
        assert!(store.get(recipe.id).unwrap().is_none());

        // Second delete on the same id reports not-found
        assert!(!store.delete(recipe.id).unwrap());
    }
}
