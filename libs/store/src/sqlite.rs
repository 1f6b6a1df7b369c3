//! SQLite-backed property store.

use std::path::Path;

use propstore_value::{decode, encode, TypeTag, Value};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, TransactionBehavior};
use tracing::{debug, warn};

use crate::{PropertyStore, StoreConfig, StoreError};

/// Name of the table holding all properties.
pub const PROPERTY_TABLE: &str = "property_table";

/// Property store over a single SQLite connection.
///
/// The store owns the connection for its whole lifetime. Writers on other
/// connections to the same file are serialized by SQLite; the busy timeout
/// from [`StoreConfig`] decides how long a write waits for them.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store at the given path with default settings.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::open_with(&StoreConfig::new(path.as_ref()))
    }

    /// Open or create a store as described by `config`.
    pub fn open_with(config: &StoreConfig) -> Result<Self, StoreError> {
        let conn = Connection::open(&config.path)?;

        conn.busy_timeout(config.busy_timeout)?;
        let journal_mode: String = conn.pragma_update_and_check(
            None,
            "journal_mode",
            config.journal_mode.as_str(),
            |row| row.get(0),
        )?;
        conn.pragma_update(None, "synchronous", config.synchronous.as_str())?;

        debug!(
            path = %config.path.display(),
            journal_mode = %journal_mode,
            "Property store opened"
        );

        let store = Self { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize database schema.
    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS property_table (
                key TEXT PRIMARY KEY,
                value BLOB,
                type INTEGER
            );
            "#,
        )?;

        debug!(table = PROPERTY_TABLE, "Property store schema initialized");
        Ok(())
    }

    /// Delete `key`, reporting whether a row was removed.
    pub fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM property_table WHERE key = ?1", params![key])
            .map_err(|e| engine_error("delete", key, e))?;

        debug!(key, removed, "Property deleted");
        Ok(removed > 0)
    }

    /// Close the underlying connection.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn
            .close()
            .map_err(|(_, e)| engine_error("close", "", e))
    }
}

impl PropertyStore for SqliteStore {
    fn get(&self, key: &str, expected: TypeTag) -> Result<Value, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT value, type FROM property_table WHERE key = ?1",
                params![key],
                |row| Ok((stored_text(row.get_ref(0)?), row.get::<_, i64>(1)?)),
            )
            .optional()
            .map_err(|e| engine_error("get", key, e))?;

        let Some((text, ordinal)) = row else {
            return Err(StoreError::NotFound(key.to_string()));
        };

        let actual = tag_for(key, ordinal)?;
        if actual != expected {
            return Err(StoreError::InvalidType {
                key: key.to_string(),
                expected,
                actual,
            });
        }

        let text = text.ok_or_else(|| StoreError::corrupt(key, "value is not text"))?;

        decode(&text, expected).map_err(|source| {
            warn!(key, r#type = %expected, error = %source, "Stored property failed to decode");
            StoreError::Decode {
                key: key.to_string(),
                source,
            }
        })
    }

    fn type_of(&self, key: &str) -> Result<TypeTag, StoreError> {
        match stored_type(&self.conn, key).map_err(|e| engine_error("type", key, e))? {
            Some(ordinal) => tag_for(key, ordinal),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &Value, update: bool) -> Result<(), StoreError> {
        let tag = value.type_tag();
        let encoded = encode(value);

        // Take the write lock up front so the conflict check and the update
        // see the same row.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| engine_error("set", key, e))?;

        let inserted = tx.execute(
            "INSERT INTO property_table (key, value, type) VALUES (?1, ?2, ?3)",
            params![key, encoded, tag.ordinal()],
        );

        match inserted {
            Ok(_) => {
                debug!(key, r#type = %tag, "Property created");
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                if !update {
                    return Err(StoreError::AlreadyExists(key.to_string()));
                }

                let ordinal = stored_type(&tx, key)
                    .map_err(|e| engine_error("set", key, e))?
                    .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
                let actual = tag_for(key, ordinal)?;
                if actual != tag {
                    return Err(StoreError::InvalidType {
                        key: key.to_string(),
                        expected: tag,
                        actual,
                    });
                }

                tx.execute(
                    "UPDATE property_table SET value = ?1 WHERE key = ?2",
                    params![encoded, key],
                )
                .map_err(|e| engine_error("set", key, e))?;

                debug!(key, r#type = %tag, "Property updated");
            }
            Err(e) => return Err(engine_error("set", key, e)),
        }

        tx.commit().map_err(|e| engine_error("set", key, e))
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.remove(key).map(|_| ())
    }
}

fn stored_type(conn: &Connection, key: &str) -> Result<Option<i64>, rusqlite::Error> {
    conn.query_row(
        "SELECT type FROM property_table WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

fn stored_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8(bytes.to_vec()).ok(),
        ValueRef::Null | ValueRef::Integer(_) | ValueRef::Real(_) => None,
    }
}

fn tag_for(key: &str, ordinal: i64) -> Result<TypeTag, StoreError> {
    TypeTag::from_ordinal(ordinal)
        .ok_or_else(|| StoreError::corrupt(key, format!("unknown type ordinal {}", ordinal)))
}

/// Log an engine failure and wrap it for the caller.
fn engine_error(op: &'static str, key: &str, err: rusqlite::Error) -> StoreError {
    warn!(op, key, error = %err, "Property store engine error");
    StoreError::Sqlite(err)
}
