//! # propstore-store
//!
//! Typed key-value property storage on top of a single SQLite table.
//!
//! Every property is one row of `property_table(key, value, type)`. The
//! `type` column pins the declared type of the key at creation time; reads
//! must ask for that type and updates must supply it.
//!
//! ## Write Protocol
//!
//! [`PropertyStore::set`] tries a plain insert first. A primary key conflict
//! means the key exists, and only then are the overwrite flag and the
//! stored type consulted. The whole sequence runs in one `IMMEDIATE`
//! transaction so no other writer can slip in between the failed insert
//! and the update.
//!
//! ## Modules
//!
//! - `config`: connection settings (path, journal mode, busy timeout)
//! - `error`: [`StoreError`] and the coarse [`Status`] taxonomy
//! - `property`: the [`PropertyStore`] interface
//! - `sqlite`: the SQLite implementation

mod config;
mod error;
mod property;
mod sqlite;

pub use config::{ConfigError, JournalMode, StoreConfig, Synchronous, DEFAULT_DB_PATH};
pub use error::{Status, StoreError};
pub use property::PropertyStore;
pub use sqlite::{SqliteStore, PROPERTY_TABLE};

pub use propstore_value::{CodecError, PropertyType, TypeTag, Value};
