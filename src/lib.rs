//! Minimal record-to-table mapping for MySQL.
//!
//! Structs become table rows via `#[derive(Record)]`; a [`DatabaseClient`]
//! issues the parameterized statements over one shared connection.
//!
//! ```rust,no_run
//! use recordbind::prelude::*;
//!
//! #[derive(Record, Default)]
//! #[record(table = "players")]
//! struct Player {
//!     #[record(key, column = "id")]
//!     id: i64,
//!     #[record(column = "name")]
//!     name: String,
//! }
//!
//! # async fn demo() -> Result<(), RecordBindError> {
//! let client = DatabaseClient::connect(ConnectOptions::new("app", "secret", "game")).await?;
//! client.insert(&Player { id: 1, name: "alice".into() }).await?;
//! let found: Option<Player> = client
//!     .first_as("SELECT * FROM players WHERE id = ^", vec![Value::Int(1)])
//!     .await?;
//! # let _ = found;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;
pub mod placeholder;
pub mod prelude;
pub mod record;
pub mod row;
pub mod statements;
pub mod types;

pub use client::{ConnectOptions, DatabaseClient};
pub use error::RecordBindError;
pub use placeholder::expand_placeholders;
pub use record::{Column, FromRow, FromValue, Record, ToValue};
pub use row::Row;
pub use statements::{
    BoundStatement, insert_statement, quote_identifier, remove_statement, update_statement,
};
pub use types::Value;

#[cfg(feature = "derive")]
pub use recordbind_derive::Record;
