//! Convenient imports for common functionality.
//!
//! One `use recordbind::prelude::*;` brings in the client, the record
//! traits, and (with the default `derive` feature) the derive macro.

pub use crate::client::{ConnectOptions, DatabaseClient};
pub use crate::error::RecordBindError;
pub use crate::placeholder::expand_placeholders;
pub use crate::record::{Column, FromRow, FromValue, Record, ToValue};
pub use crate::row::Row;
pub use crate::statements::{
    BoundStatement, insert_statement, quote_identifier, remove_statement, update_statement,
};
pub use crate::types::Value;

#[cfg(feature = "derive")]
pub use recordbind_derive::Record;
