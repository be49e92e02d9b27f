//! Statement builders for record types.
//!
//! Builders are pure: they assemble SQL text (with `^` parameter markers)
//! and the aligned argument list, and never touch a connection.

use crate::error::RecordBindError;
use crate::record::Record;
use crate::types::Value;

/// A statement with its bound arguments.
///
/// Handy for helpers that need to hand both query text and arguments around
/// without losing their alignment:
/// ```rust
/// use recordbind::prelude::*;
///
/// let stmt = BoundStatement::new(
///     "INSERT INTO t (id, name) VALUES (^, ^)",
///     vec![Value::Int(1), Value::Text("alice".into())],
/// );
/// # let _ = stmt;
/// ```
#[derive(Debug, Clone)]
pub struct BoundStatement {
    /// The SQL text, using `^` parameter markers
    pub sql: String,
    /// The arguments to bind, in marker order
    pub params: Vec<Value>,
}

impl BoundStatement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// Backtick-quote an identifier for MySQL, doubling embedded backticks.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Build an INSERT covering every mapped column of `record`, key included,
/// in field declaration order. Every bound argument is referenced by
/// exactly one marker.
pub fn insert_statement<R: Record>(record: &R) -> BoundStatement {
    let column_list = R::COLUMNS
        .iter()
        .map(|col| quote_identifier(col.name))
        .collect::<Vec<_>>()
        .join(", ");
    let marker_list = vec!["^"; R::COLUMNS.len()].join(", ");

    let sql = format!(
        "INSERT INTO {} ({column_list}) VALUES ({marker_list})",
        quote_identifier(R::TABLE),
    );
    BoundStatement::new(sql, record.values())
}

/// Build an UPDATE assigning every non-key column, addressed by the key
/// column. The key value is bound last.
///
/// # Errors
///
/// Returns `RecordBindError::MissingKey` if the record type declares no key
/// column, and `RecordBindError::StatementError` if it has nothing but the
/// key to assign.
pub fn update_statement<R: Record>(record: &R) -> Result<BoundStatement, RecordBindError> {
    let key = R::key_column().ok_or(RecordBindError::MissingKey { table: R::TABLE })?;

    let assignments = R::COLUMNS
        .iter()
        .filter(|col| !col.key)
        .map(|col| format!("{} = ^", quote_identifier(col.name)))
        .collect::<Vec<_>>()
        .join(", ");
    if assignments.is_empty() {
        return Err(RecordBindError::StatementError(format!(
            "table `{}` has no non-key columns to update",
            R::TABLE
        )));
    }

    let mut params: Vec<Value> = Vec::with_capacity(R::COLUMNS.len());
    let mut key_value = None;
    for (col, value) in R::COLUMNS.iter().zip(record.values()) {
        if col.key {
            key_value = Some(value);
        } else {
            params.push(value);
        }
    }
    let key_value = key_value.ok_or(RecordBindError::MissingKey { table: R::TABLE })?;
    params.push(key_value);

    let sql = format!(
        "UPDATE {} SET {assignments} WHERE {} = ^",
        quote_identifier(R::TABLE),
        quote_identifier(key.name),
    );
    Ok(BoundStatement::new(sql, params))
}

/// Build a DELETE addressed by the key column, capped at one row.
///
/// # Errors
///
/// Returns `RecordBindError::MissingKey` if the record type declares no key
/// column.
pub fn remove_statement<R: Record>(record: &R) -> Result<BoundStatement, RecordBindError> {
    let (key_name, key_value) = record
        .identifier()
        .ok_or(RecordBindError::MissingKey { table: R::TABLE })?;

    let sql = format!(
        "DELETE FROM {} WHERE {} = ^ LIMIT 1",
        quote_identifier(R::TABLE),
        quote_identifier(key_name),
    );
    Ok(BoundStatement::new(sql, vec![key_value]))
}
