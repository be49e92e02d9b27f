//! Traits connecting plain structs to table columns and result rows.

use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

use crate::row::Row;
use crate::types::Value;

/// One mapped column of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name in the table.
    pub name: &'static str,
    /// Whether this column identifies the row.
    pub key: bool,
}

/// Hydrate a struct from a result row.
///
/// Hydration starts from `Default::default()` and overlays every mapped
/// field whose column is present in the row and convertible to the field
/// type; anything else keeps its default. Implemented by
/// `#[derive(Record)]`.
pub trait FromRow: Default {
    fn from_row(row: &Row) -> Self;
}

/// A struct bound to a table.
///
/// `COLUMNS` and `values()` align: one value per column, in field
/// declaration order. Implemented by `#[derive(Record)]` when a
/// `#[record(table = "...")]` attribute is present.
pub trait Record: FromRow {
    /// Table this record maps to.
    const TABLE: &'static str;
    /// Mapped columns, in field declaration order.
    const COLUMNS: &'static [Column];

    /// Current field values, aligned with [`Record::COLUMNS`].
    fn values(&self) -> Vec<Value>;

    /// The key column, if one is declared.
    #[must_use]
    fn key_column() -> Option<&'static Column> {
        Self::COLUMNS.iter().find(|col| col.key)
    }

    /// Key column name and current key value, if a key is declared.
    #[must_use]
    fn identifier(&self) -> Option<(&'static str, Value)> {
        let idx = Self::COLUMNS.iter().position(|col| col.key)?;
        let mut values = self.values();
        if idx < values.len() {
            Some((Self::COLUMNS[idx].name, values.swap_remove(idx)))
        } else {
            None
        }
    }
}

/// Turn a field value into a bindable [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Build a field value back out of a column [`Value`].
///
/// Returns `None` when the value cannot represent `Self`; hydration then
/// leaves the field at its default.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_small_int {
    ($($ty:ty),* $(,)?) => {$(
        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                value.as_int().and_then(|i| Self::try_from(i).ok())
            }
        }
    )*};
}

impl_small_int!(i8, i16, i32, u8, u16, u32);

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl ToValue for u64 {
    fn to_value(&self) -> Value {
        Value::UInt(*self)
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::UInt(u) => Some(*u),
            Value::Int(i) => Self::try_from(*i).ok(),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_float().map(|f| f as f32)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Option<Self> {
        let s = value.as_text()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_timestamp()
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Blob(bytes) => Some(bytes.clone()),
            Value::Text(s) => Some(s.clone().into_bytes()),
            _ => None,
        }
    }
}

impl ToValue for JsonValue {
    fn to_value(&self) -> Value {
        Value::JSON(self.clone())
    }
}

impl FromValue for JsonValue {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::JSON(j) => Some(j.clone()),
            Value::Text(s) => serde_json::from_str(s).ok(),
            _ => None,
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}
