use chrono::{Datelike, Timelike};

use crate::types::Value;

/// Convert one crate value into the driver's wire value.
#[must_use]
pub fn to_mysql_value(value: Value) -> mysql_async::Value {
    match value {
        Value::Int(i) => mysql_async::Value::Int(i),
        Value::UInt(u) => mysql_async::Value::UInt(u),
        Value::Float(f) => mysql_async::Value::Double(f),
        Value::Text(s) => mysql_async::Value::Bytes(s.into_bytes()),
        Value::Bool(b) => mysql_async::Value::Int(i64::from(b)),
        Value::Timestamp(dt) => {
            let micros = (dt.time().nanosecond() / 1000).min(999_999);
            mysql_async::Value::Date(
                u16::try_from(dt.year()).unwrap_or(0),
                u8::try_from(dt.month()).unwrap_or(0),
                u8::try_from(dt.day()).unwrap_or(0),
                u8::try_from(dt.hour()).unwrap_or(0),
                u8::try_from(dt.minute()).unwrap_or(0),
                u8::try_from(dt.second()).unwrap_or(0),
                micros,
            )
        }
        Value::Null => mysql_async::Value::NULL,
        Value::JSON(j) => mysql_async::Value::Bytes(j.to_string().into_bytes()),
        Value::Blob(bytes) => mysql_async::Value::Bytes(bytes),
    }
}

/// Convert a bound argument list into driver parameters.
#[must_use]
pub fn to_mysql_params(params: Vec<Value>) -> mysql_async::Params {
    if params.is_empty() {
        mysql_async::Params::Empty
    } else {
        mysql_async::Params::Positional(params.into_iter().map(to_mysql_value).collect())
    }
}

/// Convert one wire value into the crate value it is surfaced as.
///
/// The text protocol delivers almost everything as `Bytes`; valid UTF-8
/// surfaces as [`Value::Text`], anything else as [`Value::Blob`]. `DATETIME`
/// values outside chrono's range (notably MySQL's zero date) surface as
/// [`Value::Null`]. `TIME` values surface in MySQL's own text form.
#[must_use]
pub fn from_mysql_value(value: mysql_async::Value) -> Value {
    match value {
        mysql_async::Value::NULL => Value::Null,
        mysql_async::Value::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Blob(e.into_bytes()),
        },
        mysql_async::Value::Int(i) => Value::Int(i),
        mysql_async::Value::UInt(u) => Value::UInt(u),
        mysql_async::Value::Float(f) => Value::Float(f64::from(f)),
        mysql_async::Value::Double(d) => Value::Float(d),
        mysql_async::Value::Date(year, month, day, hour, minute, second, micros) => {
            chrono::NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
                .and_then(|d| {
                    d.and_hms_micro_opt(
                        u32::from(hour),
                        u32::from(minute),
                        u32::from(second),
                        micros,
                    )
                })
                .map_or(Value::Null, Value::Timestamp)
        }
        mysql_async::Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if negative { "-" } else { "" };
            let total_hours = days * 24 + u32::from(hours);
            let mut text = format!("{sign}{total_hours:02}:{minutes:02}:{seconds:02}");
            if micros > 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            Value::Text(text)
        }
    }
}

/// Pull the column names out of a driver row.
#[must_use]
pub fn column_names(row: &mysql_async::Row) -> Vec<String> {
    row.columns_ref()
        .iter()
        .map(|col| col.name_str().into_owned())
        .collect()
}

/// Consume a driver row into crate values, in column order.
#[must_use]
pub fn row_into_values(row: mysql_async::Row) -> Vec<Value> {
    row.unwrap().into_iter().map(from_mysql_value).collect()
}
