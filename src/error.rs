use thiserror::Error;

/// Unified error type for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum RecordBindError {
    #[error(transparent)]
    MysqlError(#[from] mysql_async::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Statement error: {0}")]
    StatementError(String),

    #[error("Missing key column for table `{table}`")]
    MissingKey { table: &'static str },
}
