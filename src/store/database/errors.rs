use std::error::Error;

use derive_more::Display;
use sqlx::error::Error as SqlxError;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum DBErrorType {
  #[display("no_rows")]
  NoRows,
  #[display("unique_violation")]
  UniqueViolation,
  #[display("not_null_violation")]
  NotNullViolation,
  #[display("connection_exception")]
  Connection,
  #[display("insufficient_privilege")]
  Privileges,
  #[display("json_unmarshal")]
  JsonUnmarshal,
  #[display("json_marshal")]
  JsonMarshal,
  #[display("internal_error")]
  Internal,
}

#[derive(Debug, ThisError)]
#[error("path: {path}, err_type: {err_type}, msg: {msg}")]
pub struct DBError {
  pub err_type: DBErrorType,
  #[source]
  pub err: Option<Box<dyn Error + Send + Sync>>,
  pub msg: String,
  pub path: String,
}

impl DBError {
  pub fn new(
    err_type: DBErrorType,
    err: Option<Box<dyn Error + Send + Sync>>,
    msg: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into() }
  }
}

/// Maps a sqlx error onto the taxonomy above, keeping a client-safe message
/// and boxing the original error as the source.
pub fn handle_db_error(err: SqlxError, path: &str) -> DBError {
  match err {
    SqlxError::Database(db_err) => {
      let pg_err = db_err.downcast_ref::<PgDatabaseError>();

      let (err_type, msg) = match pg_err.code() {
        "23505" => (DBErrorType::UniqueViolation, duplicate_field_message(pg_err)),
        "23502" => (DBErrorType::NotNullViolation, "a required column was null".to_string()),
        "08000" | "08003" | "08006" => {
          (DBErrorType::Connection, "database connection exception".to_string())
        }
        "42501" => {
          (DBErrorType::Privileges, "insufficient permissions to perform an action".to_string())
        }
        _ => (DBErrorType::Internal, "database error".to_string()),
      };

      DBError::new(err_type, Some(Box::new(SqlxError::Database(db_err))), msg, path)
    }

    SqlxError::RowNotFound => DBError::new(
      DBErrorType::NoRows,
      Some(Box::new(SqlxError::RowNotFound)),
      "the requested resource is not found",
      path,
    ),

    _ => DBError::new(DBErrorType::Internal, Some(Box::new(err)), "database error", path),
  }
}

// The detail line looks like: Key (name)=(Pixel Buds) already exists.
fn duplicate_field_message(err: &PgDatabaseError) -> String {
  if let Some(detail) = err.detail() {
    if let Some(key) = detail.strip_prefix("Key (").and_then(|rest| rest.split(")=(").next()) {
      return format!("{} already exists", key);
    }
  }
  "duplicate value".to_string()
}
