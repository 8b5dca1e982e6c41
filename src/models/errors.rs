use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

const MAX_ERROR_LENGTH: usize = 1024;

/// A single field-level violation, the unit of every validation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

/// Boundary-level classification of a failed operation. The core never
/// formats HTTP responses; it builds one of these and the `IntoResponse`
/// impl below acts as the error sink.
#[derive(Debug)]
pub struct AppError {
  pub message: String,
  pub status_code: StatusCode,
  pub errors: Vec<FieldError>,
  pub path: String,
  pub wrapped: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
  pub fn validation(path: &str, errors: Vec<FieldError>) -> Self {
    Self {
      message: "Validation failed".into(),
      status_code: StatusCode::BAD_REQUEST,
      errors,
      path: path.into(),
      wrapped: None,
    }
  }

  pub fn bad_request(path: &str, message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      status_code: StatusCode::BAD_REQUEST,
      errors: vec![],
      path: path.into(),
      wrapped: None,
    }
  }

  pub fn not_found(path: &str, message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      status_code: StatusCode::NOT_FOUND,
      errors: vec![],
      path: path.into(),
      wrapped: None,
    }
  }

  /// An infrastructure failure: the message is generic and client-safe, the
  /// wrapped source is logged by the sink, never serialized.
  pub fn internal(
    path: &str,
    message: impl Into<String>,
    wrapped: impl Error + Send + Sync + 'static,
  ) -> Self {
    Self {
      message: message.into(),
      status_code: StatusCode::INTERNAL_SERVER_ERROR,
      errors: vec![],
      path: path.into(),
      wrapped: Some(Box::new(wrapped)),
    }
  }

  pub fn error_string(&self) -> String {
    let mut s = String::new();

    if !self.path.is_empty() {
      s.push_str(&self.path);
      s.push_str(": ");
    }
    s.push_str(&self.message);

    for fe in &self.errors {
      s.push_str(", ");
      s.push_str(&fe.field);
      s.push_str(": ");
      s.push_str(&fe.message);
    }

    if let Some(ref wrapped) = self.wrapped {
      s.push_str(", ");
      s.push_str(&wrapped.to_string());
    }

    if s.len() > MAX_ERROR_LENGTH {
      s.truncate(MAX_ERROR_LENGTH);
      s.push_str("...");
    }

    s
  }
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.error_string())
  }
}

impl Error for AppError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.wrapped.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    if self.status_code.is_server_error() {
      error!("{}", self.error_string());
    } else {
      debug!("{}", self.error_string());
    }

    let body = if self.errors.is_empty() {
      json!({ "success": false, "message": self.message })
    } else {
      json!({ "success": false, "message": self.message, "errors": self.errors })
    };

    (self.status_code, Json(body)).into_response()
  }
}
