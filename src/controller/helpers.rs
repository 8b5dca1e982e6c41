use ulid::Ulid;

use crate::models::errors::AppError;

/// Ids are ULIDs. A malformed id is a client error and must never reach the
/// store, where `None` is reserved for "no such document".
pub(super) fn ensure_id_format(id: &str, path: &str) -> Result<(), AppError> {
  match Ulid::from_string(id) {
    Ok(_) => Ok(()),
    Err(_) => Err(AppError::bad_request(path, "Invalid product id format")),
  }
}
