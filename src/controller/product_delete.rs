use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use crate::controller::helpers::ensure_id_format;
use crate::controller::Controller;
use crate::models::errors::AppError;

pub(super) async fn delete_product_by_id(
  State(c): State<Arc<Controller>>,
  Path(id): Path<String>,
) -> Result<Response, AppError> {
  let path = "products.controller.product_delete";

  ensure_id_format(&id, path)?;

  let removed = c
    .store
    .product_delete(&id)
    .await
    .map_err(|e| AppError::internal(path, "Error deleting product", e))?;

  match removed {
    Some(_) => {
      info!("product {} deleted", id);
      Ok(Json(json!({ "success": true, "message": "Product deleted successfully" })).into_response())
    }
    None => Err(AppError::not_found(path, "Product not found")),
  }
}
