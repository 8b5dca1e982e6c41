use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use crate::controller::helpers::ensure_id_format;
use crate::controller::Controller;
use crate::models::errors::AppError;

pub(super) async fn get_product_by_id(
  State(c): State<Arc<Controller>>,
  Path(id): Path<String>,
) -> Result<Response, AppError> {
  let path = "products.controller.product_get";

  ensure_id_format(&id, path)?;

  let product = c
    .store
    .product_get(&id)
    .await
    .map_err(|e| AppError::internal(path, "Error retrieving product", e))?
    .ok_or_else(|| AppError::not_found(path, "Product not found"))?;

  info!("product {} retrieved", id);
  Ok(Json(json!({ "success": true, "data": product })).into_response())
}
