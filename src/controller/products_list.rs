use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::query::ListParams;

pub(super) async fn get_all_products(
  State(c): State<Arc<Controller>>,
  Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
  let path = "products.controller.products_list";

  let descriptor = params.translate();
  let (items, total) = c
    .store
    .products_list(&descriptor)
    .await
    .map_err(|e| AppError::internal(path, "Error fetching products", e))?;

  info!("fetched {} products (total {})", items.len(), total);

  let body = json!({
    "success": true,
    "total": total,
    "page": descriptor.page,
    "limit": descriptor.limit,
    "data": items,
  });
  Ok(Json(body).into_response())
}
