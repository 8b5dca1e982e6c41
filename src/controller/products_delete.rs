use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use ulid::Ulid;

use crate::controller::Controller;
use crate::models::bulk::BulkDeleteReport;
use crate::models::errors::AppError;
use crate::store::database::ProductsStore;

#[derive(Debug, Deserialize)]
pub(super) struct BulkDeleteRequest {
  pub ids: Vec<String>,
}

pub(super) async fn delete_multiple_products(
  State(c): State<Arc<Controller>>,
  Json(req): Json<BulkDeleteRequest>,
) -> Result<Response, AppError> {
  let path = "products.controller.products_delete";

  let report = run_bulk_delete(c.store.as_ref(), req.ids).await?;
  info!("bulk product deletion: {} deleted, {} failed", report.deleted, report.failed);

  Ok(Json(json!({ "success": true, "results": report })).into_response())
}

/// Strictly sequential; a per-id failure lands in the detail list and never
/// aborts the rest of the batch.
pub(super) async fn run_bulk_delete(
  store: &dyn ProductsStore,
  ids: Vec<String>,
) -> Result<BulkDeleteReport, AppError> {
  if ids.is_empty() {
    return Err(AppError::bad_request("products.controller.products_delete", "Invalid IDs provided."));
  }

  let mut report = BulkDeleteReport::new();

  for id in ids {
    if Ulid::from_string(&id).is_err() {
      report.record_failure(id, "Invalid ID format");
      continue;
    }

    match store.product_delete(&id).await {
      Ok(Some(_)) => report.record_deleted(id),
      Ok(None) => report.record_failure(id, "Product not found"),
      Err(_) => report.record_failure(id, "Error during deletion"),
    }
  }

  Ok(report)
}
