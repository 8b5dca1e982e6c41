use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;
use ulid::Ulid;

use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::product::{Product, ProductDraft};
use crate::models::product_validate::validate_draft;
use crate::store::database::ProductsStore;
use crate::utils::time::time_get_millis;

pub(super) async fn create_product(
  State(c): State<Arc<Controller>>,
  Json(draft): Json<ProductDraft>,
) -> Result<Response, AppError> {
  let path = "products.controller.product_create";

  let created = create_one(c.store.as_ref(), draft, path).await?;
  info!("product created: {}", created.name);

  let body = json!({
    "success": true,
    "data": created,
    "message": "Product created successfully",
  });
  Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Full validation, then the duplicate-name read, then persistence. Names
/// are checked with a read rather than a storage constraint, so two
/// concurrent creates of the same name can both pass; the last write wins.
pub(super) async fn create_one(
  store: &dyn ProductsStore,
  draft: ProductDraft,
  path: &str,
) -> Result<Product, AppError> {
  let errors = validate_draft(&draft);
  if !errors.is_empty() {
    return Err(AppError::validation(path, errors));
  }

  let name = draft.name.clone().unwrap_or_default();
  let exists = store
    .name_exists(&name, None)
    .await
    .map_err(|e| AppError::internal(path, "Error creating product", e))?;
  if exists {
    return Err(AppError::bad_request(path, format!("Product with name '{name}' already exists")));
  }

  let pro = Product::from_draft(draft, Ulid::new().to_string(), time_get_millis());
  store.product_create(&pro).await.map_err(|e| AppError::internal(path, "Error creating product", e))
}
