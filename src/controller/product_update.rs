use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::info;

use crate::controller::helpers::ensure_id_format;
use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::product::{Product, ProductUpdate};
use crate::models::product_validate::validate_update;
use crate::store::database::ProductsStore;

pub(super) async fn update_product_by_id(
  State(c): State<Arc<Controller>>,
  Path(id): Path<String>,
  Json(patch): Json<ProductUpdate>,
) -> Result<Response, AppError> {
  let path = "products.controller.product_update";

  let updated = update_one(c.store.as_ref(), &id, patch, path).await?;
  info!("product updated: {}", updated.name);

  let body = json!({
    "success": true,
    "data": updated,
    "message": "Product updated successfully",
  });
  Ok(Json(body).into_response())
}

/// Only the submitted fields are validated and persisted; the stored
/// document is otherwise untouched. The uniqueness read runs only when the
/// patch actually changes the name.
pub(super) async fn update_one(
  store: &dyn ProductsStore,
  id: &str,
  patch: ProductUpdate,
  path: &str,
) -> Result<Product, AppError> {
  ensure_id_format(id, path)?;

  if patch.is_empty() {
    return Err(AppError::bad_request(path, "No fields provided to update"));
  }

  let errors = validate_update(&patch);
  if !errors.is_empty() {
    return Err(AppError::validation(path, errors));
  }

  let current = store
    .product_get(id)
    .await
    .map_err(|e| AppError::internal(path, "Error updating product", e))?
    .ok_or_else(|| AppError::not_found(path, "Product not found"))?;

  if let Some(name) = patch.name.as_deref() {
    if name != current.name {
      let exists = store
        .name_exists(name, Some(id))
        .await
        .map_err(|e| AppError::internal(path, "Error updating product", e))?;
      if exists {
        return Err(AppError::bad_request(
          path,
          format!("Product with name '{name}' already exists"),
        ));
      }
    }
  }

  store
    .product_update(id, &patch)
    .await
    .map_err(|e| AppError::internal(path, "Error updating product", e))?
    .ok_or_else(|| AppError::not_found(path, "Product not found"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::product::{Category, ProductDraft};
  use crate::store::database::testing::MemStore;
  use axum::http::StatusCode;
  use rust_decimal::Decimal;
  use ulid::Ulid;

  fn seeded(name: &str) -> (MemStore, String) {
    let id = Ulid::new().to_string();
    let draft = ProductDraft {
      name: Some(name.into()),
      brand: Some("Acme".into()),
      seller: Some("Acme Store".into()),
      description: Some("A reasonably long description".into()),
      price: Some(Decimal::from(100)),
      cod_availability: Some(true),
      total_stock_availability: Some(5),
      category: Some("others".into()),
      colors: Some(vec!["black".into()]),
      ..ProductDraft::default()
    };
    let store = MemStore::with_products(vec![Product::from_draft(draft, id.clone(), 1)]);
    (store, id)
  }

  #[tokio::test]
  async fn only_submitted_fields_change() {
    let (store, id) = seeded("Widget");

    let patch =
      ProductUpdate { price: Some(Decimal::from(250)), ..ProductUpdate::default() };
    let updated = update_one(&store, &id, patch, "t").await.unwrap();

    assert_eq!(updated.price, Decimal::from(250));
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.category, Category::Others);
    assert!(updated.updated_at.is_some());
  }

  #[tokio::test]
  async fn changing_name_to_an_existing_one_conflicts() {
    let (store, id) = seeded("Widget");
    let other = ProductDraft {
      name: Some("Gadget".into()),
      brand: Some("Acme".into()),
      seller: Some("Acme Store".into()),
      description: Some("A reasonably long description".into()),
      price: Some(Decimal::from(10)),
      cod_availability: Some(false),
      total_stock_availability: Some(1),
      category: Some("others".into()),
      colors: Some(vec!["red".into()]),
      ..ProductDraft::default()
    };
    store
      .product_create(&Product::from_draft(other, Ulid::new().to_string(), 2))
      .await
      .unwrap();

    let patch = ProductUpdate { name: Some("Gadget".into()), ..ProductUpdate::default() };
    let err = update_one(&store, &id, patch, "t").await.unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Product with name 'Gadget' already exists");
  }

  #[tokio::test]
  async fn keeping_the_same_name_is_not_a_conflict() {
    let (store, id) = seeded("Widget");

    let patch = ProductUpdate {
      name: Some("Widget".into()),
      price: Some(Decimal::from(1)),
      ..ProductUpdate::default()
    };
    assert!(update_one(&store, &id, patch, "t").await.is_ok());
  }

  #[tokio::test]
  async fn invalid_submitted_field_is_a_validation_error() {
    let (store, id) = seeded("Widget");

    let patch = ProductUpdate { price: Some(Decimal::from(-1)), ..ProductUpdate::default() };
    let err = update_one(&store, &id, patch, "t").await.unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert!(err.errors.iter().any(|e| e.field == "price"));
  }

  #[tokio::test]
  async fn empty_patch_is_rejected() {
    let (store, id) = seeded("Widget");

    let err = update_one(&store, &id, ProductUpdate::default(), "t").await.unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn unknown_id_is_not_found_and_malformed_id_is_bad_request() {
    let (store, _) = seeded("Widget");
    let patch = ProductUpdate { price: Some(Decimal::from(1)), ..ProductUpdate::default() };

    let err =
      update_one(&store, &Ulid::new().to_string(), patch.clone(), "t").await.unwrap_err();
    assert_eq!(err.status_code, StatusCode::NOT_FOUND);

    let err = update_one(&store, "nope", patch, "t").await.unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
  }
}
