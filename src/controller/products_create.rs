use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use futures::future::join_all;
use serde_json::{json, to_value};
use tracing::info;
use ulid::Ulid;

use crate::controller::Controller;
use crate::models::bulk::{BulkCreateReport, CreateFailure, CreateSuccess};
use crate::models::errors::{AppError, FieldError};
use crate::models::product::{Product, ProductDraft};
use crate::models::product_validate::category_rules;
use crate::store::database::ProductsStore;
use crate::utils::time::time_get_millis;

const BULK_CREATE_MAX: usize = 50;

pub(super) async fn create_multiple_products(
  State(c): State<Arc<Controller>>,
  Json(items): Json<Vec<ProductDraft>>,
) -> Result<Response, AppError> {
  let path = "products.controller.products_create";

  let report = run_bulk_create(c.store.as_ref(), items, path).await?;
  info!("bulk product creation: {} succeeded, {} failed", report.success, report.failed);

  Ok((StatusCode::CREATED, Json(json!({ "success": true, "results": report }))).into_response())
}

/// Validation for all items fans out concurrently; persistence then runs
/// strictly sequentially in submission order, so a batch never races against
/// itself and each failure attributes to exactly one index. Already-created
/// items stay created when a later item fails.
pub(super) async fn run_bulk_create(
  store: &dyn ProductsStore,
  items: Vec<ProductDraft>,
  path: &str,
) -> Result<BulkCreateReport, AppError> {
  if items.is_empty() {
    return Err(AppError::bad_request(path, "Invalid or empty array of products provided"));
  }
  if items.len() > BULK_CREATE_MAX {
    return Err(AppError::bad_request(path, "Cannot create more than 50 products at once"));
  }

  let checks = items.iter().enumerate().map(|(index, draft)| async move {
    if let Some(error) = category_rules(draft) {
      return (index, Some(error));
    }

    let name = draft.name.as_deref().unwrap_or_default();
    match store.name_exists(name, None).await {
      Ok(true) => (
        index,
        Some(FieldError {
          field: "name".into(),
          message: format!("Product with name '{name}' already exists"),
        }),
      ),
      Ok(false) => (index, None),
      Err(e) => (index, Some(FieldError { field: "unknown".into(), message: e.to_string() })),
    }
  });

  let mut verdicts: Vec<Option<FieldError>> = vec![None; items.len()];
  for (index, verdict) in join_all(checks).await {
    verdicts[index] = verdict;
  }

  let mut report = BulkCreateReport::new(items.len());
  // Names created earlier in this batch; the fan-out above only saw
  // pre-existing data.
  let mut created_names: HashSet<String> = HashSet::new();

  for (index, draft) in items.into_iter().enumerate() {
    let payload = to_value(&draft).unwrap_or_default();

    if let Some(error) = verdicts[index].take() {
      report.record_failure(CreateFailure { index, product: payload, error });
      continue;
    }

    let name = draft.name.clone().unwrap_or_default();
    if created_names.contains(&name) {
      report.record_failure(CreateFailure {
        index,
        product: payload,
        error: FieldError {
          field: "validation".into(),
          message: format!("Product with name '{name}' already exists"),
        },
      });
      continue;
    }

    let pro = Product::from_draft(draft, Ulid::new().to_string(), time_get_millis());
    match store.product_create(&pro).await {
      Ok(stored) => {
        created_names.insert(name);
        report.record_success(CreateSuccess {
          id: stored.id,
          name: stored.name,
          message: "Created successfully".into(),
        });
      }
      Err(e) => {
        report.record_failure(CreateFailure {
          index,
          product: payload,
          error: FieldError { field: "validation".into(), message: e.to_string() },
        });
      }
    }
  }

  Ok(report)
}
