use serde_json::to_value;
use sqlx::{Postgres, QueryBuilder};

use crate::models::product::{Category, Product, ProductUpdate};
use crate::store::database::dbstore::{product_from_row, ProductsStoreImpl};
use crate::store::database::errors::{handle_db_error, DBError, DBErrorType};
use crate::utils::time::time_get_millis;

/// Applies only the submitted fields (partial overlay, no field-level merge
/// beyond what is in the patch) and returns the updated document.
pub(super) async fn product_update(
  s: &ProductsStoreImpl,
  id: &str,
  patch: &ProductUpdate,
) -> Result<Option<Product>, DBError> {
  let path = "products.store.product_update";
  let mk_err = |msg: &str, err: serde_json::Error| {
    DBError::new(DBErrorType::JsonMarshal, Some(Box::new(err)), msg, path)
  };

  let mut q = QueryBuilder::<Postgres>::new("UPDATE products SET updated_at = ");
  q.push_bind(time_get_millis());

  if let Some(name) = &patch.name {
    q.push(", name = ").push_bind(name);
  }
  if let Some(brand) = &patch.brand {
    q.push(", brand = ").push_bind(brand);
  }
  if let Some(seller) = &patch.seller {
    q.push(", seller = ").push_bind(seller);
  }
  if let Some(description) = &patch.description {
    q.push(", description = ").push_bind(description);
  }
  if let Some(price) = patch.price {
    q.push(", price = ").push_bind(price);
  }
  if let Some(discount) = patch.discount {
    q.push(", discount = ").push_bind(discount);
  }
  if let Some(ratings) = patch.ratings {
    q.push(", ratings = ").push_bind(ratings);
  }
  if let Some(cod) = patch.cod_availability {
    q.push(", cod_availability = ").push_bind(cod);
  }
  if let Some(stock) = patch.total_stock_availability {
    q.push(", total_stock_availability = ").push_bind(stock);
  }
  if let Some(category) = patch.category.as_deref().and_then(Category::from_str) {
    q.push(", category = ").push_bind(category.as_str());
  }
  if let Some(variants) = &patch.variants {
    let json = to_value(variants).map_err(|e| mk_err("failed to serialize variants", e))?;
    q.push(", variants = ").push_bind(json);
  }
  if let Some(size) = &patch.size {
    let json = to_value(size).map_err(|e| mk_err("failed to serialize size", e))?;
    q.push(", size = ").push_bind(json);
  }
  if let Some(colors) = &patch.colors {
    let json = to_value(colors).map_err(|e| mk_err("failed to serialize colors", e))?;
    q.push(", colors = ").push_bind(json);
  }
  if let Some(featured) = patch.is_featured {
    q.push(", is_featured = ").push_bind(featured);
  }
  if let Some(active) = patch.is_active {
    q.push(", is_active = ").push_bind(active);
  }

  q.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

  let row = q
    .build()
    .fetch_optional(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, path))?;

  row.as_ref().map(product_from_row).transpose()
}
