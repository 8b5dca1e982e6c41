use crate::models::product::Product;
use crate::store::database::dbstore::{product_from_row, ProductsStoreImpl};
use crate::store::database::errors::{handle_db_error, DBError};

pub(super) async fn product_get(
  s: &ProductsStoreImpl,
  id: &str,
) -> Result<Option<Product>, DBError> {
  let path = "products.store.product_get";

  let row = sqlx::query("SELECT * FROM products WHERE id = $1")
    .bind(id)
    .fetch_optional(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, path))?;

  row.as_ref().map(product_from_row).transpose()
}

pub(super) async fn name_exists(
  s: &ProductsStoreImpl,
  name: &str,
  exclude_id: Option<&str>,
) -> Result<bool, DBError> {
  let path = "products.store.name_exists";

  sqlx::query_scalar(
    r#"
        SELECT EXISTS(
            SELECT 1 FROM products
            WHERE name = $1 AND ($2::text IS NULL OR id <> $2)
        )
      "#,
  )
  .bind(name)
  .bind(exclude_id)
  .fetch_one(s.db.as_ref())
  .await
  .map_err(|e| handle_db_error(e, path))
}
