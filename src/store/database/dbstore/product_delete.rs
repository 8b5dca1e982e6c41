use crate::models::product::Product;
use crate::store::database::dbstore::{product_from_row, ProductsStoreImpl};
use crate::store::database::errors::{handle_db_error, DBError};

pub(super) async fn product_delete(
  s: &ProductsStoreImpl,
  id: &str,
) -> Result<Option<Product>, DBError> {
  let path = "products.store.product_delete";

  let row = sqlx::query("DELETE FROM products WHERE id = $1 RETURNING *")
    .bind(id)
    .fetch_optional(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, path))?;

  row.as_ref().map(product_from_row).transpose()
}
