use serde_json::{to_value, Value};

use crate::models::product::Product;
use crate::store::database::dbstore::ProductsStoreImpl;
use crate::store::database::errors::{handle_db_error, DBError, DBErrorType};

pub(super) async fn product_create(
  s: &ProductsStoreImpl,
  pro: &Product,
) -> Result<Product, DBError> {
  let path = "products.store.product_create";
  let mk_err = |msg: &str, err: serde_json::Error| {
    DBError::new(DBErrorType::JsonMarshal, Some(Box::new(err)), msg, path)
  };

  let variants_json: Option<Value> = pro
    .variants
    .as_ref()
    .map(to_value)
    .transpose()
    .map_err(|e| mk_err("failed to serialize the product's variants", e))?;
  let size_json: Option<Value> = pro
    .size
    .as_ref()
    .map(to_value)
    .transpose()
    .map_err(|e| mk_err("failed to serialize the product's size", e))?;
  let colors_json =
    to_value(&pro.colors).map_err(|e| mk_err("failed to serialize the product's colors", e))?;

  let db = s.db.as_ref();

  sqlx::query(
    r#"
        INSERT INTO products (
            id, name, brand, seller, description,
            price, discount, ratings,
            cod_availability, total_stock_availability, category,
            variants, size, colors,
            is_featured, is_active,
            created_at, updated_at
        ) VALUES (
            $1, $2, $3, $4, $5,
            $6, $7, $8,
            $9, $10, $11,
            $12, $13, $14,
            $15, $16,
            $17, $18
        )
      "#,
  )
  .bind(&pro.id)
  .bind(&pro.name)
  .bind(&pro.brand)
  .bind(&pro.seller)
  .bind(&pro.description)
  .bind(pro.price)
  .bind(pro.discount)
  .bind(pro.ratings)
  .bind(pro.cod_availability)
  .bind(pro.total_stock_availability)
  .bind(pro.category.as_str())
  .bind(variants_json)
  .bind(size_json)
  .bind(colors_json)
  .bind(pro.is_featured)
  .bind(pro.is_active)
  .bind(pro.created_at)
  .bind(pro.updated_at)
  .execute(db)
  .await
  .map_err(|e| handle_db_error(e, path))?;

  Ok(pro.clone())
}
