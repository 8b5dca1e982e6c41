mod product_create;
mod product_delete;
mod product_get;
mod product_update;
mod products_list;

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{from_value, Value};
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use crate::models::product::{Category, Product, ProductUpdate};
use crate::models::query::QueryDescriptor;
use crate::store::database::errors::{DBError, DBErrorType};
use crate::store::database::ProductsStore;

#[derive(Debug)]
pub struct ProductsStoreImpl {
  pub(crate) db: Arc<Pool<Postgres>>,
}

#[derive(Debug)]
pub struct ProductsStoreImplArgs {
  pub db: Arc<Pool<Postgres>>,
}

impl ProductsStoreImpl {
  pub fn new(args: ProductsStoreImplArgs) -> Self {
    Self { db: args.db }
  }
}

#[async_trait]
impl ProductsStore for ProductsStoreImpl {
  async fn product_create(&self, product: &Product) -> Result<Product, DBError> {
    product_create::product_create(self, product).await
  }

  async fn product_get(&self, id: &str) -> Result<Option<Product>, DBError> {
    product_get::product_get(self, id).await
  }

  async fn name_exists(&self, name: &str, exclude_id: Option<&str>) -> Result<bool, DBError> {
    product_get::name_exists(self, name, exclude_id).await
  }

  async fn product_update(
    &self,
    id: &str,
    patch: &ProductUpdate,
  ) -> Result<Option<Product>, DBError> {
    product_update::product_update(self, id, patch).await
  }

  async fn product_delete(&self, id: &str) -> Result<Option<Product>, DBError> {
    product_delete::product_delete(self, id).await
  }

  async fn products_list(
    &self,
    descriptor: &QueryDescriptor,
  ) -> Result<(Vec<Product>, i64), DBError> {
    products_list::products_list(self, descriptor).await
  }
}

pub(crate) fn product_from_row(row: &PgRow) -> Result<Product, DBError> {
  let path = "products.store.product_from_row";
  let de = |msg: &str, err: Box<dyn std::error::Error + Send + Sync>| {
    DBError::new(DBErrorType::JsonUnmarshal, Some(err), msg, path)
  };

  let category_raw: String =
    row.try_get("category").map_err(|e| de("failed to read category column", Box::new(e)))?;
  let category = Category::from_str(&category_raw).ok_or_else(|| {
    DBError::new(
      DBErrorType::JsonUnmarshal,
      None,
      format!("unknown category value '{}' in storage", category_raw),
      path,
    )
  })?;

  let variants = opt_string_list(
    row.try_get("variants").map_err(|e| de("failed to read variants column", Box::new(e)))?,
  )
  .map_err(|e| de("failed to deserialize variants", Box::new(e)))?;
  let size = opt_string_list(
    row.try_get("size").map_err(|e| de("failed to read size column", Box::new(e)))?,
  )
  .map_err(|e| de("failed to deserialize size", Box::new(e)))?;
  let colors: Vec<String> = from_value(
    row.try_get::<Value, _>("colors").map_err(|e| de("failed to read colors column", Box::new(e)))?,
  )
  .map_err(|e| de("failed to deserialize colors", Box::new(e)))?;

  let read = |msg: &str, e: sqlx::Error| de(msg, Box::new(e));

  Ok(Product {
    id: row.try_get("id").map_err(|e| read("failed to read id column", e))?,
    name: row.try_get("name").map_err(|e| read("failed to read name column", e))?,
    brand: row.try_get("brand").map_err(|e| read("failed to read brand column", e))?,
    seller: row.try_get("seller").map_err(|e| read("failed to read seller column", e))?,
    description: row
      .try_get("description")
      .map_err(|e| read("failed to read description column", e))?,
    price: row.try_get::<Decimal, _>("price").map_err(|e| read("failed to read price column", e))?,
    discount: row
      .try_get::<Option<Decimal>, _>("discount")
      .map_err(|e| read("failed to read discount column", e))?,
    ratings: row
      .try_get::<Option<Decimal>, _>("ratings")
      .map_err(|e| read("failed to read ratings column", e))?,
    cod_availability: row
      .try_get("cod_availability")
      .map_err(|e| read("failed to read cod_availability column", e))?,
    total_stock_availability: row
      .try_get("total_stock_availability")
      .map_err(|e| read("failed to read total_stock_availability column", e))?,
    category,
    variants,
    size,
    colors,
    is_featured: row
      .try_get("is_featured")
      .map_err(|e| read("failed to read is_featured column", e))?,
    is_active: row.try_get("is_active").map_err(|e| read("failed to read is_active column", e))?,
    created_at: row.try_get("created_at").map_err(|e| read("failed to read created_at column", e))?,
    updated_at: row
      .try_get::<Option<i64>, _>("updated_at")
      .map_err(|e| read("failed to read updated_at column", e))?,
  })
}

fn opt_string_list(value: Option<Value>) -> Result<Option<Vec<String>>, serde_json::Error> {
  value.map(from_value::<Vec<String>>).transpose()
}
