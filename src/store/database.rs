pub mod dbstore;
pub mod errors;
#[cfg(test)]
pub mod testing;

use std::fmt;

use async_trait::async_trait;

use crate::models::product::{Product, ProductUpdate};
use crate::models::query::QueryDescriptor;
use crate::store::database::errors::DBError;

/// The narrow persistence interface the core depends on. Ids are opaque
/// strings here; parsing/format checks happen before a call reaches the
/// store, so `None` from the read/delete/update operations always means
/// "no such document", never "bad identifier".
#[async_trait]
pub trait ProductsStore: fmt::Debug + Send + Sync {
  /// Persists a new document and returns it as stored.
  async fn product_create(&self, product: &Product) -> Result<Product, DBError>;

  async fn product_get(&self, id: &str) -> Result<Option<Product>, DBError>;

  /// Case-sensitive name existence check, optionally excluding one document
  /// (used when an update keeps or changes a name).
  async fn name_exists(&self, name: &str, exclude_id: Option<&str>) -> Result<bool, DBError>;

  /// Applies the submitted fields as a partial overlay and returns the new
  /// document, or `None` when the id does not exist.
  async fn product_update(&self, id: &str, patch: &ProductUpdate)
    -> Result<Option<Product>, DBError>;

  /// Deletes by id, returning the removed document when there was one.
  async fn product_delete(&self, id: &str) -> Result<Option<Product>, DBError>;

  /// Replays a query descriptor: returns the page slice and the total count
  /// of documents matching the filter irrespective of pagination.
  async fn products_list(&self, descriptor: &QueryDescriptor)
    -> Result<(Vec<Product>, i64), DBError>;
}
