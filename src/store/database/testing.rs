//! In-memory `ProductsStore` used by the controller tests. It replays
//! query descriptors the same way the Postgres executor does, so the
//! orchestration layers can be exercised without a database.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::product::{Category, Product, ProductUpdate};
use crate::models::query::{ListingFilter, QueryDescriptor, SortKey};
use crate::store::database::errors::{DBError, DBErrorType};
use crate::store::database::ProductsStore;
use crate::utils::time::time_get_millis;

#[derive(Debug, Default)]
pub struct MemStore {
  items: Mutex<Vec<Product>>,
  /// When set, every store call fails with an internal error.
  pub fail: bool,
}

impl MemStore {
  pub fn new() -> Self {
    MemStore::default()
  }

  pub fn with_products(items: Vec<Product>) -> Self {
    MemStore { items: Mutex::new(items), fail: false }
  }

  pub fn failing() -> Self {
    MemStore { items: Mutex::new(Vec::new()), fail: true }
  }

  pub fn len(&self) -> usize {
    self.items.lock().unwrap().len()
  }

  fn check(&self, path: &'static str) -> Result<(), DBError> {
    if self.fail {
      return Err(DBError::new(DBErrorType::Internal, None, "simulated failure", path));
    }
    Ok(())
  }
}

fn matches(f: &ListingFilter, p: &Product) -> bool {
  if f.never_matches {
    return false;
  }
  if let Some(search) = &f.search {
    if !p.name.to_lowercase().contains(&search.to_lowercase()) {
      return false;
    }
  }
  if let Some(min) = f.price_min {
    if p.price < min {
      return false;
    }
  }
  if let Some(max) = f.price_max {
    if p.price > max {
      return false;
    }
  }
  if let Some(min) = f.ratings_min {
    // ratings >= min; rows with no ratings never match, as in SQL.
    if p.ratings.map_or(true, |r| r < min) {
      return false;
    }
  }
  if let Some(category) = f.category {
    if p.category != category {
      return false;
    }
  }
  let any_of = |wanted: &Option<Vec<String>>, have: Option<&Vec<String>>| match wanted {
    None => true,
    Some(wanted) => {
      have.is_some_and(|have| wanted.iter().any(|w| have.iter().any(|h| h == w)))
    }
  };
  any_of(&f.colors, Some(&p.colors))
    && any_of(&f.variants, p.variants.as_ref())
    && any_of(&f.size, p.size.as_ref())
}

fn compare(sort: SortKey, a: &Product, b: &Product) -> Ordering {
  let ord = match sort {
    SortKey::Name => a.name.cmp(&b.name),
    SortKey::CreatedAtAsc => a.created_at.cmp(&b.created_at),
    SortKey::CreatedAtDesc => b.created_at.cmp(&a.created_at),
    // Never-updated rows sort last in both directions, matching the
    // executor's explicit NULLS LAST on updated_at.
    SortKey::UpdatedAtAsc => {
      a.updated_at.is_none().cmp(&b.updated_at.is_none()).then(a.updated_at.cmp(&b.updated_at))
    }
    SortKey::UpdatedAtDesc => {
      a.updated_at.is_none().cmp(&b.updated_at.is_none()).then(b.updated_at.cmp(&a.updated_at))
    }
    SortKey::PriceAsc => a.price.cmp(&b.price),
    SortKey::PriceDesc => b.price.cmp(&a.price),
    SortKey::RatingsAsc => a.ratings.cmp(&b.ratings),
    SortKey::RatingsDesc => b.ratings.cmp(&a.ratings),
    SortKey::InsertionOrder => Ordering::Equal,
  };
  ord.then_with(|| a.id.cmp(&b.id))
}

fn apply_patch(p: &mut Product, patch: &ProductUpdate) {
  if let Some(v) = &patch.name {
    p.name = v.clone();
  }
  if let Some(v) = &patch.brand {
    p.brand = v.clone();
  }
  if let Some(v) = &patch.seller {
    p.seller = v.clone();
  }
  if let Some(v) = &patch.description {
    p.description = v.clone();
  }
  if let Some(v) = patch.price {
    p.price = v;
  }
  if let Some(v) = patch.discount {
    p.discount = Some(v);
  }
  if let Some(v) = patch.ratings {
    p.ratings = Some(v);
  }
  if let Some(v) = patch.cod_availability {
    p.cod_availability = v;
  }
  if let Some(v) = patch.total_stock_availability {
    p.total_stock_availability = v;
  }
  if let Some(v) = patch.category.as_deref().and_then(Category::from_str) {
    p.category = v;
  }
  if let Some(v) = &patch.variants {
    p.variants = Some(v.clone());
  }
  if let Some(v) = &patch.size {
    p.size = Some(v.clone());
  }
  if let Some(v) = &patch.colors {
    p.colors = v.clone();
  }
  if let Some(v) = patch.is_featured {
    p.is_featured = v;
  }
  if let Some(v) = patch.is_active {
    p.is_active = v;
  }
  p.updated_at = Some(time_get_millis());
}

#[async_trait]
impl ProductsStore for MemStore {
  async fn product_create(&self, product: &Product) -> Result<Product, DBError> {
    self.check("testing.product_create")?;
    let mut items = self.items.lock().unwrap();
    items.push(product.clone());
    Ok(product.clone())
  }

  async fn product_get(&self, id: &str) -> Result<Option<Product>, DBError> {
    self.check("testing.product_get")?;
    let items = self.items.lock().unwrap();
    Ok(items.iter().find(|p| p.id == id).cloned())
  }

  async fn name_exists(&self, name: &str, exclude_id: Option<&str>) -> Result<bool, DBError> {
    self.check("testing.name_exists")?;
    let items = self.items.lock().unwrap();
    Ok(items.iter().any(|p| p.name == name && Some(p.id.as_str()) != exclude_id))
  }

  async fn product_update(
    &self,
    id: &str,
    patch: &ProductUpdate,
  ) -> Result<Option<Product>, DBError> {
    self.check("testing.product_update")?;
    let mut items = self.items.lock().unwrap();
    match items.iter_mut().find(|p| p.id == id) {
      Some(p) => {
        apply_patch(p, patch);
        Ok(Some(p.clone()))
      }
      None => Ok(None),
    }
  }

  async fn product_delete(&self, id: &str) -> Result<Option<Product>, DBError> {
    self.check("testing.product_delete")?;
    let mut items = self.items.lock().unwrap();
    match items.iter().position(|p| p.id == id) {
      Some(i) => Ok(Some(items.remove(i))),
      None => Ok(None),
    }
  }

  async fn products_list(
    &self,
    descriptor: &QueryDescriptor,
  ) -> Result<(Vec<Product>, i64), DBError> {
    self.check("testing.products_list")?;
    let items = self.items.lock().unwrap();

    let mut matched: Vec<Product> =
      items.iter().filter(|p| matches(&descriptor.filter, p)).cloned().collect();
    let total = matched.len() as i64;

    matched.sort_by(|a, b| compare(descriptor.sort, a, b));

    let offset = descriptor.offset.max(0) as usize;
    let limit = descriptor.limit.max(0) as usize;
    let page = matched.into_iter().skip(offset).take(limit).collect();

    Ok((page, total))
  }
}

mod tests {
  use super::*;
  use crate::models::product::ProductDraft;
  use crate::models::query::ListParams;
  use rust_decimal::Decimal;

  fn product(name: &str, ratings: Option<i64>, updated_at: Option<i64>) -> Product {
    let draft = ProductDraft {
      name: Some(name.into()),
      brand: Some("Acme".into()),
      seller: Some("Acme Store".into()),
      description: Some("A reasonably long description".into()),
      price: Some(Decimal::from(10)),
      ratings: ratings.map(Decimal::from),
      cod_availability: Some(true),
      total_stock_availability: Some(1),
      category: Some("others".into()),
      colors: Some(vec!["black".into()]),
      ..ProductDraft::default()
    };
    let mut p = Product::from_draft(draft, name.to_uppercase(), 1);
    p.updated_at = updated_at;
    p
  }

  #[tokio::test]
  async fn ratings_floor_excludes_unrated_products() {
    let store = MemStore::with_products(vec![
      product("a", Some(4), None),
      product("b", None, None),
      product("c", Some(2), None),
    ]);

    let params = ListParams { ratings: Some("3".into()), ..ListParams::default() };
    let (items, total) = store.products_list(&params.translate()).await.unwrap();

    assert_eq!(total, 1);
    assert_eq!(items[0].name, "a");
  }

  #[tokio::test]
  async fn patch_overlays_optional_numeric_fields() {
    let store = MemStore::with_products(vec![product("a", None, None)]);

    let patch = ProductUpdate {
      discount: Some(Decimal::from(15)),
      ratings: Some(Decimal::from(4)),
      ..ProductUpdate::default()
    };
    let updated = store.product_update("A", &patch).await.unwrap().unwrap();

    assert_eq!(updated.discount, Some(Decimal::from(15)));
    assert_eq!(updated.ratings, Some(Decimal::from(4)));
  }

  #[tokio::test]
  async fn never_updated_rows_sort_last_in_both_directions() {
    let store = MemStore::with_products(vec![
      product("aa", None, None),
      product("b", None, Some(100)),
      product("ccc", None, Some(200)),
    ]);

    let params = ListParams { sort: Some("updatedAtDesc".into()), ..ListParams::default() };
    let (items, _) = store.products_list(&params.translate()).await.unwrap();
    let names: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["ccc", "b", "aa"]);

    let params = ListParams { sort: Some("updatedAtAsc".into()), ..ListParams::default() };
    let (items, _) = store.products_list(&params.translate()).await.unwrap();
    let names: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["b", "ccc", "aa"]);
  }
}
