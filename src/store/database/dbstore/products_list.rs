use sqlx::{Postgres, QueryBuilder};

use crate::models::product::Product;
use crate::models::query::{ListingFilter, QueryDescriptor};
use crate::store::database::dbstore::{product_from_row, ProductsStoreImpl};
use crate::store::database::errors::{handle_db_error, DBError};

/// Replays a query descriptor: `total` counts every document matching the
/// filter, `items` is the sorted page slice. Both statements are built from
/// the same filter so the executor adds no business logic of its own.
pub(super) async fn products_list(
  s: &ProductsStoreImpl,
  d: &QueryDescriptor,
) -> Result<(Vec<Product>, i64), DBError> {
  let path = "products.store.products_list";
  let db = s.db.as_ref();

  let mut count_q = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
  push_filter(&mut count_q, &d.filter);
  let total: i64 = count_q
    .build_query_scalar()
    .fetch_one(db)
    .await
    .map_err(|e| handle_db_error(e, path))?;

  let mut page_q = QueryBuilder::<Postgres>::new("SELECT * FROM products");
  push_filter(&mut page_q, &d.filter);

  // Ties always break on id ascending so identical queries page identically.
  // updated_at is the one nullable sort column; never-updated rows go last
  // in both directions.
  let (column, asc) = d.sort.column();
  if column == "id" {
    page_q.push(" ORDER BY id ASC");
  } else {
    page_q.push(format!(" ORDER BY {} {}", column, if asc { "ASC" } else { "DESC" }));
    if column == "updated_at" {
      page_q.push(" NULLS LAST");
    }
    page_q.push(", id ASC");
  }
  page_q.push(" LIMIT ").push_bind(d.limit).push(" OFFSET ").push_bind(d.offset);

  let rows = page_q.build().fetch_all(db).await.map_err(|e| handle_db_error(e, path))?;

  let mut items = Vec::with_capacity(rows.len());
  for row in &rows {
    items.push(product_from_row(row)?);
  }

  Ok((items, total))
}

fn push_filter(q: &mut QueryBuilder<Postgres>, f: &ListingFilter) {
  q.push(" WHERE 1=1");

  if f.never_matches {
    q.push(" AND FALSE");
    return;
  }

  if let Some(search) = &f.search {
    q.push(" AND name ILIKE ").push_bind(format!("%{}%", escape_like(search)));
  }
  if let Some(min) = f.price_min {
    q.push(" AND price >= ").push_bind(min);
  }
  if let Some(max) = f.price_max {
    q.push(" AND price <= ").push_bind(max);
  }
  if let Some(min) = f.ratings_min {
    q.push(" AND ratings >= ").push_bind(min);
  }
  if let Some(category) = f.category {
    q.push(" AND category = ").push_bind(category.as_str());
  }

  // Any-of membership on the jsonb array columns.
  for (column, values) in
    [("colors", &f.colors), ("variants", &f.variants), ("size", &f.size)]
  {
    if let Some(values) = values {
      q.push(format!(" AND {} ?| ", column)).push_bind(values.clone());
    }
  }
}

fn escape_like(s: &str) -> String {
  s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
