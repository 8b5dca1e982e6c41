use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::product::Category;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 25;

/// Raw listing parameters exactly as they arrive on the query string. Every
/// field is an optional string; normalization happens in `translate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
  pub search: Option<String>,
  #[serde(rename = "priceMin")]
  pub price_min: Option<String>,
  #[serde(rename = "priceMax")]
  pub price_max: Option<String>,
  pub ratings: Option<String>,
  pub sort: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
  pub category: Option<String>,
  pub colors: Option<String>,
  pub variants: Option<String>,
  pub size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  Name,
  CreatedAtAsc,
  CreatedAtDesc,
  UpdatedAtAsc,
  UpdatedAtDesc,
  PriceAsc,
  PriceDesc,
  RatingsAsc,
  RatingsDesc,
  /// Fallback for absent or unrecognized sort values: creation order.
  InsertionOrder,
}

impl SortKey {
  pub fn from_param(param: Option<&str>) -> SortKey {
    match param {
      Some("name") => SortKey::Name,
      Some("createdAtAsc") => SortKey::CreatedAtAsc,
      Some("createdAtDesc") => SortKey::CreatedAtDesc,
      Some("updatedAtAsc") => SortKey::UpdatedAtAsc,
      Some("updatedAtDesc") => SortKey::UpdatedAtDesc,
      Some("priceAsc") => SortKey::PriceAsc,
      Some("priceDesc") => SortKey::PriceDesc,
      Some("ratingsAsc") => SortKey::RatingsAsc,
      Some("ratingsDesc") => SortKey::RatingsDesc,
      _ => SortKey::InsertionOrder,
    }
  }

  /// The (column, ascending) pair this key maps to. Ids are ULIDs, so
  /// ordering by `id` is creation order.
  pub fn column(&self) -> (&'static str, bool) {
    match self {
      SortKey::Name => ("name", true),
      SortKey::CreatedAtAsc => ("created_at", true),
      SortKey::CreatedAtDesc => ("created_at", false),
      SortKey::UpdatedAtAsc => ("updated_at", true),
      SortKey::UpdatedAtDesc => ("updated_at", false),
      SortKey::PriceAsc => ("price", true),
      SortKey::PriceDesc => ("price", false),
      SortKey::RatingsAsc => ("ratings", true),
      SortKey::RatingsDesc => ("ratings", false),
      SortKey::InsertionOrder => ("id", true),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
  /// Case-insensitive substring match on `name`.
  pub search: Option<String>,
  pub price_min: Option<Decimal>,
  pub price_max: Option<Decimal>,
  /// Matches products with ratings >= this floor.
  pub ratings_min: Option<Decimal>,
  pub category: Option<Category>,
  /// Any-of matches against the corresponding array field.
  pub colors: Option<Vec<String>>,
  pub variants: Option<Vec<String>>,
  pub size: Option<Vec<String>>,
  /// Set when a filter value can never match anything (e.g. a category
  /// outside the enum domain); yields an empty result set, not an error.
  pub never_matches: bool,
}

/// The normalized, bounded query: fully determines the result set and its
/// ordering, the executor only replays it against storage.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
  pub filter: ListingFilter,
  pub sort: SortKey,
  pub offset: i64,
  pub limit: i64,
  /// Echoed back in the listing envelope.
  pub page: i64,
}

fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
  let values: Vec<String> = raw?
    .split(',')
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect();
  if values.is_empty() { None } else { Some(values) }
}

fn parse_int(raw: Option<&str>, default: i64) -> i64 {
  raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(default)
}

fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
  raw.and_then(|s| s.trim().parse::<Decimal>().ok())
}

impl ListParams {
  /// Builds the query descriptor. Absent or non-numeric page/limit default
  /// to 1/25. Non-positive limits pass through as an empty page; a negative
  /// computed offset is floored at zero so the descriptor stays executable.
  pub fn translate(&self) -> QueryDescriptor {
    let mut filter = ListingFilter::default();

    filter.search = self
      .search
      .as_deref()
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(str::to_string);
    filter.price_min = parse_decimal(self.price_min.as_deref());
    filter.price_max = parse_decimal(self.price_max.as_deref());
    filter.ratings_min = parse_decimal(self.ratings.as_deref());
    filter.colors = split_list(self.colors.as_deref());
    filter.variants = split_list(self.variants.as_deref());
    filter.size = split_list(self.size.as_deref());

    if let Some(raw) = self.category.as_deref() {
      match Category::from_str(raw) {
        Some(category) => filter.category = Some(category),
        None => filter.never_matches = true,
      }
    }

    let page = parse_int(self.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_int(self.limit.as_deref(), DEFAULT_LIMIT).max(0);
    let offset = ((page - 1) * limit).max(0);

    QueryDescriptor { filter, sort: SortKey::from_param(self.sort.as_deref()), offset, limit, page }
  }
}
