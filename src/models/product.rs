use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const PRODUCT_DESCRIPTION_MIN_LENGTH: usize = 10;
pub const PRODUCT_DISCOUNT_MAX: u32 = 100;
pub const PRODUCT_RATINGS_MAX: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Electronics,
  Clothing,
  Others,
}

impl Category {
  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Electronics => "electronics",
      Category::Clothing => "clothing",
      Category::Others => "others",
    }
  }

  pub fn from_str(s: &str) -> Option<Category> {
    match s {
      "electronics" => Some(Category::Electronics),
      "clothing" => Some(Category::Clothing),
      "others" => Some(Category::Others),
      _ => None,
    }
  }
}

/// A stored catalog document. `id` is assigned by the store at creation and
/// never changes; `created_at` / `updated_at` are millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub brand: String,
  pub seller: String,
  pub description: String,
  pub price: Decimal,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub discount: Option<Decimal>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ratings: Option<Decimal>,
  pub cod_availability: bool,
  pub total_stock_availability: i64,
  pub category: Category,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub variants: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<Vec<String>>,
  pub colors: Vec<String>,
  #[serde(rename = "isFeatured")]
  pub is_featured: bool,
  #[serde(rename = "isActive")]
  pub is_active: bool,
  #[serde(rename = "createdAt")]
  pub created_at: i64,
  #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<i64>,
}

/// An unvalidated candidate payload for create operations. Every field is
/// optional so the validator can report missing required fields instead of
/// failing at deserialization; `category` stays a raw string so values
/// outside the enum domain surface as a field violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductDraft {
  pub name: Option<String>,
  pub brand: Option<String>,
  pub seller: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub discount: Option<Decimal>,
  pub ratings: Option<Decimal>,
  pub cod_availability: Option<bool>,
  pub total_stock_availability: Option<i64>,
  pub category: Option<String>,
  pub variants: Option<Vec<String>>,
  pub size: Option<Vec<String>>,
  pub colors: Option<Vec<String>>,
  #[serde(rename = "isFeatured")]
  pub is_featured: Option<bool>,
  #[serde(rename = "isActive")]
  pub is_active: Option<bool>,
}

/// A partial-update payload: only the submitted fields are validated and
/// persisted, every other stored field is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductUpdate {
  pub name: Option<String>,
  pub brand: Option<String>,
  pub seller: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub discount: Option<Decimal>,
  pub ratings: Option<Decimal>,
  pub cod_availability: Option<bool>,
  pub total_stock_availability: Option<i64>,
  pub category: Option<String>,
  pub variants: Option<Vec<String>>,
  pub size: Option<Vec<String>>,
  pub colors: Option<Vec<String>>,
  #[serde(rename = "isFeatured")]
  pub is_featured: Option<bool>,
  #[serde(rename = "isActive")]
  pub is_active: Option<bool>,
}

impl ProductUpdate {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.brand.is_none()
      && self.seller.is_none()
      && self.description.is_none()
      && self.price.is_none()
      && self.discount.is_none()
      && self.ratings.is_none()
      && self.cod_availability.is_none()
      && self.total_stock_availability.is_none()
      && self.category.is_none()
      && self.variants.is_none()
      && self.size.is_none()
      && self.colors.is_none()
      && self.is_featured.is_none()
      && self.is_active.is_none()
  }
}

impl Product {
  /// Builds the storable document from a draft that already passed
  /// `validate_draft`. Fields the validator guarantees to be present fall
  /// back to defaults rather than panicking.
  pub fn from_draft(draft: ProductDraft, id: String, created_at: i64) -> Product {
    let category = draft
      .category
      .as_deref()
      .and_then(Category::from_str)
      .unwrap_or(Category::Others);

    Product {
      id,
      name: draft.name.unwrap_or_default(),
      brand: draft.brand.unwrap_or_default(),
      seller: draft.seller.unwrap_or_default(),
      description: draft.description.unwrap_or_default(),
      price: draft.price.unwrap_or_default(),
      discount: draft.discount,
      ratings: draft.ratings,
      cod_availability: draft.cod_availability.unwrap_or_default(),
      total_stock_availability: draft.total_stock_availability.unwrap_or_default(),
      category,
      variants: draft.variants,
      size: draft.size,
      colors: draft.colors.unwrap_or_default(),
      is_featured: draft.is_featured.unwrap_or(false),
      is_active: draft.is_active.unwrap_or_default(),
      created_at,
      updated_at: None,
    }
  }
}
