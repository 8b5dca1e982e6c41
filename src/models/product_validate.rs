use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::errors::FieldError;
use crate::models::product::{
  Category, ProductDraft, ProductUpdate, PRODUCT_DESCRIPTION_MIN_LENGTH, PRODUCT_DISCOUNT_MAX,
  PRODUCT_RATINGS_MAX,
};

// Letters, digits, spaces, apostrophe, ampersand and hyphen.
fn name_regex() -> &'static Regex {
  static RE_NAME: OnceLock<Regex> = OnceLock::new();
  RE_NAME.get_or_init(|| Regex::new(r"^[a-zA-Z0-9'&\s-]+$").unwrap())
}

fn err(field: &str, message: impl Into<String>) -> FieldError {
  FieldError { field: field.to_string(), message: message.into() }
}

/// Full schema validation for a candidate product. Every rule runs
/// independently and all violations are collected; an empty list means the
/// draft is valid.
pub fn validate_draft(draft: &ProductDraft) -> Vec<FieldError> {
  let mut errors: Vec<FieldError> = Vec::new();

  match draft.name.as_deref() {
    None => errors.push(err("name", "Product name is required")),
    Some("") => errors.push(err("name", "Product name cannot be empty")),
    Some(name) => {
      if !name_regex().is_match(name) {
        errors.push(err(
          "name",
          "Product name must only contain letters, numbers, spaces, and basic punctuation",
        ));
      }
    }
  }

  match draft.brand.as_deref() {
    None => errors.push(err("brand", "Brand is required")),
    Some("") => errors.push(err("brand", "Brand cannot be empty")),
    Some(_) => {}
  }

  match draft.seller.as_deref() {
    None => errors.push(err("seller", "Seller is required")),
    Some("") => errors.push(err("seller", "Seller cannot be empty")),
    Some(_) => {}
  }

  match draft.description.as_deref() {
    None => errors.push(err("description", "Product description is required")),
    Some(desc) => {
      if desc.chars().count() < PRODUCT_DESCRIPTION_MIN_LENGTH {
        errors.push(err(
          "description",
          format!(
            "Product description must be at least {} characters long",
            PRODUCT_DESCRIPTION_MIN_LENGTH
          ),
        ));
      }
    }
  }

  match draft.price {
    None => errors.push(err("price", "Price is required")),
    Some(price) => {
      if price <= Decimal::ZERO {
        errors.push(err("price", "Price must be greater than 0"));
      }
    }
  }

  if let Some(discount) = draft.discount {
    if discount < Decimal::ZERO {
      errors.push(err("discount", "Discount cannot be less than 0"));
    } else if discount > Decimal::from(PRODUCT_DISCOUNT_MAX) {
      errors.push(err("discount", format!("Discount cannot exceed {}", PRODUCT_DISCOUNT_MAX)));
    }
  }

  if let Some(ratings) = draft.ratings {
    if ratings < Decimal::ZERO {
      errors.push(err("ratings", "Rating cannot be less than 0"));
    } else if ratings > Decimal::from(PRODUCT_RATINGS_MAX) {
      errors.push(err("ratings", format!("Rating cannot exceed {}", PRODUCT_RATINGS_MAX)));
    }
  }

  match draft.cod_availability {
    None => errors.push(err("cod_availability", "COD availability is required")),
    Some(_) => {}
  }

  match draft.total_stock_availability {
    None => errors.push(err("total_stock_availability", "Stock availability is required")),
    Some(stock) => {
      if stock < 0 {
        errors.push(err("total_stock_availability", "Stock cannot be negative"));
      }
    }
  }

  if draft.is_active.is_none() {
    errors.push(err("isActive", "isActive status is required"));
  }

  match draft.colors.as_deref() {
    None => errors.push(err("colors", "Colors are required")),
    Some([]) => errors.push(err("colors", "At least one color is required")),
    Some(_) => {}
  }

  match draft.category.as_deref() {
    None => errors.push(err("category", "Category is required")),
    Some(raw) => match Category::from_str(raw) {
      None => {
        errors.push(err("category", "Category must be one of: electronics, clothing, others"))
      }
      Some(category) => {
        conditional_field_errors(category, draft.variants.as_deref(), draft.size.as_deref(), &mut errors)
      }
    },
  }

  errors
}

/// The category-conditional matrix: exactly one of variants/size is required
/// per category, the other is forbidden, and `others` forbids both.
fn conditional_field_errors(
  category: Category,
  variants: Option<&[String]>,
  size: Option<&[String]>,
  errors: &mut Vec<FieldError>,
) {
  match category {
    Category::Electronics => {
      match variants {
        None => errors.push(err("variants", "Variants are required for electronics category")),
        Some([]) => errors.push(err("variants", "At least one variant is required for electronics")),
        Some(_) => {}
      }
      if size.is_some() {
        errors.push(err("size", "Size field is only allowed for clothing category"));
      }
    }
    Category::Clothing => {
      match size {
        None => errors.push(err("size", "Size is required for clothing category")),
        Some([]) => errors.push(err("size", "At least one size is required for clothing")),
        Some(entries) => {
          if entries.iter().any(|s| s.trim().is_empty()) {
            errors.push(err("size", "Size entries cannot be blank"));
          }
        }
      }
      if variants.is_some() {
        errors.push(err("variants", "Variants field is only allowed for electronics category"));
      }
    }
    Category::Others => {
      if variants.is_some() {
        errors.push(err("variants", "Variants field is only allowed for electronics category"));
      }
      if size.is_some() {
        errors.push(err("size", "Size field is only allowed for clothing category"));
      }
    }
  }
}

/// The narrower per-item check used by bulk create: only the
/// category-conditional presence rules, reported under the `category` field.
/// This is deliberately weaker than `validate_draft`.
pub fn category_rules(draft: &ProductDraft) -> Option<FieldError> {
  match draft.category.as_deref() {
    Some("electronics") if draft.variants.as_deref().map_or(true, |v| v.is_empty()) => {
      Some(err("category", "Variants are required for electronics category"))
    }
    Some("clothing") if draft.size.as_deref().map_or(true, |s| s.is_empty()) => {
      Some(err("category", "Size is required for clothing category"))
    }
    _ => None,
  }
}

/// Validates a partial update: only submitted fields are checked, and the
/// category/variants/size combination is checked exactly as submitted. A
/// patch that omits `category` is never re-checked against the stored
/// category.
pub fn validate_update(patch: &ProductUpdate) -> Vec<FieldError> {
  let mut errors: Vec<FieldError> = Vec::new();

  if let Some(name) = patch.name.as_deref() {
    if name.is_empty() {
      errors.push(err("name", "Product name cannot be empty"));
    } else if !name_regex().is_match(name) {
      errors.push(err(
        "name",
        "Product name must only contain letters, numbers, spaces, and basic punctuation",
      ));
    }
  }

  if let Some(brand) = patch.brand.as_deref() {
    if brand.is_empty() {
      errors.push(err("brand", "Brand cannot be empty"));
    }
  }

  if let Some(seller) = patch.seller.as_deref() {
    if seller.is_empty() {
      errors.push(err("seller", "Seller cannot be empty"));
    }
  }

  if let Some(desc) = patch.description.as_deref() {
    if desc.chars().count() < PRODUCT_DESCRIPTION_MIN_LENGTH {
      errors.push(err(
        "description",
        format!(
          "Product description must be at least {} characters long",
          PRODUCT_DESCRIPTION_MIN_LENGTH
        ),
      ));
    }
  }

  if let Some(price) = patch.price {
    if price <= Decimal::ZERO {
      errors.push(err("price", "Price must be greater than 0"));
    }
  }

  if let Some(discount) = patch.discount {
    if discount < Decimal::ZERO || discount > Decimal::from(PRODUCT_DISCOUNT_MAX) {
      errors.push(err("discount", format!("Discount must be between 0 and {}", PRODUCT_DISCOUNT_MAX)));
    }
  }

  if let Some(ratings) = patch.ratings {
    if ratings < Decimal::ZERO || ratings > Decimal::from(PRODUCT_RATINGS_MAX) {
      errors.push(err("ratings", format!("Rating must be between 0 and {}", PRODUCT_RATINGS_MAX)));
    }
  }

  if let Some(stock) = patch.total_stock_availability {
    if stock < 0 {
      errors.push(err("total_stock_availability", "Stock cannot be negative"));
    }
  }

  if let Some(colors) = patch.colors.as_deref() {
    if colors.is_empty() {
      errors.push(err("colors", "At least one color is required"));
    }
  }

  if let Some(raw) = patch.category.as_deref() {
    match Category::from_str(raw) {
      None => {
        errors.push(err("category", "Category must be one of: electronics, clothing, others"))
      }
      Some(category) => {
        conditional_field_errors(category, patch.variants.as_deref(), patch.size.as_deref(), &mut errors)
      }
    }
  }

  errors
}
