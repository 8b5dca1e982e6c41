pub mod bulk;
pub mod config;
pub mod errors;
pub mod product;
pub mod product_validate;
pub mod query;
