use std::sync::Arc;

use axum::{
  routing::{delete, get, post, put},
  Router,
};

use crate::controller::{
  product_create, product_delete, product_get, product_update, products_create, products_delete,
  products_list, Controller,
};
use crate::models::errors::AppError;

pub(super) fn routes(c: Arc<Controller>) -> Router {
  Router::new()
    .route("/CreateProduct", post(product_create::create_product))
    .route("/CreateMultipleProducts", post(products_create::create_multiple_products))
    .route("/GetAllProducts", get(products_list::get_all_products))
    .route("/GetProductById/{id}", get(product_get::get_product_by_id))
    .route("/UpdateProductById/{id}", put(product_update::update_product_by_id))
    .route("/DeleteProductById/{id}", delete(product_delete::delete_product_by_id))
    .route("/DeleteMultipleProducts", delete(products_delete::delete_multiple_products))
    .fallback(not_found)
    .with_state(c)
}

async fn not_found() -> AppError {
  AppError::not_found("products.controller.router", "API not found")
}
