mod config;
mod database;

use std::error::Error;
use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::controller::{Controller, ControllerArgs};
use crate::models::config::Config;
use crate::store::database::dbstore::{ProductsStoreImpl, ProductsStoreImplArgs};

pub struct Server {
  pub(crate) db: Option<Arc<Pool<Postgres>>>,
  pub(crate) config: Config,
}

#[derive(Debug)]
pub struct ServerArgs {}

impl Server {
  pub async fn new(_: ServerArgs) -> Result<Self, Box<dyn Error>> {
    let mut server = Self { db: None, config: Config::default() };
    server.init_service_config()?;

    Ok(server)
  }

  pub async fn run(&mut self) -> Result<(), Box<dyn Error>> {
    self.init_database().await?;

    let store_args = ProductsStoreImplArgs { db: self.db.as_ref().unwrap().clone() };
    let store = Arc::new(ProductsStoreImpl::new(store_args));

    let ctr_args = ControllerArgs { cfg: self.config.clone(), store };
    let controller = Controller::new(ctr_args);
    controller.run().await
  }
}
