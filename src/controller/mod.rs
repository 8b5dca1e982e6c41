mod helpers;
mod product_create;
mod product_delete;
mod product_get;
mod product_update;
mod products_create;
mod products_delete;
mod products_list;
mod router;

use std::{error::Error, sync::Arc};

use tokio::net::TcpListener;
use tracing::info;

use crate::models::config::Config;
use crate::store::database::ProductsStore;

#[derive(Debug)]
pub struct Controller {
  pub(super) cfg: Config,
  pub(super) store: Arc<dyn ProductsStore + Send + Sync>,
}

#[derive(Debug)]
pub struct ControllerArgs {
  pub cfg: Config,
  pub store: Arc<dyn ProductsStore + Send + Sync>,
}

impl Controller {
  pub fn new(args: ControllerArgs) -> Controller {
    Controller { cfg: args.cfg, store: args.store }
  }

  pub async fn run(self) -> Result<(), Box<dyn Error>> {
    let addr = format!("{}:{}", self.cfg.service.http_host, self.cfg.service.http_port);
    let app = router::routes(Arc::new(self));

    let listener = TcpListener::bind(&addr).await?;
    info!("products service listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
  }
}
