use std::error::Error;

use catalog_products::server::{Server, ServerArgs};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
  tracing::subscriber::set_global_default(subscriber).expect("failed to set logger");

  let mut srv = Server::new(ServerArgs {}).await?;
  srv.run().await
}
