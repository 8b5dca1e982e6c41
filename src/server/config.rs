use std::fs;

use thiserror::Error;

use crate::models::config::Config;
use crate::server::Server;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to load service config file: {0}")]
  Read(#[from] std::io::Error),
  #[error("failed to parse config data: {0}")]
  Parse(#[from] serde_yaml::Error),
}

impl Server {
  pub(super) fn init_service_config(&mut self) -> Result<(), ConfigError> {
    let yaml_string = fs::read_to_string("config.yaml")?;
    self.config = serde_yaml::from_str::<Config>(&yaml_string)?;

    Ok(())
  }
}
