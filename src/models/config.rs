use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
  pub service: ServiceConfig,
  pub sql: SqlConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
  pub env: String,
  pub http_host: String,
  pub http_port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SqlConfig {
  pub data_source: String,
  pub max_open_conns: u32,
  pub max_idle_conns: u32,
  pub conn_max_lifetime_milliseconds: u64,
  pub conn_max_idle_time_milliseconds: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      service: ServiceConfig {
        env: "".to_string(),
        http_host: "".to_string(),
        http_port: 0,
      },
      sql: SqlConfig {
        data_source: "".to_string(),
        max_open_conns: 10,
        max_idle_conns: 2,
        conn_max_lifetime_milliseconds: 1_800_000,
        conn_max_idle_time_milliseconds: 300_000,
      },
    }
  }
}
