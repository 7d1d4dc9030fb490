// src/config.rs

use std::env;
use std::net::SocketAddr;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .map(|v| v.parse().expect("DATABASE_MAX_CONNECTIONS must be a number"))
            .unwrap_or(5);

        let server_addr = env::var("SERVER_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .expect("SERVER_ADDR must be a socket address, e.g. 0.0.0.0:5000");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            database_max_connections,
            server_addr,
            rust_log,
            log_dir,
        }
    }
}
