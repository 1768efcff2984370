use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Seed demo partners when the store is empty.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PCF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid PCF_LISTEN_ADDR")?;
        let db_path = std::env::var("PCF_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("PCF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PCF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let seed_demo_data = std::env::var("PCF_SEED_DEMO_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            seed_demo_data,
        })
    }
}
