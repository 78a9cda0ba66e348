use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let raw_addr =
            std::env::var("GT_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid GT_LISTEN_ADDR: {raw_addr}"))?;
        let db_path = std::env::var("GT_DB_PATH").unwrap_or_else(|_| "./goals.db".into());
        let timeout_ms: u64 = std::env::var("GT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            db_path,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
