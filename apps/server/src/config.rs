use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// JSON snapshot mirroring the client store. `None` keeps data in memory only.
    pub data_file: Option<PathBuf>,
    pub seed_demo_data: bool,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_file: None,
            seed_demo_data: true,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("ADV_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid ADV_LISTEN_ADDR")?;
        let data_file = std::env::var("ADV_DATA_FILE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let seed_demo_data = std::env::var("ADV_SEED_DEMO_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        let cors_allow = parse_origins(
            &std::env::var("ADV_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let timeout_ms: u64 = std::env::var("ADV_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            data_file,
            seed_demo_data,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
