//! Process configuration, read once from the environment at start-up

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {value}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("invalid BIND_ADDR: {bind_addr}"))?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth: auth_config()?,
        })
    }
}

fn auth_config() -> anyhow::Result<AuthConfig> {
    match env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(AuthConfig::new(secret)),
        _ if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random secret for this process");
            Ok(AuthConfig::with_random_secret())
        }
        _ => bail!("JWT_SECRET must be set in production"),
    }
}
