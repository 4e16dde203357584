//! Configuration management for Riftgate
//!
//! This module handles loading and validating configuration from environment
//! variables. The signing secret and the upstream base URL live here and are
//! handed to the services at construction; nothing reads the environment
//! after startup.

use std::env;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// JWT secret for token signing
    pub jwt_secret: String,

    /// Session token TTL in seconds (default: 3600 = 1 hour)
    pub token_ttl_seconds: i64,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,

    /// Base URL of the Data Dragon feed
    pub ddragon_base_url: String,

    /// Language used for champion data when the client sends none
    pub default_lang: String,

    /// CORS allowed origins (comma separated); permissive when unset
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue("TOKEN_TTL_SECONDS".to_string(), e.to_string()))?;

        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidValue("BCRYPT_COST".to_string(), e.to_string()))?;

        let ddragon_base_url = env::var("DDRAGON_BASE_URL")
            .unwrap_or_else(|_| "https://ddragon.leagueoflegends.com".to_string());

        let default_lang = env::var("DEFAULT_LANG").unwrap_or_else(|_| "pt_BR".to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").ok();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            port,
            jwt_secret,
            token_ttl_seconds,
            bcrypt_cost,
            ddragon_base_url,
            default_lang,
            cors_allowed_origins,
            log_level,
        })
    }
}
