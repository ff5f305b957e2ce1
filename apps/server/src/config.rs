use std::{net::SocketAddr, time::Duration};

/// Process-wide configuration, read once at startup and passed explicitly
/// to whatever needs it. Nothing reads the environment after this.
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub stripe_secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PH_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .expect("Invalid PH_LISTEN_ADDR");
        let db_path =
            std::env::var("PH_DB_PATH").unwrap_or_else(|_| "./db/pawhaven.db".into());
        let cors_allow = std::env::var("PH_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PH_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let jwt_secret =
            std::env::var("PH_ACCESS_TOKEN_SECRET").expect("PH_ACCESS_TOKEN_SECRET must be set");
        let token_ttl_secs: u64 = std::env::var("PH_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .unwrap_or(3600);
        let stripe_secret_key =
            std::env::var("PH_STRIPE_SECRET_KEY").expect("PH_STRIPE_SECRET_KEY must be set");
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            stripe_secret_key,
        }
    }
}
