// Process configuration
// Everything is read from the environment once at startup and held as
// immutable values from then on

use std::sync::OnceLock;

/// Deployment mode, derived from APP_ENV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Application configuration
///
/// The signing secret lives here and is handed to the TokenService at
/// construction time; nothing reads JWT_SECRET after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: String,
    pub cors_origin: String,
    pub env: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    /// DATABASE_URL and JWT_SECRET are required; everything else has a default
    pub fn from_env() -> Self {
        let env = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Self {
            database_url: std::env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set in environment"),
            jwt_secret: std::env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set in environment"),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            env,
        }
    }
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Record the deployment mode for the process; set once in main, later calls
/// are ignored
pub fn init_environment(env: Environment) {
    let _ = ENVIRONMENT.set(env);
}

/// The deployment mode recorded at startup
/// Defaults to development when never initialized (unit tests)
pub fn environment() -> Environment {
    *ENVIRONMENT.get().unwrap_or(&Environment::Development)
}
