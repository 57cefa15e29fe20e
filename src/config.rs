use std::env;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Hostname that marks a pageview as coming from the production
    /// site rather than a preview or local build.
    pub production_host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a number");
        let production_host =
            env::var("PRODUCTION_HOST").unwrap_or_else(|_| "bajtos.net".to_string());

        Self {
            host,
            port,
            production_host,
        }
    }
}
