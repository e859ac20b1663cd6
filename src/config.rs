use std::env;
use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/scan";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub backend_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let timeout_secs = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Config {
            port,
            backend_url,
            backend_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout: Duration::from_secs(60),
        }
    }
}
