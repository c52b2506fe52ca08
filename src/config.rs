use anyhow::{Context, Result};

/// Runtime settings read from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the Shifter API, without a trailing slash
    pub api_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("API_URL")
            .context("API_URL must be set")?
            .trim_end_matches('/')
            .to_string();
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("Invalid PORT")?;

        Ok(Self { api_url, host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
