//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build from `HOST` (default `0.0.0.0`) and `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns a message naming the bad value when `PORT` is not a port number.
    pub fn from_env() -> Result<Self, String> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, String> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.trim().parse::<u16>().map_err(|_| format!("invalid PORT: {v}")),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
