use std::env::var;
use std::time::Duration;

use crate::{Error, Result};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn get_var_database_url() -> Result<String> {
    var(DATABASE_URL).map_err(|_| Error::MissingConfig(DATABASE_URL))
}

/// Connection settings handed to a catalog when it builds its pool.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl ConnectOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_defaults() {
        let opts = ConnectOptions::new("mysql://localhost/shop").max_connections(1);
        assert_eq!(opts.url, "mysql://localhost/shop");
        assert_eq!(opts.max_connections, 1);
        assert_eq!(opts.acquire_timeout, DEFAULT_ACQUIRE_TIMEOUT);
    }
}
