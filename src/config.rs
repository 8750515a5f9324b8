use std::time::Duration as StdDuration;

use chrono::Duration;
use serde::Deserialize;

/// Server configuration, extracted from Rocket's figment
/// (`Rocket.toml`, overridden by `ROCKET_*` environment variables).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub login_delay: u64,
    pub submit_delay: u64,
    pub jwt_secret: String,
    pub auth_ttl: u64,
    pub api_url: String,
    pub registered_voters: u32,
}

impl Config {
    /// Simulated latency of a login submission.
    /// Configured via `LOGIN_DELAY`, in milliseconds.
    pub fn login_delay(&self) -> StdDuration {
        StdDuration::from_millis(self.login_delay)
    }

    /// Simulated latency of every other form submission.
    /// Configured via `SUBMIT_DELAY`, in milliseconds.
    pub fn submit_delay(&self) -> StdDuration {
        StdDuration::from_millis(self.submit_delay)
    }

    /// Key used to sign API tokens.
    /// Configured via `JWT_SECRET`.
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Seconds until an API token expires.
    /// Configured via `AUTH_TTL`.
    pub fn auth_ttl(&self) -> Duration {
        Duration::seconds(self.auth_ttl as i64)
    }

    /// Base URL of the backend API.
    /// Configured via `API_URL`.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Number of registered voters shown to admins.
    /// Configured via `REGISTERED_VOTERS`.
    pub fn registered_voters(&self) -> u32 {
        self.registered_voters
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Config {
        pub fn example() -> Self {
            Self {
                login_delay: 0,
                submit_delay: 0,
                jwt_secret: "test secret".to_string(),
                auth_ttl: 3600,
                api_url: "http://localhost:5000/api".to_string(),
                registered_voters: 120,
            }
        }
    }
}
