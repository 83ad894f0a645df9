use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{EnvVarError, Error, Result};

const SERVICE_URL_VAR: &str = "PLAYER_SERVICE_URL";
const TIMEOUT_VAR: &str = "PLAYER_SERVICE_TIMEOUT_SECS";
const LOG_LEVEL_VAR: &str = "PLAYERFEED_LOG_LEVEL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Player service endpoint, without the `player`/`id` parameter.
    pub endpoint: Url,
    pub timeout: Duration,
    pub log_level: String,
}

impl Settings {
    // requires PLAYER_SERVICE_URL env var
    // can use dotenv
    pub fn from_env() -> Result<Self> {
        let raw_url =
            env::var(SERVICE_URL_VAR).map_err(|e| EnvVarError::new(SERVICE_URL_VAR, e))?;
        let timeout_secs = match env::var(TIMEOUT_VAR) {
            Ok(raw) => raw.trim().parse().map_err(|_| Error::InvalidSetting {
                var: TIMEOUT_VAR.into(),
                reason: format!("not a number of seconds: {raw:?}"),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint: parse_endpoint(&raw_url)?,
            timeout: Duration::from_secs(timeout_secs),
            log_level: log_level(),
        })
    }
}

/// Log level for this crate, available before the rest of the settings load.
pub fn log_level() -> String {
    env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".into())
}

pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::InvalidEndpoint {
        url: raw.into(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidEndpoint {
            url: raw.into(),
            reason: "not a base URL".into(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_endpoint() {
        let url = parse_endpoint("https://api.example.com/active_players.json").unwrap();
        assert_eq!(url.path(), "/active_players.json");

        assert!(matches!(
            parse_endpoint("not a url"),
            Err(Error::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            parse_endpoint("mailto:someone@example.com"),
            Err(Error::InvalidEndpoint { .. })
        ));
    }
}
