use std::{env, fmt};
use url::Url;

/// The root every API path hangs off of.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
const BASE_URL_VAR: &str = "TWILIO_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL {0:?} cannot carry a path")]
    CannotBeABase(String),
}

/// Everything a [`Client`](super::Client) needs besides its HTTP transport.
#[derive(Clone)]
pub struct ClientConfig {
    pub(super) account_sid: String,
    pub(super) auth_token: String,
    pub(super) base_url: Url,
}

impl ClientConfig {
    /// Creates a configuration against [`DEFAULT_BASE_URL`].
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let account_sid = account_sid.into().trim().to_string();
        let auth_token = auth_token.into().trim().to_string();
        if account_sid.is_empty() {
            return Err(ConfigError::Empty("account SID"));
        }
        if auth_token.is_empty() {
            return Err(ConfigError::Empty("auth token"));
        }

        Ok(Self {
            account_sid,
            auth_token,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
        })
    }

    /// Points this configuration at another API root, e.g. a regional edge or a test server.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Reads `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and, optionally, `TWILIO_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let account_sid = lookup(ACCOUNT_SID_VAR).ok_or(ConfigError::Missing(ACCOUNT_SID_VAR))?;
        let auth_token = lookup(AUTH_TOKEN_VAR).ok_or(ConfigError::Missing(AUTH_TOKEN_VAR))?;

        let config = Self::new(account_sid, auth_token)?;
        match lookup(BASE_URL_VAR) {
            Some(base_url) if !base_url.trim().is_empty() => config.with_base_url(&base_url),
            _ => Ok(config),
        }
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// The auth token stays out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Trims whitespace and trailing slashes before parsing.
fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty("base URL"));
    }

    let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(trimmed.to_string()));
    }
    Ok(url)
}
