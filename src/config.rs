use thiserror::Error;

/// Values read once from the process environment (or a `.env` file) at
/// startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub debug: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The bot cannot authenticate without a token; this is fatal.
    #[error("TOKEN environment variable not set")]
    MissingToken,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(dotenvy::var("TOKEN").ok(), dotenvy::var("DEBUG").ok())
    }

    pub(crate) fn from_vars(
        token: Option<String>,
        debug: Option<String>,
    ) -> Result<Self, ConfigError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let debug = debug.map(|v| parse_debug(&v)).unwrap_or(false);

        Ok(Config { token, debug })
    }
}

/// Read only the DEBUG flag, so logging can be configured before the rest of
/// the config is validated.
pub fn debug_from_env() -> bool {
    dotenvy::var("DEBUG")
        .map(|v| parse_debug(&v))
        .unwrap_or(false)
}

pub(crate) fn parse_debug(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
