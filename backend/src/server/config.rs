//! Application configuration loaded once at startup.
//!
//! Business logic never reads the environment; everything it needs arrives
//! through this struct, passed into the adapter constructors. That keeps the
//! pipeline unit-testable without environment mutation.

use std::env;
use std::fs;

use reqwest::Url;

use crate::outbound::geocode::GOOGLE_GEOCODE_ENDPOINT;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("PORT value {value:?} is not a valid port")]
    InvalidPort {
        /// The rejected raw value.
        value: String,
    },
    /// Neither `DATABASE_URL` nor a readable `DATABASE_URL_FILE` was given.
    #[error("DATABASE_URL is not set and no DATABASE_URL_FILE fallback was readable")]
    MissingDatabaseUrl,
    /// `DATABASE_URL_FILE` named a file that could not be read.
    #[error("failed to read database URL from {path}: {message}")]
    SecretFile {
        /// The configured file path.
        path: String,
        /// Read failure detail.
        message: String,
    },
    /// `GEOCODING_ENDPOINT` was set but is not a URL.
    #[error("GEOCODING_ENDPOINT value {value:?} is not a valid URL")]
    InvalidEndpoint {
        /// The rejected raw value.
        value: String,
    },
}

/// Startup configuration for the lead-capture service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port, default 3000.
    pub port: u16,
    /// PostgreSQL connection string for the lead store.
    pub database_url: String,
    /// Geocoding API key. May be absent: lookups then fail per request with
    /// a configuration error instead of preventing startup.
    pub geocoding_api_key: Option<String>,
    /// Geocoding endpoint, overridable for tests.
    pub geocoding_endpoint: Url,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparseable port or endpoint, or when
    /// no database URL is available.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(env::var("PORT").ok())?,
            database_url: load_database_url(
                env::var("DATABASE_URL").ok(),
                env::var("DATABASE_URL_FILE").ok(),
            )?,
            geocoding_api_key: env::var("GEOCODING_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            geocoding_endpoint: parse_endpoint(env::var("GEOCODING_ENDPOINT").ok())?,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { value }),
    }
}

/// `DATABASE_URL` inline wins; otherwise `DATABASE_URL_FILE` names a secret
/// file whose trimmed content is the URL.
fn load_database_url(
    inline: Option<String>,
    file: Option<String>,
) -> Result<String, ConfigError> {
    if let Some(url) = inline.filter(|value| !value.trim().is_empty()) {
        return Ok(url.trim().to_owned());
    }
    let Some(path) = file else {
        return Err(ConfigError::MissingDatabaseUrl);
    };
    fs::read_to_string(&path)
        .map(|content| content.trim().to_owned())
        .map_err(|err| ConfigError::SecretFile {
            path,
            message: err.to_string(),
        })
}

fn parse_endpoint(raw: Option<String>) -> Result<Url, ConfigError> {
    match raw {
        None => Url::parse(GOOGLE_GEOCODE_ENDPOINT).map_err(|_| ConfigError::InvalidEndpoint {
            value: GOOGLE_GEOCODE_ENDPOINT.to_owned(),
        }),
        Some(value) => Url::parse(&value).map_err(|_| ConfigError::InvalidEndpoint { value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write as _;

    #[rstest]
    #[case::unset(None, DEFAULT_PORT)]
    #[case::explicit(Some("8080"), 8080)]
    #[case::trimmed(Some(" 3001 "), 3001)]
    fn port_parsing_accepts_valid_values(#[case] raw: Option<&str>, #[case] expected: u16) {
        let parsed = parse_port(raw.map(str::to_owned)).expect("port parses");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case::word("http")]
    #[case::out_of_range("70000")]
    fn port_parsing_rejects_invalid_values(#[case] raw: &str) {
        let err = parse_port(Some(raw.to_owned())).expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn inline_database_url_wins_over_file() {
        let url = load_database_url(
            Some("postgres://inline/db".to_owned()),
            Some("/nonexistent".to_owned()),
        )
        .expect("inline value is enough");
        assert_eq!(url, "postgres://inline/db");
    }

    #[test]
    fn database_url_falls_back_to_secret_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "postgres://from-file/db").expect("write temp file");
        let path = file.path().to_string_lossy().into_owned();

        let url = load_database_url(None, Some(path)).expect("file fallback works");
        assert_eq!(url, "postgres://from-file/db");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = load_database_url(None, None).expect_err("must fail");
        assert_eq!(err, ConfigError::MissingDatabaseUrl);
    }

    #[test]
    fn unreadable_secret_file_is_reported_with_its_path() {
        let err = load_database_url(None, Some("/definitely/not/here".to_owned()))
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::SecretFile { .. }));
        assert!(err.to_string().contains("/definitely/not/here"));
    }

    #[test]
    fn endpoint_defaults_to_the_google_api() {
        let endpoint = parse_endpoint(None).expect("default endpoint parses");
        assert_eq!(endpoint.as_str(), GOOGLE_GEOCODE_ENDPOINT);
    }

    #[test]
    fn endpoint_override_must_be_a_url() {
        let err = parse_endpoint(Some("not a url".to_owned())).expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
