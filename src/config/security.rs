//! Token signing, password policy, and API key rotation settings.

use std::time::Duration;

use serde::Serialize;

use crate::config::secrets::{self, SecretString};
use crate::config::source::{EnvReader, EnvSource};
use crate::error::FieldProblem;

/// Signing algorithms the token layer supports. `SECRET_KEY` is an HMAC
/// key, so only the symmetric family is accepted.
const SUPPORTED_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];

/// Token signing and lifetime settings.
///
/// - `SECRET_KEY` — HMAC signing key (secret, required)
/// - `ACCESS_TOKEN_EXPIRE_MINUTES` (default: 30)
/// - `REFRESH_TOKEN_EXPIRE_DAYS` (default: 7)
/// - `ALGORITHM` (default: "HS256")
#[derive(Debug, Serialize)]
pub struct AuthSettings {
    #[serde(serialize_with = "secrets::redacted")]
    pub secret_key: SecretString,
    pub access_token_expire_minutes: u64,
    pub refresh_token_expire_days: u64,
    pub algorithm: String,
}

impl AuthSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Option<Self> {
        // Every lookup runs before the required check so a load with
        // several problems reports all of them at once.
        let secret_key = env.required_secret("SECRET_KEY");
        let access_token_expire_minutes = env.number("ACCESS_TOKEN_EXPIRE_MINUTES", 30);
        let refresh_token_expire_days = env.number("REFRESH_TOKEN_EXPIRE_DAYS", 7);
        let algorithm = env.string("ALGORITHM", "HS256");

        Some(Self {
            secret_key: secret_key?,
            access_token_expire_minutes,
            refresh_token_expire_days,
            algorithm,
        })
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.as_str()) {
            problems.push(FieldProblem::new(
                "ALGORITHM",
                format!(
                    "unsupported algorithm {:?}, expected one of {}",
                    self.algorithm,
                    SUPPORTED_ALGORITHMS.join(", ")
                ),
            ));
        }
        if self.access_token_expire_minutes == 0 {
            problems.push(FieldProblem::new(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                "must be at least 1 minute",
            ));
        }
        if self.refresh_token_expire_days == 0 {
            problems.push(FieldProblem::new(
                "REFRESH_TOKEN_EXPIRE_DAYS",
                "must be at least 1 day",
            ));
        }
    }

    #[must_use]
    pub const fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_expire_minutes * 60)
    }

    #[must_use]
    pub const fn refresh_token_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_token_expire_days * 24 * 60 * 60)
    }
}

impl PartialEq for AuthSettings {
    fn eq(&self, other: &Self) -> bool {
        secrets::secret_eq(&self.secret_key, &other.secret_key)
            && self.access_token_expire_minutes == other.access_token_expire_minutes
            && self.refresh_token_expire_days == other.refresh_token_expire_days
            && self.algorithm == other.algorithm
    }
}

/// Password complexity requirements.
///
/// All requirement flags default to true; `PASSWORD_MIN_LENGTH`
/// defaults to 8.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digits: bool,
    pub require_special: bool,
}

impl PasswordPolicy {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            min_length: env.number("PASSWORD_MIN_LENGTH", 8),
            require_uppercase: env.boolean("PASSWORD_REQUIRE_UPPERCASE", true),
            require_lowercase: env.boolean("PASSWORD_REQUIRE_LOWERCASE", true),
            require_digits: env.boolean("PASSWORD_REQUIRE_DIGITS", true),
            require_special: env.boolean("PASSWORD_REQUIRE_SPECIAL", true),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.min_length == 0 {
            problems.push(FieldProblem::new(
                "PASSWORD_MIN_LENGTH",
                "must be at least 1",
            ));
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

/// API key rotation policy.
///
/// - `API_KEY_ROTATION_DAYS` (default: 90)
/// - `API_KEY_LENGTH` — generated key length in bytes (default: 32)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiKeyPolicy {
    pub rotation_days: u32,
    pub length: usize,
}

impl ApiKeyPolicy {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            rotation_days: env.number("API_KEY_ROTATION_DAYS", 90),
            length: env.number("API_KEY_LENGTH", 32),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.rotation_days == 0 {
            problems.push(FieldProblem::new(
                "API_KEY_ROTATION_DAYS",
                "must be at least 1 day",
            ));
        }
        // Anything shorter is trivially brute-forceable.
        if self.length < 16 {
            problems.push(FieldProblem::new(
                "API_KEY_LENGTH",
                format!("must be at least 16, got {}", self.length),
            ));
        }
    }
}

impl Default for ApiKeyPolicy {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}
