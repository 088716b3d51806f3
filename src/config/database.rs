//! Relational database and Redis cache connection settings.

use serde::Serialize;

use crate::config::secrets::{self, SecretString};
use crate::config::source::{EnvReader, EnvSource};
use crate::error::FieldProblem;

/// SQLite connection settings.
///
/// - `SQLITE_URL` (default: "sqlite+aiosqlite:///./app.db")
/// - `DB_POOL_SIZE` (default: 5)
/// - `DB_MAX_OVERFLOW` — extra connections beyond the pool (default: 10)
/// - `DB_ECHO` — log every statement (default: false)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseSettings {
    pub sqlite_url: String,
    pub pool_size: u32,
    pub max_overflow: u32,
    pub echo: bool,
}

impl DatabaseSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            sqlite_url: env.string("SQLITE_URL", "sqlite+aiosqlite:///./app.db"),
            pool_size: env.number("DB_POOL_SIZE", 5),
            max_overflow: env.number("DB_MAX_OVERFLOW", 10),
            echo: env.boolean("DB_ECHO", false),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.pool_size == 0 {
            problems.push(FieldProblem::new("DB_POOL_SIZE", "must be at least 1"));
        }
        if self.sqlite_url.is_empty() {
            problems.push(FieldProblem::new("SQLITE_URL", "must not be empty"));
        }
    }

    /// Hard cap on concurrent connections.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.pool_size + self.max_overflow
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

/// Redis connection settings.
///
/// - `REDIS_URL` (default: "redis://localhost:6379/0")
/// - `REDIS_PASSWORD` (secret, optional)
/// - `REDIS_SSL` (default: false)
#[derive(Debug, Serialize)]
pub struct RedisSettings {
    pub url: String,
    #[serde(serialize_with = "secrets::redacted_opt")]
    pub password: Option<SecretString>,
    pub ssl: bool,
}

impl RedisSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            url: env.string("REDIS_URL", "redis://localhost:6379/0"),
            password: env.secret_opt("REDIS_PASSWORD"),
            ssl: env.boolean("REDIS_SSL", false),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.url.is_empty() {
            problems.push(FieldProblem::new("REDIS_URL", "must not be empty"));
        }
    }
}

impl PartialEq for RedisSettings {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && secrets::secret_opt_eq(&self.password, &other.password)
            && self.ssl == other.ssl
    }
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let db = DatabaseSettings::default();
        assert_eq!(db.sqlite_url, "sqlite+aiosqlite:///./app.db");
        assert_eq!(db.max_connections(), 15);

        let redis = RedisSettings::default();
        assert_eq!(redis.url, "redis://localhost:6379/0");
        assert!(redis.password.is_none());
        assert!(!redis.ssl);
    }

    #[test]
    fn reject_empty_pool() {
        let mut db = DatabaseSettings::default();
        db.pool_size = 0;

        let mut problems = Vec::new();
        db.validate(&mut problems);
        assert_eq!(problems[0].field, "DB_POOL_SIZE");
    }
}
