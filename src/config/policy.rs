//! Runtime policies: response cache, rate limiting, and backups.

use std::time::Duration;

use serde::Serialize;

use crate::config::source::{EnvReader, EnvSource};
use crate::error::FieldProblem;

/// In-memory response cache policy.
///
/// - `CACHE_ENABLED` (default: true)
/// - `CACHE_TTL` — entry lifetime in seconds (default: 3600)
/// - `CACHE_MAX_SIZE` — entry cap (default: 1000)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl: u64,
    pub max_size: usize,
}

impl CacheSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            enabled: env.boolean("CACHE_ENABLED", true),
            ttl: env.number("CACHE_TTL", 3600),
            max_size: env.number("CACHE_MAX_SIZE", 1000),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if !self.enabled {
            return;
        }
        if self.ttl == 0 {
            problems.push(FieldProblem::new(
                "CACHE_TTL",
                "must be at least 1 second when the cache is enabled",
            ));
        }
        if self.max_size == 0 {
            problems.push(FieldProblem::new(
                "CACHE_MAX_SIZE",
                "must be at least 1 when the cache is enabled",
            ));
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

/// Request rate limiting policy.
///
/// - `RATE_LIMIT_ENABLED` (default: true)
/// - `RATE_LIMIT_REQUESTS` — requests per period (default: 100)
/// - `RATE_LIMIT_PERIOD` — period length in seconds (default: 3600)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateLimitSettings {
    pub enabled: bool,
    pub requests: u32,
    pub period: u64,
}

impl RateLimitSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            enabled: env.boolean("RATE_LIMIT_ENABLED", true),
            requests: env.number("RATE_LIMIT_REQUESTS", 100),
            period: env.number("RATE_LIMIT_PERIOD", 3600),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if !self.enabled {
            return;
        }
        if self.requests == 0 {
            problems.push(FieldProblem::new(
                "RATE_LIMIT_REQUESTS",
                "must be at least 1 when rate limiting is enabled",
            ));
        }
        if self.period == 0 {
            problems.push(FieldProblem::new(
                "RATE_LIMIT_PERIOD",
                "must be at least 1 second when rate limiting is enabled",
            ));
        }
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        Duration::from_secs(self.period)
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

/// Backup policy.
///
/// - `BACKUP_ENABLED` (default: true)
/// - `BACKUP_INTERVAL_HOURS` (default: 24)
/// - `BACKUP_RETENTION_DAYS` (default: 30)
/// - `BACKUP_PATH` (default: "./backups")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupSettings {
    pub enabled: bool,
    pub interval_hours: u64,
    pub retention_days: u64,
    pub path: String,
}

impl BackupSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            enabled: env.boolean("BACKUP_ENABLED", true),
            interval_hours: env.number("BACKUP_INTERVAL_HOURS", 24),
            retention_days: env.number("BACKUP_RETENTION_DAYS", 30),
            path: env.string("BACKUP_PATH", "./backups"),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if !self.enabled {
            return;
        }
        if self.interval_hours == 0 {
            problems.push(FieldProblem::new(
                "BACKUP_INTERVAL_HOURS",
                "must be at least 1 hour when backups are enabled",
            ));
        }
        if self.retention_days == 0 {
            problems.push(FieldProblem::new(
                "BACKUP_RETENTION_DAYS",
                "must be at least 1 day when backups are enabled",
            ));
        }
        if self.path.is_empty() {
            problems.push(FieldProblem::new(
                "BACKUP_PATH",
                "must not be empty when backups are enabled",
            ));
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_hours * 60 * 60)
    }

    #[must_use]
    pub const fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_days * 24 * 60 * 60)
    }
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}
