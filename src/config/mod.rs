//! Typed configuration from environment variables.
//!
//! The settings record loads once at startup and is immutable for the
//! life of the process. Loading reads a snapshot of the process
//! environment, optionally layered over a local `.env` file — **real
//! environment variables always override file entries**. Variable names
//! are matched case-sensitively, exactly as documented on each group.
//!
//! Loading never fails fast: every missing required variable, parse
//! failure, and out-of-range value is collected and reported in a
//! single [`Error::ConfigValidation`](crate::error::Error), so one pass
//! shows the complete list of problems.
//!
//! Sensitive values are wrapped in [`SecretString`](secrets::SecretString)
//! to prevent log leaks; rendering a secret produces a fixed placeholder
//! unless it is explicitly exposed.

mod app;
mod database;
mod ingest;
mod llm;
mod observability;
mod policy;
pub mod secrets;
mod security;
mod source;
mod template;
mod vector;

use std::path::Path;

use serde::Serialize;

pub use app::{AppSettings, CorsSettings, WsSettings};
pub use database::{DatabaseSettings, RedisSettings};
pub use ingest::DocumentSettings;
pub use llm::LlmSettings;
pub use observability::ObservabilitySettings;
pub use policy::{BackupSettings, CacheSettings, RateLimitSettings};
pub use security::{ApiKeyPolicy, AuthSettings, PasswordPolicy};
pub use source::{EnvReader, EnvSource};
pub use template::ENV_TEMPLATE;
pub use vector::VectorStoreSettings;

use crate::error::{Error, Result};

/// The complete, validated application configuration.
///
/// Built once at startup via [`Settings::load`] and shared read-only
/// from then on (see [`AppContext`](crate::context::AppContext)).
#[derive(Debug, PartialEq, Serialize)]
pub struct Settings {
    pub app: AppSettings,
    pub cors: CorsSettings,
    pub ws: WsSettings,
    pub auth: AuthSettings,
    pub password: PasswordPolicy,
    pub api_keys: ApiKeyPolicy,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub vector: VectorStoreSettings,
    pub llm: LlmSettings,
    pub documents: DocumentSettings,
    pub observability: ObservabilitySettings,
    pub cache: CacheSettings,
    pub rate_limit: RateLimitSettings,
    pub backup: BackupSettings,
}

impl Settings {
    /// Load from the process environment layered over `./.env`.
    pub fn load() -> Result<Self> {
        Self::from_source(&EnvSource::process())
    }

    /// Load from the process environment layered over an explicit file.
    pub fn load_with_env_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_source(&EnvSource::with_env_file(path))
    }

    /// Build and validate a settings record from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] enumerating every field that
    /// is missing, unparsable, or out of range.
    pub fn from_source(source: &EnvSource) -> Result<Self> {
        let mut env = EnvReader::new(source);

        let app = AppSettings::read(&mut env);
        let cors = CorsSettings::read(&mut env);
        let ws = WsSettings::read(&mut env);
        let auth = AuthSettings::read(&mut env);
        let password = PasswordPolicy::read(&mut env);
        let api_keys = ApiKeyPolicy::read(&mut env);
        let database = DatabaseSettings::read(&mut env);
        let redis = RedisSettings::read(&mut env);
        let vector = VectorStoreSettings::read(&mut env);
        let llm = LlmSettings::read(&mut env);
        let documents = DocumentSettings::read(&mut env);
        let observability = ObservabilitySettings::read(&mut env);
        let cache = CacheSettings::read(&mut env);
        let rate_limit = RateLimitSettings::read(&mut env);
        let backup = BackupSettings::read(&mut env);

        // A required group is None exactly when the reader recorded a
        // problem for it, so the guard covers both conditions.
        let settings = match (auth, vector, llm) {
            (Some(auth), Some(vector), Some(llm)) if env.ok() => Self {
                app,
                cors,
                ws,
                auth,
                password,
                api_keys,
                database,
                redis,
                vector,
                llm,
                documents,
                observability,
                cache,
                rate_limit,
                backup,
            },
            _ => return Err(env.into_error()),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Range and cross-field checks over an already-typed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] enumerating every offending
    /// field; an empty problem list is success.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        self.app.validate(&mut problems);
        self.ws.validate(&mut problems);
        self.auth.validate(&mut problems);
        self.password.validate(&mut problems);
        self.api_keys.validate(&mut problems);
        self.database.validate(&mut problems);
        self.redis.validate(&mut problems);
        self.vector.validate(&mut problems);
        self.llm.validate(&mut problems);
        self.documents.validate(&mut problems);
        self.observability.validate(&mut problems);
        self.cache.validate(&mut problems);
        self.rate_limit.validate(&mut problems);
        self.backup.validate(&mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigValidation(problems))
        }
    }

    /// One-shot startup summary. No sensitive values.
    pub fn log(&self) {
        tracing::info!(
            app = %self.app.name,
            debug = self.app.debug,
            api_prefix = %self.app.api_v1_prefix,
            "Application configured"
        );
        tracing::info!(
            collection = %self.vector.collection_name,
            vector_size = self.vector.vector_size,
            distance = %self.vector.distance,
            embedding_model = %self.llm.embedding_model,
            completion_model = %self.llm.completion_model,
            "Retrieval configured"
        );
        tracing::info!(
            cache_enabled = self.cache.enabled,
            rate_limit_enabled = self.rate_limit.enabled,
            backup_enabled = self.backup.enabled,
            metrics_enabled = self.observability.metrics_enabled,
            trace_enabled = self.observability.trace_enabled,
            "Policies configured"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_source() -> EnvSource {
        EnvSource::from_iter([
            ("SECRET_KEY", "unit-test-secret"),
            ("QDRANT_URL", "https://cluster.qdrant.cloud"),
            ("QDRANT_API_KEY", "qd-key"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
    }

    #[test]
    fn loads_with_only_required_fields() {
        let settings = Settings::from_source(&minimal_source()).unwrap();
        assert_eq!(settings.app.name, "RAG Application");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_everything_reports_all_required_fields() {
        let err = Settings::from_source(&EnvSource::empty()).unwrap_err();
        let Error::ConfigValidation(problems) = err else {
            panic!("expected ConfigValidation");
        };
        let fields: Vec<_> = problems.iter().map(|p| p.field).collect();
        assert_eq!(
            fields,
            vec!["SECRET_KEY", "QDRANT_URL", "QDRANT_API_KEY", "OPENAI_API_KEY"]
        );
    }

    #[test]
    fn redacted_view_never_contains_secret_text() {
        let settings = Settings::from_source(&minimal_source()).unwrap();
        let rendered = serde_json::to_string(&settings).unwrap();
        assert!(!rendered.contains("unit-test-secret"));
        assert!(!rendered.contains("qd-key"));
        assert!(!rendered.contains("sk-test"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
