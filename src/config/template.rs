//! Documentation template for the local environment file.

/// Starter `.env` for local development.
///
/// Static documentation, not derived from a live [`Settings`] record.
/// Print it with `alexandria template > .env` and fill in the secrets.
/// Variables left out fall back to their documented defaults.
///
/// [`Settings`]: crate::config::Settings
pub const ENV_TEMPLATE: &str = "\
# Application
APP_NAME=RAG Application
DEBUG=false

# Security (required)
SECRET_KEY=change-me

# Tokens
ACCESS_TOKEN_EXPIRE_MINUTES=30
REFRESH_TOKEN_EXPIRE_DAYS=7

# Database
SQLITE_URL=sqlite+aiosqlite:///./app.db

# Redis
REDIS_URL=redis://localhost:6379/0
# REDIS_PASSWORD=optional-redis-password

# Vector store (required)
QDRANT_URL=https://your-cluster.qdrant.cloud
QDRANT_API_KEY=your-qdrant-api-key
COLLECTION_NAME=documents
VECTOR_SIZE=1536

# OpenAI (required)
OPENAI_API_KEY=your-openai-api-key
# OPENAI_ORG_ID=optional-org-id

# Document processing
CHUNK_SIZE=500
CHUNK_OVERLAP=50

# Observability
LOG_LEVEL=INFO
METRICS_ENABLED=true
TRACE_ENABLED=true
# OTEL_ENDPOINT=http://localhost:4317

# Backups
BACKUP_ENABLED=true
BACKUP_PATH=./backups
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_covers_every_required_variable() {
        for required in ["SECRET_KEY", "QDRANT_URL", "QDRANT_API_KEY", "OPENAI_API_KEY"] {
            assert!(
                ENV_TEMPLATE.contains(&format!("{required}=")),
                "template is missing {required}"
            );
        }
    }
}
