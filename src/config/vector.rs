//! Vector store connection and collection settings.

use serde::Serialize;
use url::Url;

use crate::config::secrets::{self, SecretString};
use crate::config::source::EnvReader;
use crate::error::FieldProblem;

/// Distance metrics the vector store supports.
const SUPPORTED_DISTANCES: &[&str] = &["Cosine", "Euclid", "Dot", "Manhattan"];

/// Qdrant connection and collection settings.
///
/// - `QDRANT_URL` — absolute URL of the cluster (required)
/// - `QDRANT_API_KEY` (secret, required)
/// - `COLLECTION_NAME` (default: "documents")
/// - `VECTOR_SIZE` — embedding dimension (default: 1536)
/// - `VECTOR_DISTANCE` (default: "Cosine")
/// - `VECTOR_ON_DISK` — store vectors on disk instead of RAM (default: true)
#[derive(Debug, Serialize)]
pub struct VectorStoreSettings {
    pub url: Url,
    #[serde(serialize_with = "secrets::redacted")]
    pub api_key: SecretString,
    pub collection_name: String,
    pub vector_size: usize,
    pub distance: String,
    pub on_disk: bool,
}

impl VectorStoreSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Option<Self> {
        // Every lookup runs before the required check so a load with
        // several problems reports all of them at once.
        let url = env.required_url("QDRANT_URL");
        let api_key = env.required_secret("QDRANT_API_KEY");
        let collection_name = env.string("COLLECTION_NAME", "documents");
        let vector_size = env.number("VECTOR_SIZE", 1536);
        let distance = env.string("VECTOR_DISTANCE", "Cosine");
        let on_disk = env.boolean("VECTOR_ON_DISK", true);

        Some(Self {
            url: url?,
            api_key: api_key?,
            collection_name,
            vector_size,
            distance,
            on_disk,
        })
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.collection_name.is_empty() {
            problems.push(FieldProblem::new("COLLECTION_NAME", "must not be empty"));
        }
        if self.vector_size == 0 {
            problems.push(FieldProblem::new("VECTOR_SIZE", "must be at least 1"));
        }
        if !SUPPORTED_DISTANCES.contains(&self.distance.as_str()) {
            problems.push(FieldProblem::new(
                "VECTOR_DISTANCE",
                format!(
                    "unknown distance {:?}, expected one of {}",
                    self.distance,
                    SUPPORTED_DISTANCES.join(", ")
                ),
            ));
        }
    }
}

impl PartialEq for VectorStoreSettings {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && secrets::secret_eq(&self.api_key, &other.api_key)
            && self.collection_name == other.collection_name
            && self.vector_size == other.vector_size
            && self.distance == other.distance
            && self.on_disk == other.on_disk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::source::EnvSource;

    fn from(pairs: &[(&str, &str)]) -> Option<VectorStoreSettings> {
        let source = EnvSource::from_iter(pairs.iter().copied());
        VectorStoreSettings::read(&mut EnvReader::new(&source))
    }

    #[test]
    fn requires_url_and_api_key() {
        assert!(from(&[]).is_none());
        assert!(from(&[("QDRANT_URL", "https://cluster.qdrant.cloud")]).is_none());

        let vector = from(&[
            ("QDRANT_URL", "https://cluster.qdrant.cloud"),
            ("QDRANT_API_KEY", "qd-key"),
        ])
        .unwrap();
        assert_eq!(vector.vector_size, 1536);
        assert_eq!(vector.distance, "Cosine");
        assert!(vector.on_disk);
    }

    #[test]
    fn relative_url_is_rejected() {
        let source = EnvSource::from_iter([
            ("QDRANT_URL", "cluster.qdrant.cloud/api"),
            ("QDRANT_API_KEY", "qd-key"),
        ]);
        let mut env = EnvReader::new(&source);
        assert!(VectorStoreSettings::read(&mut env).is_none());
        assert!(!env.ok());
    }

    #[test]
    fn reject_unknown_distance() {
        let mut vector = from(&[
            ("QDRANT_URL", "https://cluster.qdrant.cloud"),
            ("QDRANT_API_KEY", "qd-key"),
        ])
        .unwrap();
        vector.distance = "Chebyshev".to_string();

        let mut problems = Vec::new();
        vector.validate(&mut problems);
        assert_eq!(problems[0].field, "VECTOR_DISTANCE");
    }
}
