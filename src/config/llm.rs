//! LLM provider credentials and model parameters.

use serde::Serialize;

use crate::config::secrets::{self, SecretString};
use crate::config::source::EnvReader;
use crate::error::FieldProblem;

/// OpenAI credentials and model parameters.
///
/// - `OPENAI_API_KEY` (secret, required)
/// - `OPENAI_ORG_ID` (optional)
/// - `EMBEDDING_MODEL` (default: "text-embedding-3-small")
/// - `COMPLETION_MODEL` (default: "gpt-4-0125-preview")
/// - `MAX_TOKENS` — completion budget (default: 500)
/// - `TEMPERATURE` — sampling temperature (default: 0.7)
#[derive(Debug, Serialize)]
pub struct LlmSettings {
    #[serde(serialize_with = "secrets::redacted")]
    pub api_key: SecretString,
    pub org_id: Option<String>,
    pub embedding_model: String,
    pub completion_model: String,
    pub max_tokens: u64,
    pub temperature: f64,
}

impl LlmSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Option<Self> {
        let api_key = env.required_secret("OPENAI_API_KEY");
        let org_id = env.string_opt("OPENAI_ORG_ID");
        let embedding_model = env.string("EMBEDDING_MODEL", "text-embedding-3-small");
        let completion_model = env.string("COMPLETION_MODEL", "gpt-4-0125-preview");
        let max_tokens = env.number("MAX_TOKENS", 500);
        let temperature = env.number("TEMPERATURE", 0.7);

        Some(Self {
            api_key: api_key?,
            org_id,
            embedding_model,
            completion_model,
            max_tokens,
            temperature,
        })
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.max_tokens == 0 {
            problems.push(FieldProblem::new("MAX_TOKENS", "must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            problems.push(FieldProblem::new(
                "TEMPERATURE",
                format!("must be between 0.0 and 2.0, got {}", self.temperature),
            ));
        }
        if self.embedding_model.is_empty() {
            problems.push(FieldProblem::new("EMBEDDING_MODEL", "must not be empty"));
        }
        if self.completion_model.is_empty() {
            problems.push(FieldProblem::new("COMPLETION_MODEL", "must not be empty"));
        }
    }
}

impl PartialEq for LlmSettings {
    fn eq(&self, other: &Self) -> bool {
        secrets::secret_eq(&self.api_key, &other.api_key)
            && self.org_id == other.org_id
            && self.embedding_model == other.embedding_model
            && self.completion_model == other.completion_model
            && self.max_tokens == other.max_tokens
            && self.temperature == other.temperature
    }
}
