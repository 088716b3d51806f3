//! Error types for alexandria-rs.

use thiserror::Error;

/// A single configuration field that failed to load or validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProblem {
    /// Environment variable name, e.g. `SECRET_KEY`.
    pub field: &'static str,
    /// What went wrong, e.g. `required but not set`.
    pub problem: String,
}

impl FieldProblem {
    pub fn new(field: &'static str, problem: impl Into<String>) -> Self {
        Self {
            field,
            problem: problem.into(),
        }
    }
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration failed to load. One entry per offending field —
    /// missing, unparsable, or out of range — collected in a single
    /// pass so the operator sees the complete list at once.
    #[error("invalid configuration:\n{}", list_problems(.0))]
    ConfigValidation(Vec<FieldProblem>),

    #[error("telemetry error: {0}")]
    Telemetry(String),
}

fn list_problems(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(|p| format!("  {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation_lists_every_field() {
        let err = Error::ConfigValidation(vec![
            FieldProblem::new("SECRET_KEY", "required but not set"),
            FieldProblem::new("DEBUG", "invalid boolean \"maybe\""),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("SECRET_KEY: required but not set"));
        assert!(rendered.contains("DEBUG: invalid boolean \"maybe\""));
    }
}
