//! Environment snapshot and typed field reading.
//!
//! [`EnvSource`] is an immutable snapshot of key/value configuration
//! state: the process environment, optionally layered over a local
//! `.env` file. Real environment variables override file entries.
//! The file is read through dotenvy's iterator API, so loading never
//! mutates the process environment.
//!
//! [`EnvReader`] reads typed fields out of a source. It never fails
//! fast: every missing or malformed field is recorded as a
//! [`FieldProblem`], and the caller turns a non-empty list into one
//! aggregated error at the end.

use std::collections::HashMap;
use std::path::Path;

use secrecy::SecretString;
use url::Url;

use crate::error::{Error, FieldProblem};

/// Immutable snapshot of key/value configuration state.
///
/// Keys are matched case-sensitively, exactly as declared.
#[derive(Debug, Clone)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the process environment layered over `./.env`.
    pub fn process() -> Self {
        match dotenvy::dotenv_iter() {
            Ok(iter) => Self::layered(iter, std::env::vars()),
            Err(err) if err.not_found() => Self::from_iter(std::env::vars()),
            Err(err) => {
                eprintln!("Warning: failed to read .env file: {err}");
                Self::from_iter(std::env::vars())
            }
        }
    }

    /// Snapshot the process environment layered over an explicit env file.
    pub fn with_env_file(path: impl AsRef<Path>) -> Self {
        match dotenvy::from_path_iter(path) {
            Ok(iter) => Self::layered(iter, std::env::vars()),
            Err(err) => {
                eprintln!("Warning: failed to read env file: {err}");
                Self::from_iter(std::env::vars())
            }
        }
    }

    /// A source with no variables set at all.
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Build a source from explicit pairs. Mostly useful in tests.
    pub fn from_iter<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// File entries first, then the overriding layer on top.
    fn layered(
        file: impl IntoIterator<Item = dotenvy::Result<(String, String)>>,
        over: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut vars: HashMap<String, String> = file.into_iter().flatten().collect();
        vars.extend(over);
        Self { vars }
    }

    /// Layer `pairs` on top of this source; later entries win.
    pub fn overlay<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Typed field reader over an [`EnvSource`].
///
/// Defaulted getters fall back to the declared default when a problem is
/// recorded; the fallback never escapes because the load fails on any
/// recorded problem. Required getters return `None` and record the
/// missing field.
pub struct EnvReader<'a> {
    source: &'a EnvSource,
    problems: Vec<FieldProblem>,
}

impl<'a> EnvReader<'a> {
    pub fn new(source: &'a EnvSource) -> Self {
        Self {
            source,
            problems: Vec::new(),
        }
    }

    fn problem(&mut self, field: &'static str, problem: impl Into<String>) {
        self.problems.push(FieldProblem::new(field, problem));
    }

    /// String field, passed through unchanged.
    pub fn string(&mut self, key: &'static str, default: &str) -> String {
        match self.source.get(key) {
            Some(raw) => raw.to_string(),
            None => default.to_string(),
        }
    }

    /// Optional string field; `None` when unset.
    pub fn string_opt(&mut self, key: &'static str) -> Option<String> {
        self.source.get(key).map(str::to_string)
    }

    /// Numeric field (integer or float).
    pub fn number<T>(&mut self, key: &'static str, default: T) -> T
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.source.get(key) {
            None => default,
            Some(raw) => match raw.trim().parse() {
                Ok(value) => value,
                Err(err) => {
                    self.problem(key, format!("invalid value {raw:?}: {err}"));
                    default
                }
            },
        }
    }

    /// Boolean field. Accepts `true`/`false`, `1`/`0`, `yes`/`no`,
    /// `on`/`off` (case-insensitive); anything else is an error.
    pub fn boolean(&mut self, key: &'static str, default: bool) -> bool {
        match self.source.get(key) {
            None => default,
            Some(raw) => match parse_bool(raw) {
                Some(value) => value,
                None => {
                    self.problem(key, format!("invalid boolean {raw:?}"));
                    default
                }
            },
        }
    }

    /// Comma-delimited list field. Order preserved, duplicates kept,
    /// items trimmed; an empty value is an empty list.
    pub fn list(&mut self, key: &'static str, default: &[&str]) -> Vec<String> {
        match self.source.get(key) {
            Some(raw) => parse_list(raw),
            None => default.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Required secret field.
    pub fn required_secret(&mut self, key: &'static str) -> Option<SecretString> {
        match self.source.get(key) {
            Some(raw) => Some(SecretString::from(raw.to_string())),
            None => {
                self.problem(key, "required but not set");
                None
            }
        }
    }

    /// Optional secret field; `None` when unset.
    pub fn secret_opt(&mut self, key: &'static str) -> Option<SecretString> {
        self.source
            .get(key)
            .map(|raw| SecretString::from(raw.to_string()))
    }

    /// Required absolute-URL field.
    pub fn required_url(&mut self, key: &'static str) -> Option<Url> {
        match self.source.get(key) {
            None => {
                self.problem(key, "required but not set");
                None
            }
            Some(raw) => match Url::parse(raw.trim()) {
                Ok(url) => Some(url),
                Err(err) => {
                    self.problem(key, format!("invalid URL {raw:?}: {err}"));
                    None
                }
            },
        }
    }

    /// True when no problem has been recorded so far.
    pub fn ok(&self) -> bool {
        self.problems.is_empty()
    }

    /// Consume the reader, yielding the aggregated error.
    pub fn into_error(self) -> Error {
        Error::ConfigValidation(self.problems)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_encodings() {
        for truthy in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_bool(truthy), Some(true), "{truthy}");
        }
        for falsy in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(parse_bool(falsy), Some(false), "{falsy}");
        }
        for bad in ["notabool", "2", "", "truee"] {
            assert_eq!(parse_bool(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn list_preserves_order_and_duplicates() {
        assert_eq!(parse_list("b, a ,b"), vec!["b", "a", "b"]);
        assert_eq!(parse_list(""), Vec::<String>::new());
        assert_eq!(parse_list("solo"), vec!["solo"]);
    }

    #[test]
    fn reader_accumulates_instead_of_failing_fast() {
        let source = EnvSource::from_iter([("A", "notanumber"), ("B", "maybe")]);
        let mut env = EnvReader::new(&source);

        assert_eq!(env.number::<u32>("A", 7), 7);
        assert!(!env.boolean("B", false));
        assert!(env.required_secret("C").is_none());

        let Error::ConfigValidation(problems) = env.into_error() else {
            panic!("expected ConfigValidation");
        };
        let fields: Vec<_> = problems.iter().map(|p| p.field).collect();
        assert_eq!(fields, vec!["A", "B", "C"]);
    }

    #[test]
    fn overlay_later_entries_win() {
        let source =
            EnvSource::from_iter([("KEY", "from-file"), ("ONLY_FILE", "kept")])
                .overlay([("KEY", "from-process")]);
        let mut env = EnvReader::new(&source);
        assert_eq!(env.string("KEY", ""), "from-process");
        assert_eq!(env.string("ONLY_FILE", ""), "kept");
    }
}
