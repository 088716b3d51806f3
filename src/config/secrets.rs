//! Secret handling utilities.
//!
//! Re-exports secrecy types and provides the serializers that keep
//! secret fields out of any rendered view of the settings. Raw values
//! are only reachable through [`ExposeSecret`].

pub use secrecy::{ExposeSecret, SecretBox, SecretString};
use serde::Serializer;

/// Placeholder emitted wherever a secret would otherwise appear.
pub const REDACTED: &str = "[REDACTED]";

/// Serialize a secret as the fixed placeholder.
pub fn redacted<S: Serializer>(_: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

/// Serialize an optional secret as the placeholder, or nothing.
pub fn redacted_opt<S: Serializer>(
    value: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}

/// Compare two secrets by their exposed values.
///
/// Secrets deliberately have no `PartialEq`; the settings record uses
/// this for its own equality so snapshots built from the same
/// environment compare equal.
pub fn secret_eq(a: &SecretString, b: &SecretString) -> bool {
    a.expose_secret() == b.expose_secret()
}

/// [`secret_eq`] lifted over optional secrets.
pub fn secret_opt_eq(a: &Option<SecretString>, b: &Option<SecretString>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => secret_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
