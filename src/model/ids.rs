//! Entity identifiers.
//!
//! Ids are opaque strings. Documents written by other tools may carry ids of
//! any shape, so parsing never rejects a string; freshly generated ids are
//! 10 lowercase hex characters.

use std::borrow::Borrow;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

const ID_BYTES: usize = 5;

/// Produce a random hex token.
fn random_token() -> String {
    let mut bytes = [0u8; ID_BYTES];
    if getrandom::getrandom(&mut bytes).is_err() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        bytes.copy_from_slice(&nanos.to_le_bytes()[..ID_BYTES]);
    }
    hex::encode(bytes)
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a random id.
            pub fn generate() -> Self {
                Self(random_token())
            }

            /// Generate a random id for which `taken` is false.
            pub fn generate_unique(taken: impl Fn(&Self) -> bool) -> Self {
                loop {
                    let id = Self::generate();
                    if !taken(&id) {
                        return id;
                    }
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(
    /// Identifies a [`Program`](super::Program).
    ProgramId
);
entity_id!(
    /// Identifies a [`Workout`](super::Workout); key of the document's workout map.
    WorkoutId
);
entity_id!(
    /// Identifies an [`Exercise`](super::Exercise) within its workout.
    ExerciseId
);
entity_id!(
    /// Identifies a [`Session`](super::Session) within its workout.
    SessionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_hex() {
        let id = WorkoutId::generate();
        assert_eq!(id.as_str().len(), ID_BYTES * 2);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ProgramId::generate(), ProgramId::generate());
    }

    #[test]
    fn generate_unique_skips_taken() {
        let first = ExerciseId::generate();
        let taken = first.clone();
        let next = ExerciseId::generate_unique(|id| *id == taken);
        assert_ne!(next, first);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SessionId::new("k3j9x0ab");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"k3j9x0ab\"");
        let parsed: SessionId = serde_json::from_str("\"k3j9x0ab\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn accepts_foreign_id_shapes() {
        let id: ProgramId = "Base Strength #1".into();
        assert_eq!(id.to_string(), "Base Strength #1");
    }
}
