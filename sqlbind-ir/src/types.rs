//! Storage and declared-type primitives.

use serde::{Deserialize, Serialize};

/// One of the four native column storage representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Integer,
    Real,
    Text,
    Blob,
}

impl SqlType {
    /// Get the uppercase SQL keyword for this storage type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Text => "TEXT",
            SqlType::Blob => "BLOB",
        }
    }
}

/// A declared exposed-type directive on a column.
///
/// Columns without a hint expose the direct host representation of their
/// storage type. A hint narrows or replaces that representation:
///
/// - `Boolean` marks an INTEGER column as boolean-as-integer (0/1).
/// - `Enum` marks a column whose values are variants of a named enum type;
///   the generator may offer a default name-based TEXT codec for these.
/// - `Custom` names a fully-qualified value type that always requires a
///   user-supplied adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeHint {
    Boolean,
    Enum(String),
    Custom(String),
}

impl TypeHint {
    /// The declared type name, if the hint carries one.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TypeHint::Boolean => None,
            TypeHint::Enum(name) | TypeHint::Custom(name) => Some(name),
        }
    }

    /// Returns true if this hint requires an encode/decode adapter.
    pub fn requires_adapter(&self) -> bool {
        matches!(self, TypeHint::Enum(_) | TypeHint::Custom(_))
    }
}
