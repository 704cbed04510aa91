//! Column declarations.

use serde::{Deserialize, Serialize};

use crate::{SqlType, TypeHint};

/// A single column declaration as produced by the schema parser.
///
/// Immutable once parsed. `raw_name` is the identifier exactly as written
/// in the schema; it may collide with host-language reserved words, which
/// the generator resolves during identifier sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name exactly as written in the schema.
    pub raw_name: String,
    /// Native storage representation.
    pub sql_type: SqlType,
    /// Whether the schema allows NULL for this column.
    pub nullable: bool,
    /// Declared exposed-type directive, if any.
    pub type_hint: Option<TypeHint>,
    /// User-supplied adapter expression for custom/enum columns, if any.
    ///
    /// This is a reference to a value owned by user code; the generator
    /// records it and emits constructor injection for it, never evaluating
    /// or copying it.
    pub adapter_expression: Option<String>,
}

impl ColumnDefinition {
    /// Create a new NOT NULL column with no type hint.
    pub fn new(raw_name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            raw_name: raw_name.into(),
            sql_type,
            nullable: false,
            type_hint: None,
            adapter_expression: None,
        }
    }

    /// Mark this column as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Attach an exposed-type directive.
    pub fn hint(mut self, hint: TypeHint) -> Self {
        self.type_hint = Some(hint);
        self
    }

    /// Attach a user-supplied adapter expression.
    pub fn adapter(mut self, expression: impl Into<String>) -> Self {
        self.adapter_expression = Some(expression.into());
        self
    }

    /// Returns true if this column declares a custom or enum exposed type.
    pub fn has_custom_type(&self) -> bool {
        self.type_hint
            .as_ref()
            .is_some_and(TypeHint::requires_adapter)
    }
}
