//! Schema AST types for the sqlbind access-layer generator.
//!
//! This crate defines the parsed-schema representation handed to the
//! generator core. The types are produced by an external SQL parser and are
//! read-only inputs to code generation.
//!
//! # Architecture
//!
//! ```text
//! CREATE TABLE sql → parser (external) → sqlbind-ir (schema AST) → sqlbind-codegen
//! ```
//!
//! The AST types are designed to be:
//! - Host-language agnostic (no Java/Kotlin-specific concerns)
//! - Immutable once parsed (the generator never mutates them)
//! - Serde-capable, so schemas can be shipped as data between tools

mod column;
mod table;
mod types;

pub use column::ColumnDefinition;
pub use table::{Schema, TableDefinition};
pub use types::{SqlType, TypeHint};
