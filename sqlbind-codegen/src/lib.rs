//! Schema-to-access-layer code model generation.
//!
//! This crate compiles a parsed SQL schema (tables, columns, types,
//! nullability, custom value types) into an abstract, statically-typed
//! description of a data-access layer: an accessor contract, a
//! row-to-object mapper, an object-to-row marshal, and a factory that
//! wires in pluggable column codecs.
//!
//! # Architecture
//!
//! ```text
//! schema AST (sqlbind-ir)
//!     → NamingConvention (identifier sanitization, per name)
//!     → TypeResolver (per column, consulting the AdapterRegistry)
//!     → ModelBuilder (per table)
//!     → GeneratedModel (consumed by an external emitter)
//! ```
//!
//! Generation is pure and single-threaded per table: one `TableDefinition`
//! in, one `GeneratedModel` out, no shared mutable state. The only
//! cross-invocation data are the reserved-word tables and the adapter
//! registry, both immutable once built. Rendering the model to host-language
//! source text is an external concern.

mod adapter;
mod builder;
mod casing;
mod error;
mod model;
mod naming;
mod resolve;
mod types;

// Codecs and the adapter registry
pub use adapter::{
    AdapterBinding, AdapterRef, AdapterRegistry, ColumnCodec, EnumDefaultCodec, NativeCodec,
    UserAdapterCodec, ValueConversion,
};
// Model assembly
pub use builder::{ModelBuilder, SchemaOutput};
// String utilities
pub use casing::{to_camel_case, to_pascal_case, to_screaming_snake_case, to_snake_case};
// Diagnostics
pub use error::{DdlSource, Error, Result};
// The abstract code model
pub use model::{
    AccessorContract, AccessorMethod, AdapterParam, ColumnRead, ColumnWrite, ConstantSpec,
    FactoryContract, GeneratedModel, MapperContract, MapperShape, MarshalContract, NullBehavior,
    RowParam,
};
// Identifier sanitization
pub use naming::{JAVA_NAMING, KOTLIN_NAMING, NamingConvention};
// Column resolution
pub use resolve::{ResolvedColumn, TypeResolver};
// Exposed types and host mapping
pub use types::{BoolPolicy, HostTypeMapper, JavaTypeMapper, KotlinTypeMapper, TypeRef};
