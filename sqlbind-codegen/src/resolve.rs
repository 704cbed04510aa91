//! Column resolution: declared SQL types to exposed types and codecs.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use sqlbind_ir::{ColumnDefinition, SqlType, TableDefinition, TypeHint};

use crate::adapter::{
    AdapterRef, AdapterRegistry, ColumnCodec, EnumDefaultCodec, NativeCodec, UserAdapterCodec,
};
use crate::error::{DdlSource, Result};
use crate::naming::NamingConvention;
use crate::types::TypeRef;

/// A column after type resolution and identifier sanitization.
///
/// Invariant: [`ResolvedColumn::adapter`] is `Some` exactly when
/// `exposed_type` is not storage-reachable (enum or custom value type).
/// Plain numeric, text, blob, and boolean-as-integer columns are
/// adapter-free.
#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    /// Column name exactly as declared.
    pub raw_name: String,
    /// Sanitized generated identifier (identity for non-colliding names).
    pub safe_name: String,
    /// Zero-based position in the storage row and in declaration order.
    pub ordinal: usize,
    /// Native storage representation.
    pub storage_type: SqlType,
    /// Exposed type of the accessor and constructor parameter.
    pub exposed_type: TypeRef,
    /// Whether the column accepts the storage null marker.
    pub nullable: bool,
    /// Encode/decode capability selected for this column.
    pub codec: Arc<dyn ColumnCodec>,
}

impl ResolvedColumn {
    /// The adapter the Factory must inject for this column, if any.
    pub fn adapter(&self) -> Option<&AdapterRef> {
        self.codec.adapter()
    }

    /// Returns true if this column requires an injected adapter.
    pub fn requires_adapter(&self) -> bool {
        self.adapter().is_some()
    }
}

impl PartialEq for ResolvedColumn {
    fn eq(&self, other: &Self) -> bool {
        self.raw_name == other.raw_name
            && self.safe_name == other.safe_name
            && self.ordinal == other.ordinal
            && self.storage_type == other.storage_type
            && self.exposed_type == other.exposed_type
            && self.nullable == other.nullable
            && self.codec.decode() == other.codec.decode()
            && self.codec.encode() == other.codec.encode()
            && self.codec.adapter() == other.codec.adapter()
    }
}

/// Maps column declarations to resolved columns, consulting the adapter
/// registry for custom and enum types.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    naming: &'a NamingConvention,
    registry: &'a AdapterRegistry,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver over a naming convention and adapter registry.
    pub fn new(naming: &'a NamingConvention, registry: &'a AdapterRegistry) -> Self {
        Self { naming, registry }
    }

    /// Resolve a single column at its ordinal position.
    pub fn resolve(
        &self,
        table: &TableDefinition,
        ordinal: usize,
        column: &ColumnDefinition,
    ) -> Result<ResolvedColumn> {
        let source = DdlSource::new(table);
        self.resolve_with_source(&source, ordinal, column)
    }

    fn resolve_with_source(
        &self,
        source: &DdlSource,
        ordinal: usize,
        column: &ColumnDefinition,
    ) -> Result<ResolvedColumn> {
        let (exposed_type, codec) = self.select_codec(source, column)?;

        Ok(ResolvedColumn {
            raw_name: column.raw_name.clone(),
            safe_name: self.naming.safe_name(&column.raw_name),
            ordinal,
            storage_type: column.sql_type,
            exposed_type,
            nullable: column.nullable,
            codec,
        })
    }

    fn select_codec(
        &self,
        source: &DdlSource,
        column: &ColumnDefinition,
    ) -> Result<(TypeRef, Arc<dyn ColumnCodec>)> {
        match &column.type_hint {
            None => Ok((
                TypeRef::native(column.sql_type),
                Arc::new(NativeCodec::passthrough()),
            )),
            Some(TypeHint::Boolean) => {
                if column.sql_type != SqlType::Integer {
                    return Err(source.unsupported_type(
                        &column.raw_name,
                        format!("{} AS Boolean", column.sql_type.as_str()),
                    ));
                }
                Ok((TypeRef::Boolean, Arc::new(NativeCodec::boolean())))
            }
            Some(TypeHint::Enum(name)) => {
                let exposed = TypeRef::Enum(name.clone());
                if let Some(adapter) = self.bound_adapter(column, name) {
                    return Ok((exposed, Arc::new(UserAdapterCodec::new(adapter))));
                }
                // The default codec encodes variant names as TEXT; other
                // storage kinds need an explicit adapter.
                if column.sql_type == SqlType::Text {
                    return Ok((exposed, Arc::new(EnumDefaultCodec::new(name.clone()))));
                }
                Err(source.missing_adapter(&column.raw_name, name))
            }
            Some(TypeHint::Custom(name)) => {
                let exposed = TypeRef::Named(name.clone());
                match self.bound_adapter(column, name) {
                    Some(adapter) => Ok((exposed, Arc::new(UserAdapterCodec::new(adapter)))),
                    None => Err(source.missing_adapter(&column.raw_name, name)),
                }
            }
        }
    }

    /// An explicitly bound adapter for the column, column expression first,
    /// then the registry.
    fn bound_adapter(&self, column: &ColumnDefinition, custom_type: &str) -> Option<AdapterRef> {
        if let Some(expr) = &column.adapter_expression {
            return Some(AdapterRef::expression(custom_type, expr.clone()));
        }
        self.registry
            .lookup(custom_type)
            .map(|expr| AdapterRef::registry(custom_type, expr))
    }

    /// Resolve every column of a table in declaration order.
    ///
    /// Also enforces the table-level structural invariants: a table name
    /// must be present, raw column names must be unique, virtual result
    /// sets carry exactly one scalar column, and no two columns may
    /// produce the same generated method or constant name.
    pub fn resolve_table(&self, table: &TableDefinition) -> Result<Vec<ResolvedColumn>> {
        let source = DdlSource::new(table);

        if table.table_name.is_empty() {
            return Err(source.malformed_schema("table name is empty"));
        }
        if !table.has_columns() {
            return Err(source.malformed_schema("table declares no columns"));
        }
        if table.is_virtual() && table.columns.len() != 1 {
            return Err(source.malformed_schema(format!(
                "virtual result set declares {} columns, expected a single scalar",
                table.columns.len()
            )));
        }

        let mut seen_raw = HashSet::new();
        for column in &table.columns {
            if !seen_raw.insert(column.raw_name.as_str()) {
                return Err(source.malformed_schema(format!(
                    "duplicate column name '{}'",
                    column.raw_name
                )));
            }
        }

        // Collisions are checked on the identifiers the model actually
        // exposes: distinct raw names can still case-fold or camel-case to
        // the same method or constant name.
        let mut resolved = Vec::with_capacity(table.columns.len());
        let mut by_method: HashMap<String, String> = HashMap::new();
        let mut by_constant: HashMap<String, String> = HashMap::new();
        for (ordinal, column) in table.columns.iter().enumerate() {
            let col = self.resolve_with_source(&source, ordinal, column)?;
            let method = self.naming.method_name(&col.raw_name);
            if let Some(first) = by_method.get(&method) {
                return Err(source.name_collision(first, &col.raw_name, &method));
            }
            let constant = self.naming.constant_name(&col.raw_name);
            if let Some(first) = by_constant.get(&constant) {
                return Err(source.name_collision(first, &col.raw_name, &constant));
            }
            by_method.insert(method, col.raw_name.clone());
            by_constant.insert(constant, col.raw_name.clone());
            resolved.push(col);
        }

        Ok(resolved)
    }
}
