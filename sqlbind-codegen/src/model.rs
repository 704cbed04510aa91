//! The abstract per-table code model.
//!
//! This module defines the declarative output of generation: the accessor,
//! factory, mapper, and marshal contracts for one table, independent of any
//! host-language syntax. An external emitter renders these to source text;
//! nothing here formats or tokenizes host code.

use sqlbind_ir::SqlType;

use crate::adapter::{AdapterRef, ValueConversion};
use crate::resolve::ResolvedColumn;

/// A named string constant in the generated surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantSpec {
    /// Generated constant identifier.
    pub name: String,
    /// Constant value, verbatim.
    pub value: String,
}

impl ConstantSpec {
    /// Create a constant spec.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One abstract read method of the accessor contract.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorMethod {
    /// Generated method name.
    pub name: String,
    /// The column this method exposes.
    pub column: ResolvedColumn,
}

/// The public accessor contract: one read method per column, in column
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorContract {
    /// Generated contract type name.
    pub type_name: String,
    /// Read methods in column declaration order.
    pub methods: Vec<AccessorMethod>,
}

/// One per-row constructor parameter of the Creator contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RowParam {
    /// Generated parameter name.
    pub name: String,
    /// The column this parameter carries.
    pub column: ResolvedColumn,
}

/// One adapter injected when the Factory itself is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterParam {
    /// Generated parameter name.
    pub name: String,
    /// The adapter being injected.
    pub adapter: AdapterRef,
    /// Ordinal of the column this adapter serves.
    pub column_ordinal: usize,
}

/// The construction contract.
///
/// The Creator takes one argument per column ("values needed to build one
/// row's object"); the Factory additionally takes one adapter per
/// adapter-requiring column ("bound once, reused across all rows").
/// Adapters are interleaved only at the Factory level, never in the
/// per-instance constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryContract {
    /// Generated factory type name.
    pub type_name: String,
    /// Generated creator type name.
    pub creator_name: String,
    /// Per-row constructor parameters, in column declaration order.
    pub row_params: Vec<RowParam>,
    /// Factory-level adapter parameters, in column declaration order.
    pub adapter_params: Vec<AdapterParam>,
}

/// How a contract treats the storage null marker for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullBehavior {
    /// The column is NOT NULL; no null branch is emitted.
    NotNull,
    /// Nullable: absence passes through untouched, and the conversion runs
    /// only on the present branch. Adapters never see null.
    PassThrough,
}

/// Shape of the mapper's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperShape {
    /// Construct an object through the Creator.
    Row,
    /// Return the single column's exposed value directly (virtual scalar
    /// result sets have no object-construction contract).
    Scalar,
}

/// One storage-row read emitted by the mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRead {
    /// Ordinal position read from the storage row.
    pub ordinal: usize,
    /// Native type read at that position.
    pub storage_type: SqlType,
    /// Null branching before any conversion.
    pub null_behavior: NullBehavior,
    /// Conversion applied to a present value.
    pub conversion: ValueConversion,
}

/// The storage-row-to-object contract.
#[derive(Debug, Clone, PartialEq)]
pub struct MapperContract {
    /// Generated mapper type name.
    pub type_name: String,
    /// Result shape.
    pub shape: MapperShape,
    /// Reads in exactly column declaration order; this fixes the ordinal
    /// contract between row layout and object construction.
    pub reads: Vec<ColumnRead>,
}

/// One storage-row write emitted by the marshal.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWrite {
    /// Ordinal position written in the storage row.
    pub ordinal: usize,
    /// Native type written at that position.
    pub storage_type: SqlType,
    /// Null branching before any conversion.
    pub null_behavior: NullBehavior,
    /// Conversion applied to a present value.
    pub conversion: ValueConversion,
}

/// The object-to-storage-row contract, symmetric to the mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct MarshalContract {
    /// Generated marshal type name.
    pub type_name: String,
    /// Writes in column declaration order.
    pub writes: Vec<ColumnWrite>,
}

/// The complete generated surface for one table.
///
/// Built once per [`sqlbind_ir::TableDefinition`], immutable after
/// construction, consumed by the emitter and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModel {
    /// Table name exactly as declared.
    pub table_name: String,
    /// Sanitized host type name the generated surface hangs off.
    pub type_name: String,
    /// Named constant carrying the table name.
    pub table_constant: ConstantSpec,
    /// One named constant per column carrying its raw name, in order.
    pub column_constants: Vec<ConstantSpec>,
    /// The CREATE TABLE text, bit-exact; absent for virtual result sets.
    pub ddl_constant: Option<ConstantSpec>,
    /// Public accessor contract.
    pub accessor: AccessorContract,
    /// Construction contract; absent for virtual result sets.
    pub factory: Option<FactoryContract>,
    /// Row-to-object contract.
    pub mapper: MapperContract,
    /// Object-to-row contract; absent for virtual result sets.
    pub marshal: Option<MarshalContract>,
}

impl GeneratedModel {
    /// Returns true if this model is the bare read path of a virtual
    /// scalar result set.
    pub fn is_scalar(&self) -> bool {
        self.mapper.shape == MapperShape::Scalar
    }

    /// Columns that require a Factory-injected adapter, in column order.
    pub fn adapter_columns(&self) -> impl Iterator<Item = &ResolvedColumn> {
        self.accessor
            .methods
            .iter()
            .map(|m| &m.column)
            .filter(|c| c.requires_adapter())
    }
}
