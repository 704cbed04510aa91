//! Model assembly: resolved columns to the per-table generated surface.
//!
//! ```text
//! TableDefinition → TypeResolver (per column) → ModelBuilder → GeneratedModel
//! ```
//!
//! Generation is a pure transformation with no state shared between
//! tables; a failure aborts only the offending table.

use sqlbind_ir::{Schema, TableDefinition};

use crate::adapter::AdapterRegistry;
use crate::casing::to_camel_case;
use crate::error::{Error, Result};
use crate::model::{
    AccessorContract, AccessorMethod, AdapterParam, ColumnRead, ColumnWrite, ConstantSpec,
    FactoryContract, GeneratedModel, MapperContract, MapperShape, MarshalContract, NullBehavior,
    RowParam,
};
use crate::naming::NamingConvention;
use crate::resolve::{ResolvedColumn, TypeResolver};

/// Name of the constant carrying the table name.
const TABLE_NAME_CONSTANT: &str = "TABLE_NAME";
/// Name of the constant carrying the verbatim DDL.
const CREATE_TABLE_CONSTANT: &str = "CREATE_TABLE";

/// Builds the abstract generated surface for tables of one schema.
///
/// Holds only shared read-only configuration; it may be used concurrently
/// across independent tables.
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder<'a> {
    naming: &'a NamingConvention,
    registry: &'a AdapterRegistry,
}

/// The outcome of generating a whole schema.
///
/// Failed tables land in `failures` with their diagnostics; generation of
/// unrelated tables continues regardless.
#[derive(Debug)]
pub struct SchemaOutput {
    /// Models for tables that generated successfully, in schema order.
    pub models: Vec<GeneratedModel>,
    /// Diagnostics for tables that failed, in schema order.
    pub failures: Vec<Box<Error>>,
}

impl SchemaOutput {
    /// Returns true if any table failed to generate.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl<'a> ModelBuilder<'a> {
    /// Create a builder over a naming convention and adapter registry.
    pub fn new(naming: &'a NamingConvention, registry: &'a AdapterRegistry) -> Self {
        Self { naming, registry }
    }

    /// Build the generated model for a single table.
    pub fn build(&self, table: &TableDefinition) -> Result<GeneratedModel> {
        let resolver = TypeResolver::new(self.naming, self.registry);
        let resolved = resolver.resolve_table(table)?;
        Ok(self.assemble(table, resolved))
    }

    /// Generate every table of a schema, isolating per-table failures.
    pub fn build_schema(&self, schema: &Schema) -> SchemaOutput {
        let mut models = Vec::new();
        let mut failures = Vec::new();
        for table in &schema.tables {
            match self.build(table) {
                Ok(model) => models.push(model),
                Err(err) => failures.push(err),
            }
        }
        SchemaOutput { models, failures }
    }

    fn assemble(&self, table: &TableDefinition, resolved: Vec<ResolvedColumn>) -> GeneratedModel {
        let type_name = self.naming.type_name(&table.table_name);

        let table_constant = ConstantSpec::new(TABLE_NAME_CONSTANT, &table.table_name);
        let column_constants = resolved
            .iter()
            .map(|col| ConstantSpec::new(self.naming.constant_name(&col.raw_name), &col.raw_name))
            .collect();
        let ddl_constant = table
            .create_table_sql
            .as_ref()
            .map(|ddl| ConstantSpec::new(CREATE_TABLE_CONSTANT, ddl));

        let accessor = AccessorContract {
            type_name: format!("{type_name}Model"),
            methods: resolved
                .iter()
                .map(|col| AccessorMethod {
                    name: self.naming.method_name(&col.raw_name),
                    column: col.clone(),
                })
                .collect(),
        };

        let shape = if table.is_virtual() {
            MapperShape::Scalar
        } else {
            MapperShape::Row
        };
        let mapper = MapperContract {
            type_name: format!("{type_name}Mapper"),
            shape,
            reads: resolved
                .iter()
                .map(|col| ColumnRead {
                    ordinal: col.ordinal,
                    storage_type: col.storage_type,
                    null_behavior: null_behavior(col),
                    conversion: col.codec.decode(),
                })
                .collect(),
        };

        let (factory, marshal) = if table.is_virtual() {
            (None, None)
        } else {
            let factory = FactoryContract {
                type_name: format!("{type_name}Factory"),
                creator_name: format!("{type_name}Creator"),
                row_params: resolved
                    .iter()
                    .map(|col| RowParam {
                        name: self.naming.method_name(&col.raw_name),
                        column: col.clone(),
                    })
                    .collect(),
                adapter_params: resolved
                    .iter()
                    .filter_map(|col| {
                        col.adapter().map(|adapter| AdapterParam {
                            name: adapter_param_name(&col.raw_name),
                            adapter: adapter.clone(),
                            column_ordinal: col.ordinal,
                        })
                    })
                    .collect(),
            };
            let marshal = MarshalContract {
                type_name: format!("{type_name}Marshal"),
                writes: resolved
                    .iter()
                    .map(|col| ColumnWrite {
                        ordinal: col.ordinal,
                        storage_type: col.storage_type,
                        null_behavior: null_behavior(col),
                        conversion: col.codec.encode(),
                    })
                    .collect(),
            };
            (Some(factory), Some(marshal))
        };

        GeneratedModel {
            table_name: table.table_name.clone(),
            type_name,
            table_constant,
            column_constants,
            ddl_constant,
            accessor,
            factory,
            mapper,
            marshal,
        }
    }
}

fn null_behavior(col: &ResolvedColumn) -> NullBehavior {
    if col.nullable {
        NullBehavior::PassThrough
    } else {
        NullBehavior::NotNull
    }
}

fn adapter_param_name(raw_name: &str) -> String {
    format!("{}Adapter", to_camel_case(raw_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlbind_ir::{ColumnDefinition, SqlType, TypeHint};

    use crate::adapter::ValueConversion;
    use crate::naming::JAVA_NAMING;
    use crate::types::TypeRef;

    fn user_table() -> TableDefinition {
        TableDefinition::new(
            "user_account",
            vec![
                ColumnDefinition::new("id", SqlType::Integer),
                ColumnDefinition::new("name", SqlType::Text).nullable(),
                ColumnDefinition::new("is_admin", SqlType::Integer).hint(TypeHint::Boolean),
                ColumnDefinition::new("balance", SqlType::Blob)
                    .hint(TypeHint::Custom("com.example.Money".into()))
                    .adapter("Money.ADAPTER"),
            ],
            "CREATE TABLE user_account (\n  id INTEGER NOT NULL,\n  name TEXT,\n  is_admin INTEGER NOT NULL,\n  balance BLOB NOT NULL\n)",
        )
    }

    fn build(table: &TableDefinition) -> Result<GeneratedModel> {
        let registry = AdapterRegistry::new();
        ModelBuilder::new(&JAVA_NAMING, &registry).build(table)
    }

    #[test]
    fn test_generated_surface_names() {
        let model = build(&user_table()).unwrap();
        assert_eq!(model.type_name, "UserAccount");
        assert_eq!(model.accessor.type_name, "UserAccountModel");
        assert_eq!(model.mapper.type_name, "UserAccountMapper");
        assert_eq!(model.factory.as_ref().unwrap().type_name, "UserAccountFactory");
        assert_eq!(model.factory.as_ref().unwrap().creator_name, "UserAccountCreator");
        assert_eq!(model.marshal.as_ref().unwrap().type_name, "UserAccountMarshal");
    }

    #[test]
    fn test_constants() {
        let model = build(&user_table()).unwrap();
        assert_eq!(model.table_constant.name, "TABLE_NAME");
        assert_eq!(model.table_constant.value, "user_account");
        assert_eq!(model.column_constants[2].name, "IS_ADMIN");
        assert_eq!(model.column_constants[2].value, "is_admin");
        // DDL reproduced bit-exact
        assert_eq!(
            model.ddl_constant.as_ref().unwrap().value,
            user_table().create_table_sql.unwrap()
        );
    }

    #[test]
    fn test_accessors_follow_declaration_order() {
        let model = build(&user_table()).unwrap();
        let names: Vec<_> = model.accessor.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "isAdmin", "balance"]);
    }

    #[test]
    fn test_mapper_reads_in_ordinal_order() {
        let model = build(&user_table()).unwrap();
        let ordinals: Vec<_> = model.mapper.reads.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        assert_eq!(model.mapper.shape, MapperShape::Row);
        assert_eq!(model.mapper.reads[2].conversion, ValueConversion::IntegerToBoolean);
    }

    #[test]
    fn test_marshal_is_symmetric_to_mapper() {
        let model = build(&user_table()).unwrap();
        let marshal = model.marshal.as_ref().unwrap();
        assert_eq!(marshal.writes.len(), model.mapper.reads.len());
        for (read, write) in model.mapper.reads.iter().zip(&marshal.writes) {
            assert_eq!(read.ordinal, write.ordinal);
            assert_eq!(read.storage_type, write.storage_type);
            assert_eq!(read.null_behavior, write.null_behavior);
            assert_eq!(read.conversion.inverse(), write.conversion);
        }
    }

    #[test]
    fn test_nullable_columns_pass_null_through() {
        let model = build(&user_table()).unwrap();
        assert_eq!(model.mapper.reads[0].null_behavior, NullBehavior::NotNull);
        assert_eq!(model.mapper.reads[1].null_behavior, NullBehavior::PassThrough);
    }

    #[test]
    fn test_factory_binds_adapters_once() {
        let model = build(&user_table()).unwrap();
        let factory = model.factory.as_ref().unwrap();
        assert_eq!(factory.row_params.len(), 4);
        assert_eq!(factory.adapter_params.len(), 1);
        assert_eq!(factory.adapter_params[0].name, "balanceAdapter");
        assert_eq!(factory.adapter_params[0].column_ordinal, 3);
        assert_eq!(factory.adapter_params[0].adapter.custom_type, "com.example.Money");
    }

    #[test]
    fn test_virtual_scalar_query() {
        let query = TableDefinition::virtual_result(
            "user_count",
            vec![ColumnDefinition::new("count", SqlType::Integer)],
        );
        let model = build(&query).unwrap();
        assert!(model.is_scalar());
        assert_eq!(model.mapper.shape, MapperShape::Scalar);
        assert!(model.factory.is_none());
        assert!(model.marshal.is_none());
        assert!(model.ddl_constant.is_none());
        assert_eq!(model.mapper.reads.len(), 1);
        assert_eq!(model.accessor.methods[0].column.exposed_type, TypeRef::Long);
    }

    #[test]
    fn test_build_schema_isolates_failures() {
        let registry = AdapterRegistry::new();
        let builder = ModelBuilder::new(&JAVA_NAMING, &registry);
        let schema = Schema::new(vec![
            user_table(),
            // custom type with no adapter anywhere: fails
            TableDefinition::new(
                "broken",
                vec![ColumnDefinition::new("data", SqlType::Blob)
                    .hint(TypeHint::Custom("com.example.Opaque".into()))],
                "CREATE TABLE broken (data BLOB NOT NULL)",
            ),
            TableDefinition::virtual_result(
                "user_count",
                vec![ColumnDefinition::new("count", SqlType::Integer)],
            ),
        ]);

        let output = builder.build_schema(&schema);
        assert!(output.has_failures());
        assert_eq!(output.models.len(), 2);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].table(), "broken");
    }

    #[test]
    fn test_determinism() {
        let model_a = build(&user_table()).unwrap();
        let model_b = build(&user_table()).unwrap();
        assert_eq!(model_a, model_b);
    }
}
