//! Table and schema declarations.

use serde::{Deserialize, Serialize};

use crate::ColumnDefinition;

/// A table declaration as produced by the schema parser.
///
/// Column order is significant: it fixes both the storage-row ordinal
/// layout and the declaration order of generated accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name exactly as written in the schema.
    pub table_name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDefinition>,
    /// The CREATE TABLE statement, verbatim.
    ///
    /// `None` for virtual result sets (computed SELECT shapes with no
    /// backing table). When present, the text is reproduced bit-exact in
    /// the generated model so downstream code can recreate the schema.
    pub create_table_sql: Option<String>,
}

impl TableDefinition {
    /// Create a backed table with its verbatim DDL.
    pub fn new(
        table_name: impl Into<String>,
        columns: Vec<ColumnDefinition>,
        create_table_sql: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
            create_table_sql: Some(create_table_sql.into()),
        }
    }

    /// Create a virtual result set (a SELECT shape with no backing table).
    pub fn virtual_result(table_name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
            create_table_sql: None,
        }
    }

    /// Returns true if this is a computed result set with no backing table.
    pub fn is_virtual(&self) -> bool {
        self.create_table_sql.is_none()
    }

    /// Returns true if the table declares at least one column.
    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Look up a column by its raw name.
    pub fn column(&self, raw_name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.raw_name == raw_name)
    }
}

/// A parsed schema: an ordered sequence of table declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Tables in schema declaration order.
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    /// Create a schema from a list of tables.
    pub fn new(tables: Vec<TableDefinition>) -> Self {
        Self { tables }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.table_name == name)
    }
}
