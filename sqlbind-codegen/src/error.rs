//! Generation-time diagnostics.
//!
//! All errors here are compile-time diagnostics aimed at the schema author;
//! they halt generation for the offending table and never surface as
//! runtime failures of generated code. Each diagnostic names the table, the
//! column, and the violated rule, and labels the offending identifier in
//! the table's DDL text when it can be located.

use miette::{Diagnostic, NamedSource, SourceSpan};
use sqlbind_ir::TableDefinition;
use thiserror::Error;

/// Result type for generation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// DDL source context for error reporting.
///
/// Wraps a table's CREATE TABLE text so diagnostic factories can attach
/// labeled spans. Virtual result sets have no DDL; their diagnostics carry
/// an empty source and no span.
#[derive(Debug, Clone)]
pub struct DdlSource {
    table: String,
    ddl: String,
}

impl DdlSource {
    /// Create a source context for a table.
    pub fn new(table: &TableDefinition) -> Self {
        Self {
            table: table.table_name.clone(),
            ddl: table.create_table_sql.clone().unwrap_or_default(),
        }
    }

    /// The table name this context reports against.
    pub fn table(&self) -> &str {
        &self.table
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(format!("{}.sq", self.table), self.ddl.clone())
    }

    /// Find the span of a column name in the DDL.
    ///
    /// Searches the declaration positions a column name can occupy in a
    /// CREATE TABLE body before falling back to a plain substring match.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        let patterns = [
            format!("\n  {} ", name), // two-space indented body line
            format!("({} ", name),    // first column after the paren
            format!(", {} ", name),   // single-line declarations
        ];

        for pattern in &patterns {
            if let Some(pos) = self.ddl.find(pattern.as_str()) {
                let start = pos + (pattern.len() - name.len() - 1);
                return Some(SourceSpan::from((start, name.len())));
            }
        }

        // Fallback: the name anywhere (less precise)
        self.ddl
            .find(name)
            .map(|pos| SourceSpan::from((pos, name.len())))
    }

    /// Create an unsupported-type error for a column.
    pub fn unsupported_type(
        &self,
        column: impl Into<String>,
        ty: impl Into<String>,
    ) -> Box<Error> {
        let column = column.into();
        Box::new(Error::UnsupportedType {
            src: self.named_source(),
            span: self.find_span(&column),
            table: self.table.clone(),
            column,
            ty: ty.into(),
        })
    }

    /// Create a missing-adapter error for a custom or enum column.
    pub fn missing_adapter(
        &self,
        column: impl Into<String>,
        custom_type: impl Into<String>,
    ) -> Box<Error> {
        let column = column.into();
        Box::new(Error::MissingAdapter {
            src: self.named_source(),
            span: self.find_span(&column),
            table: self.table.clone(),
            column,
            custom_type: custom_type.into(),
        })
    }

    /// Create a name-collision error for two columns that sanitize to the
    /// same generated identifier.
    pub fn name_collision(
        &self,
        first: impl Into<String>,
        second: impl Into<String>,
        safe_name: impl Into<String>,
    ) -> Box<Error> {
        let second = second.into();
        Box::new(Error::NameCollision {
            src: self.named_source(),
            span: self.find_span(&second),
            table: self.table.clone(),
            first: first.into(),
            second,
            safe_name: safe_name.into(),
        })
    }

    /// Create a malformed-schema error for a structural invariant violation.
    pub fn malformed_schema(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::MalformedSchema {
            src: self.named_source(),
            span: None,
            table: self.table.clone(),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("column '{column}' in table '{table}' has unsupported type '{ty}'")]
    #[diagnostic(
        code(sqlbind::unsupported_type),
        help("storage types are INTEGER, REAL, TEXT, and BLOB; boolean columns must be stored as INTEGER")
    )]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        table: String,
        column: String,
        ty: String,
    },

    #[error("no adapter for column '{column}' of type '{custom_type}' in table '{table}'")]
    #[diagnostic(
        code(sqlbind::missing_adapter),
        help(
            "supply an adapter expression on the column, register one for '{custom_type}', or store the enum as TEXT to use the default name-based codec"
        )
    )]
    MissingAdapter {
        #[source_code]
        src: NamedSource<String>,
        #[label("needs an encode/decode adapter")]
        span: Option<SourceSpan>,
        table: String,
        column: String,
        custom_type: String,
    },

    #[error("columns '{first}' and '{second}' in table '{table}' both generate '{safe_name}'")]
    #[diagnostic(
        code(sqlbind::name_collision),
        help("rename one of the columns; colliding identifiers would make the generated API ambiguous")
    )]
    NameCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("collides with '{first}'")]
        span: Option<SourceSpan>,
        table: String,
        first: String,
        second: String,
        safe_name: String,
    },

    #[error("malformed declaration of table '{table}': {message}")]
    #[diagnostic(code(sqlbind::malformed_schema))]
    MalformedSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        table: String,
        message: String,
    },
}

impl Error {
    /// The table whose generation this diagnostic aborted.
    pub fn table(&self) -> &str {
        match self {
            Error::UnsupportedType { table, .. }
            | Error::MissingAdapter { table, .. }
            | Error::NameCollision { table, .. }
            | Error::MalformedSchema { table, .. } => table,
        }
    }
}
