//! Exposed types and host-language type mapping.

use sqlbind_ir::SqlType;

/// The language-agnostic exposed type of a resolved column.
///
/// Native variants are directly reachable from a storage type (boolean via
/// the implicit 0/1 integer encoding); `Enum` and `Named` are declared
/// types that always go through an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// 64-bit signed integer (INTEGER storage).
    Long,
    /// Double-precision float (REAL storage).
    Double,
    /// Character string (TEXT storage).
    String,
    /// Byte sequence (BLOB storage).
    Bytes,
    /// Boolean stored as INTEGER 0/1.
    Boolean,
    /// A declared enum type.
    Enum(std::string::String),
    /// A declared custom value type.
    Named(std::string::String),
}

impl TypeRef {
    /// The direct host representation of a storage type.
    pub fn native(sql_type: SqlType) -> Self {
        match sql_type {
            SqlType::Integer => TypeRef::Long,
            SqlType::Real => TypeRef::Double,
            SqlType::Text => TypeRef::String,
            SqlType::Blob => TypeRef::Bytes,
        }
    }

    /// Returns true if this type needs no adapter.
    ///
    /// `Boolean` is native: the 0/1 narrowing is a conversion owned by the
    /// mapper and marshal, not an adapter.
    pub fn is_native(&self) -> bool {
        !matches!(self, TypeRef::Enum(_) | TypeRef::Named(_))
    }

    /// The declared type name for enum and custom types.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            TypeRef::Enum(name) | TypeRef::Named(name) => Some(name),
            _ => None,
        }
    }
}

/// How a nullable boolean column is represented in the host language.
///
/// The two variants are kept explicit rather than unified; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolPolicy {
    /// Keep the primitive boolean type; absence is handled only by the
    /// mapper's null branch.
    #[default]
    StrictNative,
    /// Use the boxed boolean type for nullable columns.
    NullableBoxed,
}

/// Trait for mapping exposed types to host-language type strings.
///
/// Implement this trait for each target host language.
pub trait HostTypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map an exposed type to a host type string
    fn map_type(&self, ty: &TypeRef) -> String;

    /// Map an exposed type for a nullable column
    fn map_nullable(&self, ty: &TypeRef) -> String;

    /// Map a storage type to the host type read from or written to a row
    fn map_storage(&self, sql_type: SqlType) -> &'static str;
}

/// Java type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper {
    /// Representation policy for nullable boolean columns.
    pub bool_policy: BoolPolicy,
}

impl JavaTypeMapper {
    /// Create a mapper with the given nullable-boolean policy.
    pub fn new(bool_policy: BoolPolicy) -> Self {
        Self { bool_policy }
    }
}

impl HostTypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Long => "long".to_string(),
            TypeRef::Double => "double".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Bytes => "byte[]".to_string(),
            TypeRef::Boolean => "boolean".to_string(),
            TypeRef::Enum(name) | TypeRef::Named(name) => name.clone(),
        }
    }

    fn map_nullable(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Long => "Long".to_string(),
            TypeRef::Double => "Double".to_string(),
            TypeRef::Boolean => match self.bool_policy {
                BoolPolicy::NullableBoxed => "Boolean".to_string(),
                BoolPolicy::StrictNative => "boolean".to_string(),
            },
            other => self.map_type(other),
        }
    }

    fn map_storage(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Integer => "long",
            SqlType::Real => "double",
            SqlType::Text => "String",
            SqlType::Blob => "byte[]",
        }
    }
}

/// Kotlin type mapper implementation.
///
/// Kotlin has a single nullable form, so there is no boolean policy here.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl HostTypeMapper for KotlinTypeMapper {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Long => "Long".to_string(),
            TypeRef::Double => "Double".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Bytes => "ByteArray".to_string(),
            TypeRef::Boolean => "Boolean".to_string(),
            TypeRef::Enum(name) | TypeRef::Named(name) => name.clone(),
        }
    }

    fn map_nullable(&self, ty: &TypeRef) -> String {
        format!("{}?", self.map_type(ty))
    }

    fn map_storage(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Integer => "Long",
            SqlType::Real => "Double",
            SqlType::Text => "String",
            SqlType::Blob => "ByteArray",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_mapping() {
        assert_eq!(TypeRef::native(SqlType::Integer), TypeRef::Long);
        assert_eq!(TypeRef::native(SqlType::Real), TypeRef::Double);
        assert_eq!(TypeRef::native(SqlType::Text), TypeRef::String);
        assert_eq!(TypeRef::native(SqlType::Blob), TypeRef::Bytes);
    }

    #[test]
    fn test_is_native() {
        assert!(TypeRef::Long.is_native());
        assert!(TypeRef::Boolean.is_native());
        assert!(!TypeRef::Enum("Status".into()).is_native());
        assert!(!TypeRef::Named("Money".into()).is_native());
    }

    #[test]
    fn test_java_type_mapper() {
        let mapper = JavaTypeMapper::default();
        assert_eq!(mapper.map_type(&TypeRef::Long), "long");
        assert_eq!(mapper.map_type(&TypeRef::Bytes), "byte[]");
        assert_eq!(mapper.map_type(&TypeRef::Boolean), "boolean");
        assert_eq!(
            mapper.map_type(&TypeRef::Named("com.example.Money".into())),
            "com.example.Money"
        );
        assert_eq!(mapper.map_storage(SqlType::Text), "String");
    }

    #[test]
    fn test_java_nullable_boxes_primitives() {
        let mapper = JavaTypeMapper::default();
        assert_eq!(mapper.map_nullable(&TypeRef::Long), "Long");
        assert_eq!(mapper.map_nullable(&TypeRef::Double), "Double");
        assert_eq!(mapper.map_nullable(&TypeRef::String), "String");
    }

    #[test]
    fn test_java_bool_policy_variants() {
        let strict = JavaTypeMapper::new(BoolPolicy::StrictNative);
        let boxed = JavaTypeMapper::new(BoolPolicy::NullableBoxed);
        assert_eq!(strict.map_nullable(&TypeRef::Boolean), "boolean");
        assert_eq!(boxed.map_nullable(&TypeRef::Boolean), "Boolean");
    }

    #[test]
    fn test_kotlin_type_mapper() {
        let mapper = KotlinTypeMapper;
        assert_eq!(mapper.map_type(&TypeRef::Bytes), "ByteArray");
        assert_eq!(mapper.map_nullable(&TypeRef::Long), "Long?");
        assert_eq!(mapper.map_nullable(&TypeRef::Boolean), "Boolean?");
    }
}
