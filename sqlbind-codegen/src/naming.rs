//! Identifier sanitization and naming conventions for host languages.

use crate::casing::{to_camel_case, to_pascal_case, to_screaming_snake_case};

/// Host-language naming conventions.
///
/// Defines how raw schema identifiers become generated names, and how
/// collisions with the host language's reserved words are escaped. The
/// mapping is total: every input produces a syntactically valid identifier,
/// and non-colliding names pass through their transform unchanged.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a column name to an accessor method name
    /// (e.g., "user_id" -> "userId")
    pub column_to_method: fn(&str) -> String,
    /// Transform a table name to a generated type name
    /// (e.g., "user_table" -> "UserTable")
    pub table_to_type: fn(&str) -> String,
    /// Transform a name to a generated constant name
    /// (e.g., "user_id" -> "USER_ID")
    pub name_to_constant: fn(&str) -> String,
    /// Reserved words of the host language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "new" -> "new_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check whether a name collides with a reserved word.
    ///
    /// Matching is case-insensitive: `Package` collides with `package`.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(name))
    }

    /// Get a safe name, escaping only if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as an accessor method name.
    pub fn method_name(&self, name: &str) -> String {
        let transformed = (self.column_to_method)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a generated type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.table_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform for use as a generated constant name.
    ///
    /// Constant names are not escaped: the transforms produce
    /// SCREAMING_SNAKE_CASE, which is a legal identifier shape even when it
    /// matches a keyword case-insensitively.
    pub fn constant_name(&self, name: &str) -> String {
        (self.name_to_constant)(name)
    }
}

fn escape_with_trailing_underscore(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    column_to_method: to_camel_case,
    table_to_type: to_pascal_case,
    name_to_constant: to_screaming_snake_case,
    reserved_words: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
        "true",
        "false",
        "null",
    ],
    escape_reserved: escape_with_trailing_underscore,
};

/// Kotlin naming conventions.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    column_to_method: to_camel_case,
    table_to_type: to_pascal_case,
    name_to_constant: to_screaming_snake_case,
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
        "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    escape_reserved: escape_with_trailing_underscore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("byte"));
        assert!(JAVA_NAMING.is_reserved("package"));
        assert!(JAVA_NAMING.is_reserved("new"));
        assert!(!JAVA_NAMING.is_reserved("user"));
    }

    #[test]
    fn test_reserved_match_is_case_insensitive() {
        assert!(JAVA_NAMING.is_reserved("Byte"));
        assert!(JAVA_NAMING.is_reserved("PACKAGE"));
        assert!(KOTLIN_NAMING.is_reserved("Val"));
    }

    #[test]
    fn test_safe_name_identity_on_common_case() {
        assert_eq!(JAVA_NAMING.safe_name("user_id"), "user_id");
        assert_eq!(KOTLIN_NAMING.safe_name("title"), "title");
    }

    #[test]
    fn test_safe_name_escapes_with_trailing_marker() {
        assert_eq!(JAVA_NAMING.safe_name("new"), "new_");
        assert_eq!(JAVA_NAMING.safe_name("package"), "package_");
        assert_eq!(KOTLIN_NAMING.safe_name("val"), "val_");
    }

    #[test]
    fn test_safe_name_is_stable() {
        assert_eq!(JAVA_NAMING.safe_name("byte"), JAVA_NAMING.safe_name("byte"));
    }

    #[test]
    fn test_java_method_name() {
        assert_eq!(JAVA_NAMING.method_name("user_id"), "userId");
        // camelCase lands exactly on the keyword, so it picks up the marker
        assert_eq!(JAVA_NAMING.method_name("new"), "new_");
        assert_eq!(JAVA_NAMING.method_name("package"), "package_");
    }

    #[test]
    fn test_java_type_name() {
        assert_eq!(JAVA_NAMING.type_name("user_table"), "UserTable");
        assert_eq!(JAVA_NAMING.type_name("player"), "Player");
    }

    #[test]
    fn test_constant_name() {
        assert_eq!(JAVA_NAMING.constant_name("user_id"), "USER_ID");
        // uppercase shape never needs escaping
        assert_eq!(JAVA_NAMING.constant_name("new"), "NEW");
    }
}
