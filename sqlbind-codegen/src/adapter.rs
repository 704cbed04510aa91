//! Column codecs and the adapter registry.
//!
//! Custom and enum columns bridge to storage through a user-owned adapter:
//! a named value producing `encode(T) -> StorageValue` and
//! `decode(StorageValue) -> T`. The generator never invokes either; it only
//! records which adapter a column is bound to and describes the encode and
//! decode calls for the emitter.

use std::fmt;

use indexmap::IndexMap;

/// Reference to an adapter value owned by user code.
///
/// Referenced, never copied: the generator records where the adapter comes
/// from so the Factory contract can inject it by constructor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRef {
    /// Fully-qualified name of the type the adapter bridges.
    pub custom_type: String,
    /// Where the adapter value comes from.
    pub binding: AdapterBinding,
}

/// Where an adapter value is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterBinding {
    /// An expression supplied on the column declaration.
    Expression(String),
    /// An expression found in the process-wide adapter registry.
    Registry(String),
    /// The generator-provided name-based TEXT codec for enums.
    EnumDefault,
}

impl AdapterRef {
    /// Adapter supplied directly on the column.
    pub fn expression(custom_type: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            custom_type: custom_type.into(),
            binding: AdapterBinding::Expression(expr.into()),
        }
    }

    /// Adapter found in the registry.
    pub fn registry(custom_type: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            custom_type: custom_type.into(),
            binding: AdapterBinding::Registry(expr.into()),
        }
    }

    /// The default name-based codec for an enum stored as TEXT.
    pub fn enum_default(custom_type: impl Into<String>) -> Self {
        Self {
            custom_type: custom_type.into(),
            binding: AdapterBinding::EnumDefault,
        }
    }
}

/// The conversion a mapper or marshal applies to a present (non-null) value.
///
/// Null handling is owned by the mapper/marshal contracts themselves and
/// happens before any conversion runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueConversion {
    /// Pass the native value through unchanged.
    Identity,
    /// Narrow a stored 0/1 integer to a boolean.
    IntegerToBoolean,
    /// Widen a boolean to a stored 0/1 integer.
    BooleanToInteger,
    /// Invoke the adapter's decode on the stored value.
    Decode(AdapterRef),
    /// Invoke the adapter's encode on the exposed value.
    Encode(AdapterRef),
}

impl ValueConversion {
    /// The conversion that undoes this one.
    pub fn inverse(&self) -> ValueConversion {
        match self {
            ValueConversion::Identity => ValueConversion::Identity,
            ValueConversion::IntegerToBoolean => ValueConversion::BooleanToInteger,
            ValueConversion::BooleanToInteger => ValueConversion::IntegerToBoolean,
            ValueConversion::Decode(adapter) => ValueConversion::Encode(adapter.clone()),
            ValueConversion::Encode(adapter) => ValueConversion::Decode(adapter.clone()),
        }
    }
}

/// The encode/decode capability pair selected for a column.
///
/// Selected once during resolution and stored by reference in the resolved
/// column. Implementations describe conversions; they never perform them.
pub trait ColumnCodec: fmt::Debug + Send + Sync {
    /// Conversion applied when reading a present stored value.
    fn decode(&self) -> ValueConversion;

    /// Conversion applied when writing a present exposed value.
    fn encode(&self) -> ValueConversion;

    /// The adapter the Factory must inject, if any.
    fn adapter(&self) -> Option<&AdapterRef> {
        None
    }
}

/// Codec for columns whose exposed type is directly storage-reachable.
#[derive(Debug, Clone, Copy)]
pub struct NativeCodec {
    narrow_bool: bool,
}

impl NativeCodec {
    /// Identity codec for plain native columns.
    pub fn passthrough() -> Self {
        Self { narrow_bool: false }
    }

    /// Narrowing codec for boolean-as-integer columns.
    pub fn boolean() -> Self {
        Self { narrow_bool: true }
    }
}

impl ColumnCodec for NativeCodec {
    fn decode(&self) -> ValueConversion {
        if self.narrow_bool {
            ValueConversion::IntegerToBoolean
        } else {
            ValueConversion::Identity
        }
    }

    fn encode(&self) -> ValueConversion {
        if self.narrow_bool {
            ValueConversion::BooleanToInteger
        } else {
            ValueConversion::Identity
        }
    }
}

/// Default name-based TEXT codec for enum columns without an explicit
/// adapter.
///
/// Delegates through the same [`AdapterRef`] abstraction as user-supplied
/// adapters, so the mapper and marshal contracts never special-case enums.
#[derive(Debug, Clone)]
pub struct EnumDefaultCodec {
    adapter: AdapterRef,
}

impl EnumDefaultCodec {
    /// Create the default codec for the named enum type.
    pub fn new(custom_type: impl Into<String>) -> Self {
        Self {
            adapter: AdapterRef::enum_default(custom_type),
        }
    }
}

impl ColumnCodec for EnumDefaultCodec {
    fn decode(&self) -> ValueConversion {
        ValueConversion::Decode(self.adapter.clone())
    }

    fn encode(&self) -> ValueConversion {
        ValueConversion::Encode(self.adapter.clone())
    }

    fn adapter(&self) -> Option<&AdapterRef> {
        Some(&self.adapter)
    }
}

/// Codec bound to a user-supplied adapter.
#[derive(Debug, Clone)]
pub struct UserAdapterCodec {
    adapter: AdapterRef,
}

impl UserAdapterCodec {
    /// Create a codec around a user-supplied adapter reference.
    pub fn new(adapter: AdapterRef) -> Self {
        Self { adapter }
    }
}

impl ColumnCodec for UserAdapterCodec {
    fn decode(&self) -> ValueConversion {
        ValueConversion::Decode(self.adapter.clone())
    }

    fn encode(&self) -> ValueConversion {
        ValueConversion::Encode(self.adapter.clone())
    }

    fn adapter(&self) -> Option<&AdapterRef> {
        Some(&self.adapter)
    }
}

/// Process-wide registry of adapter expressions keyed by custom type name.
///
/// Built once at startup and never mutated during generation; insertion
/// order is preserved so repeated runs resolve identically.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    entries: IndexMap<String, String>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter expression for a custom type.
    pub fn register(
        mut self,
        custom_type: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        self.entries.insert(custom_type.into(), expression.into());
        self
    }

    /// Look up the adapter expression for a custom type.
    pub fn lookup(&self, custom_type: &str) -> Option<&str> {
        self.entries.get(custom_type).map(String::as_str)
    }

    /// Returns true if no adapters are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_codec_passthrough() {
        let codec = NativeCodec::passthrough();
        assert_eq!(codec.decode(), ValueConversion::Identity);
        assert_eq!(codec.encode(), ValueConversion::Identity);
        assert!(codec.adapter().is_none());
    }

    #[test]
    fn test_native_codec_boolean_narrowing() {
        let codec = NativeCodec::boolean();
        assert_eq!(codec.decode(), ValueConversion::IntegerToBoolean);
        assert_eq!(codec.encode(), ValueConversion::BooleanToInteger);
        assert!(codec.adapter().is_none());
    }

    #[test]
    fn test_enum_default_codec() {
        let codec = EnumDefaultCodec::new("com.example.Status");
        let adapter = codec.adapter().unwrap();
        assert_eq!(adapter.custom_type, "com.example.Status");
        assert_eq!(adapter.binding, AdapterBinding::EnumDefault);
        assert_eq!(codec.decode(), ValueConversion::Decode(adapter.clone()));
    }

    #[test]
    fn test_user_adapter_codec() {
        let adapter = AdapterRef::expression("com.example.Money", "Money.ADAPTER");
        let codec = UserAdapterCodec::new(adapter.clone());
        assert_eq!(codec.adapter(), Some(&adapter));
        assert_eq!(codec.encode(), ValueConversion::Encode(adapter));
    }

    #[test]
    fn test_conversion_inverse_pairs() {
        assert_eq!(
            ValueConversion::Identity.inverse(),
            ValueConversion::Identity
        );
        assert_eq!(
            ValueConversion::IntegerToBoolean.inverse(),
            ValueConversion::BooleanToInteger
        );

        let adapter = AdapterRef::registry("com.example.Money", "Money.ADAPTER");
        assert_eq!(
            ValueConversion::Decode(adapter.clone()).inverse(),
            ValueConversion::Encode(adapter)
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = AdapterRegistry::new()
            .register("com.example.Money", "Money.ADAPTER")
            .register("com.example.Status", "Status.ADAPTER");

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup("com.example.Money"),
            Some("Money.ADAPTER")
        );
        assert!(registry.lookup("com.example.Missing").is_none());
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let registry = AdapterRegistry::new()
            .register("b.B", "B.ADAPTER")
            .register("a.A", "A.ADAPTER");

        let keys: Vec<_> = registry.entries.keys().cloned().collect();
        assert_eq!(keys, vec!["b.B", "a.A"]);
    }
}
