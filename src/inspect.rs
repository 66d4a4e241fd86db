//! Field introspection without runtime reflection.
//!
//! Every record type implements [`Inspect`], listing its exported fields as
//! `(name, value)` pairs. Leaf types implement [`AsField`] to describe their
//! kind. The [`inspect_struct!`](crate::inspect_struct) macro declares a
//! serde-deserializable struct and generates both impls from one field list.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer};

/// A type that can enumerate its exported fields.
pub trait Inspect {
    fn fields(&self) -> Vec<FieldRef<'_>>;
}

/// Conversion of a field into its [`FieldValue`] kind.
pub trait AsField {
    fn as_field(&self) -> FieldValue<'_>;
}

/// One exported field of an [`Inspect`] value.
pub struct FieldRef<'a> {
    /// Exported field name, as it appears in a field path.
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> FieldRef<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}

/// The kind of a field together with what the classifier needs to see.
pub enum FieldValue<'a> {
    Text(&'a str),
    /// A sequence, by length.
    Seq(usize),
    /// A mapping, by number of entries.
    Map(usize),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A nested record the walker descends into.
    Struct(&'a dyn Inspect),
    /// Optional values and anything else the walker does not descend.
    Opaque,
}

/// Whether a leaf value carries meaningful content.
///
/// Booleans and opaque values never do: `false` is indistinguishable from
/// an unset field, so both count as not covered.
#[must_use]
pub fn has_content(value: &FieldValue<'_>) -> bool {
    match *value {
        FieldValue::Text(s) => !s.is_empty(),
        FieldValue::Seq(len) | FieldValue::Map(len) => len > 0,
        FieldValue::Int(v) => v != 0,
        FieldValue::Float(v) => v != 0.0,
        FieldValue::Bool(_) | FieldValue::Struct(_) | FieldValue::Opaque => false,
    }
}

impl AsField for String {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl<T> AsField for Vec<T> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<K, V> AsField for BTreeMap<K, V> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V, S> AsField for HashMap<K, V, S> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

macro_rules! signed_as_field {
    ($($t:ty),*) => {
        $(
            impl AsField for $t {
                fn as_field(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

signed_as_field!(i8, i16, i32, i64);

impl AsField for f32 {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsField for f64 {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsField for bool {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl<T> AsField for Option<T> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Opaque
    }
}

impl AsField for serde_json::Value {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Opaque
    }
}

/// Deserialize a value, reading JSON `null` as `T::default()`.
///
/// Logged resources carry `null` wherever an empty slice, map or timestamp
/// was marshalled, so every field declared through
/// [`inspect_struct!`](crate::inspect_struct) goes through this.
pub fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Declare a record struct and derive [`Inspect`] and [`AsField`] for it.
///
/// Each field is written as `pub name: Type => "ExportedName",`. The struct
/// gets `Debug`, `Clone`, `Default`, `PartialEq` and `Deserialize`, with
/// camelCase JSON keys; missing keys and `null` values are defaulted.
///
/// ```
/// apicov::inspect_struct! {
///     pub struct Port {
///         pub name: String => "Name",
///         pub number: i32 => "Number",
///     }
/// }
/// ```
#[macro_export]
macro_rules! inspect_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty => $label:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(deserialize_with = "::apicov::inspect::null_default")]
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::inspect::Inspect for $name {
            fn fields(&self) -> Vec<$crate::inspect::FieldRef<'_>> {
                vec![
                    $(
                        $crate::inspect::FieldRef::new(
                            $label,
                            $crate::inspect::AsField::as_field(&self.$field),
                        ),
                    )*
                ]
            }
        }

        impl $crate::inspect::AsField for $name {
            fn as_field(&self) -> $crate::inspect::FieldValue<'_> {
                $crate::inspect::FieldValue::Struct(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_collections_by_length() {
        assert!(!has_content(&String::new().as_field()));
        assert!(has_content(&"x".to_string().as_field()));
        assert!(!has_content(&Vec::<u8>::new().as_field()));
        assert!(has_content(&vec![1u8].as_field()));
        assert!(!has_content(&BTreeMap::<String, String>::new().as_field()));
        let map = BTreeMap::from([("a".to_string(), "b".to_string())]);
        assert!(has_content(&map.as_field()));
    }

    #[test]
    fn test_numbers_by_value() {
        assert!(!has_content(&0i64.as_field()));
        assert!(has_content(&(-3i32).as_field()));
        assert!(!has_content(&0.0f64.as_field()));
        assert!(has_content(&0.5f32.as_field()));
    }

    #[test]
    fn test_booleans_and_optionals_never_have_content() {
        assert!(!has_content(&true.as_field()));
        assert!(!has_content(&false.as_field()));
        assert!(!has_content(&Some(5i64).as_field()));
        assert!(!has_content(&None::<String>.as_field()));
        assert!(!has_content(&serde_json::json!({"a": 1}).as_field()));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let value = "route-name".to_string();
        let first = has_content(&value.as_field());
        for _ in 0..3 {
            assert_eq!(has_content(&value.as_field()), first);
        }
    }

    crate::inspect_struct! {
        pub struct Sample {
            pub name: String => "Name",
            #[serde(rename = "replicas")]
            pub count: i64 => "Count",
        }
    }

    #[test]
    fn test_macro_lists_fields_in_declaration_order() {
        let sample = Sample {
            name: "a".to_string(),
            count: 0,
        };
        let names: Vec<_> = sample.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Name", "Count"]);
        assert!(matches!(sample.as_field(), FieldValue::Struct(_)));
    }

    #[test]
    fn test_null_default_reads_null_as_default() {
        let mut de = serde_json::Deserializer::from_str("null");
        let labels: BTreeMap<String, String> = null_default(&mut de).unwrap();
        assert!(labels.is_empty());

        let mut de = serde_json::Deserializer::from_str("7");
        let count: i64 = null_default(&mut de).unwrap();
        assert_eq!(count, 7);
    }

    #[test]
    fn test_macro_struct_accepts_null_fields() {
        let sample: Sample = serde_json::from_str(r#"{"name": null, "replicas": null}"#).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_macro_struct_deserializes_with_defaults() {
        let sample: Sample = serde_json::from_str(r#"{"replicas": 2}"#).unwrap();
        assert_eq!(sample.count, 2);
        assert_eq!(sample.name, "");
    }
}
