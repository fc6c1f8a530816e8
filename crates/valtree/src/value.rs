//! The dynamic value model.
//!
//! [`Value`] has one variant per slot kind. Together with its inherent
//! methods it is the whole capability surface the extractor and mutator are
//! written against: report a coarse tag, report absence, and expose
//! children by index, key, or field name.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::shape::{RecordShape, Shape};
use crate::types::Kind;

/// A composite value addressable by dotted paths.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(SeqValue),
    Map(MapValue),
    Record(RecordValue),
    Optional(OptionalValue),
    /// Untyped slot. Unset until first touched; once it holds a value its
    /// shape is settled.
    Any(Option<Box<Value>>),
}

/// An ordered sequence and the declared shape grown slots start from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeqValue {
    pub elem: Shape,
    pub items: Vec<Value>,
}

/// A string-keyed map in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
    /// Declared shape for materialized entries.
    pub values: Shape,
    pub entries: IndexMap<String, Value>,
}

/// A record instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    pub shape: Arc<RecordShape>,
    /// Field values, parallel to `shape.fields`.
    pub fields: Vec<Value>,
}

/// A present/absent reference with a declared target shape.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalValue {
    pub target: Shape,
    pub value: Option<Box<Value>>,
}

impl SeqValue {
    pub fn new(elem: Shape) -> Self {
        SeqValue {
            elem,
            items: Vec::new(),
        }
    }
}

impl MapValue {
    pub fn new(values: Shape) -> Self {
        MapValue {
            values,
            entries: IndexMap::new(),
        }
    }
}

impl RecordValue {
    /// A record instance with every field at its zero value.
    pub fn zero(shape: Arc<RecordShape>) -> Self {
        let fields = shape.fields.iter().map(|f| f.shape.zero()).collect();
        RecordValue { shape, fields }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.shape.field_index(name).map(|i| &self.fields[i])
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        let i = self.shape.field_index(name)?;
        Some(&mut self.fields[i])
    }
}

impl Value {
    /// An empty sequence with the given element shape.
    pub fn seq(elem: Shape) -> Value {
        Value::Seq(SeqValue::new(elem))
    }

    /// An empty map with the given value shape.
    pub fn map(values: Shape) -> Value {
        Value::Map(MapValue::new(values))
    }

    /// A zero-valued record instance.
    pub fn record(shape: Arc<RecordShape>) -> Value {
        Value::Record(RecordValue::zero(shape))
    }

    /// An optional slot, present or absent.
    pub fn optional(target: Shape, value: Option<Value>) -> Value {
        Value::Optional(OptionalValue {
            target,
            value: value.map(Box::new),
        })
    }

    /// Wrap this value into a resolved untyped slot.
    pub fn into_any(self) -> Value {
        Value::Any(Some(Box::new(self)))
    }

    /// Coarse tag.
    ///
    /// Present optional and resolved untyped slots inherit the tag of what
    /// they hold; absent ones report their declared target.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
            Value::Optional(opt) => match &opt.value {
                Some(inner) => inner.kind(),
                None => opt.target.kind(),
            },
            Value::Any(slot) => match slot {
                Some(inner) => inner.kind(),
                None => Kind::Any,
            },
        }
    }

    /// Whether the slot currently holds nothing.
    ///
    /// Only optional and untyped slots can be absent; an empty sequence or
    /// map is present.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            Value::Optional(OptionalValue { value: None, .. }) | Value::Any(None)
        )
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Field;

    #[test]
    fn kind_of_present_optional_follows_held_value() {
        let opt = Value::optional(Shape::Int, Some(Value::Int(3)));
        assert_eq!(opt.kind(), Kind::Int);
        assert!(!opt.is_absent());
    }

    #[test]
    fn kind_of_absent_optional_follows_declared_target() {
        let shape = RecordShape::new("Empty", vec![]);
        let opt = Value::optional(Shape::Record(shape), None);
        assert_eq!(opt.kind(), Kind::Record);
        assert!(opt.is_absent());
    }

    #[test]
    fn kind_of_untyped_slot() {
        assert_eq!(Value::Any(None).kind(), Kind::Any);
        assert_eq!(Value::Str("x".into()).into_any().kind(), Kind::Str);
    }

    #[test]
    fn record_field_access() {
        let shape = RecordShape::new("Pair", vec![
            Field::new("left", Shape::Int),
            Field::new("right", Shape::Str),
        ]);
        let mut rec = RecordValue::zero(shape);
        assert_eq!(rec.field("left"), Some(&Value::Int(0)));
        *rec.field_mut("right").unwrap() = Value::Str("r".into());
        assert_eq!(rec.field("right"), Some(&Value::Str("r".into())));
        assert_eq!(rec.field("middle"), None);
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3), Value::Int(3));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("hi"), Value::Str("hi".into()));
    }
}
