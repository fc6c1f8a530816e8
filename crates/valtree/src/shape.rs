//! Declared slot shapes.
//!
//! The declared type of a slot is carried explicitly as a [`Shape`]: when
//! the mutator has to materialize a container that does not exist yet, the
//! shape says what to create, and when the extractor reports an absent
//! slot, the shape says what tag it would have held.

use std::sync::Arc;

use crate::types::Kind;
use crate::value::{MapValue, OptionalValue, RecordValue, SeqValue, Value};

/// Declared type of a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Bool,
    Int,
    Float,
    Str,
    /// Ordered, growable sequence with a declared element shape.
    Seq(Box<Shape>),
    /// String-keyed, growable map with a declared value shape.
    Map(Box<Shape>),
    /// Fixed named fields in declaration order.
    Record(Arc<RecordShape>),
    /// Present/absent reference to a target shape.
    Optional(Box<Shape>),
    /// Untyped slot; its runtime shape is decided by the first path segment
    /// that touches it.
    Any,
}

/// A record type: named fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
}

impl Field {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Field {
            name: name.into(),
            shape,
        }
    }
}

impl RecordShape {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Arc<Self> {
        Arc::new(RecordShape {
            name: name.into(),
            fields,
        })
    }

    /// Position of a declared field, if any.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

impl Shape {
    pub fn seq(elem: Shape) -> Shape {
        Shape::Seq(Box::new(elem))
    }

    pub fn map(values: Shape) -> Shape {
        Shape::Map(Box::new(values))
    }

    pub fn optional(target: Shape) -> Shape {
        Shape::Optional(Box::new(target))
    }

    /// Coarse tag for this shape.
    ///
    /// Optional layers resolve to their target's tag: an absent optional
    /// still reports what it would have held. An untyped target reports
    /// [`Kind::Any`], since nothing more is statically known.
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Bool => Kind::Bool,
            Shape::Int => Kind::Int,
            Shape::Float => Kind::Float,
            Shape::Str => Kind::Str,
            Shape::Seq(_) => Kind::Seq,
            Shape::Map(_) => Kind::Map,
            Shape::Record(_) => Kind::Record,
            Shape::Optional(target) => target.kind(),
            Shape::Any => Kind::Any,
        }
    }

    /// The zero value of this shape. Total: every shape has one.
    ///
    /// # Example
    ///
    /// ```
    /// use valtree::{Shape, Value};
    ///
    /// assert_eq!(Shape::Int.zero(), Value::Int(0));
    /// assert!(Shape::optional(Shape::Str).zero().is_absent());
    /// ```
    pub fn zero(&self) -> Value {
        match self {
            Shape::Bool => Value::Bool(false),
            Shape::Int => Value::Int(0),
            Shape::Float => Value::Float(0.0),
            Shape::Str => Value::Str(String::new()),
            Shape::Seq(elem) => Value::Seq(SeqValue::new((**elem).clone())),
            Shape::Map(values) => Value::Map(MapValue::new((**values).clone())),
            Shape::Record(shape) => Value::Record(RecordValue::zero(shape.clone())),
            Shape::Optional(target) => Value::Optional(OptionalValue {
                target: (**target).clone(),
                value: None,
            }),
            Shape::Any => Value::Any(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Arc<RecordShape> {
        RecordShape::new(
            "Point",
            vec![Field::new("x", Shape::Int), Field::new("y", Shape::Int)],
        )
    }

    #[test]
    fn zero_scalars() {
        assert_eq!(Shape::Bool.zero(), Value::Bool(false));
        assert_eq!(Shape::Int.zero(), Value::Int(0));
        assert_eq!(Shape::Float.zero(), Value::Float(0.0));
        assert_eq!(Shape::Str.zero(), Value::Str(String::new()));
    }

    #[test]
    fn zero_containers_are_empty() {
        match Shape::seq(Shape::Int).zero() {
            Value::Seq(seq) => {
                assert_eq!(seq.elem, Shape::Int);
                assert!(seq.items.is_empty());
            }
            other => panic!("expected seq, got {other:?}"),
        }
        match Shape::map(Shape::Str).zero() {
            Value::Map(map) => {
                assert_eq!(map.values, Shape::Str);
                assert!(map.entries.is_empty());
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn zero_record_zeroes_every_field() {
        match Shape::Record(point()).zero() {
            Value::Record(rec) => {
                assert_eq!(rec.fields, vec![Value::Int(0), Value::Int(0)]);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn zero_optional_and_any_are_absent() {
        assert!(Shape::optional(Shape::Record(point())).zero().is_absent());
        assert!(Shape::Any.zero().is_absent());
    }

    #[test]
    fn kind_resolves_optional_layers() {
        assert_eq!(Shape::optional(Shape::Int).kind(), Kind::Int);
        assert_eq!(
            Shape::optional(Shape::optional(Shape::Record(point()))).kind(),
            Kind::Record
        );
        // nothing statically known past an untyped target
        assert_eq!(Shape::optional(Shape::Any).kind(), Kind::Any);
    }

    #[test]
    fn field_lookup_uses_declaration_order() {
        let shape = point();
        assert_eq!(shape.field_index("x"), Some(0));
        assert_eq!(shape.field_index("y"), Some(1));
        assert_eq!(shape.field_index("z"), None);
    }
}
