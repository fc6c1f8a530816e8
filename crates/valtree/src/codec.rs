//! JSON interop and report encoding.
//!
//! Hand-written conversions between the value model and `serde_json`. The
//! JSON adapter is the bundled reference adapter for untyped data: a
//! document comes in as maps, sequences and scalars, each held in a
//! resolved untyped slot exactly the way untyped materialization would
//! have produced it, so documents built by parsing and documents built by
//! writing compare equal.

use serde_json::{json, Number, Value as Json};

use crate::shape::Shape;
use crate::types::{Change, Node};
use crate::value::{MapValue, SeqValue, Value};

/// Build a [`Value`] from a JSON document.
///
/// `null` becomes an unset untyped slot. Numbers map to `Int` when
/// representable as `i64`, otherwise to `Float`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use valtree::codec::{value_from_json, value_to_json};
///
/// let doc = json!({"a": [1, 2], "b": "x"});
/// assert_eq!(value_to_json(&value_from_json(&doc)), doc);
/// ```
pub fn value_from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Any(None),
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(0.0)),
        },
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::Seq(SeqValue {
            elem: Shape::Any,
            items: items.iter().map(any_slot).collect(),
        }),
        Json::Object(entries) => Value::Map(MapValue {
            values: Shape::Any,
            entries: entries
                .iter()
                .map(|(k, v)| (k.clone(), any_slot(v)))
                .collect(),
        }),
    }
}

/// An untyped slot holding the converted value; `null` stays unset rather
/// than becoming a held empty slot.
fn any_slot(json: &Json) -> Value {
    match json {
        Json::Null => Value::Any(None),
        other => value_from_json(other).into_any(),
    }
}

/// Encode a [`Value`] as JSON.
///
/// Absent slots and non-finite floats encode as `null`; optional and
/// untyped wrappers are invisible in the output.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
        Value::Str(s) => Json::String(s.clone()),
        Value::Seq(seq) => Json::Array(seq.items.iter().map(value_to_json).collect()),
        Value::Map(map) => Json::Object(
            map.entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
        Value::Record(rec) => Json::Object(
            rec.shape
                .fields
                .iter()
                .zip(&rec.fields)
                .map(|(f, v)| (f.name.clone(), value_to_json(v)))
                .collect(),
        ),
        Value::Optional(opt) => opt
            .value
            .as_deref()
            .map(value_to_json)
            .unwrap_or(Json::Null),
        Value::Any(slot) => slot.as_deref().map(value_to_json).unwrap_or(Json::Null),
    }
}

/// Encode an extraction node for tooling output.
pub fn node_to_json(node: &Node) -> Json {
    json!({
        "name": node.name,
        "path": node.path,
        "kind": node.kind.as_str(),
        "value": node.value.as_ref().map(value_to_json),
        "children": node.children.iter().map(node_to_json).collect::<Vec<_>>(),
    })
}

/// Encode a change record for tooling output.
pub fn change_to_json(change: &Change) -> Json {
    json!({
        "path": change.path,
        "kind": change.kind.as_str(),
        "new": value_to_json(&change.new),
        "old": change.old.as_ref().map(value_to_json),
    })
}
