//! Read-only dotted-path lookup.

use valtree_segment::{classify, split, Segment};

use crate::value::Value;

/// Resolve `path` against `value` without mutating.
///
/// Optional and untyped layers are descended transparently whenever
/// present, including at the terminal position, so the result is always a
/// concrete value. An absent layer, a missing entry, an out-of-bounds
/// index, or a malformed index resolves to `None` — lookup has no error
/// taxonomy.
///
/// # Example
///
/// ```
/// use valtree::{get, set, Value};
///
/// let mut doc = Value::Any(None);
/// set(&mut doc, "a.b.1", 3).unwrap();
/// assert_eq!(get(&doc, "a.b.1"), Some(&Value::Int(3)));
/// assert_eq!(get(&doc, "a.b.0"), None); // absent fill
/// assert_eq!(get(&doc, "a.c"), None);
/// ```
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    match value {
        Value::Optional(opt) => return get(opt.value.as_deref()?, path),
        Value::Any(slot) => return get(slot.as_deref()?, path),
        _ => {}
    }
    if path.is_empty() {
        return Some(value);
    }
    let (head, rest) = split(path);
    match value {
        Value::Seq(seq) => match classify(head).ok()? {
            Segment::Index(n) => get(seq.items.get(n)?, rest),
            Segment::Key(_) => None,
        },
        Value::Map(map) => get(map.entries.get(head)?, rest),
        Value::Record(rec) => get(rec.field(head)?, rest),
        _ => None,
    }
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    match value {
        Value::Optional(opt) => return get_mut(opt.value.as_deref_mut()?, path),
        Value::Any(slot) => return get_mut(slot.as_deref_mut()?, path),
        _ => {}
    }
    if path.is_empty() {
        return Some(value);
    }
    let (head, rest) = split(path);
    match value {
        Value::Seq(seq) => match classify(head).ok()? {
            Segment::Index(n) => get_mut(seq.items.get_mut(n)?, rest),
            Segment::Key(_) => None,
        },
        Value::Map(map) => get_mut(map.entries.get_mut(head)?, rest),
        Value::Record(rec) => get_mut(rec.field_mut(head)?, rest),
        _ => None,
    }
}
