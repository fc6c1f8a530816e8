//! Mutation: apply `(path, value)` writes onto a destination value.
//!
//! The destination is mutated in place. Missing intermediate containers
//! are materialized from declared shapes; an untyped slot resolves its own
//! shape from the first segment that touches it, an index segment turning
//! it into a sequence and any other segment into a map. That resolution
//! happens once per slot.

use valtree_segment::{classify, split, Segment};

use crate::shape::Shape;
use crate::types::{Change, Kind, Node, SetError, Write};
use crate::value::{MapValue, SeqValue, Value};

/// Write `value` at `path`, materializing missing containers.
///
/// Returns the change record carrying the value that occupied the slot
/// before the write; `old` is `None` when the slot was freshly
/// materialized.
///
/// # Example
///
/// ```
/// use valtree::{get, set, Value};
///
/// let mut doc = Value::Any(None);
/// let change = set(&mut doc, "a.b.0", 3).unwrap();
/// assert_eq!(change.old, None);
/// assert_eq!(get(&doc, "a.b.0"), Some(&Value::Int(3)));
/// ```
pub fn set(dst: &mut Value, path: &str, value: impl Into<Value>) -> Result<Change, SetError> {
    let value = value.into();
    let new = value.clone();
    let old = set_in(dst, path, value)?;
    Ok(Change {
        path: path.to_string(),
        kind: new.kind(),
        new,
        old,
    })
}

/// Apply writes in order.
///
/// Later writes observe earlier writes' materialized structure. One result
/// per write, in request order; a failed write does not roll back or stop
/// the rest of the batch.
pub fn set_many(
    dst: &mut Value,
    writes: impl IntoIterator<Item = Write>,
) -> Vec<Result<Change, SetError>> {
    writes
        .into_iter()
        .map(|w| set(dst, &w.path, w.value))
        .collect()
}

/// Apply every present-valued leaf of an extracted tree, depth-first.
///
/// Absent leaves are skipped: a zero-valued destination already has
/// nothing at those paths.
pub fn set_tree(dst: &mut Value, tree: &Node) -> Vec<Result<Change, SetError>> {
    let mut out = Vec::new();
    apply_leaves(dst, tree, &mut out);
    out
}

fn apply_leaves(dst: &mut Value, node: &Node, out: &mut Vec<Result<Change, SetError>>) {
    if node.children.is_empty() {
        if let Some(value) = &node.value {
            out.push(set(dst, &node.path, value.clone()));
        }
        return;
    }
    for child in &node.children {
        apply_leaves(dst, child, out);
    }
}

/// Recursive step: `dst` occupies the slot the remaining `path` addresses.
/// Returns the value that occupied the terminal slot, bubbled up from the
/// terminal write.
fn set_in(dst: &mut Value, path: &str, value: Value) -> Result<Option<Value>, SetError> {
    if path.is_empty() {
        return Ok(replace(dst, value));
    }
    let (head, rest) = split(path);
    match dst {
        Value::Optional(opt) => match &mut opt.value {
            Some(inner) => set_in(inner, path, value),
            None => {
                let mut inner = Box::new(opt.target.zero());
                set_in(&mut inner, path, value)?;
                opt.value = Some(inner);
                // the slot did not exist before this write
                Ok(None)
            }
        },
        Value::Any(slot) => match slot {
            None => {
                let container = match classify(head)? {
                    Segment::Index(_) => Value::Seq(SeqValue::new(Shape::Any)),
                    Segment::Key(_) => Value::Map(MapValue::new(Shape::Any)),
                };
                let inner = slot.insert(Box::new(container));
                set_in(inner, path, value)
            }
            Some(inner) => {
                if inner.is_scalar() {
                    return Err(SetError::TypeMismatch {
                        segment: head.to_string(),
                        found: inner.kind(),
                    });
                }
                set_in(inner, path, value)
            }
        },
        Value::Seq(seq) => {
            let n = match classify(head)? {
                Segment::Index(n) => n,
                Segment::Key(_) => {
                    return Err(SetError::TypeMismatch {
                        segment: head.to_string(),
                        found: Kind::Seq,
                    })
                }
            };
            if n >= seq.items.len() {
                // grow to n+1; existing elements keep their positions
                seq.items.resize(n + 1, seq.elem.zero());
            }
            set_in(&mut seq.items[n], rest, value)
        }
        Value::Map(map) => {
            // map entries are not addressable in place: read the entry out
            // (or start from the declared zero), mutate the owned copy,
            // write it back under the same key
            let (mut entry, existed) = match map.entries.get(head) {
                Some(entry) => (entry.clone(), true),
                None => (map.values.zero(), false),
            };
            let result = set_in(&mut entry, rest, value);
            map.entries.insert(head.to_string(), entry);
            let old = result?;
            Ok(if existed { old } else { None })
        }
        Value::Record(rec) => match classify(head)? {
            Segment::Index(_) => Err(SetError::TypeMismatch {
                segment: head.to_string(),
                found: Kind::Record,
            }),
            Segment::Key(name) => match rec.shape.field_index(name) {
                Some(i) => set_in(&mut rec.fields[i], rest, value),
                None => Err(SetError::FieldNotFound {
                    record: rec.shape.name.clone(),
                    field: name.to_string(),
                }),
            },
        },
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
            Err(SetError::TypeMismatch {
                segment: head.to_string(),
                found: dst.kind(),
            })
        }
    }
}

/// Terminal write: capture the occupant and replace it.
///
/// Optional and untyped slots keep their slot identity: the new value
/// becomes their held instance instead of overwriting the wrapper.
fn replace(dst: &mut Value, value: Value) -> Option<Value> {
    match dst {
        Value::Optional(opt) => {
            let old = opt.value.take().map(|b| *b);
            opt.value = Some(Box::new(value));
            old
        }
        Value::Any(slot) => {
            let old = slot.take().map(|b| *b);
            *slot = Some(Box::new(value));
            old
        }
        _ => Some(std::mem::replace(dst, value)),
    }
}
