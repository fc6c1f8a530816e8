//! Extraction: decompose a value into a `(path, kind, value)` tree.

use valtree_segment::join;

use crate::types::{Kind, Node};
use crate::value::Value;

/// Extract the full tree for `value`.
///
/// Total over any value: extraction never fails, absent slots become
/// childless nodes with no value and their declared tag.
///
/// # Example
///
/// ```
/// use valtree::{extract, Kind, Shape, Value};
///
/// let tree = extract(&Shape::optional(Shape::Str).zero());
/// assert_eq!(tree.kind, Kind::Str);
/// assert_eq!(tree.value, None);
/// assert!(tree.children.is_empty());
/// ```
pub fn extract(value: &Value) -> Node {
    node_at(value, "", String::new())
}

/// Extract only the childless slots, depth-first, left to right.
///
/// Names are cleared; the path alone addresses each slot. A root with no
/// children yields itself as the single entry.
///
/// # Example
///
/// ```
/// use valtree::{extract_flat, Kind, Value};
///
/// let leaves = extract_flat(&Value::Int(3));
/// assert_eq!(leaves.len(), 1);
/// assert_eq!(leaves[0].path, "");
/// assert_eq!(leaves[0].kind, Kind::Int);
/// ```
pub fn extract_flat(value: &Value) -> Vec<Node> {
    let mut out = Vec::new();
    collect_leaves(extract(value), &mut out);
    out
}

fn collect_leaves(node: Node, out: &mut Vec<Node>) {
    if node.children.is_empty() {
        out.push(Node {
            name: String::new(),
            ..node
        });
        return;
    }
    for child in node.children {
        collect_leaves(child, out);
    }
}

fn node_at(value: &Value, name: &str, path: String) -> Node {
    match value {
        // present references are transparent: the node inherits the tag,
        // value and children of what they hold
        Value::Optional(opt) => match &opt.value {
            Some(inner) => node_at(inner, name, path),
            None => Node {
                name: name.to_string(),
                path,
                kind: opt.target.kind(),
                value: None,
                children: Vec::new(),
            },
        },
        Value::Any(Some(inner)) => node_at(inner, name, path),
        Value::Any(None) => Node {
            name: name.to_string(),
            path,
            kind: Kind::Any,
            value: None,
            children: Vec::new(),
        },
        scalar @ (Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)) => Node {
            name: name.to_string(),
            path,
            kind: scalar.kind(),
            value: Some(scalar.clone()),
            children: Vec::new(),
        },
        Value::Seq(seq) => {
            let children = seq
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let seg = i.to_string();
                    let child_path = join(&path, &seg);
                    node_at(item, &seg, child_path)
                })
                .collect();
            Node {
                name: name.to_string(),
                path,
                kind: Kind::Seq,
                value: None,
                children,
            }
        }
        Value::Map(map) => {
            let children = map
                .entries
                .iter()
                .map(|(key, item)| node_at(item, key, join(&path, key)))
                .collect();
            Node {
                name: name.to_string(),
                path,
                kind: Kind::Map,
                value: None,
                children,
            }
        }
        Value::Record(rec) => {
            let children = rec
                .shape
                .fields
                .iter()
                .zip(&rec.fields)
                .map(|(field, item)| node_at(item, &field.name, join(&path, &field.name)))
                .collect();
            Node {
                name: name.to_string(),
                path,
                kind: Kind::Record,
                value: None,
                children,
            }
        }
    }
}
