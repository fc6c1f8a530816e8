//! valtree — path-addressable traversal and mutation of composite values.
//!
//! Decomposes any [`Value`] into a tree or flat list of
//! `(path, kind, value)` entries, and applies `(path, value)` entries back
//! onto a destination, materializing missing containers along the way and
//! reporting the previous value at each touched path.
//!
//! Paths are `.`-separated; a segment that parses as a non-negative
//! integer addresses a sequence element, anything else addresses a map
//! entry or record field. Declared types are carried as [`Shape`]s, so the
//! mutator knows what to create and the extractor knows what an absent
//! slot would have held.
//!
//! # Example
//!
//! ```
//! use valtree::{extract_flat, set_many, Value, Write};
//!
//! let mut doc = Value::Any(None);
//! set_many(&mut doc, [
//!     Write::new("user.name", "Luke"),
//!     Write::new("user.aliases.0", "Red Five"),
//! ]);
//!
//! let leaves = extract_flat(&doc);
//! assert_eq!(leaves[0].path, "user.name");
//! assert_eq!(leaves[1].path, "user.aliases.0");
//! ```

pub mod apply;
pub mod codec;
pub mod extract;
pub mod get;
pub mod shape;
pub mod types;
pub mod value;

pub use apply::{set, set_many, set_tree};
pub use extract::{extract, extract_flat};
pub use get::{get, get_mut};
pub use shape::{Field, RecordShape, Shape};
pub use types::{Change, Kind, Node, SetError, Write};
pub use value::{MapValue, OptionalValue, RecordValue, SeqValue, Value};
