//! `valtree-flatten` — flatten a JSON document into path/value entries.
//!
//! Usage:
//!   valtree-flatten < doc.json
//!
//! The document is read from stdin. One JSON object per childless slot is
//! printed, in depth-first order.

use std::io::{self, Read, Write};

use valtree::codec::{node_to_json, value_from_json};
use valtree::extract_flat;

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc: serde_json::Value = match serde_json::from_str(buf.trim()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let value = value_from_json(&doc);
    let mut out = String::new();
    for node in extract_flat(&value) {
        out.push_str(&node_to_json(&node).to_string());
        out.push('\n');
    }
    io::stdout().write_all(out.as_bytes()).unwrap();
}
