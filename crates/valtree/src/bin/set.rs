//! `valtree-set` — apply path assignments to a JSON document.
//!
//! Usage:
//!   valtree-set [--changes] 'path=json-value' [...]
//!
//! The document is read from stdin; empty input starts from an absent
//! root. Assignments apply in argument order. The resulting document is
//! printed, or the change records with `--changes`.

use std::io::{self, Read, Write};

use valtree::codec::{change_to_json, value_from_json, value_to_json};
use valtree::{set, Value};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let changes_only = args.first().map(|a| a == "--changes").unwrap_or(false);
    if changes_only {
        args.remove(0);
    }
    if args.is_empty() {
        eprintln!("Arguments must be `path=json-value` assignments.");
        std::process::exit(1);
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let mut doc = if buf.trim().is_empty() {
        Value::Any(None)
    } else {
        match serde_json::from_str(buf.trim()) {
            Ok(json) => value_from_json(&json),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    };

    let mut out = String::new();
    for arg in &args {
        let Some((path, raw)) = arg.split_once('=') else {
            eprintln!("Bad assignment `{arg}`: expected `path=json-value`.");
            std::process::exit(1);
        };
        let value = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(json) => value_from_json(&json),
            Err(e) => {
                eprintln!("Bad value in `{arg}`: {e}");
                std::process::exit(1);
            }
        };
        match set(&mut doc, path, value) {
            Ok(change) => {
                if changes_only {
                    out.push_str(&change_to_json(&change).to_string());
                    out.push('\n');
                }
            }
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        }
    }

    if !changes_only {
        out = value_to_json(&doc).to_string();
        out.push('\n');
    }
    io::stdout().write_all(out.as_bytes()).unwrap();
}
