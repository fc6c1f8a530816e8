//! Dotted-path segmentation.
//!
//! A path addresses a slot inside a composite value as `.`-separated
//! segments, e.g. `addresses.0.street`. Each segment is either an **index**
//! (parses entirely as a base-10 non-negative integer) or a **key** (any
//! other string). There is no escaping syntax, so keys containing `.` are
//! not representable. The empty path addresses the value itself.
//!
//! # Example
//!
//! ```
//! use valtree_segment::{classify, split, Segment};
//!
//! assert_eq!(split("addresses.0.street"), ("addresses", "0.street"));
//! assert_eq!(classify("0"), Ok(Segment::Index(0)));
//! assert_eq!(classify("street"), Ok(Segment::Key("street")));
//! ```

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// An all-digit segment that does not fit the index type.
    #[error("index segment out of range: `{0}`")]
    IndexOutOfRange(String),
}

/// A classified path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Element position in a sequence.
    Index(usize),
    /// Entry key in a map, or field name in a record.
    Key(&'a str),
}

/// Split a path on the first `.`.
///
/// If no `.` is present, the head is the whole path and the rest is empty.
///
/// # Example
///
/// ```
/// use valtree_segment::split;
///
/// assert_eq!(split("a.b.c"), ("a", "b.c"));
/// assert_eq!(split("a"), ("a", ""));
/// assert_eq!(split(""), ("", ""));
/// ```
pub fn split(path: &str) -> (&str, &str) {
    match path.split_once('.') {
        Some((head, rest)) => (head, rest),
        None => (path, ""),
    }
}

/// Whether a segment classifies as an index: non-empty, all ASCII digits.
///
/// Leading zeros are allowed (`"01"` is index 1).
pub fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Classify a segment as an index or a key.
///
/// An all-digit segment that overflows the index type is an error, never a
/// key and never a clamped index.
///
/// # Example
///
/// ```
/// use valtree_segment::{classify, Segment, SegmentError};
///
/// assert_eq!(classify("12"), Ok(Segment::Index(12)));
/// assert_eq!(classify("name"), Ok(Segment::Key("name")));
/// assert_eq!(classify("-1"), Ok(Segment::Key("-1")));
/// assert!(matches!(
///     classify("99999999999999999999999999"),
///     Err(SegmentError::IndexOutOfRange(_))
/// ));
/// ```
pub fn classify(segment: &str) -> Result<Segment<'_>, SegmentError> {
    if is_index(segment) {
        segment
            .parse()
            .map(Segment::Index)
            .map_err(|_| SegmentError::IndexOutOfRange(segment.to_string()))
    } else {
        Ok(Segment::Key(segment))
    }
}

/// Join a segment onto a path.
///
/// Joining onto the empty path yields the bare segment.
///
/// # Example
///
/// ```
/// use valtree_segment::join;
///
/// assert_eq!(join("", "a"), "a");
/// assert_eq!(join("a", "0"), "a.0");
/// ```
pub fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

/// Iterate over the raw segments of a path, left to right.
///
/// The empty path yields nothing.
pub fn segments(path: &str) -> Segments<'_> {
    Segments { rest: path }
}

pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (head, rest) = split(self.rest);
        self.rest = rest;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_first_dot_only() {
        assert_eq!(split("a.b.c"), ("a", "b.c"));
        assert_eq!(split("0.street"), ("0", "street"));
        assert_eq!(split("name"), ("name", ""));
        assert_eq!(split(""), ("", ""));
        assert_eq!(split(".a"), ("", "a"));
    }

    #[test]
    fn classify_indices() {
        assert_eq!(classify("0"), Ok(Segment::Index(0)));
        assert_eq!(classify("42"), Ok(Segment::Index(42)));
        // leading zeros are tolerated
        assert_eq!(classify("007"), Ok(Segment::Index(7)));
    }

    #[test]
    fn classify_keys() {
        assert_eq!(classify("street"), Ok(Segment::Key("street")));
        assert_eq!(classify(""), Ok(Segment::Key("")));
        assert_eq!(classify("-1"), Ok(Segment::Key("-1")));
        assert_eq!(classify("1.5"), Ok(Segment::Key("1.5")));
        assert_eq!(classify("0x10"), Ok(Segment::Key("0x10")));
    }

    #[test]
    fn classify_overflow_is_an_error() {
        let digits = "9".repeat(40);
        assert_eq!(
            classify(&digits),
            Err(SegmentError::IndexOutOfRange(digits.clone()))
        );
    }

    #[test]
    fn is_index_predicate() {
        assert!(is_index("0"));
        assert!(is_index("123"));
        assert!(!is_index(""));
        assert!(!is_index("a1"));
        assert!(!is_index("-1"));
    }

    #[test]
    fn join_paths() {
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a", "b"), "a.b");
        assert_eq!(join("a.b", "0"), "a.b.0");
    }

    #[test]
    fn segments_iteration() {
        let got: Vec<&str> = segments("a.0.b").collect();
        assert_eq!(got, vec!["a", "0", "b"]);
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("solo").collect::<Vec<_>>(), vec!["solo"]);
    }
}
