//! Reference grammar matcher
//!
//! A reference is `vault://<path>@<key>`. The key is one or more ASCII word
//! characters. The path capture is greedy: it runs up to the *last* `@` that
//! is followed by a key, so a path containing `@<word>` cannot be expressed,
//! and two references on one line form a single match whose path spans both.

use kvault_core::{Reference, REFERENCE_SCHEME};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    // vault://path-secret@key
    static ref REFERENCE_REGEX: Regex = Regex::new(&format!(
        r"{}(.+)@([A-Za-z0-9_]+)",
        regex::escape(REFERENCE_SCHEME)
    ))
    .unwrap();
}

/// One reference found in a line, with the byte span it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    pub reference: Reference,
    pub span: Range<usize>,
}

/// Every non-overlapping reference in `line`, left to right
#[must_use]
pub fn find_references(line: &str) -> Vec<ReferenceMatch> {
    REFERENCE_REGEX
        .captures_iter(line)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let path = captures.get(1)?.as_str();
            let key = captures.get(2)?.as_str();
            Some(ReferenceMatch {
                reference: Reference::new(path, key),
                span: whole.range(),
            })
        })
        .collect()
}
