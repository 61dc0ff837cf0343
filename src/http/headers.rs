//! Ordered header multimap and mutation-disposition rules.
//!
//! # Responsibilities
//! - Store headers as an ordered list of (name, value) pairs
//! - Match names case-insensitively, preserve case and order as given
//! - Decide set-vs-append semantics for a header name
//!
//! # Design Decisions
//! - A name may repeat (`Set-Cookie` is the motivating case)
//! - The disposition is a pure function of the name only, so it can be
//!   tested independently of the streaming logic
//! - No validation or normalization of values; that is an upstream concern

/// Ordered collection of header pairs.
///
/// Iteration yields pairs in insertion order. Matching is case-insensitive
/// but the stored name keeps the case it was appended with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a pair at the end. Existing pairs under the same name are kept.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Iterate all pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// All values stored under `name` (case-insensitive), in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Total number of pairs, repeated names counted individually.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no pair has been appended.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How a header pair must be written to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDisposition {
    /// Write via the sink's `set` primitive, replacing prior values.
    Set,
    /// Write via the sink's `append` primitive, accumulating values.
    Append,
}

/// Disposition for a header name. Pure function of the name alone.
///
/// `set-cookie` (any case) goes through `set`: the sink's set primitive is
/// the intended way to write a cookie header at all. Every other name
/// accumulates via `append`. Consequence for responses carrying *several*
/// `Set-Cookie` entries: each entry is written with `set`, so on a sink
/// whose `set` replaces, only the last cookie survives. Callers that need
/// multiple cookies on such a sink must combine them upstream; this crate
/// does not second-guess the sink's semantics.
pub fn disposition(name: &str) -> HeaderDisposition {
    if name.eq_ignore_ascii_case("set-cookie") {
        HeaderDisposition::Set
    } else {
        HeaderDisposition::Append
    }
}
