//! Event kind allow-lists
//!
//! Every event family declares a closed `Copy` enum of its wire tags. An
//! untrusted type string is only ever compared against `as_str()` of those
//! variants, so names like `__proto__` or `constructor` are simply unknown.

/// A closed set of wire event tags
pub trait EventKind: Copy + Eq + 'static {
    /// Every tag of the family, in decode order
    const ALL: &'static [Self];

    /// Wire name of this tag
    fn as_str(self) -> &'static str;

    /// Look up an untrusted type string in the allow-list
    fn parse(event_type: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == event_type)
    }

    /// Wire names of every tag in the family
    fn event_types() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }
}

#[cfg(test)]
pub(crate) fn assert_kind_table<K: EventKind + std::fmt::Debug>(expected_len: usize) {
    use std::collections::HashSet;

    assert_eq!(K::ALL.len(), expected_len, "ALL is missing a variant");
    let mut seen = HashSet::new();
    for kind in K::ALL {
        assert!(seen.insert(kind.as_str()), "duplicate tag {}", kind.as_str());
        assert_eq!(K::parse(kind.as_str()), Some(*kind));
    }
    for hostile in ["", "__proto__", "constructor", "toString", "hasOwnProperty"] {
        assert_eq!(K::parse(hostile), None);
    }
}
