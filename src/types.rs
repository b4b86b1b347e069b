/// Core domain types for links, occurrences, and broken-link records.
use std::collections::BTreeMap;
use std::path::PathBuf;

/// All unique link strings found in the corpus, each mapped to every place
/// it occurs. `BTreeMap` keys iterate lexicographically, which is what makes
/// report output deterministic; occurrences keep insertion order.
pub type LinkIndex = BTreeMap<String, Vec<LinkOccurrence>>;

/// One occurrence of a broken link, materialized per originating location.
/// All occurrences of the same link string break together since resolution
/// depends only on the link, never on where it was referenced from.
/// Derived ordering is (file, line, link), which is exactly the report
/// order: files lexicographic, occurrences by ascending line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct BrokenLink {
    /// MDX file containing the broken reference, relative to the root.
    pub file: PathBuf,
    /// One-based line number of the occurrence.
    pub line: u32,
    /// The link string as written, fragment already stripped.
    pub link: String,
}

/// Where a link string was found: one (file, line) sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    /// MDX file the link appeared in, relative to the root.
    pub file: PathBuf,
    /// One-based line number within that file.
    pub line: u32,
}
