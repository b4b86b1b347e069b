use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::types::{LinkIndex, LinkOccurrence};

/// The two surface syntaxes recognized as internal links. Both patterns
/// anchor on the `/xx/` locale prefix, which is what separates internal
/// page links from external URLs and bare fragments.
pub struct LinkPatterns {
    /// `href="/xx/..."` or `href='/xx/...'` inside inline HTML.
    html: Regex,
    /// `[label](/xx/...)` markdown links.
    markdown: Regex,
}

impl LinkPatterns {
    /// Compile both link patterns.
    ///
    /// # Panics
    ///
    /// Panics if a hardcoded pattern is invalid (compile-time invariant).
    pub fn compile() -> Self {
        Self {
            html: Regex::new(r#"href=["'](/[a-z]{2}/[^"']+)["']"#).expect("valid regex"),
            markdown: Regex::new(r"\[([^\]]+)\]\((/[a-z]{2}/[^)]+)\)").expect("valid regex"),
        }
    }
}

/// Recursively collect all `.mdx` files under `root`.
///
/// Hidden directories (leading dot) are pruned from traversal entirely.
/// Traversal errors are suppressed: an unreadable or missing root yields an
/// empty list and the run proceeds to report zero files.
pub fn discover_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_directory(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "mdx"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Whether a traversal entry is a directory with a leading-dot name.
fn is_hidden_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

/// Result of scanning the whole corpus.
pub struct ScanOutcome {
    /// One line per file that could not be read or decoded, in scan order.
    pub diagnostics: Vec<String>,
    /// Every unique link mapped to all of its occurrences.
    pub index: LinkIndex,
}

/// Scan every discovered file and build the link index: each unique link
/// string mapped to all of its occurrences, occurrences in file order.
///
/// A file that cannot be read or decoded as UTF-8 contributes zero links
/// and one diagnostic; the remaining files are still scanned.
pub fn build_index(root: &Path, files: &[PathBuf]) -> ScanOutcome {
    let patterns = LinkPatterns::compile();
    let mut outcome = ScanOutcome {
        diagnostics: Vec::new(),
        index: LinkIndex::new(),
    };

    for path in files {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                outcome.diagnostics.push(format!("Error reading {}: {e}", path.display()));
                continue;
            },
        };
        let relative_source = path.strip_prefix(root).unwrap_or(path);
        extract_links(&content, relative_source, &patterns, &mut outcome.index);
    }

    outcome
}

/// Extract all internal links from one file's content into the index.
/// Matching is strictly line-by-line: markup spanning lines is not detected.
pub fn extract_links(content: &str, source: &Path, patterns: &LinkPatterns, index: &mut LinkIndex) {
    for (line_idx, line) in content.lines().enumerate() {
        let line_number = u32::try_from(line_idx).unwrap_or(u32::MAX).saturating_add(1);
        extract_links_from_line(line, source, line_number, patterns, index);
    }
}

/// Extract links from a single line. Both syntaxes may match several times
/// on the same line and are recorded independently.
fn extract_links_from_line(
    line: &str,
    source: &Path,
    line_number: u32,
    patterns: &LinkPatterns,
    index: &mut LinkIndex,
) {
    for cap in patterns.markdown.captures_iter(line) {
        record_link(&cap[2], source, line_number, index);
    }
    for cap in patterns.html.captures_iter(line) {
        record_link(&cap[1], source, line_number, index);
    }
}

/// Strip any `#fragment` and record one occurrence of the link.
/// Fragment identifiers are not separately validated.
fn record_link(raw: &str, source: &Path, line_number: u32, index: &mut LinkIndex) {
    let link = match raw.split_once('#') {
        Some((page, _fragment)) => page,
        None => raw,
    };
    index.entry(link.to_string()).or_default().push(LinkOccurrence {
        file: source.to_path_buf(),
        line: line_number,
    });
}
