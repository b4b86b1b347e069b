//! The check pipeline: locate the root, discover files, index links,
//! check each unique link's target, report.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::error::Error;
use crate::locator;
use crate::report::{self, Report};
use crate::resolver;
use crate::scanner;
use crate::types::{BrokenLink, LinkIndex};

/// How the final report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single JSON document on stdout; scan diagnostics go to stderr.
    Json,
    /// Human-readable progress and report on stdout.
    Text,
}

/// Run the full broken-link check.
///
/// With no root override, the documentation root is located from the
/// working directory by the layout heuristic. The exit code is the report
/// contract: success when no link is broken, failure otherwise.
///
/// # Errors
///
/// Returns `Error::Io` if the working directory cannot be determined, or
/// `Error::Json` if JSON rendering fails. Per-file read failures are
/// diagnostics, not errors.
pub fn check(root_override: Option<PathBuf>, format: OutputFormat) -> Result<ExitCode, Error> {
    let root = match root_override {
        Some(dir) => dir,
        None => locator::locate_root(&std::env::current_dir()?),
    };

    if format == OutputFormat::Text {
        println!("Scanning documentation for broken links...\n");
    }

    let files = scanner::discover_files(&root);
    if format == OutputFormat::Text {
        println!("Found {} MDX files to scan\n", files.len());
    }

    let outcome = scanner::build_index(&root, &files);
    for diagnostic in &outcome.diagnostics {
        match format {
            OutputFormat::Json => eprintln!("{diagnostic}"),
            OutputFormat::Text => println!("{diagnostic}"),
        }
    }
    if format == OutputFormat::Text {
        println!("Found {} unique internal links\n", outcome.index.len());
    }

    let report = Report {
        broken: collect_broken_links(&root, &outcome.index),
        files_scanned: files.len(),
        unique_links: outcome.index.len(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report::render_summary(&report)),
    }

    if report.has_broken_links() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Resolve each unique link once and materialize one record per occurrence
/// of every link whose target is missing. The result is sorted into report
/// order, (file, line, link).
fn collect_broken_links(root: &Path, index: &LinkIndex) -> Vec<BrokenLink> {
    let mut broken = Vec::new();
    for (link, occurrences) in index {
        if resolver::target_exists(root, link) {
            continue;
        }
        for occurrence in occurrences {
            broken.push(BrokenLink {
                file: occurrence.file.clone(),
                line: occurrence.line,
                link: link.clone(),
            });
        }
    }
    broken.sort();
    broken
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use crate::types::LinkOccurrence;

    use super::*;

    #[test]
    fn intact_links_are_never_collected() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("en")).unwrap();
        std::fs::write(tmp.path().join("en/intro.mdx"), "x").unwrap();

        let mut index = LinkIndex::new();
        index.insert(
            "/en/intro".to_string(),
            vec![LinkOccurrence {
                file: PathBuf::from("en/other.mdx"),
                line: 2,
            }],
        );

        assert!(collect_broken_links(tmp.path(), &index).is_empty());
    }

    #[test]
    fn every_occurrence_of_a_missing_link_is_collected() {
        let tmp = tempfile::tempdir().unwrap();

        let mut index = LinkIndex::new();
        index.insert(
            "/en/missing".to_string(),
            vec![
                LinkOccurrence {
                    file: PathBuf::from("ja/b.mdx"),
                    line: 9,
                },
                LinkOccurrence {
                    file: PathBuf::from("en/a.mdx"),
                    line: 4,
                },
            ],
        );

        let broken = collect_broken_links(tmp.path(), &index);
        assert_eq!(broken.len(), 2);
        // Sorted into report order regardless of discovery order.
        assert_eq!(broken[0].file, PathBuf::from("en/a.mdx"));
        assert_eq!(broken[1].file, PathBuf::from("ja/b.mdx"));
    }
}
