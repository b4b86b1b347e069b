use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::types::BrokenLink;

/// Width of the `=` rule framing the broken-link listing.
const RULE_WIDTH: usize = 80;

/// Everything the reporter needs: the scan counts plus the broken set,
/// already sorted into report order (file, then line).
#[derive(Debug, serde::Serialize)]
pub struct Report {
    /// Every broken occurrence, sorted by (file, line, link).
    pub broken: Vec<BrokenLink>,
    /// How many `.mdx` files were scanned.
    pub files_scanned: usize,
    /// How many unique link strings were found.
    pub unique_links: usize,
}

impl Report {
    /// Whether the run should exit with the broken-links status.
    pub fn has_broken_links(&self) -> bool {
        !self.broken.is_empty()
    }
}

/// Render the final section of the text report: either the success line or
/// the framed per-file listing of broken occurrences. Output is a pure
/// function of the report, so re-running on unchanged input is
/// byte-identical.
pub fn render_summary(report: &Report) -> String {
    if report.broken.is_empty() {
        return "[OK] No broken links found!\n".to_string();
    }

    let total = report.broken.len();
    let mut out = format!("[ERROR] Found {total} broken link(s):\n\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for (file, entries) in group_by_file(&report.broken) {
        let _ = write!(out, "\n[FILE] {}\n", file.display());
        for entry in entries {
            let _ = writeln!(out, "   Line {:4}: {}", entry.line, entry.link);
        }
    }

    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    let _ = write!(out, "\n\nTotal broken links: {total}\n");
    out
}

/// Group broken occurrences by originating file. Input is already in
/// (file, line) order, so each file's entries come out line-sorted.
fn group_by_file(broken: &[BrokenLink]) -> BTreeMap<&Path, Vec<&BrokenLink>> {
    let mut by_file: BTreeMap<&Path, Vec<&BrokenLink>> = BTreeMap::new();
    for entry in broken {
        by_file.entry(entry.file.as_path()).or_default().push(entry);
    }
    by_file
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn broken(file: &str, line: u32, link: &str) -> BrokenLink {
        BrokenLink {
            file: PathBuf::from(file),
            line,
            link: link.to_string(),
        }
    }

    #[test]
    fn clean_report_is_a_single_success_line() {
        let report = Report {
            broken: Vec::new(),
            files_scanned: 4,
            unique_links: 9,
        };
        assert_eq!(render_summary(&report), "[OK] No broken links found!\n");
    }

    #[test]
    fn broken_report_groups_by_file_and_sorts_lines() {
        let report = Report {
            broken: vec![
                broken("en/intro.mdx", 3, "/en/missing"),
                broken("en/intro.mdx", 12, "/en/gone"),
                broken("ja/setup.mdx", 7, "/en/missing"),
            ],
            files_scanned: 3,
            unique_links: 5,
        };

        let rule = "=".repeat(80);
        let expected = format!(
            "[ERROR] Found 3 broken link(s):\n\n{rule}\n\n[FILE] en/intro.mdx\n   Line    3: /en/missing\n   Line   12: /en/gone\n\n[FILE] ja/setup.mdx\n   Line    7: /en/missing\n\n{rule}\n\nTotal broken links: 3\n"
        );
        assert_eq!(render_summary(&report), expected);
    }

    #[test]
    fn json_report_carries_counts_and_occurrences() {
        let report = Report {
            broken: vec![broken("en/intro.mdx", 3, "/en/missing")],
            files_scanned: 2,
            unique_links: 2,
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(value["files_scanned"], 2);
        assert_eq!(value["unique_links"], 2);
        assert_eq!(value["broken"][0]["file"], "en/intro.mdx");
        assert_eq!(value["broken"][0]["line"], 3);
        assert_eq!(value["broken"][0]["link"], "/en/missing");
    }
}
