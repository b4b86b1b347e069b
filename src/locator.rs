use std::path::{Path, PathBuf};

/// Pick the documentation root for a run starting at `base`.
///
/// Layout probes run in a fixed priority order, first match wins:
/// a `docs` subdirectory, then the `ja`/`en` locale pair marking `base`
/// itself as the root; both probes repeat one level up. An unrecognized
/// layout is not an error — the base directory is used as-is and the scan
/// simply finds zero files.
pub fn locate_root(base: &Path) -> PathBuf {
    let candidates = [Some(base), base.parent()];
    for dir in candidates.into_iter().flatten() {
        if let Some(root) = probe_layout(dir) {
            return root;
        }
    }
    base.to_path_buf()
}

/// Probe one directory for a recognized documentation layout.
fn probe_layout(dir: &Path) -> Option<PathBuf> {
    let docs = dir.join("docs");
    if docs.exists() {
        return Some(docs);
    }
    if dir.join("ja").exists() && dir.join("en").exists() {
        return Some(dir.to_path_buf());
    }
    None
}
