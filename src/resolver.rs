use std::path::{Path, PathBuf};

/// Map a link string to the file path it should denote.
///
/// Strips the leading slash, appends the `.mdx` extension unless the link
/// already carries it, and joins onto the root. Pure and total: every
/// syntactically valid link yields exactly one candidate path, with no
/// search over alternate extensions or index-file conventions.
pub fn resolve(root: &Path, link: &str) -> PathBuf {
    let relative = link.strip_prefix('/').unwrap_or(link);
    if relative.ends_with(".mdx") {
        root.join(relative)
    } else {
        root.join(format!("{relative}.mdx"))
    }
}

/// Whether a link's resolved target exists on disk. File or directory both
/// count; a path that cannot be stat-ed (e.g. permission denied) reads as
/// missing, so such links surface as broken rather than being skipped.
pub fn target_exists(root: &Path, link: &str) -> bool {
    resolve(root, link).exists()
}
