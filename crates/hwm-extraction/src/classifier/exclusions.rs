//! Directories whose contents never contribute to a manifest.
//!
//! Version control metadata, dependency trees, virtual environments,
//! editor state, and caches.

/// Default directory names to exclude. A path segment that contains one
/// of these (case-insensitively) excludes the path.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    // Package managers
    "node_modules",
    "bower_components",
    // Python
    "__pycache__",
    "venv",
    ".venv",
    "env",
    "virtualenv",
    "site-packages",
    ".eggs",
    ".tox",
    ".pytest_cache",
    ".mypy_cache",
    // IDE/Editor
    ".idea",
    ".vscode",
    ".vs",
    // Caches
    ".cache",
    ".ipynb_checkpoints",
    // OS noise
    "__macosx",
    ".ds_store",
];

/// Whether any segment of `path` contains an excluded directory name.
///
/// `excluded` must already be lower-cased.
pub(crate) fn path_has_excluded_segment(path: &str, excluded: &[String]) -> bool {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .any(|segment| {
            let segment = segment.to_lowercase();
            excluded.iter().any(|dir| segment.contains(dir.as_str()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_excludes_git_and_node_modules() {
        let dirs = defaults();
        assert!(path_has_excluded_segment(".git/config", &dirs));
        assert!(path_has_excluded_segment("web/node_modules/react/index.js", &dirs));
        assert!(path_has_excluded_segment("tools\\venv\\lib\\site.py", &dirs));
    }

    #[test]
    fn test_segment_match_is_case_insensitive() {
        assert!(path_has_excluded_segment("Node_Modules/pkg/a.js", &defaults()));
    }

    #[test]
    fn test_segments_containing_an_excluded_name_are_excluded() {
        let dirs = defaults();
        assert!(path_has_excluded_segment(".venv-old/lib.py", &dirs));
        assert!(path_has_excluded_segment("node_modules_cache/x.js", &dirs));
        assert!(path_has_excluded_segment("py/my_venv/site.py", &dirs));
        assert!(path_has_excluded_segment("docs/.github-pages/index.md", &dirs));
    }

    #[test]
    fn test_unrelated_paths_are_kept() {
        let dirs = defaults();
        assert!(!path_has_excluded_segment("cad/enclosure.step", &dirs));
        assert!(!path_has_excluded_segment("docs/assembly.md", &dirs));
        assert!(!path_has_excluded_segment("README.md", &dirs));
    }
}
