//! Shared path helpers used by configuration and CLI resolution.

use std::path::{Path, PathBuf};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if is_nonempty_absolute(path) {
        return path.to_path_buf();
    }
    base.join(path)
}
