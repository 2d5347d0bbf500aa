//! Path expansion
//!
//! Turns user-typed paths into absolute, lexically normalized paths:
//! a leading `~` becomes the home directory and `.`/`..` components are
//! folded without touching the filesystem.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Home directory from `HOME`, or `USERPROFILE` on Windows-like setups.
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .or_else(|| env::var_os("USERPROFILE").filter(|h| !h.is_empty()))
        .map(PathBuf::from)
}

/// Expand `~`, make the path absolute against the current directory, and
/// normalize `.` and `..` lexically.
///
/// An empty path is returned unchanged. If the home directory or current
/// directory cannot be determined, the path is left relative.
pub fn expand_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }

    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };

    normalize(&absolute)
}

/// Fold `.` and `..` components without consulting the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
