//! Path helpers shared by the tree builder and content resolver.

use std::path::{Component, Path, PathBuf};

/// Extension of a bare name including the leading dot, or `""`.
///
/// Dotfiles such as `.gitignore` have no extension.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Final component of a path, or `""` when there is none.
pub fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Join a child name onto a directory, dropping `.` components so that a
/// root of `.` yields `src/main.rs` rather than `./src/main.rs`.
pub fn child_path(dir: &Path, name: &str) -> PathBuf {
    let mut joined: PathBuf = dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    joined.push(name);
    joined
}

/// Lossy string form of a path for the wire.
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
