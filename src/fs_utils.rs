//! Capability-scoped file reads.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Reads a UTF-8 file by opening its parent directory as a capability.
///
/// # Errors
///
/// Returns an I/O error when the path has no file name, or when the parent
/// directory or the file cannot be read.
pub(crate) fn read_to_string(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other(format!("path '{path}' must include a file name")))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
