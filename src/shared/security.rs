use std::fs::{self, Metadata};
use std::path::Path;

/// Maximum cache file size (10 MB)
pub const MAX_CACHE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Checks a file we are about to read back in
///
/// `symlink_metadata()` is used so that a link is seen as a link rather than
/// as its target. The returned reason is meant to be wrapped in the caller's
/// own error variant.
///
/// # Errors
/// Returns a reason if the path cannot be inspected, is a symbolic link, is
/// not a regular file, or is larger than `max_size` bytes.
pub fn inspect_regular_file(path: &Path, max_size: u64) -> Result<Metadata, String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| e.to_string())?;

    if metadata.is_symlink() {
        return Err(format!(
            "Security: {} is a symbolic link. Symbolic links are not followed.",
            path.display()
        ));
    }

    if !metadata.is_file() {
        return Err(format!("{} is not a regular file", path.display()));
    }

    if metadata.len() > max_size {
        return Err(format!(
            "Security: {} is too large ({} bytes, limit {} bytes)",
            path.display(),
            metadata.len(),
            max_size
        ));
    }

    Ok(metadata)
}

/// Refuses to write through a symbolic link
///
/// A path that does not exist yet passes.
pub fn refuse_symlink(path: &Path) -> Result<(), String> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(format!(
            "Security: {} is a symbolic link. Refusing to write through it.",
            path.display()
        )),
        _ => Ok(()),
    }
}
