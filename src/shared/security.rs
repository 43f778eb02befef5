use crate::shared::Result;
use std::fs::Metadata;
use std::path::Path;

/// Maximum size of a single SBOM document (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates already-fetched (non-following) metadata of a document file
///
/// Callers obtain `metadata` with `symlink_metadata`, either from `std::fs`
/// or `tokio::fs`, so this check works for both sync and async readers.
///
/// # Errors
/// Returns an error if the path is a symbolic link, is not a regular file,
/// or exceeds `MAX_FILE_SIZE`.
pub fn validate_document_metadata(metadata: &Metadata, path: &Path) -> Result<()> {
    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Arguments
/// * `file_size` - The size of the file in bytes
/// * `path` - The path to the file (for error messages)
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
