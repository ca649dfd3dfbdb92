use std::fs;
use std::path::Path;

use super::SiteError;

/// Replaces `dst` with a recursive copy of `src`.
///
/// Any existing `dst` is deleted first. Returns the number of files copied.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::NotFound(src.to_path_buf()));
    }

    if dst.exists() {
        log::info!("Deleting existing directory {}", dst.display());
        fs::remove_dir_all(dst).map_err(SiteError::Io)?;
    }

    let mut copied = 0;
    copy_directory_recursive(src, dst, &mut copied)?;
    Ok(copied)
}

fn copy_directory_recursive(src: &Path, dst: &Path, copied: &mut usize) -> Result<(), SiteError> {
    fs::create_dir_all(dst).map_err(SiteError::Io)?;

    for entry in fs::read_dir(src).map_err(SiteError::Io)? {
        let entry = entry.map_err(SiteError::Io)?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copy_directory_recursive(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(SiteError::Io)?;
            log::info!("Copied {} to {}", from.display(), to.display());
            *copied += 1;
        }
    }

    Ok(())
}
