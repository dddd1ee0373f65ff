//! All-or-nothing file replacement

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::trace;

use crate::error::Result;

/// Writes `path` through a temporary file in the same directory.
///
/// The content only becomes visible at `path` once `write` succeeded and the
/// data reached the disk. On any failure the temporary file is removed and an
/// existing file at `path` is left as it was.
///
/// A replaced file keeps its permissions. A new file gets the mode a plain
/// create would give it (0666 minus the umask on Unix).
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());

    if let Some(dir) = parent {
        fs::create_dir_all(dir)?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let prefix = format!(".{file_name}.");
    let existing_permissions = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask at creation, tempfile would default to 0600
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    // Same directory as the target so persist() is a rename, not a copy
    let mut temp_file = builder.tempfile_in(parent.unwrap_or_else(|| Path::new(".")))?;
    trace!(
        "Writing {} via {}",
        path.display(),
        temp_file.path().display()
    );

    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }

    if let Some(permissions) = existing_permissions {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.as_file_mut().sync_all()?;
    temp_file.persist(path)?;

    trace!("Replaced {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "atomic_write_tests.rs"]
mod tests;
