use crate::core::{has_numeric_prefix, sort_command_files, CommandFile, Error, Result};
use std::path::Path;
use tracing::debug;

/// List the numbered entries of `dir` in processing order
///
/// Entries whose name does not start with a digit are left out without
/// comment. So are names that are not valid UTF-8, since they cannot carry
/// a readable prefix.
pub async fn discover_command_files(dir: &Path) -> Result<Vec<CommandFile>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|source| Error::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| Error::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?
    {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(entry = ?file_name, "ignoring entry with non UTF-8 name");
            continue;
        };

        if has_numeric_prefix(name) {
            files.push(CommandFile::new(dir, name));
        } else {
            debug!(entry = name, "ignoring entry without numeric prefix");
        }
    }

    sort_command_files(&mut files);
    debug!(dir = %dir.display(), count = files.len(), "discovered command files");
    Ok(files)
}

/// Whether `dir` exists and is a directory (symlinks are followed)
pub async fn directory_exists(dir: &Path) -> bool {
    tokio::fs::metadata(dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
