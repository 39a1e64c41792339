//! Non-recursive log file discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// List regular files in `dir` whose name ends with `suffix` (case-insensitive),
/// in the order the platform enumerates them.
///
/// Only failure to open the directory itself is an error; entries that cannot
/// be inspected are logged and skipped.
pub fn discover_log_files(dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let suffix = suffix.to_lowercase();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        let name_matches = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
            .unwrap_or(false);

        if name_matches && path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
