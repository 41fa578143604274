//! Source files to scan for navigation requests.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::discovery::{has_extension, DiscoveryError};

/// Directories never worth scanning.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", ".expo", "dist", "build", "target"];

/// A file to scan and the screen identifier its requests originate from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub origin: String,
}

/// Collect scannable files under each of `dirs`.
///
/// Origins are the path relative to the scanned directory, extension
/// dropped. For the app directory this is the screen path, e.g.
/// `(auth)/login`; for other directories it keeps the directory name, e.g.
/// `components/TipButton`.
pub fn collect_sources(
    dirs: &[PathBuf],
    app_dir: Option<&Path>,
    extensions: &[String],
) -> Result<Vec<SourceFile>, DiscoveryError> {
    let mut files = Vec::new();
    for dir in dirs {
        if !dir.is_dir() {
            return Err(DiscoveryError::MissingDir(dir.clone()));
        }
        let is_app_dir = app_dir.is_some_and(|app| app == dir.as_path());

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped(e));
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(dir) else {
                continue;
            };
            let mut origin = relative.with_extension("").to_string_lossy().replace('\\', "/");
            if !is_app_dir {
                if let Some(name) = dir.file_name() {
                    origin = format!("{}/{origin}", name.to_string_lossy());
                }
            }
            files.push(SourceFile {
                path: entry.path().to_path_buf(),
                origin,
            });
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);
    Ok(files)
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
