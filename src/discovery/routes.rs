//! Route entries from an Expo Router `app/` directory.

use std::path::Path;

use walkdir::WalkDir;

use crate::discovery::{has_extension, DiscoveryError};

const PLATFORM_SUFFIXES: &[&str] = &[".ios", ".android", ".web", ".native"];

/// Walk `app_dir` and return the sorted, deduplicated route entries it defines.
pub fn discover_routes(app_dir: &Path, extensions: &[String]) -> Result<Vec<String>, DiscoveryError> {
    if !app_dir.is_dir() {
        return Err(DiscoveryError::MissingDir(app_dir.to_path_buf()));
    }

    let mut routes = Vec::new();
    for entry in WalkDir::new(app_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(app_dir) else {
            continue;
        };
        if let Some(route) = route_for_file(relative) {
            tracing::trace!(file = %relative.display(), route = %route, "Discovered route");
            routes.push(route);
        }
    }

    routes.sort();
    routes.dedup();
    Ok(routes)
}

/// Route entry for a file path relative to `app/`.
///
/// - `index` maps onto its directory (`app/index.tsx` is `/`)
/// - `_layout`, `_`-prefixed and `+`-prefixed files are not screens
/// - `+api` files are server routes
/// - platform variants (`.ios`, `.web`, ...) collapse onto one route
pub fn route_for_file(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?.to_str()?;
    let stem = PLATFORM_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
        .unwrap_or(stem);

    if stem.starts_with('_') || stem.starts_with('+') || stem.ends_with("+api") {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            segments.push(component.as_os_str().to_str()?);
        }
    }
    if stem != "index" {
        segments.push(stem);
    }

    if segments.is_empty() {
        Some("/".to_string())
    } else {
        Some(segments.join("/"))
    }
}
