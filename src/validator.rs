use std::path::Path;

/// Directory suffix identifying a macOS application bundle.
pub const APP_BUNDLE_SUFFIX: &str = ".app";

/// Returns `true` when `path` can be bound to a slot.
///
/// A path is openable when it points at an existing regular file, or at an
/// existing directory whose name ends in [`APP_BUNDLE_SUFFIX`]. Any error while
/// querying the filesystem counts as "not openable".
pub fn is_openable(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };
    if meta.is_file() {
        return true;
    }
    meta.is_dir() && is_app_bundle_name(path)
}

fn is_app_bundle_name(path: &str) -> bool {
    path.trim_end_matches(['/', '\\']).ends_with(APP_BUNDLE_SUFFIX)
}

/// Final component of `path`, used as the slot label.
pub fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
