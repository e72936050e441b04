use std::path::{Path, PathBuf};

/// Directory holding the running executable, or `.` when it can't be resolved.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve `file_name` against `base_dir`, keeping absolute names untouched.
pub fn resolve_config_path(base_dir: &Path, file_name: &str) -> PathBuf {
    let name = Path::new(file_name);
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        base_dir.join(name)
    }
}

/// Path of a config file stored next to the executable.
pub fn beside_executable(file_name: &str) -> PathBuf {
    resolve_config_path(&executable_dir(), file_name)
}
