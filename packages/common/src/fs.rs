//! File and executable predicates

use std::path::Path;

use crate::error::{CommonError, Result};

/// True if `path` names an existing regular file (not a directory or device)
#[must_use]
pub fn is_plain_file(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// True if anything exists at `path`
#[must_use]
pub fn is_existing_file(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Check that every named executable can be found on `PATH`
///
/// # Errors
///
/// Returns `CommonError::ExecutablesNotFound` listing every name that does not
/// resolve to an executable regular file in any `PATH` entry.
pub fn executables_reachable_by_path<S: AsRef<str>>(names: &[S]) -> Result<()> {
    let search_path = std::env::var_os("PATH").unwrap_or_default();
    let dirs: Vec<_> = std::env::split_paths(&search_path).collect();

    let missing: Vec<String> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !dirs.iter().any(|dir| is_executable(&dir.join(name))))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(missing = ?missing, "Executables not found on PATH");
        Err(CommonError::ExecutablesNotFound(missing))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    is_plain_file(path)
}
