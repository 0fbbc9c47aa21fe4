//! Resolution of the configured base location into an absolute directory.

use std::path::{Component, Path, PathBuf};

use crate::error::Error;

/// Resolves `base_location` against `root`.
///
/// # Parameters
/// - `base_location`: Configured location, absolute or relative to `root`.
/// - `root`: Solution/root directory supplied by the host. A relative root is anchored
///   at the current working directory.
///
/// # Returns
///
/// The lexically normalized absolute directory. The directory is not required to exist.
pub fn resolve_base_directory<P: AsRef<Path>>(
    base_location: &str,
    root: P,
) -> Result<PathBuf, Error> {
    if base_location.trim().is_empty() {
        return Err(Error::invalid_configuration("base location is empty"));
    }

    let location = Path::new(base_location);
    let joined = if location.is_absolute() {
        location.to_path_buf()
    } else {
        absolute_root(root.as_ref())?.join(location)
    };

    Ok(normalize(&joined))
}

fn absolute_root(root: &Path) -> Result<PathBuf, Error> {
    if root.is_absolute() {
        Ok(root.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(root))
    }
}

/// Removes `.` components and folds `..` into its parent without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_)) | None
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
