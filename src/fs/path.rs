use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the current directory and normalize it lexically.
///
/// `.` components are dropped and `..` pops the previous component, so two
/// spellings of the same directory produce the same cache key. Symlinks are
/// not resolved.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
	let joined = if path.is_absolute() {
		path.to_path_buf()
	} else {
		let cwd = std::env::current_dir().map_err(|source| Error::CurrentDirUnavailable { source })?;
		cwd.join(path)
	};

	Ok(normalize(&joined))
}

/// Lexically normalize an absolute path.
pub(crate) fn normalize(path: &Path) -> PathBuf {
	let mut normalized = PathBuf::new();

	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				// Popping past the root is a no-op.
				normalized.pop();
			}
			other => normalized.push(other.as_os_str()),
		}
	}

	normalized
}
