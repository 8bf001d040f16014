use crate::error::{Error, Result};
use crate::fs::system::FileSystem;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a config file's raw content.
///
/// A missing file yields `Ok(None)` during a search. When `must_exist` is set
/// (explicit loads) it is reported as [`Error::ConfigNotFound`] instead. Every
/// other I/O failure is returned as [`Error::ConfigReadError`].
pub async fn read_file(fs: &dyn FileSystem, path: &Path, must_exist: bool) -> Result<Option<String>> {
	match fs.read_to_string(path).await {
		Ok(content) => Ok(Some(content)),
		Err(source) if source.kind() == ErrorKind::NotFound => {
			if must_exist {
				Err(Error::ConfigNotFound {
					path: path.to_path_buf(),
				})
			} else {
				Ok(None)
			}
		}
		Err(source) => Err(Error::ConfigReadError {
			path: path.to_path_buf(),
			source,
		}),
	}
}

/// Resolve the directory a search starts from.
///
/// Directories are returned unchanged; files and missing paths resolve to
/// their parent.
pub async fn resolve_directory(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf> {
	let is_dir = match fs.is_dir(path).await {
		Ok(is_dir) => is_dir,
		Err(source) if source.kind() == ErrorKind::NotFound => false,
		Err(source) => {
			return Err(Error::ConfigReadError {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	if is_dir {
		return Ok(path.to_path_buf());
	}

	Ok(path
		.parent()
		.map(Path::to_path_buf)
		.unwrap_or_else(|| path.to_path_buf()))
}
