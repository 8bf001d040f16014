use crate::config::places::{Role, is_manifest};
use crate::config::types::SearchResult;
use crate::error::{Error, Result};
use crate::explorer::cache::ResultCache;
use crate::explorer::{Explorer, Mode};
use crate::fs::{absolute_path, read_file};
use std::path::{Path, PathBuf};

impl Explorer {
	/// Load a config file directly, without searching.
	///
	/// Falls back to the configured `config_path` when `path` is `None`. A
	/// `package.json` path reads the package property. A missing file is an
	/// error, and an empty file yields an empty result.
	pub async fn load(&self, path: Option<&Path>) -> Result<SearchResult> {
		self.load_with(Mode::Async, path).await
	}

	/// Blocking form of [`Explorer::load`].
	pub fn load_sync(&self, path: Option<&Path>) -> Result<SearchResult> {
		futures::executor::block_on(self.load_with(Mode::Blocking, path))
	}

	async fn load_with(&self, mode: Mode, path: Option<&Path>) -> Result<SearchResult> {
		let filepath = self.absolute_config_path(path)?;
		let cache = self.load_cache(mode);

		if let Some(cached) = cache.get(&filepath) {
			tracing::debug!(path = %filepath.display(), "load cache hit");
			return Ok(cached);
		}

		let role = if is_manifest(&filepath) {
			let prop = self
				.options
				.package_prop
				.clone()
				.ok_or_else(|| Error::PackagePropRequired {
					path: filepath.clone(),
				})?;
			Role::ManifestProperty(prop)
		} else {
			Role::File
		};

		tracing::debug!(path = %filepath.display(), "loading config file");
		let content = read_file(self.fs(mode), &filepath, true)
			.await?
			.ok_or_else(|| Error::ConfigNotFound {
				path: filepath.clone(),
			})?;

		let raw = self.parse_content(&filepath, &content, &role)?;
		let result = self.apply_transform(raw)?;

		cache.set(filepath, result.clone());
		Ok(result)
	}

	fn absolute_config_path(&self, path: Option<&Path>) -> Result<PathBuf> {
		let path = path
			.filter(|path| !path.as_os_str().is_empty())
			.or(self.options.config_path.as_deref())
			.filter(|path| !path.as_os_str().is_empty())
			.ok_or(Error::ConfigPathRequired)?;

		absolute_path(path)
	}

	fn load_cache(&self, mode: Mode) -> &ResultCache {
		match mode {
			Mode::Blocking => &self.caches.load_sync,
			Mode::Async => &self.caches.load,
		}
	}
}
