use crate::config::places::{Candidate, candidates};
use crate::config::types::{ConfigResult, SearchOptions, SearchResult};
use crate::error::Result;
use crate::explorer::cache::ResultCache;
use crate::explorer::{Explorer, Mode};
use crate::fs::{FileSystem, absolute_path, read_file, resolve_directory};
use std::path::{Path, PathBuf};

impl Explorer {
	/// Search for a config, starting at `start` (or the current directory).
	///
	/// Each directory's candidates are tried in order and the first hit wins.
	/// On a complete miss the search moves to the parent directory, stopping
	/// after the stop directory or at the filesystem root. Parse errors abort
	/// the search.
	pub async fn search(
		&self,
		start: Option<&Path>,
		options: Option<SearchOptions>,
	) -> Result<SearchResult> {
		self.search_with(Mode::Async, start, options).await
	}

	/// Blocking form of [`Explorer::search`].
	pub fn search_sync(
		&self,
		start: Option<&Path>,
		options: Option<SearchOptions>,
	) -> Result<SearchResult> {
		futures::executor::block_on(self.search_with(Mode::Blocking, start, options))
	}

	async fn search_with(
		&self,
		mode: Mode,
		start: Option<&Path>,
		options: Option<SearchOptions>,
	) -> Result<SearchResult> {
		let fs = self.fs(mode);
		let cache = self.search_cache(mode);
		let options = options.unwrap_or(SearchOptions {
			ignore_empty: self.options.ignore_empty_search_places,
		});

		let start = absolute_path(start.unwrap_or_else(|| Path::new(".")))?;
		let mut dir = resolve_directory(fs, &start).await?;
		let mut visited = Vec::new();

		let result = loop {
			if let Some(cached) = cache.get(&dir) {
				tracing::debug!(directory = %dir.display(), "search cache hit");
				break cached;
			}

			tracing::debug!(directory = %dir.display(), "searching directory");
			let found = self.search_directory(fs, &dir, options).await?;
			visited.push(dir.clone());

			if found.is_some() {
				break self.apply_transform(found)?;
			}

			match self.next_directory(&dir) {
				Some(parent) => dir = parent,
				None => break self.apply_transform(None)?,
			}
		};

		// Every directory on the way shares the final result.
		for dir in visited {
			cache.set(dir, result.clone());
		}

		Ok(result)
	}

	/// Try the candidates of a single directory.
	async fn search_directory(
		&self,
		fs: &dyn FileSystem,
		dir: &Path,
		options: SearchOptions,
	) -> Result<Option<ConfigResult>> {
		for candidate in candidates(dir, &self.options) {
			match self.load_candidate(fs, &candidate).await? {
				Some(result) if result.is_empty() && options.ignore_empty => {
					tracing::trace!(path = %candidate.path.display(), "skipping empty config file");
				}
				Some(result) => return Ok(Some(result)),
				None => {}
			}
		}

		Ok(None)
	}

	async fn load_candidate(
		&self,
		fs: &dyn FileSystem,
		candidate: &Candidate,
	) -> Result<Option<ConfigResult>> {
		tracing::trace!(path = %candidate.path.display(), "trying search place");

		let Some(content) = read_file(fs, &candidate.path, false).await? else {
			return Ok(None);
		};

		self.parse_content(&candidate.path, &content, &candidate.role)
	}

	/// The directory to search after `dir`, if any.
	fn next_directory(&self, dir: &Path) -> Option<PathBuf> {
		if self.options.stop_dir.as_deref() == Some(dir) {
			return None;
		}
		dir.parent().map(Path::to_path_buf)
	}

	fn search_cache(&self, mode: Mode) -> &ResultCache {
		match mode {
			Mode::Blocking => &self.caches.search_sync,
			Mode::Async => &self.caches.search,
		}
	}
}
