use crate::config::types::SearchResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Memoized results keyed by absolute path.
///
/// A disabled cache never stores anything, so every lookup misses.
#[derive(Debug, Default)]
pub struct ResultCache {
	enabled: bool,
	entries: Mutex<HashMap<PathBuf, SearchResult>>,
}

impl ResultCache {
	pub fn new(enabled: bool) -> Self {
		Self {
			enabled,
			entries: Mutex::new(HashMap::new()),
		}
	}

	/// Cached result for `key`. The outer `None` is a cache miss.
	pub fn get(&self, key: &Path) -> Option<SearchResult> {
		if !self.enabled {
			return None;
		}
		self.lock().get(key).cloned()
	}

	pub fn set(&self, key: PathBuf, value: SearchResult) {
		if self.enabled {
			self.lock().insert(key, value);
		}
	}

	pub fn clear(&self) {
		self.lock().clear();
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, SearchResult>> {
		// Entries are plain values; a panic elsewhere cannot leave one half-written.
		self.entries.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

/// The four caches of one explorer.
///
/// Blocking and async calls never share a pool.
#[derive(Debug, Default)]
pub struct Caches {
	pub search: ResultCache,
	pub search_sync: ResultCache,
	pub load: ResultCache,
	pub load_sync: ResultCache,
}

impl Caches {
	pub fn new(enabled: bool) -> Self {
		Self {
			search: ResultCache::new(enabled),
			search_sync: ResultCache::new(enabled),
			load: ResultCache::new(enabled),
			load_sync: ResultCache::new(enabled),
		}
	}

	pub fn clear_search(&self) {
		self.search.clear();
		self.search_sync.clear();
	}

	pub fn clear_load(&self) {
		self.load.clear();
		self.load_sync.clear();
	}

	pub fn clear_all(&self) {
		self.clear_load();
		self.clear_search();
	}
}
