//! Config discovery for rcfind.
//!
//! This module handles:
//! - Searching for a config by ascending the directory tree
//! - Loading an explicitly named config file
//! - Caching search and load results per explorer

pub mod builder;
pub mod cache;
mod load;
mod search;

pub use builder::ExplorerBuilder;
pub use cache::{Caches, ResultCache};

use crate::config::places::Role;
use crate::config::types::{ConfigResult, ExplorerOptions, SearchResult};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::loaders::{load_json, package_property, run_loader};
use std::path::Path;
use std::sync::Arc;

/// Finds and loads configuration for one module.
///
/// Every operation exists twice: an async form that reads through Tokio,
/// and a blocking `_sync` form. Both run the same algorithm and keep
/// separate caches.
#[derive(Debug)]
pub struct Explorer {
	options: ExplorerOptions,
	caches: Caches,
}

/// Which API an operation was called through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
	Blocking,
	Async,
}

impl Explorer {
	/// Start building an explorer for `module_name`.
	pub fn builder(module_name: impl Into<String>) -> ExplorerBuilder {
		ExplorerBuilder::new(module_name)
	}

	/// Explorer with default options.
	pub fn new(module_name: impl Into<String>) -> Result<Self> {
		Self::builder(module_name).build()
	}

	pub(crate) fn from_options(options: ExplorerOptions) -> Self {
		let caches = Caches::new(options.cache);
		Self { options, caches }
	}

	pub fn options(&self) -> &ExplorerOptions {
		&self.options
	}

	pub fn caches(&self) -> &Caches {
		&self.caches
	}

	/// Forget every cached load result.
	pub fn clear_load_cache(&self) {
		self.caches.clear_load();
	}

	/// Forget every cached search result.
	pub fn clear_search_cache(&self) {
		self.caches.clear_search();
	}

	pub fn clear_caches(&self) {
		self.caches.clear_all();
	}

	fn fs(&self, mode: Mode) -> &dyn FileSystem {
		match mode {
			Mode::Blocking => self.options.blocking_fs.as_ref(),
			Mode::Async => self.options.async_fs.as_ref(),
		}
	}

	/// Turn file content into a raw result.
	///
	/// Whitespace-only content is empty for every role. Manifests and strict
	/// JSON files always use the built-in JSON parser.
	fn parse_content(&self, path: &Path, content: &str, role: &Role) -> Result<Option<ConfigResult>> {
		if content.trim().is_empty() {
			return Ok(Some(ConfigResult::Empty {
				filepath: path.to_path_buf(),
			}));
		}

		let value = match role {
			Role::ManifestProperty(prop) => {
				let manifest = run_loader(&load_json, path, content)?;
				package_property(&manifest, prop).cloned()
			}
			Role::StrictJson => Some(run_loader(&load_json, path, content)?),
			Role::File => self.options.loaders.load(path, content)?,
		};

		Ok(value.and_then(|config| ConfigResult::from_value(config, path.to_path_buf())))
	}

	/// Run the user transform; its errors pass through untouched.
	fn apply_transform(&self, result: Option<ConfigResult>) -> Result<SearchResult> {
		let transformed = (self.options.transform)(result).map_err(Error::Transform)?;
		Ok(transformed.map(Arc::new))
	}
}
