//! Loader registry for rcfind.
//!
//! This module handles:
//! - Mapping file extensions to loader functions
//! - User overrides that replace, add, or disable loaders
//! - Dispatching raw file content to the right parser

pub mod parser;
pub mod script;

pub use parser::{load_json, load_toml, load_yaml, package_property};
pub use script::{
	DisabledScriptLoader, NodeScriptLoader, ScriptError, ScriptExport, ScriptLoader,
	unwrap_module_interop,
};

use crate::error::{BoxError, Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A loader turns raw file content into a config value.
pub type Loader = Arc<dyn Fn(&Path, &str) -> std::result::Result<Value, BoxError> + Send + Sync>;

/// Registry key: a file extension including its leading dot, or no extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoaderKey {
	Extension(String),
	NoExtension,
}

impl LoaderKey {
	/// Key for an extension. A missing leading dot is added.
	pub fn extension(extension: &str) -> Self {
		if extension.starts_with('.') {
			LoaderKey::Extension(extension.to_string())
		} else {
			LoaderKey::Extension(format!(".{extension}"))
		}
	}

	/// Key for a file path, based on its extension.
	///
	/// Dotfiles such as `.foorc` have no extension.
	pub fn for_path(path: &Path) -> Self {
		match path.extension() {
			Some(ext) => LoaderKey::Extension(format!(".{}", ext.to_string_lossy())),
			None => LoaderKey::NoExtension,
		}
	}
}

impl fmt::Display for LoaderKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LoaderKey::Extension(ext) => f.write_str(ext),
			LoaderKey::NoExtension => f.write_str("extensionless"),
		}
	}
}

impl From<&str> for LoaderKey {
	fn from(extension: &str) -> Self {
		LoaderKey::extension(extension)
	}
}

/// Loader registry. `None` entries are explicitly disabled.
#[derive(Clone)]
pub struct Loaders {
	entries: HashMap<LoaderKey, Option<Loader>>,
}

impl Loaders {
	/// Default loaders: script, JSON, YAML, TOML, and YAML for extensionless files.
	pub fn new(script_loader: Arc<dyn ScriptLoader>) -> Self {
		let json: Loader = Arc::new(load_json);
		let yaml: Loader = Arc::new(load_yaml);
		let toml: Loader = Arc::new(load_toml);
		let mut entries: HashMap<LoaderKey, Option<Loader>> = HashMap::new();

		entries.insert(LoaderKey::extension(".js"), Some(script_loader_fn(script_loader)));
		entries.insert(LoaderKey::extension(".json"), Some(json));
		entries.insert(LoaderKey::extension(".yaml"), Some(yaml.clone()));
		entries.insert(LoaderKey::extension(".yml"), Some(yaml.clone()));
		entries.insert(LoaderKey::extension(".toml"), Some(toml));
		entries.insert(LoaderKey::NoExtension, Some(yaml));

		Self { entries }
	}

	/// Replace or add the loader for `key`.
	pub fn with(mut self, key: impl Into<LoaderKey>, loader: Loader) -> Self {
		self.entries.insert(key.into(), Some(loader));
		self
	}

	/// Disable `key`. Files with this extension are always skipped.
	pub fn disable(mut self, key: impl Into<LoaderKey>) -> Self {
		self.entries.insert(key.into(), None);
		self
	}

	/// Look up the loader for `key`.
	///
	/// Returns `Some(None)` for a disabled key and `None` for an unknown one.
	pub fn get(&self, key: &LoaderKey) -> Option<Option<&Loader>> {
		self.entries.get(key).map(Option::as_ref)
	}

	/// Parse `content` with the loader registered for `path`'s extension.
	///
	/// Returns `Ok(None)` when the extension's loader is disabled.
	pub fn load(&self, path: &Path, content: &str) -> Result<Option<Value>> {
		let key = LoaderKey::for_path(path);
		match self.get(&key) {
			Some(Some(loader)) => run_loader(&**loader, path, content).map(Some),
			Some(None) => Ok(None),
			None => Err(Error::UnsupportedFormat {
				path: path.to_path_buf(),
				extension: key.to_string(),
			}),
		}
	}
}

impl fmt::Debug for Loaders {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut keys: Vec<_> = self
			.entries
			.iter()
			.map(|(key, loader)| (key.to_string(), loader.is_some()))
			.collect();
		keys.sort();
		f.debug_map().entries(keys).finish()
	}
}

/// Run one loader, wrapping its failure with the file path.
pub(crate) fn run_loader(
	loader: &(dyn Fn(&Path, &str) -> std::result::Result<Value, BoxError> + Send + Sync),
	path: &Path,
	content: &str,
) -> Result<Value> {
	loader(path, content).map_err(|source| Error::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Wrap a script loader as a registry loader, applying module interop rules.
pub fn script_loader_fn(script_loader: Arc<dyn ScriptLoader>) -> Loader {
	Arc::new(move |path: &Path, _content: &str| -> std::result::Result<Value, BoxError> {
		let export = script_loader.load(path)?;
		Ok(unwrap_module_interop(path, export)?)
	})
}
