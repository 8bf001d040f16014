use crate::config::types::{
	ConfigResult, ExplorerOptions, SearchPlaces, Transform, identity_transform,
};
use crate::error::{BoxError, Error, Result};
use crate::explorer::Explorer;
use crate::fs::{BlockingFs, FileSystem, TokioFs, absolute_path};
use crate::loaders::{Loader, LoaderKey, Loaders, NodeScriptLoader, ScriptLoader};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for an [`Explorer`].
///
/// Defaults follow the module name: the `{module}` package property, the
/// `.{module}rc` and `{module}.config.js` search places, and the user's home
/// directory as the stop directory.
#[must_use]
pub struct ExplorerBuilder {
	module_name: String,
	package_prop: Option<String>,
	search_places: Option<Vec<String>>,
	rc: Option<String>,
	js: Option<String>,
	rc_extensions: bool,
	rc_strict_json: bool,
	ignore_empty_search_places: bool,
	stop_dir: Option<PathBuf>,
	cache: bool,
	transform: Transform,
	config_path: Option<PathBuf>,
	loader_overrides: Vec<(LoaderKey, Option<Loader>)>,
	script_loader: Arc<dyn ScriptLoader>,
	blocking_fs: Arc<dyn FileSystem>,
	async_fs: Arc<dyn FileSystem>,
}

impl ExplorerBuilder {
	pub(crate) fn new(module_name: impl Into<String>) -> Self {
		let module_name = module_name.into();

		Self {
			package_prop: Some(module_name.clone()),
			search_places: None,
			rc: Some(format!(".{module_name}rc")),
			js: Some(format!("{module_name}.config.js")),
			rc_extensions: false,
			rc_strict_json: false,
			ignore_empty_search_places: true,
			stop_dir: dirs::home_dir(),
			cache: true,
			transform: identity_transform(),
			config_path: None,
			loader_overrides: Vec::new(),
			script_loader: Arc::new(NodeScriptLoader::new()),
			blocking_fs: Arc::new(BlockingFs),
			async_fs: Arc::new(TokioFs),
			module_name,
		}
	}

	/// Manifest property holding the config. Dotted paths are allowed.
	pub fn package_prop(mut self, prop: impl Into<String>) -> Self {
		self.package_prop = Some(prop.into());
		self
	}

	/// Never look into the package manifest.
	pub fn no_package_prop(mut self) -> Self {
		self.package_prop = None;
		self
	}

	/// Try exactly these filenames, in order, in every directory.
	///
	/// Overrides the rc/js options.
	pub fn search_places(mut self, places: Vec<String>) -> Self {
		self.search_places = Some(places);
		self
	}

	pub fn rc(mut self, name: impl Into<String>) -> Self {
		self.rc = Some(name.into());
		self
	}

	pub fn no_rc(mut self) -> Self {
		self.rc = None;
		self
	}

	pub fn js(mut self, name: impl Into<String>) -> Self {
		self.js = Some(name.into());
		self
	}

	pub fn no_js(mut self) -> Self {
		self.js = None;
		self
	}

	/// Also try the rc file with `.json`, `.yaml`, `.yml`, `.toml` and `.js`.
	pub fn rc_extensions(mut self, enabled: bool) -> Self {
		self.rc_extensions = enabled;
		self
	}

	/// Parse the extensionless rc file as JSON rather than YAML.
	pub fn rc_strict_json(mut self, enabled: bool) -> Self {
		self.rc_strict_json = enabled;
		self
	}

	pub fn ignore_empty_search_places(mut self, ignore: bool) -> Self {
		self.ignore_empty_search_places = ignore;
		self
	}

	/// Stop ascending after this directory.
	pub fn stop_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.stop_dir = Some(dir.into());
		self
	}

	/// Ascend up to the filesystem root.
	pub fn no_stop_dir(mut self) -> Self {
		self.stop_dir = None;
		self
	}

	pub fn cache(mut self, enabled: bool) -> Self {
		self.cache = enabled;
		self
	}

	/// Transform applied to every result before it is returned or cached.
	pub fn transform<F>(mut self, transform: F) -> Self
	where
		F: Fn(Option<ConfigResult>) -> std::result::Result<Option<ConfigResult>, BoxError>
			+ Send
			+ Sync
			+ 'static,
	{
		self.transform = Arc::new(transform);
		self
	}

	/// File to load when `load` is called without a path.
	pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.config_path = Some(path.into());
		self
	}

	/// Replace or add the loader for an extension.
	pub fn loader(mut self, key: impl Into<LoaderKey>, loader: Loader) -> Self {
		self.loader_overrides.push((key.into(), Some(loader)));
		self
	}

	/// Disable the loader for an extension. Such files are skipped.
	pub fn disable_loader(mut self, key: impl Into<LoaderKey>) -> Self {
		self.loader_overrides.push((key.into(), None));
		self
	}

	/// Runtime used by the default script loader.
	pub fn script_loader(mut self, script_loader: Arc<dyn ScriptLoader>) -> Self {
		self.script_loader = script_loader;
		self
	}

	pub fn blocking_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
		self.blocking_fs = fs;
		self
	}

	pub fn async_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
		self.async_fs = fs;
		self
	}

	/// Validate the options and build the explorer.
	pub fn build(self) -> Result<Explorer> {
		if self.module_name.trim().is_empty() {
			return Err(Error::ModuleNameRequired);
		}

		let search_places = match self.search_places {
			Some(places) => SearchPlaces::Ordered(places),
			None => SearchPlaces::Legacy {
				rc: self.rc,
				js: self.js,
				rc_extensions: self.rc_extensions,
				rc_strict_json: self.rc_strict_json,
			},
		};

		let stop_dir = self.stop_dir.as_deref().map(absolute_path).transpose()?;

		let mut loaders = Loaders::new(self.script_loader.clone());
		for (key, loader) in self.loader_overrides {
			loaders = match loader {
				Some(loader) => loaders.with(key, loader),
				None => loaders.disable(key),
			};
		}

		let options = ExplorerOptions {
			module_name: self.module_name,
			package_prop: self.package_prop,
			search_places,
			ignore_empty_search_places: self.ignore_empty_search_places,
			stop_dir,
			cache: self.cache,
			transform: self.transform,
			config_path: self.config_path,
			loaders,
			script_loader: self.script_loader,
			blocking_fs: self.blocking_fs,
			async_fs: self.async_fs,
		};

		Ok(Explorer::from_options(options))
	}
}
