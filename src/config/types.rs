use crate::error::BoxError;
use crate::fs::FileSystem;
use crate::loaders::{Loaders, ScriptLoader};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the package manifest searched for a config property.
pub const MANIFEST_FILENAME: &str = "package.json";

/// A configuration that was found on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
	/// The file held a config value.
	Found { config: Value, filepath: PathBuf },

	/// The file existed but held only whitespace.
	Empty { filepath: PathBuf },
}

impl ConfigResult {
	/// Build a result from a loader's output. Null values are not configs.
	pub(crate) fn from_value(config: Value, filepath: PathBuf) -> Option<Self> {
		if config.is_null() {
			None
		} else {
			Some(ConfigResult::Found { config, filepath })
		}
	}

	/// The file that supplied this result.
	pub fn filepath(&self) -> &Path {
		match self {
			ConfigResult::Found { filepath, .. } | ConfigResult::Empty { filepath } => filepath,
		}
	}

	/// The config value, if the file was not empty.
	pub fn config(&self) -> Option<&Value> {
		match self {
			ConfigResult::Found { config, .. } => Some(config),
			ConfigResult::Empty { .. } => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, ConfigResult::Empty { .. })
	}
}

impl Serialize for ConfigResult {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		#[derive(Serialize)]
		#[serde(rename_all = "camelCase")]
		struct Repr<'a> {
			config: Option<&'a Value>,
			filepath: &'a Path,
			is_empty: bool,
		}

		Repr {
			config: self.config(),
			filepath: self.filepath(),
			is_empty: self.is_empty(),
		}
		.serialize(serializer)
	}
}

/// Outcome of a search or load. `None` means nothing was found.
pub type SearchResult = Option<Arc<ConfigResult>>;

/// User transform applied to every computed result before it is cached.
pub type Transform = Arc<
	dyn Fn(Option<ConfigResult>) -> Result<Option<ConfigResult>, BoxError> + Send + Sync,
>;

/// Per-call search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
	/// Skip empty files instead of stopping the search at them.
	pub ignore_empty: bool,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self { ignore_empty: true }
	}
}

/// Which filenames are tried in every directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlaces {
	/// Manifest property, rc file, then script config file.
	Legacy {
		/// Rc filename, `.{module}rc` by default.
		rc: Option<String>,

		/// Script config filename, `{module}.config.js` by default.
		js: Option<String>,

		/// Also try the rc file with each known extension.
		rc_extensions: bool,

		/// Parse the extensionless rc file as strict JSON instead of YAML.
		rc_strict_json: bool,
	},

	/// Explicit filenames, tried in the given order.
	Ordered(Vec<String>),
}

impl SearchPlaces {
	/// The legacy search places for `module_name`.
	pub fn legacy(module_name: &str) -> Self {
		SearchPlaces::Legacy {
			rc: Some(format!(".{module_name}rc")),
			js: Some(format!("{module_name}.config.js")),
			rc_extensions: false,
			rc_strict_json: false,
		}
	}
}

/// Extensions tried after the bare rc file when `rc_extensions` is enabled.
pub const RC_EXTENSIONS: [&str; 5] = [".json", ".yaml", ".yml", ".toml", ".js"];

/// Full ordered list of search places for `module_name`.
pub fn default_search_places(module_name: &str) -> Vec<String> {
	let mut places = vec![MANIFEST_FILENAME.to_string(), format!(".{module_name}rc")];
	places.extend(RC_EXTENSIONS.iter().map(|ext| format!(".{module_name}rc{ext}")));
	places.push(format!("{module_name}.config.js"));
	places
}

/// Options of one explorer, fixed at construction.
#[derive(Clone)]
pub struct ExplorerOptions {
	pub module_name: String,

	/// Manifest property holding the config. `None` disables manifest lookup.
	pub package_prop: Option<String>,

	pub search_places: SearchPlaces,

	/// Default for [`SearchOptions::ignore_empty`].
	pub ignore_empty_search_places: bool,

	/// Last directory searched. `None` ascends to the filesystem root.
	pub stop_dir: Option<PathBuf>,

	pub cache: bool,

	pub transform: Transform,

	/// File loaded when `load` is called without a path.
	pub config_path: Option<PathBuf>,

	pub loaders: Loaders,

	pub script_loader: Arc<dyn ScriptLoader>,

	/// Read capability used by the blocking API.
	pub blocking_fs: Arc<dyn FileSystem>,

	/// Read capability used by the async API.
	pub async_fs: Arc<dyn FileSystem>,
}

impl fmt::Debug for ExplorerOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExplorerOptions")
			.field("module_name", &self.module_name)
			.field("package_prop", &self.package_prop)
			.field("search_places", &self.search_places)
			.field("ignore_empty_search_places", &self.ignore_empty_search_places)
			.field("stop_dir", &self.stop_dir)
			.field("cache", &self.cache)
			.field("config_path", &self.config_path)
			.field("loaders", &self.loaders)
			.finish_non_exhaustive()
	}
}

/// The identity transform.
pub fn identity_transform() -> Transform {
	Arc::new(identity)
}

fn identity(result: Option<ConfigResult>) -> Result<Option<ConfigResult>, BoxError> {
	Ok(result)
}
