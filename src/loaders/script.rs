//! Loading of script config modules such as `foo.config.js`.
//!
//! Executing a script is delegated to a [`ScriptLoader`]. The default
//! [`NodeScriptLoader`] runs the file in a fresh `node` process, so every load
//! sees the file's current content. Embedders that cannot or should not run
//! scripts can plug in [`DisabledScriptLoader`] or their own interpreter.

use crate::error::BoxError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Key marking an object as a transpiled ES module.
const ES_MODULE_MARKER: &str = "__esModule";

/// Prints `{ esModule, value }` for the module whose path is passed as the
/// first argument.
const NODE_EXPORT_SCRIPT: &str = r#"
const file = process.argv[1];
const exported = require(file);
const esModule = Boolean(exported && typeof exported === "object" && exported.__esModule);
process.stdout.write(JSON.stringify({ esModule, value: exported === undefined ? null : exported }));
"#;

/// The raw export of a script module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptExport {
	/// Whether the module declared itself an ES module.
	#[serde(default)]
	pub es_module: bool,

	/// The exported value as JSON.
	pub value: Value,
}

/// Errors specific to script config modules.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
	#[error("{path} must use default export with ES Modules")]
	MissingDefaultExport { path: PathBuf },

	#[error("Script config files are disabled: {path}")]
	Disabled { path: PathBuf },

	#[error("Script runtime not found: {runtime}")]
	RuntimeNotFound { runtime: String },

	#[error("Failed to run script runtime {runtime} for {path}")]
	RuntimeFailed {
		runtime: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Script {path} exited with code {exit_code}: {stderr}")]
	NonZeroExit {
		path: PathBuf,
		exit_code: i32,
		stderr: String,
	},

	#[error("Script {path} produced an export that is not JSON")]
	InvalidExport {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Executes a script config file and returns its export.
pub trait ScriptLoader: Send + Sync {
	fn load(&self, path: &Path) -> Result<ScriptExport, BoxError>;
}

impl fmt::Debug for dyn ScriptLoader {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("ScriptLoader")
	}
}

/// Apply module interop rules to a script export.
///
/// A plain module's export is the config. An ES module must provide a
/// `default` export, which becomes the config.
pub fn unwrap_module_interop(path: &Path, export: ScriptExport) -> Result<Value, ScriptError> {
	let marked = export
		.value
		.get(ES_MODULE_MARKER)
		.and_then(Value::as_bool)
		.unwrap_or(false);

	if !(export.es_module || marked) {
		return Ok(export.value);
	}

	match export.value {
		Value::Object(mut module) => match module.remove("default") {
			Some(default) if !default.is_null() => Ok(default),
			_ => Err(ScriptError::MissingDefaultExport {
				path: path.to_path_buf(),
			}),
		},
		_ => Err(ScriptError::MissingDefaultExport {
			path: path.to_path_buf(),
		}),
	}
}

/// Runs script config files with Node.js.
#[derive(Debug, Clone)]
pub struct NodeScriptLoader {
	runtime: String,
}

impl NodeScriptLoader {
	/// Use `node` from `PATH`.
	pub fn new() -> Self {
		Self::with_runtime("node")
	}

	/// Use a specific runtime binary, given as a name on `PATH` or an absolute path.
	pub fn with_runtime(runtime: impl Into<String>) -> Self {
		Self {
			runtime: runtime.into(),
		}
	}
}

impl Default for NodeScriptLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ScriptLoader for NodeScriptLoader {
	fn load(&self, path: &Path) -> Result<ScriptExport, BoxError> {
		let binary = resolve_command(&self.runtime).ok_or_else(|| ScriptError::RuntimeNotFound {
			runtime: self.runtime.clone(),
		})?;

		let output = Command::new(&binary)
			.arg("-e")
			.arg(NODE_EXPORT_SCRIPT)
			.arg(path)
			.stdin(Stdio::null())
			.output()
			.map_err(|source| ScriptError::RuntimeFailed {
				runtime: self.runtime.clone(),
				path: path.to_path_buf(),
				source,
			})?;

		if !output.status.success() {
			return Err(ScriptError::NonZeroExit {
				path: path.to_path_buf(),
				exit_code: output.status.code().unwrap_or(-1),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			}
			.into());
		}

		let export = serde_json::from_slice(&output.stdout).map_err(|source| {
			ScriptError::InvalidExport {
				path: path.to_path_buf(),
				source,
			}
		})?;

		Ok(export)
	}
}

/// Refuses to execute any script.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledScriptLoader;

impl ScriptLoader for DisabledScriptLoader {
	fn load(&self, path: &Path) -> Result<ScriptExport, BoxError> {
		Err(ScriptError::Disabled {
			path: path.to_path_buf(),
		}
		.into())
	}
}

/// Resolve a command name to its full path.
///
/// If the command is already an absolute path, returns it if it exists.
/// Otherwise, searches PATH for the command.
pub fn resolve_command(command: &str) -> Option<PathBuf> {
	let path = Path::new(command);

	if path.is_absolute() {
		return path.exists().then(|| path.to_path_buf());
	}

	let path_var = std::env::var_os("PATH")?;
	std::env::split_paths(&path_var)
		.map(|dir| dir.join(command))
		.find(|full_path| full_path.is_file())
}
