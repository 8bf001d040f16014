use std::path::PathBuf;

/// Boxed error type returned by loaders, script loaders and transforms.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Library-level structured errors for rcfind.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}\n{source}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: BoxError,
	},

	#[error("No loader specified for {extension} files: {path}")]
	UnsupportedFormat { path: PathBuf, extension: String },

	#[error(
		"Please specify the package property. A config path cannot point to a package.json file if the package property is disabled: {path}"
	)]
	PackagePropRequired { path: PathBuf },

	#[error("Config path must be a non-empty path")]
	ConfigPathRequired,

	#[error("Module name must be a non-empty string")]
	ModuleNameRequired,

	#[error("Failed to resolve current directory")]
	CurrentDirUnavailable {
		#[source]
		source: std::io::Error,
	},

	/// Error raised by the user-supplied transform, passed through untouched.
	#[error(transparent)]
	Transform(BoxError),
}

impl Error {
	/// Whether this error was raised while parsing file content.
	pub fn is_parse_error(&self) -> bool {
		matches!(self, Error::ConfigParseError { .. })
	}
}

/// Result type alias using rcfind's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
