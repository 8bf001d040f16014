use crate::error::BoxError;
use serde_json::Value;
use std::path::Path;

/// Parse JSON content.
pub fn load_json(path: &Path, content: &str) -> Result<Value, BoxError> {
	serde_json::from_str(content)
		.map_err(|err| format!("JSON Error in {}:\n{err}", path.display()).into())
}

/// Parse YAML content. Also used for rc files without an extension, since
/// YAML accepts JSON documents as well.
pub fn load_yaml(path: &Path, content: &str) -> Result<Value, BoxError> {
	serde_yaml::from_str(content)
		.map_err(|err| format!("YAML Error in {}:\n{err}", path.display()).into())
}

/// Parse TOML content.
pub fn load_toml(path: &Path, content: &str) -> Result<Value, BoxError> {
	toml::from_str(content)
		.map_err(|err| format!("TOML Error in {}:\n{err}", path.display()).into())
}

/// Look up a package property in a parsed manifest.
///
/// An exact key match wins; otherwise a dotted key is walked segment by
/// segment (`"tools.foo"` reads `manifest.tools.foo`). Missing and null
/// values both yield `None`.
pub fn package_property<'a>(manifest: &'a Value, property: &str) -> Option<&'a Value> {
	if let Some(value) = manifest.get(property) {
		return non_null(value);
	}

	if !property.contains('.') {
		return None;
	}

	let mut current = manifest;
	for segment in property.split('.') {
		current = current.get(segment)?;
	}
	non_null(current)
}

fn non_null(value: &Value) -> Option<&Value> {
	if value.is_null() { None } else { Some(value) }
}
