use crate::config::types::{ExplorerOptions, MANIFEST_FILENAME, RC_EXTENSIONS, SearchPlaces};
use std::path::{Path, PathBuf};

/// How a candidate file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
	/// Read a property from the package manifest.
	ManifestProperty(String),

	/// Standalone config file, dispatched on its extension.
	File,

	/// Standalone config file parsed as strict JSON whatever its extension.
	StrictJson,
}

/// One file to try within a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	pub path: PathBuf,
	pub role: Role,
}

/// List the files to try in `dir`, in precedence order.
pub fn candidates(dir: &Path, options: &ExplorerOptions) -> Vec<Candidate> {
	let mut candidates = Vec::new();

	match &options.search_places {
		SearchPlaces::Legacy {
			rc,
			js,
			rc_extensions,
			rc_strict_json,
		} => {
			if let Some(prop) = &options.package_prop {
				candidates.push(Candidate {
					path: dir.join(MANIFEST_FILENAME),
					role: Role::ManifestProperty(prop.clone()),
				});
			}

			if let Some(rc) = rc {
				let role = if *rc_strict_json {
					Role::StrictJson
				} else {
					Role::File
				};
				candidates.push(Candidate {
					path: dir.join(rc),
					role,
				});

				if *rc_extensions {
					for ext in RC_EXTENSIONS {
						candidates.push(Candidate {
							path: dir.join(format!("{rc}{ext}")),
							role: Role::File,
						});
					}
				}
			}

			if let Some(js) = js {
				candidates.push(Candidate {
					path: dir.join(js),
					role: Role::File,
				});
			}
		}
		SearchPlaces::Ordered(places) => {
			for place in places {
				let path = dir.join(place);
				if is_manifest(&path) {
					// Skipped entirely when manifest lookup is disabled.
					if let Some(prop) = &options.package_prop {
						candidates.push(Candidate {
							path,
							role: Role::ManifestProperty(prop.clone()),
						});
					}
				} else {
					candidates.push(Candidate {
						path,
						role: Role::File,
					});
				}
			}
		}
	}

	candidates
}

/// Whether `path` names the package manifest.
pub fn is_manifest(path: &Path) -> bool {
	path.file_name()
		.is_some_and(|name| name == MANIFEST_FILENAME)
}
