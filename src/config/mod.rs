//! Explorer configuration for rcfind.
//!
//! This module handles:
//! - Explorer options and their defaults
//! - Result types returned by searches and loads
//! - Resolving the candidate files tried in each directory

pub mod places;
pub mod types;

pub use places::{Candidate, Role, candidates, is_manifest};
pub use types::{
	ConfigResult, ExplorerOptions, MANIFEST_FILENAME, SearchOptions, SearchPlaces, SearchResult,
	Transform, default_search_places, identity_transform,
};
