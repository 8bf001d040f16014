//! rcfind - find and load tool configuration by walking up the directory tree.
//!
//! This library provides:
//! - Directory-ascending search over an ordered set of search places
//! - Package manifest properties, rc files, and script config modules
//! - JSON, YAML and TOML loaders with user overrides
//! - Per-explorer search and load caches
//! - Blocking and async APIs over one algorithm
//!
//! # Example
//!
//! ```no_run
//! use rcfind::Explorer;
//!
//! let explorer = Explorer::new("foo").unwrap();
//!
//! // Tries package.json#foo, .foorc and foo.config.js in the current
//! // directory, then in each parent up to the home directory.
//! if let Some(result) = explorer.search_sync(None, None).unwrap() {
//!     println!("Config from {}: {:?}", result.filepath().display(), result.config());
//! }
//! ```

pub mod config;
pub mod error;
pub mod explorer;
pub mod fs;
pub mod loaders;

pub use config::{ConfigResult, SearchOptions, SearchPlaces, SearchResult, default_search_places};
pub use error::{BoxError, Error, Result};
pub use explorer::{Explorer, ExplorerBuilder};
pub use loaders::{Loader, LoaderKey};
