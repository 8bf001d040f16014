//! Filesystem access for rcfind.
//!
//! This module handles:
//! - The blocking and asynchronous read capabilities
//! - Not-found classification shared by both modes
//! - Absolute path resolution

pub mod path;
pub mod reader;
pub mod system;

pub use path::absolute_path;
pub use reader::{read_file, resolve_directory};
pub use system::{BlockingFs, FileSystem, TokioFs};
