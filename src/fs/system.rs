use futures::future::{self, BoxFuture, FutureExt};
use std::io;
use std::path::Path;

/// Read capability used by the search and load engines.
///
/// The engines are written once against this trait. A blocking
/// implementation returns futures that are already complete, an
/// asynchronous one suspends until the I/O finishes.
pub trait FileSystem: Send + Sync {
	/// Read a whole file as UTF-8 text.
	fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, io::Result<String>>;

	/// Check whether `path` is a directory. Errors are raw `io::Error`s.
	fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, io::Result<bool>>;
}

/// Blocking filesystem backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingFs;

impl FileSystem for BlockingFs {
	fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, io::Result<String>> {
		future::ready(std::fs::read_to_string(path)).boxed()
	}

	fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, io::Result<bool>> {
		future::ready(std::fs::metadata(path).map(|meta| meta.is_dir())).boxed()
	}
}

/// Asynchronous filesystem backed by `tokio::fs`. Needs a Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

impl FileSystem for TokioFs {
	fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, io::Result<String>> {
		tokio::fs::read_to_string(path).boxed()
	}

	fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, io::Result<bool>> {
		async move { tokio::fs::metadata(path).await.map(|meta| meta.is_dir()) }.boxed()
	}
}
