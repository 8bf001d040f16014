use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use rcfind::{Explorer, ExplorerBuilder, SearchOptions, SearchResult};

#[derive(Parser)]
#[command(name = "rcfind")]
#[command(
	author,
	version,
	about = "Find and load tool configuration by walking up the directory tree"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Search for configuration, ascending from a directory
	Search {
		#[command(flatten)]
		explorer: ExplorerArgs,

		/// Directory (or file) to start from; defaults to the current directory
		path: Option<PathBuf>,

		/// Last directory to search; defaults to the home directory
		#[arg(long, value_name = "DIR", env = "RCFIND_STOP_DIR")]
		stop_dir: Option<PathBuf>,

		/// Ascend up to the filesystem root
		#[arg(long, conflicts_with = "stop_dir")]
		no_stop_dir: bool,

		/// Filename to try in each directory, in order (repeatable)
		#[arg(long = "search-place", value_name = "NAME")]
		search_places: Vec<String>,

		/// Stop at empty config files instead of skipping them
		#[arg(long)]
		keep_empty: bool,

		/// Also try the rc file with each known extension
		#[arg(long)]
		rc_extensions: bool,

		/// Parse the extensionless rc file as strict JSON
		#[arg(long)]
		rc_strict_json: bool,

		/// Disable result caching
		#[arg(long)]
		no_cache: bool,
	},

	/// Load a specific configuration file
	Load {
		#[command(flatten)]
		explorer: ExplorerArgs,

		/// Config file to load
		file: PathBuf,
	},
}

#[derive(Args)]
struct ExplorerArgs {
	/// Name of the tool whose configuration is looked up
	module: String,

	/// package.json property holding the configuration
	#[arg(long, value_name = "KEY")]
	package_prop: Option<String>,

	/// Never read configuration from package.json
	#[arg(long, conflicts_with = "package_prop")]
	no_package_prop: bool,

	/// Read files asynchronously
	#[arg(long = "async")]
	use_async: bool,
}

impl ExplorerArgs {
	fn builder(&self) -> ExplorerBuilder {
		let mut builder = Explorer::builder(&self.module);
		if let Some(ref prop) = self.package_prop {
			builder = builder.package_prop(prop);
		}
		if self.no_package_prop {
			builder = builder.no_package_prop();
		}
		builder
	}
}

fn main() -> ExitCode {
	init_logging();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

/// Log to stderr, filtered by `RCFIND_LOG` (warnings only by default).
fn init_logging() {
	let filter = EnvFilter::try_from_env("RCFIND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Search {
			explorer,
			path,
			stop_dir,
			no_stop_dir,
			search_places,
			keep_empty,
			rc_extensions,
			rc_strict_json,
			no_cache,
		} => {
			let mut builder = explorer
				.builder()
				.rc_extensions(rc_extensions)
				.rc_strict_json(rc_strict_json)
				.cache(!no_cache);
			if !search_places.is_empty() {
				builder = builder.search_places(search_places);
			}
			if let Some(dir) = stop_dir {
				builder = builder.stop_dir(dir);
			}
			if no_stop_dir {
				builder = builder.no_stop_dir();
			}

			let built = builder.build().context("Invalid explorer options")?;
			let options = SearchOptions {
				ignore_empty: !keep_empty,
			};

			let result = if explorer.use_async {
				runtime()?.block_on(built.search(path.as_deref(), Some(options)))
			} else {
				built.search_sync(path.as_deref(), Some(options))
			}
			.context("Failed to search for configuration")?;

			print_result(&result)
		}
		Commands::Load { explorer, file } => {
			let built = explorer
				.builder()
				.build()
				.context("Invalid explorer options")?;

			let result = if explorer.use_async {
				runtime()?.block_on(built.load(Some(&file)))
			} else {
				built.load_sync(Some(&file))
			}
			.with_context(|| format!("Failed to load {}", file.display()))?;

			print_result(&result)
		}
	}
}

fn runtime() -> Result<tokio::runtime::Runtime> {
	tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.context("Failed to start async runtime")
}

fn print_result(result: &SearchResult) -> Result<ExitCode> {
	match result {
		Some(found) => {
			let json =
				serde_json::to_string_pretty(found.as_ref()).context("Failed to serialize result")?;
			println!("{json}");
		}
		None => println!("No configuration found."),
	}

	Ok(ExitCode::SUCCESS)
}
