//! Integration with `clap`

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use heaptrim_core::{
	Config, Result,
	config::{Figment, Serialized},
	utils::available_parallelism,
};

/// Commandline arguments
#[derive(Parser, Debug)]
#[clap(
	name = heaptrim_core::info::name(),
	version = heaptrim_core::version(),
	about,
	long_about = None,
)]
pub(crate) struct Args {
	#[arg(short, long)]
	/// Path to a config TOML file (may be given more than once)
	pub(crate) config: Option<Vec<PathBuf>>,

	/// Override a configuration variable using TOML 'key=value' syntax
	#[arg(long, short('O'))]
	pub(crate) option: Vec<String>,

	/// Set the number of worker threads for the runtime.
	#[arg(long, short('t'), default_value_t = available_parallelism())]
	pub(crate) worker_threads: usize,

	/// Trim the heap whenever a runtime worker thread goes idle.
	#[arg(long)]
	pub(crate) trim_on_park: bool,

	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
	/// Trim the heap once and report resident memory before and after.
	Trim {
		/// Allocate, touch and free this many MiB before trimming.
		#[arg(long, default_value_t = 0)]
		churn_mib: usize,
	},

	/// Trim the heap periodically until interrupted.
	Watch {
		/// Seconds between trims; overrides `trim_interval`.
		#[arg(long, short)]
		interval: Option<u64>,

		/// Trim once right away; overrides `trim_on_start`.
		#[arg(long)]
		now: bool,
	},

	/// Show resident memory and allocator statistics.
	Stats {
		/// Include the allocator's full statistics dump where available.
		#[arg(long, short)]
		verbose: bool,
	},
}

impl Default for Command {
	fn default() -> Self { Self::Trim { churn_mib: 0 } }
}

/// Parse commandline arguments into structured data
#[must_use]
pub(super) fn parse() -> Args { Args::parse() }

/// Synthesize any command line options with configuration file options.
pub(crate) fn update(mut config: Figment, args: &Args) -> Result<Figment> {
	if args.trim_on_park {
		config = config.merge(Serialized::global("trim_on_park", true));
	}

	if let Some(Command::Watch { interval, now }) = &args.command {
		if let Some(interval) = interval {
			config = config.merge(Serialized::global("trim_interval", interval));
		}

		if *now {
			config = config.merge(Serialized::global("trim_on_start", true));
		}
	}

	// All other individual overrides can go last in case we have options which
	// set multiple conf items at once and the user still needs granular overrides.
	for option in &args.option {
		config = Config::option(config, option)?;
	}

	Ok(config)
}
