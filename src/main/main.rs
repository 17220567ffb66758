pub(crate) mod clap;
mod commands;
mod logging;
mod runtime;
mod signal;

use std::path::PathBuf;

use heaptrim_core::{Config, Result, debug_info, error};

use crate::clap::{Args, Command};

fn main() -> Result {
	let args = clap::parse();

	let paths = args.config.iter().flatten().map(PathBuf::as_path);
	let raw_config = Config::load(paths)?;
	let raw_config = clap::update(raw_config, &args)?;
	let config = Config::new(&raw_config)?;

	logging::init(&config)?;
	config.check()?;

	let runtime = runtime::new(&args, &config)?;
	let result = runtime.block_on(async_main(&args, &config));
	runtime::shutdown(runtime);

	debug_info!("Exit");
	result
}

#[tracing::instrument(
	name = "main",
	parent = None,
	skip_all
)]
async fn async_main(args: &Args, config: &Config) -> Result {
	let command = args.command.clone().unwrap_or_default();

	let result = match command {
		| Command::Trim { churn_mib } => commands::trim(churn_mib).await,
		| Command::Watch { .. } => commands::watch(config).await,
		| Command::Stats { verbose } => commands::stats(verbose),
	};

	if let Err(error) = &result {
		error!("{error}");
	}

	debug_info!("Exit runtime");
	result
}
