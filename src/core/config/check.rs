use tracing_subscriber::EnvFilter;

use crate::{Config, Err, alloc, error::Error, info, warn};

pub fn check(config: &Config) -> Result<(), Error> {
	#[cfg(debug_assertions)]
	info!("Note: heaptrim was built without optimisations (i.e. debug build)");

	config.warn_unknown_key();

	if config.trim_interval == 0 {
		return Err!(Config("trim_interval", "Trimming interval must be at least one second."));
	}

	if let Err(e) = EnvFilter::try_new(&config.log) {
		return Err!(Config("log", "Invalid log filter directives: {e}"));
	}

	if config.trim_on_park && !alloc::is_trim_supported() {
		warn!("trim_on_park is enabled but the allocator in this build has no trim control.");
	}

	Ok(())
}
