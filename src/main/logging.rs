use heaptrim_core::{Config, Result, config, err};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt};

pub(crate) fn init(config: &Config) -> Result<()> {
	let filter_layer = match EnvFilter::try_new(&config.log) {
		| Ok(s) => s,
		| Err(e) => {
			eprintln!(
				"It looks like your config is invalid. The following error occured while parsing it: {e}"
			);
			EnvFilter::try_new(config::default_log())?
		},
	};

	let fmt_layer = tracing_subscriber::fmt::Layer::new()
		.with_ansi(config.log_colors)
		.with_writer(std::io::stderr);

	let subscriber = Registry::default().with(fmt_layer.with_filter(filter_layer));

	tracing::subscriber::set_global_default(subscriber)
		.map_err(|e| err!("the global default tracing subscriber failed to be initialized: {e}"))
}
