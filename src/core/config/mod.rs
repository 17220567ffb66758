pub mod check;
mod tests;

use std::{collections::BTreeMap, path::Path, time::Duration};

use figment::providers::{Env, Format, Toml};
pub use figment::{Figment, Profile, providers::Serialized};
use serde::{Deserialize, de::IgnoredAny};

pub use self::check::check;
use crate::{Err, Result, err, error::Error, warn};

/// All the config options for heaptrim.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	/// Log filter directives in tracing EnvFilter syntax, e.g.
	/// "info,heaptrim_core=debug".
	///
	/// default: "info" ("debug" in debug builds)
	#[serde(default = "default_log")]
	pub log: String,

	/// Whether log output may use ANSI colors.
	#[serde(default = "true_fn")]
	pub log_colors: bool,

	/// Seconds between trims when running periodically.
	///
	/// default: 300
	#[serde(default = "default_trim_interval")]
	pub trim_interval: u64,

	/// Sample resident memory around each periodic trim and log what was
	/// released.
	#[serde(default = "true_fn")]
	pub trim_measure: bool,

	/// Trim once immediately when periodic trimming starts rather than waiting
	/// for the first interval.
	#[serde(default)]
	pub trim_on_start: bool,

	/// Trim whenever a runtime worker thread goes idle.
	#[serde(default)]
	pub trim_on_park: bool,

	#[serde(flatten)]
	#[allow(clippy::zero_sized_map_values)]
	// this is a catchall, the map shouldn't be zero at runtime
	catchall: BTreeMap<String, IgnoredAny>,
}

const CONFIG_ENV: &str = "HEAPTRIM_CONFIG";
const ENV_PREFIX: &str = "HEAPTRIM_";

impl Config {
	/// Pre-initialize config. Every source lands in the global profile so that
	/// later merges take precedence: files, then `HEAPTRIM_*` environment.
	pub fn load<'a, I>(paths: I) -> Result<Figment>
	where
		I: Iterator<Item = &'a Path>,
	{
		let config = Env::var(CONFIG_ENV)
			.into_iter()
			.map(Toml::file)
			.chain(paths.map(Toml::file))
			.fold(Figment::new(), |config, file| config.merge(file.profile(Profile::Global)))
			.merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]).global().split("__"));

		Ok(config)
	}

	/// Apply a single `key=value` override; the whole string must read as a
	/// line of the TOML config file.
	pub fn option(raw_config: Figment, option: &str) -> Result<Figment> {
		let (key, val) = option
			.split_once('=')
			.ok_or_else(|| err!("Missing '=' in -O/--option: {option:?}"))?;

		if key.trim().is_empty() {
			return Err!("Missing key= in -O/--option: {option:?}");
		}

		if val.trim().is_empty() {
			return Err!("Missing =val in -O/--option: {option:?}");
		}

		// Figment::merge() overrides existing
		Ok(raw_config.merge(Toml::string(option).profile(Profile::Global)))
	}

	/// Finalize config
	pub fn new(raw_config: &Figment) -> Result<Self> {
		let config = raw_config
			.extract::<Self>()
			.map_err(|e| err!("There was a problem with your configuration file: {e}"))?;

		Ok(config)
	}

	#[inline]
	#[must_use]
	pub fn trim_interval(&self) -> Duration { Duration::from_secs(self.trim_interval) }

	pub fn check(&self) -> Result<(), Error> { check(self) }

	/// Iterates over all the catchall keys (unknown config options) and warns
	/// if there are any.
	pub(crate) fn warn_unknown_key(&self) {
		self.catchall
			.keys()
			.filter(|key| !key.starts_with("config"))
			.for_each(|key| warn!("Config parameter \"{key}\" is unknown to heaptrim, ignoring."));
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log: default_log(),
			log_colors: true,
			trim_interval: default_trim_interval(),
			trim_measure: true,
			trim_on_start: false,
			trim_on_park: false,
			catchall: BTreeMap::new(),
		}
	}
}

fn true_fn() -> bool { true }

/// do debug logging by default for debug builds
#[must_use]
pub fn default_log() -> String {
	cfg!(debug_assertions)
		.then_some("debug")
		.unwrap_or("info")
		.to_owned()
}

fn default_trim_interval() -> u64 { 5 * 60 }
