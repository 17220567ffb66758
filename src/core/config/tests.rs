#![cfg(test)]

use std::{path::Path, time::Duration};

use figment::{
	Figment, Jail,
	providers::{Format, Toml},
};

use super::Config;

fn from_toml(input: &str) -> Config {
	let raw = Figment::new().merge(Toml::string(input));
	Config::new(&raw).expect("valid config")
}

#[test]
fn defaults() {
	let config = Config::new(&Figment::new()).expect("empty config is valid");
	let default = Config::default();

	assert_eq!(config.log, default.log);
	assert_eq!(config.trim_interval, 300);
	assert_eq!(config.trim_interval(), Duration::from_secs(300));
	assert!(config.trim_measure, "measuring by default");
	assert!(!config.trim_on_start, "no immediate trim by default");
	assert!(!config.trim_on_park, "no trim on park by default");
	config.check().expect("defaults pass checks");
}

#[test]
fn toml_overrides() {
	let config = from_toml(
		r#"
		log = "warn"
		trim_interval = 15
		trim_measure = false
		trim_on_park = true
		"#,
	);

	assert_eq!(config.log, "warn");
	assert_eq!(config.trim_interval(), Duration::from_secs(15));
	assert!(!config.trim_measure, "overridden");
	assert!(config.trim_on_park, "overridden");
}

#[test]
fn unknown_keys_ignored() {
	let config = from_toml("trim_interval = 1\nfrobnicate = true\n");

	assert_eq!(config.trim_interval, 1);
	assert!(config.catchall.contains_key("frobnicate"), "unknown key kept for warning");
	config.check().expect("unknown keys only warn");
}

#[test]
fn wrong_type_rejected() {
	let raw = Figment::new().merge(Toml::string("trim_interval = \"soon\""));
	Config::new(&raw).expect_err("interval must be an integer");
}

#[test]
fn zero_interval_rejected() {
	let config = from_toml("trim_interval = 0");
	let error = config.check().expect_err("zero interval");

	assert!(error.to_string().contains("trim_interval"), "names the directive: {error}");
}

#[test]
fn bad_log_filter_rejected() {
	let config = from_toml("log = \"info,heaptrim=loudest\"");
	let error = config.check().expect_err("unparsable filter");

	assert!(error.to_string().contains("'log'"), "names the directive: {error}");
}

#[test]
fn option_override() {
	let raw = Figment::new().merge(Toml::string("trim_interval = 60"));
	let raw = Config::option(raw, "trim_interval=7").expect("well formed option");
	let raw = Config::option(raw, "log = \"trace\"").expect("well formed option");
	let config = Config::new(&raw).expect("valid config");

	assert_eq!(config.trim_interval, 7);
	assert_eq!(config.log, "trace");
}

#[test]
fn option_malformed() {
	Config::option(Figment::new(), "trim_interval").expect_err("missing '='");
	Config::option(Figment::new(), "=5").expect_err("missing key");
	Config::option(Figment::new(), "trim_interval=").expect_err("missing value");
}

fn load(paths: &[&str]) -> Config {
	let raw = Config::load(paths.iter().map(Path::new)).expect("config loads");
	Config::new(&raw).expect("valid config")
}

#[test]
fn file_flat_keys() {
	Jail::expect_with(|jail| {
		jail.create_file("heaptrim.toml", "trim_interval = 60\ntrim_on_start = true\n")?;

		let config = load(&["heaptrim.toml"]);
		assert_eq!(config.trim_interval, 60);
		assert!(config.trim_on_start, "read from file");

		Ok(())
	});
}

#[test]
fn file_from_env_var() {
	Jail::expect_with(|jail| {
		jail.create_file("elsewhere.toml", "trim_interval = 42\n")?;
		jail.set_env("HEAPTRIM_CONFIG", "elsewhere.toml");

		let config = load(&[]);
		assert_eq!(config.trim_interval, 42);
		assert!(!config.catchall.contains_key("config"), "HEAPTRIM_CONFIG is not a config key");

		Ok(())
	});
}

#[test]
fn later_files_win() {
	Jail::expect_with(|jail| {
		jail.create_file("first.toml", "trim_interval = 10\nlog = \"warn\"\n")?;
		jail.create_file("second.toml", "trim_interval = 20\n")?;

		let config = load(&["first.toml", "second.toml"]);
		assert_eq!(config.trim_interval, 20);
		assert_eq!(config.log, "warn");

		Ok(())
	});
}

#[test]
fn env_over_file() {
	Jail::expect_with(|jail| {
		jail.create_file("heaptrim.toml", "trim_interval = 60\ntrim_measure = true\n")?;
		jail.set_env("HEAPTRIM_TRIM_INTERVAL", 5);

		let config = load(&["heaptrim.toml"]);
		assert_eq!(config.trim_interval, 5);
		assert!(config.trim_measure, "untouched by env");

		Ok(())
	});
}

#[test]
fn option_over_env_and_file() {
	Jail::expect_with(|jail| {
		jail.create_file("heaptrim.toml", "trim_interval = 60\n")?;
		jail.set_env("HEAPTRIM_TRIM_INTERVAL", 5);

		let raw = Config::load([Path::new("heaptrim.toml")].into_iter()).expect("config loads");
		let raw = Config::option(raw, "trim_interval=7").expect("well formed option");
		let config = Config::new(&raw).expect("valid config");

		assert_eq!(config.trim_interval, 7);

		Ok(())
	});
}
