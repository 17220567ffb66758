use std::{sync::OnceLock, thread, time::Duration};

use heaptrim_core::{Config, Result, alloc, debug};
use tokio::runtime::Builder;

use crate::clap::Args;

const WORKER_NAME: &str = "heaptrim:worker";
const WORKER_MIN: usize = 1;
const WORKER_KEEPALIVE: u64 = 36;
const MAX_BLOCKING_THREADS: usize = 64;
const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(10000);

static TRIM_ON_PARK: OnceLock<bool> = OnceLock::new();

pub(super) fn new(args: &Args, config: &Config) -> Result<tokio::runtime::Runtime> {
	TRIM_ON_PARK
		.set(config.trim_on_park)
		.expect("set TRIM_ON_PARK from configuration");

	Builder::new_multi_thread()
		.enable_time()
		.thread_name(WORKER_NAME)
		.worker_threads(args.worker_threads.max(WORKER_MIN))
		.max_blocking_threads(MAX_BLOCKING_THREADS)
		.thread_keep_alive(Duration::from_secs(WORKER_KEEPALIVE))
		.on_thread_start(thread_start)
		.on_thread_stop(thread_stop)
		.on_thread_park(thread_park)
		.build()
		.map_err(Into::into)
}

pub(super) fn shutdown(runtime: tokio::runtime::Runtime) {
	debug!(
		timeout = ?SHUTDOWN_TIMEOUT,
		"Waiting for runtime..."
	);

	runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
}

#[tracing::instrument(
	name = "fork",
	level = "debug",
	skip_all,
	fields(
		id = ?thread::current().id(),
		name = %thread::current().name().unwrap_or("None"),
	),
)]
fn thread_start() {}

#[tracing::instrument(
	name = "join",
	level = "debug",
	skip_all,
	fields(
		id = ?thread::current().id(),
		name = %thread::current().name().unwrap_or("None"),
	),
)]
fn thread_stop() {}

#[tracing::instrument(
	name = "park",
	level = "trace",
	skip_all,
	fields(
		id = ?thread::current().id(),
		name = %thread::current().name().unwrap_or("None"),
	),
)]
fn thread_park() {
	if TRIM_ON_PARK.get().is_some_and(|&trim| trim) {
		alloc::trim();
	}
}
