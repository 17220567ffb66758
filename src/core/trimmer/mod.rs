//! Measured and periodic heap trimming

mod report;
mod tests;

use std::time::{Duration, Instant};

use tokio::{
	sync::watch,
	task::JoinHandle,
	time::{self, MissedTickBehavior},
};

pub use self::report::Report;
use crate::{alloc, debug, debug_info, utils::sys::memory};

/// Trim the heap once, sampling resident memory around the call.
#[must_use]
pub fn measure() -> Report {
	let before = memory::resident();
	let started = Instant::now();
	alloc::trim();
	let elapsed = started.elapsed();
	let after = memory::resident();

	Report { before, after, elapsed }
}

/// Drives `alloc::trim()` on a fixed interval until shut down.
#[derive(Clone, Debug)]
pub struct Trimmer {
	interval: Duration,
	measure: bool,
}

impl Trimmer {
	/// Zero intervals are raised to one millisecond.
	#[must_use]
	pub fn new(interval: Duration, measure: bool) -> Self {
		Self {
			interval: interval.max(Duration::from_millis(1)),
			measure,
		}
	}

	#[inline]
	#[must_use]
	pub fn interval(&self) -> Duration { self.interval }

	/// Run on the current runtime; see `run()`.
	#[must_use]
	pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<usize> {
		tokio::spawn(self.run(shutdown))
	}

	/// Trim every interval until `shutdown` holds true or its sender is
	/// dropped. The first trim happens one interval after start. Returns the
	/// number of trims performed.
	#[tracing::instrument(
		name = "trimmer",
		level = "debug",
		skip_all,
		fields(interval = ?self.interval, measure = self.measure),
	)]
	pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> usize {
		let start = time::Instant::now().checked_add(self.interval);
		let start = start.unwrap_or_else(time::Instant::now);
		let mut interval = time::interval_at(start, self.interval);
		interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

		let mut count: usize = 0;
		debug_info!("Started");
		while !*shutdown.borrow_and_update() {
			tokio::select! {
				_ = interval.tick() => {
					self.handle_tick().await;
					count = count.saturating_add(1);
				},
				res = shutdown.changed() => if res.is_err() {
					break;
				},
			}
		}

		debug_info!(count, "Stopped");
		count
	}

	async fn handle_tick(&self) {
		if !self.measure {
			alloc::trim_async().await;
			return;
		}

		match tokio::task::spawn_blocking(measure).await {
			| Ok(report) => debug!(%report, "Trimmed"),
			| Err(e) => crate::error::inspect_log(&e),
		}
	}
}
