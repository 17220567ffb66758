use std::hint::black_box;

use heaptrim_core::{
	Config, Result, Trimmer, alloc, debug, info,
	trimmer::measure,
	utils::{
		bytes::pretty_maybe,
		pretty,
		sys::memory,
	},
};
use tokio::{sync::watch, task::spawn_blocking};

use crate::signal::signal;

// below glibc's mmap threshold so freed blocks stay in the heap
const BLOCK: usize = 64 * 1024;
const BLOCKS_PER_MIB: usize = 1024 * 1024 / BLOCK;

/// Trim once and print the report.
pub(crate) async fn trim(churn_mib: usize) -> Result {
	if churn_mib > 0 {
		spawn_blocking(move || churn(churn_mib)).await?;
	}

	if !alloc::is_trim_supported() {
		info!("The allocator in this build has no trim control; trimming is a no-op.");
	}

	let report = spawn_blocking(measure).await?;
	info!(%report, "Trimmed");
	println!("{report}");

	Ok(())
}

/// Trim periodically until a signal arrives.
pub(crate) async fn watch(config: &Config) -> Result {
	let trimmer = Trimmer::new(config.trim_interval(), config.trim_measure);
	info!(
		interval = ?trimmer.interval(),
		measure = config.trim_measure,
		supported = alloc::is_trim_supported(),
		"Trimming periodically",
	);

	if config.trim_on_start {
		let report = spawn_blocking(measure).await?;
		info!(%report, "Trimmed on start");
	}

	let (shutdown, receiver) = watch::channel(false);
	let handle = trimmer.spawn(receiver);

	let sig = signal().await;
	shutdown.send_replace(true);

	let count = handle.await?;
	info!(count, %sig, "Stopped trimming");

	Ok(())
}

/// Print resident memory and whatever the allocator reports about itself.
pub(crate) fn stats(verbose: bool) -> Result {
	match memory::statm() {
		| Ok(statm) => {
			println!("size: {}", pretty(statm.size));
			println!("resident: {}", pretty(statm.resident));
			println!("shared: {}", pretty(statm.shared));
		},
		| Err(e) if e.is_not_found() => debug!("No process memory figures on this platform"),
		| Err(e) => return Err(e),
	}

	println!("trim supported: {}", alloc::is_trim_supported());

	if let Some(usage) = alloc::memory_usage() {
		print!("{usage}");
	}

	if verbose {
		if let Some(stats) = alloc::memory_stats() {
			print!("{stats}");
		}
	}

	Ok(())
}

/// Allocate and touch `mib` MiB in small blocks, then free them all, leaving
/// freed pages behind in the allocator for the trim to return.
fn churn(mib: usize) {
	debug!(mib, "Churning heap");

	let blocks: Vec<Vec<u8>> = (0..mib.saturating_mul(BLOCKS_PER_MIB))
		.map(|i| vec![u8::try_from(i % 251).unwrap_or_default(); BLOCK])
		.collect();

	black_box(&blocks);
	info!(resident = %pretty_maybe(memory::resident()), "Churned heap");
	drop(blocks);
}
