#![cfg(test)]

use std::time::Duration;

use tokio::{sync::watch, time::sleep};

use super::{Report, Trimmer, measure};

#[test]
fn released_difference() {
	let report = Report {
		before: Some(96 * 1024 * 1024),
		after: Some(32 * 1024 * 1024),
		elapsed: Duration::from_micros(750),
	};

	assert_eq!(report.released(), Some(64 * 1024 * 1024));
}

#[test]
fn released_saturates() {
	let report = Report {
		before: Some(4096),
		after: Some(8192),
		..Report::default()
	};

	assert_eq!(report.released(), Some(0));
}

#[test]
fn released_missing_sample() {
	let report = Report {
		before: None,
		after: Some(8192),
		..Report::default()
	};

	assert_eq!(report.released(), None);
	assert!(report.to_string().contains("released -"), "missing sample renders as a dash");
}

#[test]
fn report_display() {
	let report = Report {
		before: Some(2 * 1024 * 1024),
		after: Some(1024 * 1024),
		elapsed: Duration::from_millis(3),
	};

	let out = report.to_string();
	assert!(out.starts_with("rss 2"), "unexpected display: {out}");
	assert!(out.contains("MiB -> 1"), "unexpected display: {out}");
	assert!(out.ends_with("in 3ms"), "unexpected display: {out}");
}

#[test]
fn measure_once() {
	let report = measure();

	#[cfg(target_os = "linux")]
	{
		assert!(report.before.is_some(), "procfs sample before trim");
		assert!(report.after.is_some(), "procfs sample after trim");
	}

	assert!(report.elapsed < Duration::from_secs(60), "trim returned");
}

#[test]
fn zero_interval_raised() {
	let trimmer = Trimmer::new(Duration::ZERO, false);
	assert_eq!(trimmer.interval(), Duration::from_millis(1));
}

#[tokio::test]
async fn stops_on_shutdown() {
	let (tx, rx) = watch::channel(false);
	let handle = Trimmer::new(Duration::from_millis(5), true).spawn(rx);

	sleep(Duration::from_millis(100)).await;
	tx.send(true).expect("trimmer still listening");

	let count = handle.await.expect("trimmer task joined");
	assert!(count >= 1, "at least one trim in 100ms at a 5ms interval");
}

#[tokio::test]
async fn stops_when_sender_dropped() {
	let (tx, rx) = watch::channel(false);
	let handle = Trimmer::new(Duration::from_secs(3600), false).spawn(rx);

	drop(tx);

	let count = handle.await.expect("trimmer task joined");
	assert_eq!(count, 0, "first trim is one interval after start");
}

#[tokio::test]
async fn shutdown_before_start() {
	let (tx, rx) = watch::channel(false);
	tx.send(true).expect("receiver alive");

	let count = Trimmer::new(Duration::from_millis(1), false)
		.run(rx)
		.await;

	assert_eq!(count, 0, "no trims after shutdown");
}
