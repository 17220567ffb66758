#![cfg(test)]

use crate::utils::{
	bytes::{pretty, pretty_maybe},
	sys::memory::{Statm, page_size, parse_statm, resident},
};

#[test]
fn statm_pages_to_bytes() {
	let input = "6046 1521 1129 213 0 467 0\n";
	let statm = parse_statm(input, 4096).expect("valid statm");

	assert_eq!(statm, Statm {
		size: 6046 * 4096,
		resident: 1521 * 4096,
		shared: 1129 * 4096,
	});
}

#[test]
fn statm_large_pages() {
	let statm = parse_statm("10 2 1", 65536).expect("three fields suffice");
	assert_eq!(statm.resident, 2 * 65536);
}

#[test]
fn statm_truncated() {
	let error = parse_statm("6046 1521", 4096).expect_err("missing shared field");
	assert!(error.to_string().contains("shared"), "names the missing field: {error}");
}

#[test]
fn statm_empty() {
	parse_statm("", 4096).expect_err("empty input");
}

#[test]
fn statm_garbage() {
	parse_statm("6046 lots 1129", 4096).expect_err("non-numeric field");
}

#[test]
fn statm_overflow() {
	let input = format!("1 {} 1", usize::MAX);
	let error = parse_statm(&input, 4096).expect_err("resident overflows");
	assert!(error.to_string().contains("Arithmetic"), "overflow reported: {error}");
}

#[test]
fn page_size_sane() {
	let size = page_size();
	assert!(size.is_power_of_two(), "page size {size} is a power of two");
	assert!(size >= 4096, "page size {size} is at least 4 KiB");
}

#[test]
#[cfg(target_os = "linux")]
fn resident_nonzero() {
	let rss = resident().expect("procfs available on linux");
	assert!(rss > 0, "a running process has resident pages");
}

#[test]
fn pretty_sizes() {
	assert!(pretty(0).starts_with('0'), "zero bytes");
	assert!(pretty(3 * 1024 * 1024).contains("MiB"), "mebibytes in IEC units");
	assert_eq!(pretty_maybe(None), "-");
}

#[test]
fn parallelism_nonzero() {
	assert!(crate::utils::available_parallelism() >= 1, "at least one thread");
}
