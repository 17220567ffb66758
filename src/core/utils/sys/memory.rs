//! System utilities related to process memory

use std::fs::read_to_string;

use crate::{Result, debug, err, error, utils::pretty};

/// Process memory figures from `/proc/self/statm`, converted to bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statm {
	/// Total program size (VmSize).
	pub size: usize,

	/// Resident set size (VmRSS).
	pub resident: usize,

	/// Resident shared pages, i.e. backed by a file (RssFile + RssShmem).
	pub shared: usize,
}

const STATM_PATH: &str = "/proc/self/statm";

/// Size of a memory page in bytes as reported by the kernel.
#[cfg(unix)]
#[must_use]
pub fn page_size() -> usize {
	// SAFETY: sysconf() only reads a system variable.
	let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
	usize::try_from(size)
		.ok()
		.filter(|&size| size > 0)
		.unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(not(unix))]
#[must_use]
pub fn page_size() -> usize { DEFAULT_PAGE_SIZE }

const DEFAULT_PAGE_SIZE: usize = 4096;

/// Resident set size of this process in bytes. Returns None where the figure
/// cannot be obtained (e.g. no procfs).
#[must_use]
pub fn resident() -> Option<usize> {
	statm()
		.map(|statm| statm.resident)
		.inspect(|&bytes| debug!(resident = %pretty(bytes), "Sampled RSS"))
		.inspect_err(|e| {
			if !e.is_not_found() {
				error!("Failed to sample RSS: {e}");
			}
		})
		.ok()
}

/// Read memory figures for this process.
pub fn statm() -> Result<Statm> {
	let input = read_to_string(STATM_PATH)?;
	parse_statm(&input, page_size())
}

/// Parse the contents of a statm file. Values in the file are counted in
/// pages and are multiplied by `page_size`.
pub fn parse_statm(input: &str, page_size: usize) -> Result<Statm> {
	let mut fields = input.split_whitespace();
	let mut next = |name: &'static str| -> Result<usize> {
		let pages: usize = fields
			.next()
			.ok_or_else(|| err!("statm is missing the {name} field"))?
			.parse()?;

		pages
			.checked_mul(page_size)
			.ok_or_else(|| err!(Arithmetic("{name} of {pages} pages overflows")))
	};

	Ok(Statm {
		size: next("size")?,
		resident: next("resident")?,
		shared: next("shared")?,
	})
}
