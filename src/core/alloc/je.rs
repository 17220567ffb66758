//! jemalloc allocator

use std::{
	ffi::{CStr, CString, c_char, c_void},
	ptr::null_mut,
	sync::LazyLock,
};

use tikv_jemalloc_sys as ffi;
use tikv_jemallocator as jemalloc;

use crate::{Err, Result, debug_error, trace};

#[global_allocator]
static JEMALLOC: jemalloc::Jemalloc = jemalloc::Jemalloc;

pub(super) const TRIM_SUPPORTED: bool = true;

/// `arena.<i>.purge` addressed to every arena at once.
static PURGE_ALL: LazyLock<Option<CString>> =
	LazyLock::new(|| CString::new(format!("arena.{}.purge", ffi::MALLCTL_ARENAS_ALL)).ok());

/// Purge unused dirty pages of all arenas back to the kernel.
#[inline]
pub fn trim() {
	if let Some(name) = purge_all_name() {
		purge(name).ok();
	}
}

#[inline]
pub(super) fn purge_all_name() -> Option<&'static CStr> { PURGE_ALL.as_deref() }

fn purge(name: &CStr) -> Result {
	// SAFETY: purge takes neither an old nor a new value, so every pointer is
	// null and the length is zero.
	let res = unsafe { ffi::mallctl(name.as_ptr(), null_mut(), null_mut(), null_mut(), 0) };

	if res != 0 {
		let name = name.to_string_lossy();
		let error = std::io::Error::from_raw_os_error(res);
		return Err!(Mallctl(debug_error!("{name}: {error}")));
	}

	trace!(?name, "purged");
	Ok(())
}

#[must_use]
#[cfg(feature = "jemalloc_stats")]
pub fn memory_usage() -> Option<String> {
	use mallctl::stats;
	use tikv_jemalloc_ctl as mallctl;

	use crate::utils::pretty;

	// stats are cached; advance the epoch so the reads are current
	mallctl::epoch::advance().ok();

	let bytes = |input: Result<usize, mallctl::Error>| pretty(input.unwrap_or_default());

	let allocated = bytes(stats::allocated::read());
	let active = bytes(stats::active::read());
	let mapped = bytes(stats::mapped::read());
	let metadata = bytes(stats::metadata::read());
	let resident = bytes(stats::resident::read());
	let retained = bytes(stats::retained::read());
	Some(format!(
		"allocated: {allocated}\nactive: {active}\nmapped: {mapped}\nmetadata: {metadata}\nresident: \
		 {resident}\nretained: {retained}\n"
	))
}

#[must_use]
#[cfg(not(feature = "jemalloc_stats"))]
pub fn memory_usage() -> Option<String> { None }

#[must_use]
pub fn memory_stats() -> Option<String> {
	const MAX_LENGTH: usize = 65536 - 4096;

	let mut str = String::new();
	let opaque = std::ptr::from_mut(&mut str).cast::<c_void>();
	let opts: &CStr = c"d";

	// SAFETY: calls malloc_stats_print() with our string instance which must remain
	// in this frame. https://docs.rs/tikv-jemalloc-sys/latest/tikv_jemalloc_sys/fn.malloc_stats_print.html
	unsafe { ffi::malloc_stats_print(Some(malloc_stats_cb), opaque, opts.as_ptr()) };

	str.truncate(MAX_LENGTH);
	Some(str)
}

extern "C" fn malloc_stats_cb(opaque: *mut c_void, msg: *const c_char) {
	// SAFETY: we have to trust the opaque points to our String
	let Some(res) = (unsafe { opaque.cast::<String>().as_mut() }) else {
		return;
	};

	// SAFETY: we have to trust the string is null terminated.
	let msg = unsafe { CStr::from_ptr(msg) };

	let msg = String::from_utf8_lossy(msg.to_bytes());
	res.push_str(msg.as_ref());
}
