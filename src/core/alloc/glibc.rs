//! glibc malloc (ptmalloc2)

use crate::utils::pretty;

pub(super) const TRIM_SUPPORTED: bool = true;

/// Release free memory from the top of the main heap and from free pages in
/// every arena back to the kernel. The zero pad keeps no slack above the top
/// chunk.
#[inline]
pub fn trim() {
	// SAFETY: malloc_trim() synchronizes on the arena locks internally and has
	// no preconditions on the caller.
	unsafe { libc::malloc_trim(0) };
}

#[must_use]
pub fn memory_usage() -> Option<String> {
	// SAFETY: mallinfo2() only reads allocator counters into a plain struct.
	let info = unsafe { libc::mallinfo2() };

	let arena = pretty(info.arena);
	let mmap = pretty(info.hblkhd);
	let in_use = pretty(info.uordblks);
	let free = pretty(info.fordblks);
	let trimmable = pretty(info.keepcost);
	Some(format!(
		"arena: {arena}\nmmap: {mmap}\nin use: {in_use}\nfree: {free}\ntrimmable: {trimmable}\n"
	))
}

/// glibc only prints its statistics to stderr.
#[must_use]
pub fn memory_stats() -> Option<String> { None }
