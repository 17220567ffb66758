pub mod memory;

use std::{num::NonZeroUsize, thread};

pub use memory::{page_size, resident};

/// Get the number of threads which could execute in parallel based on the
/// hardware and administrative constraints of this system. This value should be
/// used to hint the size of thread-pools.
///
/// * <https://doc.rust-lang.org/std/thread/fn.available_parallelism.html>
#[must_use]
pub fn available_parallelism() -> usize {
	thread::available_parallelism()
		.map(NonZeroUsize::get)
		.unwrap_or(1)
}
