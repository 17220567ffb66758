//! Integration with allocators


// jemalloc
#[cfg(all(not(target_env = "msvc"), feature = "jemalloc"))]
pub mod je;
#[cfg(all(not(target_env = "msvc"), feature = "jemalloc"))]
use je::TRIM_SUPPORTED;
#[cfg(all(not(target_env = "msvc"), feature = "jemalloc"))]
pub use je::{memory_stats, memory_usage, trim};

// glibc malloc
#[cfg(all(target_os = "linux", target_env = "gnu", not(feature = "jemalloc")))]
pub mod glibc;
#[cfg(all(target_os = "linux", target_env = "gnu", not(feature = "jemalloc")))]
use glibc::TRIM_SUPPORTED;
#[cfg(all(target_os = "linux", target_env = "gnu", not(feature = "jemalloc")))]
pub use glibc::{memory_stats, memory_usage, trim};

#[cfg(not(any(
	all(not(target_env = "msvc"), feature = "jemalloc"),
	all(target_os = "linux", target_env = "gnu", not(feature = "jemalloc"))
)))]
pub mod default;
#[cfg(not(any(
	all(not(target_env = "msvc"), feature = "jemalloc"),
	all(target_os = "linux", target_env = "gnu", not(feature = "jemalloc"))
)))]
use default::TRIM_SUPPORTED;
#[cfg(not(any(
	all(not(target_env = "msvc"), feature = "jemalloc"),
	all(target_os = "linux", target_env = "gnu", not(feature = "jemalloc"))
)))]
pub use default::{memory_stats, memory_usage, trim};

use crate::error;

/// Whether `trim()` reaches a native primitive in this build; otherwise it is
/// a no-op. Decided at compile time.
#[inline]
#[must_use]
pub const fn is_trim_supported() -> bool { TRIM_SUPPORTED }

/// Run `trim()` on the blocking pool so the calling task is not stalled while
/// the allocator walks its arenas. Like `trim()` this never fails; a task
/// which could not be joined is only logged.
#[tracing::instrument(level = "debug")]
pub async fn trim_async() {
	tokio::task::spawn_blocking(trim)
		.await
		.or_else(error::else_log)
		.ok();
}
