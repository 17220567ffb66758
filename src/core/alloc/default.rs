//! Default allocator with no trim control

pub(super) const TRIM_SUPPORTED: bool = false;

/// Nothing to trim through; the allocator manages its pages on its own.
#[inline]
pub fn trim() {}

/// Always returns None
#[must_use]
pub fn memory_stats() -> Option<String> { None }

/// Always returns None
#[must_use]
pub fn memory_usage() -> Option<String> { None }
