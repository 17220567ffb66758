use std::{fmt, time::Duration};

use crate::utils::bytes::pretty_maybe;

/// Outcome of one measured trim.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report {
	/// Resident bytes sampled before trimming.
	pub before: Option<usize>,

	/// Resident bytes sampled after trimming.
	pub after: Option<usize>,

	/// Time spent inside the allocator.
	pub elapsed: Duration,
}

impl Report {
	/// Resident bytes given back by the trim. Growth from other threads in
	/// between the samples counts as zero.
	#[must_use]
	pub fn released(&self) -> Option<usize> {
		self.before
			.zip(self.after)
			.map(|(before, after)| before.saturating_sub(after))
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"rss {} -> {} (released {}) in {:?}",
			pretty_maybe(self.before),
			pretty_maybe(self.after),
			pretty_maybe(self.released()),
			self.elapsed,
		)
	}
}
