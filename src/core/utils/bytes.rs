use bytesize::ByteSize;

/// Format a byte count into a human-readable size (IEC units).
#[inline]
#[must_use]
pub fn pretty(bytes: usize) -> String {
	let bytes: u64 = bytes.try_into().unwrap_or(u64::MAX);
	ByteSize::b(bytes).display().iec().to_string()
}

/// Format an optional byte count; a missing sample renders as "-".
#[must_use]
pub fn pretty_maybe(bytes: Option<usize>) -> String {
	bytes.map_or_else(|| "-".to_owned(), pretty)
}
