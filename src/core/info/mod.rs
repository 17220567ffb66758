//! Information about the project. This module contains version and build
//! information which can be queried by users or used by developers.

use std::sync::OnceLock;

static BRANDING: &str = "heaptrim";
static SEMANTIC: &str = env!("CARGO_PKG_VERSION");

static VERSION: OnceLock<String> = OnceLock::new();

#[inline]
#[must_use]
pub fn name() -> &'static str { BRANDING }

/// Semantic version with any build-time extra (e.g. a commit hash supplied
/// through `HEAPTRIM_VERSION_EXTRA`).
#[inline]
pub fn version() -> &'static str { VERSION.get_or_init(init_version) }

fn init_version() -> String {
	option_env!("HEAPTRIM_VERSION_EXTRA")
		.filter(|extra| !extra.is_empty())
		.map_or_else(|| SEMANTIC.to_owned(), |extra| format!("{SEMANTIC} ({extra})"))
}
