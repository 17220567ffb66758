mod err;
mod log;

use std::{borrow::Cow, convert::Infallible, fmt};

pub use self::log::*;

#[derive(thiserror::Error)]
pub enum Error {
	// std
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	ParseInt(#[from] std::num::ParseIntError),

	// third-party
	#[error(transparent)]
	Figment(#[from] figment::error::Error),
	#[error("Join error: {0}")]
	JoinError(#[from] tokio::task::JoinError),
	#[error("Tracing filter error: {0}")]
	TracingFilter(#[from] tracing_subscriber::filter::ParseError),

	// heaptrim
	#[error("Arithmetic operation failed: {0}")]
	Arithmetic(Cow<'static, str>),
	#[error("There was a problem with the '{0}' directive in your configuration: {1}")]
	Config(&'static str, Cow<'static, str>),
	#[error("Allocator control failed: {0}")]
	Mallctl(Cow<'static, str>),

	// unique / untyped
	#[error("{0}")]
	Err(Cow<'static, str>),
}

impl Error {
	/// Generate the error message string.
	pub fn message(&self) -> String { format!("{self}") }

	/// Returns true for "not found" errors. This means anything that qualifies
	/// as a "not found" from any variant's contained error type.
	#[inline]
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Io(error) if error.kind() == std::io::ErrorKind::NotFound)
	}
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.message()) }
}

#[allow(clippy::fallible_impl_from)]
impl From<Infallible> for Error {
	#[cold]
	#[inline(never)]
	fn from(_e: Infallible) -> Self {
		panic!("infallible error should never exist");
	}
}
