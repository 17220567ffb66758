//! Error construction macros
//!
//! These are specialized macros specific to this project's patterns for
//! throwing Errors; they make Error construction succinct and reduce clutter.
//!
//! - The primary macros `Err!` and `err!` are provided. `Err!` simply wraps
//!   `err!` in the Result variant to reduce `Err(err!(...))` boilerplate, thus
//!   `err!` can be used in any case.
//!
//! 1. The macro makes the general Error construction easy: `return
//!    Err!("something went wrong")` replaces the prior `return
//!    Err(Error::Err("something went wrong".to_owned()))`.
//!
//! 2. The macro integrates format strings automatically: `return
//!    Err!("something bad: {msg}")` replaces the prior `return
//!    Err(Error::Err(format!("something bad: {msg}")))`.
//!
//! 3. The macro scopes variants of Error: `return Err!(Arithmetic("page
//!    count overflowed"))` replaces the prior `return
//!    Err(Error::Arithmetic("page count overflowed".into()))`.
//!
//! 4. The macro logs at the callsite when given a level: `return
//!    Err!(Mallctl(debug_error!("purge failed: {code}")))` logs the error and
//!    then returns the error with the same string.
#[macro_export]
macro_rules! Err {
	($($args:tt)*) => {
		Err($crate::err!($($args)*))
	};
}

#[macro_export]
macro_rules! err {
	(Config($item:literal, $($args:expr),*)) => {{
		$crate::error!(config = %$item, $($args),*);
		$crate::error::Error::Config($item, $crate::format_maybe!($($args),*))
	}};

	($variant:ident($level:ident!($($args:expr),*))) => {{
		$crate::$level!($($args),*);
		$crate::error::Error::$variant($crate::format_maybe!($($args),*))
	}};

	($variant:ident($($args:expr),*)) => {
		$crate::error::Error::$variant($crate::format_maybe!($($args),*))
	};

	($level:ident!($($args:expr),*)) => {{
		$crate::$level!($($args),*);
		$crate::error::Error::Err($crate::format_maybe!($($args),*))
	}};

	($($args:expr),*) => {
		$crate::error::Error::Err($crate::format_maybe!($($args),*))
	};
}

/// Constructs a Cow<'static, str> from a format string, borrowing a bare
/// literal without allocating when it carries no interpolation.
#[macro_export]
macro_rules! format_maybe {
	($s:literal $(,)?) => {
		if $crate::is_format!($s) {
			::std::borrow::Cow::Owned(::std::format!($s))
		} else {
			::std::borrow::Cow::Borrowed($s)
		}
	};

	($s:literal, $($args:expr),+ $(,)?) => {
		::std::borrow::Cow::Owned(::std::format!($s, $($args),+))
	};
}

/// Whether a string literal contains format arguments.
#[macro_export]
macro_rules! is_format {
	($s:literal) => {
		::std::stringify!($s).contains('{')
	};
}
