pub mod bytes;
pub mod sys;
mod tests;

pub use self::{
	bytes::pretty,
	sys::{available_parallelism, memory},
};
