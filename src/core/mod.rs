pub mod alloc;
pub mod config;
pub mod debug;
pub mod error;
pub mod info;
pub mod log;
pub mod trimmer;
pub mod utils;

pub use config::Config;
pub use error::Error;
pub use info::version;
pub use trimmer::{Report, Trimmer};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
