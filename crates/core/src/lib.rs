// rtime Core - Time types, conversions & ports
// NO host access here; the wall clock and local zone are injected through ports

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{Result, TimeError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
