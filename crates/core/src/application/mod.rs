// Application Layer - Conversion use cases

pub mod conversion;

// Re-exports
pub use conversion::{seconds_to_posix, to_local_with, to_utc, TimeConversion};
