// Port Layer - Interfaces for host dependencies

pub mod offset_provider;
pub mod wall_clock; // For deterministic testing

// Re-exports
pub use offset_provider::{FixedOffsetProvider, OffsetProvider};
pub use wall_clock::{FixedWallClock, WallClock};
