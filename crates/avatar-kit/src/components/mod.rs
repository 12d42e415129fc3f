pub mod avatar;
pub mod breakpoint;

// Re-exports for convenience
pub use avatar::*;
pub use breakpoint::*;
