//! Command implementations.

pub mod probe;
pub mod watch;

pub use probe::run_probe;
pub use watch::run_watch;
