pub mod config;
pub mod request;
pub mod validated;

/// Seed used when a job does not name one.
pub const DEFAULT_SEED: u64 = 42;
