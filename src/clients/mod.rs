pub mod statsapi;

// Re-export commonly used types
pub use statsapi::{FetchError, StatsApiClient};
