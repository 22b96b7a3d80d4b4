pub mod cache;
pub mod classify;
pub mod context;
pub mod error;
pub mod run;
pub mod scanner;

pub use cache::TokenCache;
pub use context::TileContext;
pub use error::RunError;
pub use run::{generate, resolve_region};
pub use scanner::{scan, PhaseScan, ScanRegion};
