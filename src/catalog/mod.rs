pub mod error;
pub mod operations;
pub mod seed;

pub use operations::TrackCatalog;
