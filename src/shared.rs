pub mod error;
pub mod settings;

// Re-export the error types for convenience
pub use error::{AppError, AppResult};
