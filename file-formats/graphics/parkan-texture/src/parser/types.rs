pub use super::error::Error;

/// Result type for texture parsing operations
pub type ParseResult<T> = Result<T, Error>;
