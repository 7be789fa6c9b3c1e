//! Result type alias for formatting operations

use crate::error::FormatError;

/// Standard Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
