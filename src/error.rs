//! Hard failures of the public parse API.
//!
//! Malformed content never ends up here; it is reported as diagnostics on
//! the returned resource.

use thiserror::Error;

/// Largest input the syntax tree can address.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

#[derive(Debug, Error)]
pub enum LuError {
    #[error("input of {len} bytes exceeds the {MAX_INPUT_LEN} byte limit")]
    InputTooLarge { len: usize },

    #[cfg(feature = "serde")]
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
