//! Parser error handling
//!
//! Every syntax error carries an [`ErrorCode`], a byte range and optionally
//! a hint and one related span (the opening fence of an unterminated
//! answer, for instance).

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseContext, RelatedSpan, SyntaxError};
