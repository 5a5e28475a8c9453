//! End-to-end parse tests
//!
//! Tests for the public `parse` entry points:
//! - Section ordering and spans
//! - Bodies and QnA ids
//! - Diagnostic stream
//! - Batch parsing and JSON export

pub mod tests_batch;
pub mod tests_bodies;
pub mod tests_diagnostics;
pub mod tests_ordering;
