//! Diagnostic assertion helpers.

use lu::{Diagnostic, LuResource, Severity};

/// Parse a source string, failing the test on a hard error.
pub fn resource_from(source: &str) -> LuResource {
    match lu::parse(source) {
        Ok(resource) => resource,
        Err(err) => panic!("parse failed: {err}"),
    }
}

/// Messages of every diagnostic with the given severity.
pub fn messages(resource: &LuResource, severity: Severity) -> Vec<String> {
    resource
        .diagnostics
        .iter()
        .filter(|d| d.severity == severity)
        .map(|d| d.message.to_string())
        .collect()
}

/// Assert a source has no errors.
pub fn assert_no_errors(resource: &LuResource) {
    let errors: Vec<&Diagnostic> = resource.errors().collect();
    assert!(
        errors.is_empty(),
        "Expected no errors, got {} error(s):\n{}",
        errors.len(),
        errors
            .iter()
            .map(|e| format!("  {e}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
