//! Workflow commands written to stdout

use super::writer::safe_output_escape;

/// `::error::` annotation that marks the step as failed in the run UI
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", safe_output_escape(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_annotation() {
        assert_eq!(
            error_annotation("Slack API error: invalid_auth"),
            "::error::Slack API error: invalid_auth"
        );
    }

    #[test]
    fn test_error_annotation_escapes_multiline() {
        assert_eq!(error_annotation("50% done\nthen"), "::error::50%25 done%0Athen");
    }
}
