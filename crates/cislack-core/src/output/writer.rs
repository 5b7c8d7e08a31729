//! Step output writer for `$GITHUB_OUTPUT`

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Heredoc delimiter for multiline-safe outputs
pub const OUTPUT_DELIMITER: &str = "CISLACK_EOF";

/// Escape for GitHub Actions safe output (percent-encoding special chars)
pub fn safe_output_escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Step output file writer
pub struct OutputWriter;

impl OutputWriter {
    /// Append `name<<DELIM / value / DELIM` records to the output file
    pub fn append(path: &Path, outputs: &[(&str, &str)]) -> Result<()> {
        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)?;

        for (name, value) in outputs {
            writeln!(f, "{name}<<{OUTPUT_DELIMITER}")?;
            writeln!(f, "{}", safe_output_escape(value))?;
            writeln!(f, "{OUTPUT_DELIMITER}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_safe_output_escape() {
        assert_eq!(safe_output_escape("a%b\r\nc"), "a%25b%0D%0Ac");
        assert_eq!(safe_output_escape("1700000000.000100"), "1700000000.000100");
    }

    #[test]
    fn test_append_outputs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        OutputWriter::append(&path, &[("ts", "1700000000.000100"), ("channel", "C123")]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "ts<<CISLACK_EOF\n1700000000.000100\nCISLACK_EOF\nchannel<<CISLACK_EOF\nC123\nCISLACK_EOF\n"
        );
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "previous=1\n").unwrap();
        OutputWriter::append(&path, &[("ts", "1")]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous=1\nts<<CISLACK_EOF\n"));
    }
}
