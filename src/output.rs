//! Rendered document output.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Joins rendered lines into the final document.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Writes `markdown` to `output_file`, or to standard output when `None`.
///
/// Standard output gets a trailing newline; files receive the document as is.
///
/// # Errors
///
/// Returns error if the file or standard output cannot be written.
pub fn write_markdown(markdown: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            fs::write(path, markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote roadmap");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{markdown}").context("Failed to write to standard output")?;
            stdout.flush().context("Failed to flush standard output")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_lines_has_no_trailing_newline() {
        // Arrange
        let lines = vec!["# Title".to_string(), String::new(), "---".to_string()];

        // Act
        let joined = join_lines(&lines);

        // Assert
        assert_eq!(joined, "# Title\n\n---");
    }

    #[test]
    fn test_write_markdown_to_file() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let path = dir.path().join("ROADMAP.md");

        // Act
        write_markdown("# Roadmap\n---", Some(&path))?;

        // Assert
        assert_eq!(fs::read_to_string(&path)?, "# Roadmap\n---");
        Ok(())
    }

    #[test]
    fn test_write_markdown_missing_directory_fails() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let path = dir.path().join("missing").join("ROADMAP.md");

        // Act
        let result = write_markdown("x", Some(&path));

        // Assert
        assert!(result.is_err());
        Ok(())
    }
}
