//! GitHub Actions workflow-command plumbing: step outputs and failure
//! annotations.
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use crate::error::OutputError;

/// Sink for named step outputs.
pub trait ActionOutputs {
    /// Record output `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be recorded.
    fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError>;
}

/// Writes outputs the way the GitHub runner expects them.
///
/// With an output file (`GITHUB_OUTPUT`) each output is appended as a
/// `name=value` line, or as a `name<<delimiter` block when the value spans
/// lines. Without one, the legacy `::set-output` command is printed to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubOutputs {
    /// File receiving outputs, if the runner provided one.
    pub output_file: Option<PathBuf>,
}

impl GithubOutputs {
    /// Create an output sink for the given output file.
    #[must_use]
    pub const fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }
}

impl ActionOutputs for GithubOutputs {
    fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError> {
        let Some(path) = &self.output_file else {
            emit_command(&set_output_command(name, value));
            return Ok(());
        };

        let entry = file_entry(name, value)?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(entry.as_bytes()))
            .map_err(|source| OutputError::Write {
                name: name.to_string(),
                path: path.clone(),
                source,
            })
    }
}

/// Format one output-file entry, including the trailing newline.
///
/// # Errors
///
/// Returns [`OutputError::DelimiterCollision`] if a multi-line value
/// contains its own heredoc delimiter.
pub fn file_entry(name: &str, value: &str) -> Result<String, OutputError> {
    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{name}={value}\n"));
    }
    let delimiter = heredoc_delimiter(value);
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(OutputError::DelimiterCollision {
            name: name.to_string(),
            delimiter,
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn heredoc_delimiter(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let mut delimiter = String::from("ghadelimiter_");
    for b in digest.iter().take(16) {
        write!(delimiter, "{b:02x}").unwrap_or(());
    }
    delimiter
}

/// Print a workflow command where the runner reads it.
#[allow(clippy::print_stdout)]
pub fn emit_command(command: &str) {
    println!("{command}");
}

/// Legacy `::set-output` workflow command.
#[must_use]
pub fn set_output_command(name: &str, value: &str) -> String {
    format!(
        "::set-output name={}::{}",
        escape_property(name),
        escape_data(value)
    )
}

/// `::error::` workflow command that fails the step with `message`.
///
/// # Examples
///
/// ```
/// use wp_main_file::actions::format_error_command;
///
/// assert_eq!(format_error_command("100% bad\nfile"), "::error::100%25 bad%0Afile");
/// ```
#[must_use]
pub fn format_error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn single_line_entry() {
        assert_eq!(
            file_entry("project-name", "plugin").unwrap(),
            "project-name=plugin\n"
        );
    }

    #[test]
    fn empty_value_entry() {
        assert_eq!(file_entry("project-name", "").unwrap(), "project-name=\n");
    }

    #[test]
    fn multi_line_entry_uses_heredoc() {
        let entry = file_entry("notes", "a\nb").unwrap();
        let lines: Vec<&str> = entry.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("notes<<ghadelimiter_"));
        assert_eq!(lines[1], "a");
        assert_eq!(lines[2], "b");
        assert_eq!(format!("notes<<{}", lines[3]), lines[0]);
    }

    #[test]
    fn delimiter_is_stable_per_value() {
        assert_eq!(heredoc_delimiter("x\ny"), heredoc_delimiter("x\ny"));
        assert_ne!(heredoc_delimiter("x\ny"), heredoc_delimiter("x\nz"));
        assert_eq!(heredoc_delimiter("x").len(), "ghadelimiter_".len() + 32);
    }

    #[test]
    fn outputs_are_appended_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "earlier=1\n").unwrap();

        let outputs = GithubOutputs::new(Some(path.clone()));
        outputs.set_output("project-name", "plugin").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "earlier=1\nproject-name=plugin\n"
        );
    }

    #[test]
    fn unwritable_output_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = GithubOutputs::new(Some(dir.path().join("missing").join("out")));
        let err = outputs.set_output("project-name", "plugin").unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
        assert!(err.to_string().contains("project-name"));
    }

    #[test]
    fn legacy_command_escapes_name_and_value() {
        assert_eq!(
            set_output_command("a:b", "50%\ndone"),
            "::set-output name=a%3Ab::50%25%0Adone"
        );
    }

    #[test]
    fn error_command_escapes_carriage_return() {
        assert_eq!(format_error_command("a\r\nb"), "::error::a%0D%0Ab");
    }
}
