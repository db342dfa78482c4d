//! Command files and the pure functions that classify them
//!
//! A command file is a plain text file whose name starts with a run of
//! decimal digits, e.g. `10 - Create entity.txt`. The digits decide the
//! processing order; the content is a single logical command which may be
//! spread over several lines with trailing `\` continuations.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static NUMERIC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)").expect("numeric prefix pattern is valid"));

/// Sort key assigned to names without a usable numeric prefix
pub const UNNUMBERED_SORT_KEY: u64 = u64::MAX;

/// Whether `file_name` starts with at least one ASCII digit
pub fn has_numeric_prefix(file_name: &str) -> bool {
    NUMERIC_PREFIX.is_match(file_name)
}

/// The integer value of the leading digit run, if any
///
/// Returns `None` when the name has no leading digits or when the run does
/// not fit in a `u64`.
pub fn numeric_prefix(file_name: &str) -> Option<u64> {
    NUMERIC_PREFIX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Ordering key for a file name; unnumbered names sort last
pub fn sort_key(file_name: &str) -> u64 {
    numeric_prefix(file_name).unwrap_or(UNNUMBERED_SORT_KEY)
}

/// Join continuation lines and trim the result
///
/// Line endings are unified first: `\r\n` and a lone `\r` both become
/// `\n`. Every backslash immediately followed by a line break then becomes
/// a single space. Nothing else in the text is touched.
pub fn normalize_command(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\\\n", " ")
        .trim()
        .to_string()
}

/// Whether the normalized command is an invocation of `token`
///
/// This is a plain prefix test on the text, so with the default token
/// `curl` a command such as `curlie ...` also qualifies.
pub fn is_invocation_of(command: &str, token: &str) -> bool {
    command.starts_with(token)
}

/// A numbered file discovered inside a target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFile {
    /// File name without the directory part
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// Value of the leading digit run
    pub prefix: Option<u64>,
}

impl CommandFile {
    pub fn new(dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: dir.join(&name),
            prefix: numeric_prefix(&name),
            name,
        }
    }

    pub fn sort_key(&self) -> u64 {
        self.prefix.unwrap_or(UNNUMBERED_SORT_KEY)
    }
}

/// Order files by ascending numeric prefix
///
/// The sort is stable: files sharing a prefix keep their incoming order.
pub fn sort_command_files(files: &mut [CommandFile]) {
    files.sort_by_key(CommandFile::sort_key);
}

/// What to do with a file once its content has been read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The normalized text starts with the command token
    Executable(String),
    /// Anything else; the file is skipped
    NotACommand,
}

/// Normalize `raw` and decide whether it should be executed
pub fn classify(raw: &str, token: &str) -> Classification {
    let command = normalize_command(raw);
    if is_invocation_of(&command, token) {
        Classification::Executable(command)
    } else {
        Classification::NotACommand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_prefix_extraction() {
        assert_eq!(numeric_prefix("1-a.txt"), Some(1));
        assert_eq!(numeric_prefix("010 - Create Entity"), Some(10));
        assert_eq!(numeric_prefix("300"), Some(300));
        assert_eq!(numeric_prefix("a1.txt"), None);
        assert_eq!(numeric_prefix(""), None);
        assert_eq!(numeric_prefix(" 1.txt"), None);
    }

    #[test]
    fn test_overflowing_prefix_sorts_last() {
        let name = "99999999999999999999999-huge.txt";
        assert!(has_numeric_prefix(name));
        assert_eq!(numeric_prefix(name), None);
        assert_eq!(sort_key(name), UNNUMBERED_SORT_KEY);
    }

    #[test]
    fn test_sort_key_without_prefix() {
        assert_eq!(sort_key("README.md"), u64::MAX);
        assert_eq!(sort_key("42.txt"), 42);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_prefix() {
        // Arabic-Indic digit one
        assert!(!has_numeric_prefix("\u{0661}-a.txt"));
    }

    #[test]
    fn test_normalize_joins_continuations() {
        let raw = "curl http://example.com \\\n  -X GET\n";
        // space before the marker + replacement space + two-space indent
        assert_eq!(normalize_command(raw), "curl http://example.com    -X GET");
    }

    #[test]
    fn test_normalize_handles_crlf_continuations() {
        let raw = "curl http://example.com \\\r\n  -H 'Accept: */*'\r\n";
        assert_eq!(
            normalize_command(raw),
            "curl http://example.com    -H 'Accept: */*'"
        );
    }

    #[test]
    fn test_normalize_unifies_line_endings() {
        assert_eq!(normalize_command("curl a \\\r-X GET\r"), "curl a  -X GET");
        assert_eq!(normalize_command("curl a\r\n-v\rb"), "curl a\n-v\nb");
        assert!(!normalize_command("curl a \\\r\n\r-X GET").contains('\r'));
    }

    #[test]
    fn test_normalize_keeps_plain_newlines_and_backslashes() {
        assert_eq!(normalize_command("  a\\b\nc  "), "a\\b\nc");
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("\n\ncurl -s http://x \\\n -d '{}'\n", "curl"),
            Classification::Executable("curl -s http://x   -d '{}'".to_string())
        );
        assert_eq!(classify("# comment\ncurl x", "curl"), Classification::NotACommand);
        assert_eq!(classify("", "curl"), Classification::NotACommand);
        assert_eq!(
            classify("wget http://x", "wget"),
            Classification::Executable("wget http://x".to_string())
        );
    }

    #[test]
    fn test_command_file_new() {
        let file = CommandFile::new(Path::new("dir"), "7 - Get.txt");
        assert_eq!(file.name, "7 - Get.txt");
        assert_eq!(file.path, Path::new("dir").join("7 - Get.txt"));
        assert_eq!(file.prefix, Some(7));
        assert_eq!(file.sort_key(), 7);
    }
}
