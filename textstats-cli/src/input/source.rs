//! Input sources named on the command line

use std::path::PathBuf;
use textstats_core::Input;

/// Argument that selects standard input
pub const STDIN_ARG: &str = "-";

/// Where one analyzed text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (`-`)
    Stdin,
    /// A file resolved from a path or glob pattern
    File(PathBuf),
}

impl InputSource {
    /// Name shown in output headings and progress messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for analysis
    pub fn to_input(&self) -> Input {
        match self {
            InputSource::Stdin => Input::from_reader(std::io::stdin()),
            InputSource::File(path) => Input::from_file(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_display_name() {
        assert_eq!(InputSource::Stdin.display_name(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("docs/a.txt")).display_name(),
            "docs/a.txt"
        );
    }

    #[test]
    fn test_to_input() {
        let source = InputSource::File(PathBuf::from("a.txt"));
        assert!(matches!(source.to_input(), Input::File(p) if p == Path::new("a.txt")));
        assert!(matches!(InputSource::Stdin.to_input(), Input::Reader(_)));
    }
}
