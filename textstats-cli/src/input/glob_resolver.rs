//! File pattern resolution using glob

use super::source::{InputSource, STDIN_ARG};
use crate::error::CliError;
use anyhow::Result;
use glob::glob;

/// Resolve input arguments to sources.
///
/// `-` selects standard input and may appear once. Every other argument is a
/// glob pattern; matched files are sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == STDIN_ARG {
            stdin = true;
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            match path_result {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping unreadable path for {}: {}", pattern, e),
            }
        }
    }

    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }

    if sources.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    Ok(sources)
}
