use std::path::PathBuf;

use anyhow::{Context, Error};
use regex::Regex;

use crate::FormatError;

/// The TeX source of the statement of a problem.
#[derive(Debug, Clone)]
pub struct ProblemStatement {
    /// Where the source is.
    pub path: PathBuf,
    /// The content of the source.
    content: String,
}

impl ProblemStatement {
    /// Read the statement source at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<ProblemStatement, Error> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read statement file from {}", path.display()))?;
        Ok(ProblemStatement { path, content })
    }

    /// Build a statement from its content, without touching the disk.
    pub fn from_content<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        ProblemStatement {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Extract the full name of the problem, the argument of the `\<marker>{...}` command.
    ///
    /// The command must appear exactly once in the source.
    pub fn full_name(&self, marker: &str) -> Result<String, Error> {
        let regex = marker_regex(marker)?;
        let names: Vec<_> = regex
            .captures_iter(&self.content)
            .map(|cap| cap[1].trim().to_string())
            .collect();
        match names.len() {
            0 => Err(FormatError::MissingMarker {
                path: self.path.clone(),
                marker: marker.into(),
            }
            .into()),
            1 => Ok(names.into_iter().next().unwrap_or_default()),
            count => Err(FormatError::DuplicateMarker {
                path: self.path.clone(),
                count,
            }
            .into()),
        }
    }
}

/// Matches `\marker{content}`, `content` cannot contain a closing brace.
fn marker_regex(marker: &str) -> Result<Regex, Error> {
    Regex::new(&format!(r"\\{}\{{([^}}]*)\}}", regex::escape(marker)))
        .with_context(|| format!("Invalid name marker '{}'", marker))
}
