use std::path::{Path, PathBuf};

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::FormatError;

/// A problem found on disk: the directory containing it and its name, which is also the name of
/// its own directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// The directory that contains the problem directory.
    pub dir: PathBuf,
    /// The name of the problem.
    pub name: String,
}

impl Problem {
    /// Make a new handle for the problem `name` inside `dir`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(dir: P, name: S) -> Problem {
        Problem {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// The directory of the problem.
    pub fn full_dir(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// The TeX source of the statement, named after the problem.
    pub fn statement_path(&self) -> PathBuf {
        self.full_dir().join(format!("{}.tex", self.name))
    }
}

/// Search `root` for the problem called `name`.
///
/// The tree is visited depth-first, with the entries of each directory sorted by name, and the
/// first directory having a subdirectory called `name` wins. Unreadable directories are skipped.
pub fn find_problem<P: AsRef<Path>>(name: &str, root: P) -> Result<Problem, Error> {
    let root = root.as_ref();
    if name.is_empty() || name.contains(std::path::is_separator) || name == "." || name == ".." {
        bail!("Invalid problem name '{}'", name);
    }
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping {:?} while searching {}: {}", e.path(), name, e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.path().join(name).is_dir() {
            let problem = Problem::new(entry.path(), name);
            debug!("Problem {} found at {}", name, problem.full_dir().display());
            return Ok(problem);
        }
    }
    Err(FormatError::ProblemNotFound {
        name: name.into(),
        root: root.into(),
    }
    .into())
}
