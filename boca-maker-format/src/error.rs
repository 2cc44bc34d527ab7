use std::path::PathBuf;

use thiserror::Error;

/// The failures that are specific to building a contest, as opposed to the generic I/O errors.
///
/// These are usually wrapped inside an `anyhow::Error`, use `downcast_ref` to inspect them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No directory under the search root contains the problem.
    #[error("Problem '{name}' not found inside {}", .root.display())]
    ProblemNotFound {
        /// The name of the problem.
        name: String,
        /// Where the problem was searched.
        root: PathBuf,
    },
    /// The statement of a problem does not declare its full name.
    #[error("The full name of the problem is not defined in {} (missing \\{marker}{{...}})", .path.display())]
    MissingMarker {
        /// The statement file.
        path: PathBuf,
        /// The name of the marker command.
        marker: String,
    },
    /// The statement of a problem declares its full name more than once.
    #[error("The full name of the problem is defined {count} times in {}", .path.display())]
    DuplicateMarker {
        /// The statement file.
        path: PathBuf,
        /// How many markers were found.
        count: usize,
    },
    /// A directory has fewer problems than the ones requested for a random contest.
    #[error("There are not {required} problems in {} (only {available} found)", .dir.display())]
    NotEnoughProblems {
        /// The directory with the problems.
        dir: PathBuf,
        /// How many problems were requested.
        required: usize,
        /// How many problems the directory contains.
        available: usize,
    },
    /// The name of the contest document is not a TeX file.
    #[error("File '{0}' is not a TeX file")]
    InvalidDocumentName(String),
    /// There are not enough letters for labeling all the problems.
    #[error("A contest can have at most {max} problems, {count} given")]
    TooManyProblems {
        /// How many problems were given.
        count: usize,
        /// The maximum number of problems.
        max: usize,
    },
    /// The typesetter could not produce the contest document.
    #[error("Failed to typeset {}: {reason}", .document.display())]
    TypesetterFailed {
        /// The document being compiled.
        document: PathBuf,
        /// What went wrong.
        reason: String,
    },
}
