use std::fmt;

use anyhow::Error;
use serde::{Deserialize, Serialize};

use crate::FormatError;

/// Maximum number of problems in a contest, one per letter.
pub const MAX_PROBLEMS: usize = 26;

/// The letter identifying a problem inside a contest, it's also the name of its archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label(char);

impl Label {
    /// The label of the `index`-th problem (0-based): `A`, `B`, ...
    pub fn from_index(index: usize) -> Option<Label> {
        if index >= MAX_PROBLEMS {
            return None;
        }
        Some(Label((b'A' + index as u8) as char))
    }

    /// The labels for a contest with `count` problems.
    pub fn assign(count: usize) -> Result<Vec<Label>, Error> {
        (0..count)
            .map(|i| {
                Label::from_index(i).ok_or_else(|| {
                    Error::from(FormatError::TooManyProblems {
                        count,
                        max: MAX_PROBLEMS,
                    })
                })
            })
            .collect()
    }

    /// The letter of this label.
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
