//! Building BOCA contest packages from a tree of problems.
//!
//! A problem is a directory with at least the `input/` and `output/` folders and a TeX statement
//! named after it. Its package is made by merging the BOCA defaults tree with the BOCA folders of
//! the problem, adding the metadata file and the contest PDF, and zipping the result. A contest is
//! a list of problems, labeled `A`, `B`, ..., sharing the same PDF built from `contest.tex`.

#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub use archive::{copy_boca_dirs, ProblemArchive, BOCA_DIRS};
pub use config::BocaConfig;
pub use contest::{build_contest, contest_name, Contest, ContestOutput};
pub use error::FormatError;
pub use label::{Label, MAX_PROBLEMS};
pub use problem::{find_problem, Problem};
pub use random::select_random_problems;
pub use statement::ProblemStatement;
pub use template::{fill_template, Replacements};
pub use typesetter::Typesetter;

mod archive;
mod config;
mod contest;
mod error;
pub mod fs_utils;
mod label;
mod problem;
mod random;
mod statement;
mod template;
mod typesetter;
