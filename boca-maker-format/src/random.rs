use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Error};
use itertools::Itertools;

use crate::FormatError;

/// Resolve a directory given on the command line against the problems directory. Paths already
/// inside `problems_dir` are kept as they are. The result is normalized, so that every spelling
/// of the same directory resolves to the same path.
fn resolve_dir(spec: &str, problems_dir: &Path) -> PathBuf {
    let spec = normalize(Path::new(spec));
    let problems_dir = normalize(problems_dir);
    if spec.starts_with(&problems_dir) {
        spec
    } else {
        problems_dir.join(spec)
    }
}

/// Drop the `.` components, so that `./problems/a` and `problems/a` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// The names of the subdirectories of `dir`, sorted.
fn list_problems(dir: &Path) -> Result<Vec<String>, Error> {
    let mut problems = vec![];
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list the problems in {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if entry.path().is_dir() {
            problems.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    problems.sort();
    Ok(problems)
}

/// Pick random problems for a contest.
///
/// Each element of `dir_specs` is a directory of problems (relative to `problems_dir`, unless it
/// already starts with it): a directory listed `k` times contributes `k` distinct problems. The
/// problems are drawn uniformly from each directory and the final list is shuffled.
pub fn select_random_problems<S: AsRef<str>>(
    dir_specs: &[S],
    problems_dir: &Path,
    rng: &mut fastrand::Rng,
) -> Result<Vec<String>, Error> {
    let dirs = dir_specs
        .iter()
        .map(|spec| resolve_dir(spec.as_ref(), problems_dir))
        .collect_vec();

    let mut selected = vec![];
    for dir in dirs.iter().unique() {
        let required = dirs.iter().filter(|d| *d == dir).count();
        let mut problems = list_problems(dir)?;
        if problems.len() < required {
            return Err(FormatError::NotEnoughProblems {
                dir: dir.clone(),
                required,
                available: problems.len(),
            }
            .into());
        }
        rng.shuffle(&mut problems);
        problems.truncate(required);
        debug!("Picked [{}] from {}", problems.join(", "), dir.display());
        selected.extend(problems);
    }
    rng.shuffle(&mut selected);
    Ok(selected)
}
