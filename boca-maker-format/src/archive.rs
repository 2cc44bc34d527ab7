use std::path::{Path, PathBuf};

use anyhow::{Context, Error};

use crate::fs_utils::{copy_dir, make_dir, zip_dir};
use crate::template::{fill_template, Replacements};
use crate::{BocaConfig, Label, Problem, ProblemStatement};

/// The directories of a problem package that BOCA knows about. Only these are taken from the
/// defaults tree and from the problem directories.
pub const BOCA_DIRS: [&str; 8] = [
    "compare",
    "compile",
    "description",
    "input",
    "limits",
    "output",
    "run",
    "tests",
];

/// Name of the template of the problem metadata file.
pub const PROBLEM_INFO_TEMPLATE: &str = "problem.info";

/// Copy inside `dest` all the immediate subdirectories of `src` whose name is in `BOCA_DIRS`,
/// overwriting the files already present. Returns the names of the copied directories.
///
/// Only the top level of `src` is searched: a recognized name nested deeper, like
/// `extra/input`, is ignored and its content does not end up in the package.
pub fn copy_boca_dirs<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dest: Q,
) -> Result<Vec<String>, Error> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    let mut copied = vec![];
    for name in BOCA_DIRS {
        let path = src.join(name);
        if !path.is_dir() {
            continue;
        }
        copy_dir(&path, dest.join(name))
            .with_context(|| format!("Failed to copy {}", path.display()))?;
        copied.push(name.to_string());
    }
    debug!(
        "Copied [{}] from {} to {}",
        copied.join(", "),
        src.display(),
        dest.display()
    );
    Ok(copied)
}

/// The BOCA package of a problem: the staging directory where it's built and the archive it
/// ends up in.
#[derive(Debug, Clone)]
pub struct ProblemArchive {
    /// The problem to package.
    pub problem: Problem,
    /// The label of the problem in the contest.
    pub label: Label,
    /// The staging directory.
    pub target_dir: PathBuf,
}

impl ProblemArchive {
    /// Prepare the package of `problem`, staged in `target_dir`.
    pub fn new<P: Into<PathBuf>>(problem: Problem, label: Label, target_dir: P) -> Self {
        ProblemArchive {
            problem,
            label,
            target_dir: target_dir.into(),
        }
    }

    /// Where the archive is written: `<label>.zip` next to the staging directory.
    pub fn archive_path(&self) -> PathBuf {
        let parent = self
            .target_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        parent.join(format!("{}.zip", self.label))
    }

    /// Fill the staging directory with the defaults tree, then with the directories of the
    /// problem, so that the files of the problem override the default ones.
    pub fn merge<P: AsRef<Path>>(&self, defaults_dir: P) -> Result<(), Error> {
        let defaults_dir = defaults_dir.as_ref();
        if !defaults_dir.is_dir() {
            warn!("BOCA defaults not found at {}", defaults_dir.display());
        }
        make_dir(&self.target_dir)?;
        copy_boca_dirs(defaults_dir, &self.target_dir)
            .context("Failed to copy the default BOCA files")?;
        copy_boca_dirs(self.problem.full_dir(), &self.target_dir).with_context(|| {
            format!("Failed to copy the BOCA files of {}", self.problem.name)
        })?;
        Ok(())
    }

    /// Write `description/problem.info` and copy the description file next to it.
    pub fn write_description<P: AsRef<Path>>(
        &self,
        description: P,
        config: &BocaConfig,
    ) -> Result<(), Error> {
        let description = description.as_ref();
        let statement = ProblemStatement::new(self.problem.statement_path())?;
        let full_name = statement.full_name(&config.name_marker)?;
        let description_name = description
            .file_name()
            .with_context(|| format!("Invalid description file {}", description.display()))?;

        let desc_dir = self.target_dir.join("description");
        make_dir(&desc_dir)?;
        let mut replacements = Replacements::new();
        replacements
            .insert("BASE_NAME", self.label.to_string())
            .insert("FULL_NAME", full_name)
            .insert("DESCRIPTION_FILE", description_name.to_string_lossy());
        fill_template(
            &config.templates_dir,
            PROBLEM_INFO_TEMPLATE,
            desc_dir.join("problem.info"),
            &replacements,
        )?;

        let dest = desc_dir.join(description_name);
        std::fs::copy(description, &dest).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                description.display(),
                dest.display()
            )
        })?;
        Ok(())
    }

    /// Build the whole package, returning the path of the archive.
    ///
    /// Nothing is rolled back on failure: the staging directory may be left partially filled.
    pub fn assemble<P: AsRef<Path>>(
        &self,
        description: P,
        config: &BocaConfig,
    ) -> Result<PathBuf, Error> {
        self.merge(config.defaults_path())?;
        self.write_description(description, config)?;
        let archive = self.archive_path();
        zip_dir(&self.target_dir, &archive, !config.keep_staging)
            .with_context(|| format!("Failed to archive problem {}", self.problem.name))?;
        info!("Problem {} archived in {}", self.problem.name, archive.display());
        Ok(archive)
    }
}
