use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use itertools::Itertools;

use crate::archive::ProblemArchive;
use crate::fs_utils::{make_dir, remove_empty_dirs};
use crate::template::{fill_template, Replacements};
use crate::{find_problem, BocaConfig, FormatError, Label, Problem, Typesetter};

/// Name of the template of the contest document.
pub const CONTEST_TEMPLATE: &str = "contest.tex";

/// Extension of the contest document, including the dot.
const DOCUMENT_EXTENSION: &str = ".tex";

/// A contest: the ordered list of its problems and the document describing them.
#[derive(Debug, Clone)]
pub struct Contest {
    /// Name of the contest, it's the name of the document without the extension.
    pub name: String,
    /// File name of the contest document.
    pub document: String,
    /// The problems of the contest, in order.
    pub problems: Vec<Problem>,
    /// The date of the contest, printed in the document.
    pub date: Option<String>,
}

/// What has been produced by `Contest::build`.
#[derive(Debug, Clone)]
pub struct ContestOutput {
    /// The directory with all the files of the contest.
    pub dir: PathBuf,
    /// The source of the contest document.
    pub document: PathBuf,
    /// The compiled contest document.
    pub description: PathBuf,
    /// The archive of each problem, in order.
    pub archives: Vec<(Label, PathBuf)>,
}

/// Validate the name of the contest document and return the name of the contest.
pub fn contest_name(document: &str) -> Result<String, Error> {
    let has_extension = document.len() > DOCUMENT_EXTENSION.len()
        && document.is_char_boundary(document.len() - DOCUMENT_EXTENSION.len())
        && document[document.len() - DOCUMENT_EXTENSION.len()..]
            .eq_ignore_ascii_case(DOCUMENT_EXTENSION);
    if !has_extension || document.contains(std::path::is_separator) {
        return Err(FormatError::InvalidDocumentName(document.into()).into());
    }
    Ok(document[..document.len() - DOCUMENT_EXTENSION.len()].to_string())
}

impl Contest {
    /// Find all the problems of a contest inside `config.problems_dir`, failing on the first
    /// one that cannot be found.
    pub fn new<S: AsRef<str>>(
        problem_names: &[S],
        document: &str,
        date: Option<String>,
        config: &BocaConfig,
    ) -> Result<Contest, Error> {
        let name = contest_name(document)?;
        // absolute paths, so that the document can be compiled from any directory
        let root = std::fs::canonicalize(&config.problems_dir).with_context(|| {
            format!(
                "Problems directory {} not found",
                config.problems_dir.display()
            )
        })?;
        let problems = problem_names
            .iter()
            .map(|name| find_problem(name.as_ref(), &root))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Contest {
            name,
            document: document.into(),
            problems,
            date,
        })
    }

    /// The labels of the problems, in order.
    pub fn labels(&self) -> Result<Vec<Label>, Error> {
        Label::assign(self.problems.len())
    }

    /// The substitutions for the `contest.tex` template.
    pub fn replacements(&self, generated_on: &str) -> Replacements {
        let mut replacements = Replacements::new();
        replacements
            .insert("FILE_NAME", self.document.as_str())
            .insert("FILE_DATE", generated_on);
        match &self.date {
            Some(date) => replacements.insert("CONTEST_DATE", format!("\\data{{{}}}%", date)),
            // drop the whole line
            None => replacements.insert("\nCONTEST_DATE", ""),
        };
        let problems = self
            .problems
            .iter()
            .map(|p| format!("\t\\Problema[{}]{{{}}}%\n", p.dir.display(), p.name))
            .join("");
        replacements.insert("INDENTED_PROBLEMS\n", problems);
        replacements
    }

    /// Write the source of the contest document inside `contest_dir`, returning its path.
    pub fn write_document<P: AsRef<Path>>(
        &self,
        contest_dir: P,
        config: &BocaConfig,
    ) -> Result<PathBuf, Error> {
        let path = contest_dir.as_ref().join(&self.document);
        if path.is_file() {
            warn!("The file {} will be overwritten", path.display());
        }
        let today = chrono::Local::now().format("%d/%m/%Y").to_string();
        fill_template(
            &config.templates_dir,
            CONTEST_TEMPLATE,
            &path,
            &self.replacements(&today),
        )
        .context("Failed to write the contest document")?;
        Ok(path)
    }

    /// Build the whole contest inside `base_dir/<name>`: the document, its PDF and one archive
    /// per problem. The first error aborts the build.
    pub fn build<P: AsRef<Path>>(
        &self,
        base_dir: P,
        config: &BocaConfig,
    ) -> Result<ContestOutput, Error> {
        let labels = self.labels()?;
        let typesetter = Typesetter::from_config(config)?;
        let contest_dir = base_dir.as_ref().join(&self.name);
        make_dir(&contest_dir)?;

        let document = self.write_document(&contest_dir, config)?;
        let description = typesetter.compile(&self.document, &contest_dir)?;

        let mut archives = vec![];
        for (label, problem) in labels.into_iter().zip(self.problems.iter()) {
            info!("=== {} - {} ===", label, problem.name);
            let target_dir = contest_dir.join(&problem.name);
            let archive = ProblemArchive::new(problem.clone(), label, target_dir)
                .assemble(&description, config)
                .with_context(|| format!("Failed to build the package of {}", problem.name))?;
            archives.push((label, archive));
        }

        let removed = remove_empty_dirs(&contest_dir)?;
        debug!("Removed {} empty directories", removed);
        Ok(ContestOutput {
            dir: contest_dir,
            document,
            description,
            archives,
        })
    }
}

/// Locate the problems and build the contest described by the document `document` inside
/// `base_dir`.
pub fn build_contest<S: AsRef<str>, P: AsRef<Path>>(
    problem_names: &[S],
    document: &str,
    base_dir: P,
    date: Option<String>,
    config: &BocaConfig,
) -> Result<ContestOutput, Error> {
    let contest = Contest::new(problem_names, document, date, config)?;
    contest.build(base_dir, config)
}
