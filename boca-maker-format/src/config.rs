use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};

/// Configuration of the contest builder: where the problems and the templates are, and how the
/// contest document is typeset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BocaConfig {
    /// Root of the tree with the problems, searched recursively.
    pub problems_dir: PathBuf,
    /// Directory with `contest.tex`, `problem.info` and the BOCA defaults tree.
    pub templates_dir: PathBuf,
    /// The BOCA defaults tree, relative to `templates_dir`.
    pub defaults_dir: PathBuf,
    /// Command line of the typesetter, the document file name is appended to it.
    pub typesetter: String,
    /// How many times the typesetter is run, LaTeX needs more than one pass for references.
    pub typesetter_runs: u32,
    /// The command used in the problem statements for declaring the full name of the problem.
    pub name_marker: String,
    /// Keep the staging directories of the problems after they have been archived.
    pub keep_staging: bool,
}

impl Default for BocaConfig {
    fn default() -> Self {
        BocaConfig {
            problems_dir: "./problems".into(),
            templates_dir: "./templates".into(),
            defaults_dir: "BocaDefaults".into(),
            typesetter: "pdflatex -interaction=nonstopmode -halt-on-error".into(),
            typesetter_runs: 2,
            name_marker: "NomeDoProblema".into(),
            keep_staging: false,
        }
    }
}

impl BocaConfig {
    /// Parse the configuration from a YAML file. Missing fields keep their default value.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<BocaConfig, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open configuration at {}", path.display()))?;
        let config: BocaConfig =
            serde_yaml::from_reader(file).context("Failed to deserialize the configuration")?;
        Ok(config)
    }

    /// Path of the BOCA defaults tree.
    pub fn defaults_path(&self) -> PathBuf {
        self.templates_dir.join(&self.defaults_dir)
    }
}
