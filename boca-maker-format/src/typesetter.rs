use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Error};
use itertools::Itertools;
use regex::Regex;

use crate::{BocaConfig, FormatError};

lazy_static! {
    /// Matches the errors printed by LaTeX, capturing the message and the line number.
    static ref FIND_ERRORS: Regex = Regex::new(r"(?ms)^!(?: LaTeX Error:)? ([^\n]+).*?(^l\.\d+)")
        .expect("Invalid regex");
}

/// The external tool that compiles the contest document into a PDF.
#[derive(Debug, Clone)]
pub struct Typesetter {
    /// The program to run.
    program: String,
    /// The arguments passed before the name of the document.
    args: Vec<String>,
    /// How many times to run the program.
    runs: u32,
    /// Directories prepended to `TEXINPUTS`.
    search_dirs: Vec<PathBuf>,
}

impl Typesetter {
    /// Make a `Typesetter` from a command line like `"pdflatex -interaction=nonstopmode"`.
    pub fn new(command: &str, runs: u32) -> Result<Typesetter, Error> {
        let mut words = shell_words::split(command)
            .with_context(|| format!("Invalid typesetter command: {}", command))?;
        if words.is_empty() {
            return Err(anyhow!("The typesetter command is empty"));
        }
        let program = words.remove(0);
        Ok(Typesetter {
            program,
            args: words,
            runs: runs.max(1),
            search_dirs: vec![],
        })
    }

    /// Make the `Typesetter` described by the configuration. The templates directory is added
    /// to the TeX search path.
    pub fn from_config(config: &BocaConfig) -> Result<Typesetter, Error> {
        let mut typesetter = Typesetter::new(&config.typesetter, config.typesetter_runs)?;
        let templates_dir = std::fs::canonicalize(&config.templates_dir)
            .unwrap_or_else(|_| config.templates_dir.clone());
        typesetter.search_dirs.push(templates_dir);
        Ok(typesetter)
    }

    /// Compile `document`, a file inside `workdir`, returning the path of the produced PDF.
    pub fn compile<P: AsRef<Path>>(&self, document: &str, workdir: P) -> Result<PathBuf, Error> {
        let workdir = workdir.as_ref();
        let failure = |reason: String| FormatError::TypesetterFailed {
            document: workdir.join(document),
            reason,
        };
        let program = which::which(&self.program)
            .map_err(|e| failure(format!("cannot find '{}': {}", self.program, e)))?;

        for run in 1..=self.runs {
            info!("Typesetting {} ({}/{})", document, run, self.runs);
            let output = Command::new(&program)
                .args(&self.args)
                .arg(document)
                .current_dir(workdir)
                .env("TEXINPUTS", self.texinputs())
                .output()
                .with_context(|| format!("Failed to spawn {}", program.display()))?;
            trace!(
                "Typesetter stdout:\n{}",
                String::from_utf8_lossy(&output.stdout)
            );
            if !output.status.success() {
                let mut reason = format!("{} exited with {}", self.program, output.status);
                let errors = extract_errors(&String::from_utf8_lossy(&output.stdout));
                if !errors.is_empty() {
                    reason += "\n";
                    reason += &errors.join("\n");
                }
                return Err(failure(reason).into());
            }
        }

        let pdf = workdir.join(Path::new(document).with_extension("pdf"));
        if !pdf.exists() {
            return Err(failure(format!("{} was not produced", pdf.display())).into());
        }
        Ok(pdf)
    }

    /// The value of `TEXINPUTS`: the search directories, then the inherited value. The trailing
    /// separator makes TeX append its default paths.
    fn texinputs(&self) -> String {
        let inherited = std::env::var("TEXINPUTS").unwrap_or_default();
        let mut paths = self
            .search_dirs
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect_vec();
        paths.push(inherited.trim_end_matches(':').to_string());
        paths.into_iter().filter(|p| !p.is_empty()).join(":") + ":"
    }
}

/// Extract the errors from the output of LaTeX, one string per error.
fn extract_errors(content: &str) -> Vec<String> {
    // LaTeX may print the same error more than once
    let mut errors = HashSet::new();
    for cap in FIND_ERRORS.captures_iter(content) {
        let line = cap[2]
            .strip_prefix("l.")
            .and_then(|line| line.parse::<i32>().ok());
        errors.insert((line, cap[1].to_string()));
    }
    errors
        .into_iter()
        .sorted()
        .map(|(line, error)| match line {
            Some(line) => format!("Line {}: {}", line, error),
            None => error,
        })
        .collect()
}
