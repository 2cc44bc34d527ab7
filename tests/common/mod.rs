#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Typesetter that copies the document into the PDF, without needing LaTeX.
pub const FAKE_TYPESETTER: &str = r#"sh -c 'cp "$1" "$(basename "$1" .tex).pdf"' sh"#;

/// A directory laid out like the one `boca-maker` expects to be run from: `templates/` and
/// `problems/` in the current directory.
pub struct TestContest {
    pub tmpdir: tempfile::TempDir,
}

impl TestContest {
    pub fn new() -> TestContest {
        let test = TestContest {
            tmpdir: tempfile::TempDir::new().unwrap(),
        };
        test.write(
            "templates/contest.tex",
            "% FILE_NAME\nCONTEST_DATE\n\\begin{document}\nINDENTED_PROBLEMS\n\\end{document}\n",
        );
        test.write(
            "templates/problem.info",
            "basename=BASE_NAME\nfullname=FULL_NAME\ndescfile=DESCRIPTION_FILE\n",
        );
        test.write("templates/BocaDefaults/limits/c", "echo 1\n");
        test.write("templates/BocaDefaults/compare/c", "diff \"$1\" \"$2\"\n");
        test
    }

    pub fn path(&self) -> &Path {
        self.tmpdir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, content: &str) {
        let path = self.path().join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn add_problem(&self, group: &str, name: &str, full_name: &str) {
        let dir = Path::new("problems").join(group).join(name);
        self.write(dir.join("input/1"), "3\n");
        self.write(dir.join("output/1"), "Fizz\n");
        self.write(
            dir.join(format!("{}.tex", name)),
            &format!("\\NomeDoProblema{{{}}}\n", full_name),
        );
    }

    /// Run `boca-maker` inside the test directory, with the fake typesetter.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_boca-maker"))
            .current_dir(self.path())
            .arg("--typesetter")
            .arg(FAKE_TYPESETTER)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}
