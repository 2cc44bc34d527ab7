#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use boca_maker_format::BocaConfig;

/// Typesetter that copies the document into the PDF, without needing LaTeX.
pub const FAKE_TYPESETTER: &str = r#"sh -c 'cp "$1" "$(basename "$1" .tex).pdf"' sh"#;

pub const CONTEST_TEX: &str = "% FILE_NAME - FILE_DATE\n\\documentclass{article}\nCONTEST_DATE\n\\begin{document}\nINDENTED_PROBLEMS\n\\end{document}\n";

pub const PROBLEM_INFO: &str = "basename=BASE_NAME\nfullname=FULL_NAME\ndescfile=DESCRIPTION_FILE\n";

/// A fixture with a templates directory and a problems directory.
pub struct Workspace {
    pub tmpdir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Workspace {
        let ws = Workspace {
            tmpdir: tempfile::TempDir::new().unwrap(),
        };
        ws.write("templates/contest.tex", CONTEST_TEX);
        ws.write("templates/problem.info", PROBLEM_INFO);
        ws.write("templates/BocaDefaults/limits/c", "echo 1\necho 1\necho 512\necho 1024\n");
        ws.write("templates/BocaDefaults/limits/java", "echo 3\necho 1\necho 512\necho 1024\n");
        ws.write("templates/BocaDefaults/compile/c", "gcc \"$1\" -o \"$2\"\n");
        ws.write("templates/BocaDefaults/run/c", "./\"$1\" < \"$2\"\n");
        ws.write("templates/BocaDefaults/compare/c", "diff -q \"$1\" \"$2\"\n");
        ws.write("templates/BocaDefaults/tests/c", "exit 0\n");
        ws.write("templates/BocaDefaults/extra/ignored", "not a BOCA directory\n");
        ws.chmod("templates/BocaDefaults/compile/c", 0o755);
        ws
    }

    pub fn path(&self) -> &Path {
        self.tmpdir.path()
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, content: &str) -> PathBuf {
        let path = self.path().join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn chmod<P: AsRef<Path>>(&self, path: P, mode: u32) {
        let path = self.path().join(path);
        let mut perm = std::fs::metadata(&path).unwrap().permissions();
        perm.set_mode(mode);
        std::fs::set_permissions(&path, perm).unwrap();
    }

    /// Add a problem in `problems/<group>/<name>` with two testcases.
    pub fn add_problem(&self, group: &str, name: &str, full_name: &str) -> PathBuf {
        let dir = Path::new("problems").join(group).join(name);
        self.write(dir.join("input/1"), "1\n");
        self.write(dir.join("input/2"), "15\n");
        self.write(dir.join("output/1"), "1\n");
        self.write(dir.join("output/2"), "FizzBuzz\n");
        self.write(
            dir.join(format!("{}.tex", name)),
            &format!("\\NomeDoProblema{{{}}}\n\nEnunciado.\n", full_name),
        );
        self.path().join(dir)
    }

    pub fn config(&self) -> BocaConfig {
        BocaConfig {
            problems_dir: self.path().join("problems"),
            templates_dir: self.path().join("templates"),
            typesetter: FAKE_TYPESETTER.into(),
            typesetter_runs: 1,
            ..Default::default()
        }
    }

    pub fn out_dir(&self) -> PathBuf {
        self.path().join("out")
    }
}

/// The sorted list of entries of a zip file.
pub fn zip_entries<P: AsRef<Path>>(path: P) -> Vec<String> {
    let archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

/// The content of a file inside a zip file.
pub fn zip_content<P: AsRef<Path>>(path: P, name: &str) -> String {
    use std::io::Read;
    let mut archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}
