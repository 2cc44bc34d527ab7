use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use boca_maker_format::{build_contest, BocaConfig, Contest, FormatError, Label};

mod utils;

#[test]
fn test_build_contest_end_to_end() {
    let ws = utils::Workspace::new();
    ws.add_problem("basico", "fizzbuzz", "Fizz Buzz");
    ws.add_problem("leds", "easyled", "Easy LED");

    let output = build_contest(
        &["fizzbuzz", "easyled"],
        "2024-05-01.tex",
        ws.out_dir(),
        Some("1 de maio de 2024".into()),
        &ws.config(),
    )
    .unwrap();

    let contest_dir = ws.out_dir().join("2024-05-01");
    assert_eq!(output.dir, contest_dir);
    assert_eq!(output.document, contest_dir.join("2024-05-01.tex"));
    assert_eq!(output.description, contest_dir.join("2024-05-01.pdf"));
    assert!(output.document.exists());
    assert!(output.description.exists());
    assert!(contest_dir.join("A.zip").exists());
    assert!(contest_dir.join("B.zip").exists());
    // the staging directories are swept away
    assert!(!contest_dir.join("fizzbuzz").exists());
    assert!(!contest_dir.join("easyled").exists());

    let document = std::fs::read_to_string(&output.document).unwrap();
    let problems = ws.path().canonicalize().unwrap().join("problems");
    assert!(document.starts_with("% 2024-05-01.tex - "));
    assert!(document.contains("\\data{1 de maio de 2024}%\n"));
    assert!(document.contains(&format!(
        "\t\\Problema[{}]{{fizzbuzz}}%\n\t\\Problema[{}]{{easyled}}%\n\\end{{document}}",
        problems.join("basico").display(),
        problems.join("leds").display()
    )));

    assert_eq!(
        utils::zip_content(contest_dir.join("A.zip"), "description/problem.info"),
        "basename=A\nfullname=Fizz Buzz\ndescfile=2024-05-01.pdf\n"
    );
    assert_eq!(
        utils::zip_content(contest_dir.join("B.zip"), "description/problem.info"),
        "basename=B\nfullname=Easy LED\ndescfile=2024-05-01.pdf\n"
    );
}

#[test]
fn test_build_contest_labels_in_order() {
    let ws = utils::Workspace::new();
    ws.add_problem("x", "zeta", "Zeta");
    ws.add_problem("x", "alpha", "Alpha");
    ws.add_problem("y", "mid", "Mid");

    let output = build_contest(
        &["zeta", "alpha", "mid"],
        "contest.tex",
        ws.out_dir(),
        None,
        &ws.config(),
    )
    .unwrap();

    let labels: Vec<_> = output.archives.iter().map(|(l, _)| l.to_string()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    for ((label, archive), full_name) in output.archives.iter().zip(["Zeta", "Alpha", "Mid"]) {
        assert_eq!(
            archive.file_name().unwrap().to_string_lossy(),
            format!("{}.zip", label)
        );
        let info = utils::zip_content(archive, "description/problem.info");
        assert!(info.contains(&format!("fullname={}\n", full_name)), "{}", info);
    }

    let document = std::fs::read_to_string(&output.document).unwrap();
    assert!(!document.contains("CONTEST_DATE"));
    assert!(!document.contains("\\data"));
}

#[test]
fn test_build_contest_missing_problem() {
    let ws = utils::Workspace::new();
    ws.add_problem("basico", "fizzbuzz", "Fizz Buzz");

    let err = build_contest(
        &["fizzbuzz", "hardled"],
        "contest.tex",
        ws.out_dir(),
        None,
        &ws.config(),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::ProblemNotFound { name, .. }) if name == "hardled"
    ));
    assert!(!ws.out_dir().exists());
}

#[test]
fn test_build_contest_invalid_document() {
    let ws = utils::Workspace::new();
    ws.add_problem("basico", "fizzbuzz", "Fizz Buzz");

    let err = build_contest(
        &["fizzbuzz"],
        "contest.pdf",
        ws.out_dir(),
        None,
        &ws.config(),
    )
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<FormatError>(),
        Some(&FormatError::InvalidDocumentName("contest.pdf".into()))
    );
}

#[test]
fn test_build_contest_typesetter_failure() {
    let ws = utils::Workspace::new();
    ws.add_problem("basico", "fizzbuzz", "Fizz Buzz");
    let config = BocaConfig {
        typesetter: "false".into(),
        ..ws.config()
    };

    let err = build_contest(&["fizzbuzz"], "contest.tex", ws.out_dir(), None, &config)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::TypesetterFailed { .. })
    ));
    assert!(ws.out_dir().join("contest/contest.tex").exists());
    assert!(!ws.out_dir().join("contest/A.zip").exists());
}

#[test]
fn test_build_contest_too_many_problems() {
    let ws = utils::Workspace::new();
    let names: Vec<String> = (0..27).map(|i| format!("p{:02}", i)).collect();
    for name in &names {
        ws.add_problem("many", name, name);
    }

    let contest = Contest::new(&names, "big.tex", None, &ws.config()).unwrap();
    let err = contest.build(ws.out_dir(), &ws.config()).unwrap_err();

    assert_eq!(
        err.downcast_ref::<FormatError>(),
        Some(&FormatError::TooManyProblems { count: 27, max: 26 })
    );
    assert!(!ws.out_dir().exists());
}

#[test]
fn test_build_contest_bad_problem_aborts() {
    let ws = utils::Workspace::new();
    ws.add_problem("basico", "fizzbuzz", "Fizz Buzz");
    let dir = ws.add_problem("basico", "broken", "Broken");
    std::fs::write(dir.join("broken.tex"), "no marker here\n").unwrap();

    let err = build_contest(
        &["fizzbuzz", "broken"],
        "contest.tex",
        ws.out_dir(),
        None,
        &ws.config(),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::MissingMarker { .. })
    ));
    assert!(ws.out_dir().join("contest/A.zip").exists());
    assert!(!ws.out_dir().join("contest/B.zip").exists());
}

#[test]
fn test_build_contest_keep_staging() {
    let ws = utils::Workspace::new();
    ws.add_problem("basico", "fizzbuzz", "Fizz Buzz");
    let config = BocaConfig {
        keep_staging: true,
        ..ws.config()
    };

    let output = build_contest(&["fizzbuzz"], "contest.tex", ws.out_dir(), None, &config).unwrap();

    assert_that!(output.archives).has_length(1);
    assert_eq!(output.archives[0].0, Label::from_index(0).unwrap());
    assert!(output.dir.join("fizzbuzz/input/1").exists());
    assert!(output.dir.join("fizzbuzz/description/problem.info").exists());
}
