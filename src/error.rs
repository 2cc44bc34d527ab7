use anyhow::Error;

use boca_maker_format::FormatError;

/// Adds methods for failing without panic. Like `unwrap` but without panic.
pub trait NiceError<T> {
    /// Fail exiting with `1` if the value is an error, printing the error and all its causes to
    /// stderr. Otherwise return the content.
    fn nice_unwrap(self) -> T;
}

/// Suggestion printed after some of the errors.
fn hint(error: &Error) -> Option<&'static str> {
    match error.downcast_ref::<FormatError>()? {
        FormatError::ProblemNotFound { .. } => {
            Some("check the problem name, or point --problems-dir to the right directory")
        }
        FormatError::TypesetterFailed { .. } => {
            Some("run with -vv to see the output of the typesetter, or change it with --typesetter")
        }
        FormatError::TooManyProblems { .. } => {
            Some("split the problems in more than one contest")
        }
        _ => None,
    }
}

fn print_error(error: Error) {
    debug!("{:?}", error);
    let mut fail: &dyn std::error::Error = error.as_ref();
    eprintln!("Error: {fail}");
    while let Some(cause) = fail.source() {
        eprintln!("\nCaused by:\n    {cause}");
        fail = cause;
    }
    if let Some(hint) = hint(&error) {
        eprintln!("\nHint: {hint}");
    }
}

impl<T> NiceError<T> for Result<T, Error> {
    fn nice_unwrap(self) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        }
    }
}
