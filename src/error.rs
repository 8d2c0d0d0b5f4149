use crate::counter::NCalls;
use crate::verify::CountExpectation;

/// Result type of fallible [Mockable](crate::Mockable) operations.
pub type MockResult<T> = Result<T, MockError>;

/// Errors produced by a mock-enabled object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MockError {
    /// The call name has no route and the host has no original call by that name.
    CallNotFound { name: String },
    /// The value produced for a call was not of the requested type.
    Downcast {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// Verification was requested for a call name that was never watched.
    NotWatched { name: String },
    /// A watched call was not invoked the expected number of times.
    CountMismatch {
        name: String,
        expectation: CountExpectation,
        actual: usize,
    },
    /// The complete tally of watched calls differed from the expected one.
    TallyMismatch { actual: String, expected: String },
}

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CallNotFound { name } => {
                write!(f, "{name}: No stub, watch or original implementation found.")
            }
            Self::Downcast {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{name}: Expected output of type {expected}, but the call produced {actual}."
                )
            }
            Self::NotWatched { name } => {
                write!(f, "{name}: Cannot verify calls, the name is not watched.")
            }
            Self::CountMismatch {
                name,
                expectation,
                actual,
            } => {
                let actual_calls = NCalls(*actual);
                match expectation {
                    CountExpectation::Exactly(target) => {
                        let target_calls = NCalls(*target);
                        write!(f, "{name}: Expected exactly {target_calls}, but it was actually called {actual_calls}.")
                    }
                    CountExpectation::AtLeast(target) => {
                        let target_calls = NCalls(*target);
                        write!(f, "{name}: Expected at least {target_calls}, but it was actually called {actual_calls}.")
                    }
                }
            }
            Self::TallyMismatch { actual, expected } => {
                writeln!(f, "Call tally mismatch (actual / expected):")?;
                write!(f, "{}", crate::verify::Diff::new(actual, expected))
            }
        }
    }
}

impl std::error::Error for MockError {}
