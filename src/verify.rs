use std::fmt::{Display, Write};

use crate::capability::Capability;
use crate::error::{MockError, MockResult};

/// How many times a watched call is expected to have been invoked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CountExpectation {
    Exactly(usize),
    AtLeast(usize),
}

impl CountExpectation {
    fn is_met_by(self, actual: usize) -> bool {
        match self {
            Self::Exactly(target) => actual == target,
            Self::AtLeast(target) => actual >= target,
        }
    }
}

pub(crate) fn verify_count(
    capability: &Capability,
    name: &str,
    expectation: CountExpectation,
) -> MockResult<()> {
    if !capability.is_watched(name) {
        return Err(MockError::NotWatched {
            name: name.to_string(),
        });
    }

    let actual = capability.called_times(name);
    if expectation.is_met_by(actual) {
        Ok(())
    } else {
        Err(MockError::CountMismatch {
            name: name.to_string(),
            expectation,
            actual,
        })
    }
}

pub(crate) fn verify_tally<'n>(
    capability: &Capability,
    expected: impl IntoIterator<Item = (&'n str, usize)>,
) -> MockResult<()> {
    let mut expected: Vec<(&str, usize)> = expected.into_iter().collect();
    expected.sort_by(|a, b| a.0.cmp(b.0));

    let actual = render_tally(capability.tally());
    let expected = render_tally(expected);

    if actual == expected {
        Ok(())
    } else {
        Err(MockError::TallyMismatch { actual, expected })
    }
}

fn render_tally<'n>(tally: impl IntoIterator<Item = (&'n str, usize)>) -> String {
    let mut rendered = String::new();
    for (name, count) in tally {
        // writing into a String cannot fail
        let _ = writeln!(rendered, "{name}: {count}");
    }
    rendered
}

pub(crate) struct Diff<'s> {
    actual: &'s str,
    expected: &'s str,
}

impl<'s> Diff<'s> {
    pub fn new(actual: &'s impl AsRef<str>, expected: &'s impl AsRef<str>) -> Self {
        Self {
            actual: actual.as_ref(),
            expected: expected.as_ref(),
        }
    }
}

impl<'s> Display for Diff<'s> {
    #[cfg(feature = "pretty-print")]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let comparison = pretty_assertions::StrComparison::new(self.actual, self.expected);
        write!(f, "{comparison}")
    }

    #[cfg(not(feature = "pretty-print"))]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  actual:")?;
        write!(f, "{}", self.actual)?;
        writeln!(f, "expected:")?;
        write!(f, "{}", self.expected)?;
        Ok(())
    }
}

#[test]
fn tally_renders_one_line_per_name() {
    assert_eq!("a: 1\nb: 0\n", render_tally([("a", 1), ("b", 0)]));
    assert_eq!("", render_tally([]));
}

#[test]
fn at_least_accepts_more_calls() {
    assert!(CountExpectation::AtLeast(2).is_met_by(3));
    assert!(!CountExpectation::AtLeast(2).is_met_by(1));
    assert!(CountExpectation::Exactly(0).is_met_by(0));
}
