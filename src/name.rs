use std::borrow::{Borrow, Cow};
use std::fmt::Display;

/// The identifier of a zero-argument call on a mock-enabled object.
///
/// Static names are stored without allocating.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallName(Cow<'static, str>);

impl CallName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for CallName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for CallName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

// Lets the tables be queried with a plain `&str`.
impl Borrow<str> for CallName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for CallName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
