use crate::output::Output;
use crate::Mockable;

/// Exposes a host's original zero-argument calls by name.
///
/// A mock-enabled object consults this for names that have no stub and no watch.
/// The default implementation has no original calls at all, so opting in can be a one-liner:
///
/// ```rust
/// struct Point { x: i32 }
///
/// impl simplemock::Passthrough for Point {}
/// ```
///
/// The [passthrough](crate::passthrough) attribute generates an implementation from an inherent impl block.
pub trait Passthrough {
    /// Invoke the original call named `name`, or return `None` if there is no such call.
    fn call_original(&self, name: &str) -> Option<Output> {
        let _ = name;
        None
    }
}

/// Attach mock capability to a value.
///
/// Attaching to a [Mockable] yields the very same instance, tables intact.
pub trait Attach: Sized {
    /// The type hosting the capability.
    type Host;

    fn attach(self) -> Mockable<Self::Host>;
}

impl<T> Attach for Mockable<T> {
    type Host = T;

    fn attach(self) -> Mockable<T> {
        self
    }
}

/// A plain object with no behavior of its own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Blank;

impl Passthrough for Blank {}

impl Attach for Blank {
    type Host = Blank;

    fn attach(self) -> Mockable<Blank> {
        Mockable::wrap(self)
    }
}
