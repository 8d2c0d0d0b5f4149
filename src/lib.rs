//!
//! `simplemock` attaches stubbing and call counting to any value, without changing what that value already does.
//!
//! A mock-enabled object is a [Mockable]. Get a fresh one from [SimpleMock::new], or graft the capability
//! onto an existing value with [SimpleMock::mock]:
//!
//! ```rust
//! use simplemock::*;
//!
//! let mut mock = SimpleMock::new();
//! mock.expects("greet", "hi");
//! mock.watch("greet");
//!
//! assert_eq!("hi", mock.call::<&str>("greet").unwrap());
//! assert_eq!("hi", mock.call::<&str>("greet").unwrap());
//! assert_eq!(2, mock.called_times("greet"));
//! ```
//!
//! # Stubs and watches
//! [expects](Mockable::expects) registers a value that is returned, by clone, every time the call is invoked.
//! [watch](Mockable::watch) starts counting invocations of a call.
//! The two can be combined for the same name, in any order:
//!
//! | stubbed | watched | invoking the call |
//! |---------|---------|-------------------|
//! | no      | no      | calls the host's original, if any |
//! | yes     | no      | returns the stub |
//! | no      | yes     | counts, returns `()` |
//! | yes     | yes     | counts, then returns the stub |
//!
//! Registering again never loses information: a second `watch` keeps the count,
//! and a second `expects` replaces only the stubbed value.
//!
//! # Existing values
//! The host stays reachable through [Deref](core::ops::Deref), so its fields and methods keep working:
//!
//! ```rust
//! use simplemock::*;
//!
//! struct Point {
//!     x: i32,
//! }
//!
//! #[simplemock::passthrough]
//! impl Point {
//!     fn norm(&self) -> i32 {
//!         self.x.abs()
//!     }
//! }
//!
//! let mut point = SimpleMock::mock(Point { x: -3 });
//! assert_eq!(-3, point.x);
//! assert_eq!(3, point.call::<i32>("norm").unwrap());
//!
//! point.expects("norm", 0);
//! assert_eq!(0, point.call::<i32>("norm").unwrap());
//! assert_eq!(3, point.norm());
//! ```
//!
//! Names the host does not know, and that are neither stubbed nor watched, fail with [MockError::CallNotFound].
//!

#![forbid(unsafe_code)]

mod capability;
mod counter;
mod dispatch;
mod error;
mod name;
mod output;
mod passthrough;
mod stub;
mod verify;

use core::any::Any;
use core::ops::{Deref, DerefMut};

use tracing::debug;

use capability::Capability;

pub use dispatch::Route;
pub use error::{MockError, MockResult};
pub use name::CallName;
pub use output::Output;
pub use passthrough::{Attach, Blank, Passthrough};
pub use verify::CountExpectation;

///
/// Implement [Passthrough] and [Attach] for a type from an inherent impl block.
///
/// Every method taking only `&self`, without generics or borrowed output, becomes an original call
/// reachable by its name. The impl block itself is emitted unchanged.
///
/// # Attributes
/// * `prefix = path`: path to this crate, defaults to `::simplemock`.
///
pub use simplemock_macros::passthrough;

/// Entry points for creating mock-enabled objects.
pub struct SimpleMock;

impl SimpleMock {
    /// A fresh [Blank] object with mock capability. Equivalent to `SimpleMock::mock(Blank)`.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Mockable<Blank> {
        Self::mock(Blank)
    }

    /// Attach mock capability to `target`.
    ///
    /// `target` is moved in unchanged. Mocking an object that is already a [Mockable]
    /// returns it as-is, keeping every stub and count.
    pub fn mock<A: Attach>(target: A) -> Mockable<A::Host> {
        target.attach()
    }
}

/// What to do with a call name that has no stub and no watch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Fallback {
    /// Consult the host's [Passthrough] implementation.
    #[default]
    Passthrough,
    /// Never reach the host. Unregistered names fail with [MockError::CallNotFound].
    Strict,
}

/// An object carrying stub and call counting capability next to its original host value.
///
/// Single-threaded by construction: a `Mockable` is neither [Send] nor [Sync].
///
/// Host methods sharing a name with a `Mockable` method, like `watch` or `call`, are shadowed
/// under auto-deref. Reach them through [host](Mockable::host).
pub struct Mockable<T> {
    host: T,
    fallback: Fallback,
    capability: Capability,
}

impl<T> Mockable<T> {
    /// Attach mock capability to any value, whether or not it implements [Attach].
    pub fn wrap(host: T) -> Self {
        debug!(host = core::any::type_name::<T>(), "attached mock capability");
        Self {
            host,
            fallback: Fallback::default(),
            capability: Capability::default(),
        }
    }

    /// Configure how calls without a route are handled.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Register `value` as the return value of the call `name`. The last registration wins.
    ///
    /// If `name` is watched, every invocation is also counted.
    pub fn expects<V: Any + Clone>(&mut self, name: impl Into<CallName>, value: V) {
        self.capability.expects(name.into(), value);
    }

    /// Start counting invocations of the call `name`.
    ///
    /// Watching a name again does not reset its count.
    /// Without a stub, invoking the call returns `()`.
    pub fn watch(&mut self, name: impl Into<CallName>) {
        self.capability.watch(name.into());
    }

    /// How many times `name` has been invoked since it was first watched. `0` for unwatched names.
    pub fn called_times(&self, name: &str) -> usize {
        self.capability.called_times(name)
    }

    /// Whether a stub is registered for `name`.
    pub fn is_stubbed(&self, name: &str) -> bool {
        self.capability.is_stubbed(name)
    }

    /// Whether `name` is watched.
    pub fn is_watched(&self, name: &str) -> bool {
        self.capability.is_watched(name)
    }

    /// The route installed for `name`, or `None` if calls pass through to the host.
    pub fn route(&self, name: &str) -> Option<Route> {
        self.capability.route(name)
    }

    /// All watched names with their current counts, sorted by name.
    pub fn tally(&self) -> Vec<(&str, usize)> {
        self.capability.tally().collect()
    }

    /// Check the count of one watched call.
    pub fn verify(&self, name: &str, expectation: CountExpectation) -> MockResult<()> {
        verify::verify_count(&self.capability, name, expectation)
    }

    /// Check the counts of all watched calls at once.
    ///
    /// `expected` must name every watched call. Order does not matter.
    pub fn verify_tally<'n>(
        &self,
        expected: impl IntoIterator<Item = (&'n str, usize)>,
    ) -> MockResult<()> {
        verify::verify_tally(&self.capability, expected)
    }

    /// Borrow the host value.
    pub fn host(&self) -> &T {
        &self.host
    }

    /// Mutably borrow the host value.
    pub fn host_mut(&mut self) -> &mut T {
        &mut self.host
    }

    /// Detach the capability and give back the host value.
    pub fn into_inner(self) -> T {
        self.host
    }
}

impl<T: Passthrough> Mockable<T> {
    /// Invoke the call `name`.
    ///
    /// The installed route decides the outcome. Without one, the host's original call runs,
    /// unless the fallback is [Fallback::Strict].
    pub fn invoke(&self, name: &str) -> MockResult<Output> {
        if let Some(output) = self.capability.dispatch(name) {
            return Ok(output);
        }

        let original = match self.fallback {
            Fallback::Passthrough => self.host.call_original(name),
            Fallback::Strict => None,
        };

        original.ok_or_else(|| MockError::CallNotFound {
            name: name.to_string(),
        })
    }

    /// Invoke the call `name` and take its output as a `V`.
    pub fn call<V: Any>(&self, name: &str) -> MockResult<V> {
        self.invoke(name)?.take(name)
    }
}

impl Default for Mockable<Blank> {
    fn default() -> Self {
        SimpleMock::new()
    }
}

impl<T> Deref for Mockable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.host
    }
}

impl<T> DerefMut for Mockable<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.host
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Mockable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct Routes<'c>(&'c Capability);

        impl<'c> core::fmt::Debug for Routes<'c> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_map().entries(self.0.routes()).finish()
            }
        }

        f.debug_struct("Mockable")
            .field("host", &self.host)
            .field("fallback", &self.fallback)
            .field("routes", &Routes(&self.capability))
            .finish()
    }
}
