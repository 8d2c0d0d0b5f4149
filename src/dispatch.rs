use std::collections::BTreeMap;

use crate::counter::CallCounter;
use crate::name::CallName;
use crate::stub::StubCell;

/// The dispatch behavior installed for one call name.
///
/// A name without a route passes through to the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    /// Return the stubbed value.
    Stub,
    /// Count the call and return `()`.
    Spy,
    /// Count the call, then return the stubbed value.
    StubAndSpy,
}

impl Route {
    pub(crate) fn select(stubbed: bool, watched: bool) -> Option<Self> {
        match (stubbed, watched) {
            (false, false) => None,
            (true, false) => Some(Self::Stub),
            (false, true) => Some(Self::Spy),
            (true, true) => Some(Self::StubAndSpy),
        }
    }
}

/// A route resolved against the tables, ready to be applied.
pub(crate) enum Handler<'c> {
    Stub(&'c dyn StubCell),
    Spy(&'c CallCounter),
    StubAndSpy(&'c dyn StubCell, &'c CallCounter),
    PassThrough,
}

#[derive(Default)]
pub(crate) struct DispatchTable {
    routes: BTreeMap<CallName, Route>,
}

impl DispatchTable {
    /// Replace the route for `name`. Returns the previous one.
    pub fn install(&mut self, name: CallName, route: Route) -> Option<Route> {
        self.routes.insert(name, route)
    }

    pub fn get(&self, name: &str) -> Option<Route> {
        self.routes.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Route)> {
        self.routes
            .iter()
            .map(|(name, route)| (name.as_str(), *route))
    }
}

#[test]
fn route_selection_covers_all_combinations() {
    assert_eq!(None, Route::select(false, false));
    assert_eq!(Some(Route::Stub), Route::select(true, false));
    assert_eq!(Some(Route::Spy), Route::select(false, true));
    assert_eq!(Some(Route::StubAndSpy), Route::select(true, true));
}
