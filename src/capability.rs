use core::any::Any;

use tracing::{debug, trace};

use crate::counter::CallCounters;
use crate::dispatch::{DispatchTable, Handler, Route};
use crate::name::CallName;
use crate::output::Output;
use crate::stub::StubTable;

/// The private state a mock-enabled object carries next to its host.
///
/// Both tables are created on first use.
#[derive(Default)]
pub(crate) struct Capability {
    stubs: Option<StubTable>,
    counters: Option<CallCounters>,
    routes: DispatchTable,
}

impl Capability {
    pub fn expects<V: Any + Clone>(&mut self, name: CallName, value: V) {
        self.stubs
            .get_or_insert_with(Default::default)
            .insert(name.clone(), value);
        self.reroute(name);
    }

    pub fn watch(&mut self, name: CallName) {
        self.counters
            .get_or_insert_with(Default::default)
            .watch(name.clone());
        self.reroute(name);
    }

    pub fn called_times(&self, name: &str) -> usize {
        self.counters
            .as_ref()
            .and_then(|counters| counters.get(name))
            .map(|counter| counter.count())
            .unwrap_or(0)
    }

    pub fn is_stubbed(&self, name: &str) -> bool {
        self.stubs.as_ref().is_some_and(|stubs| stubs.contains(name))
    }

    pub fn is_watched(&self, name: &str) -> bool {
        self.counters
            .as_ref()
            .is_some_and(|counters| counters.contains(name))
    }

    pub fn route(&self, name: &str) -> Option<Route> {
        self.routes.get(name)
    }

    pub fn routes(&self) -> impl Iterator<Item = (&str, Route)> {
        self.routes.iter()
    }

    /// Watched names with their counts, sorted by name.
    pub fn tally(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counters.iter().flat_map(|counters| counters.iter())
    }

    /// Apply the route installed for `name`.
    ///
    /// Returns `None` when the call should pass through to the host.
    pub fn dispatch(&self, name: &str) -> Option<Output> {
        match self.resolve(name) {
            Handler::Stub(stub) => {
                trace!(call = name, output = stub.type_name(), "serving stub");
                Some(stub.produce())
            }
            Handler::Spy(counter) => {
                let count = counter.tick();
                trace!(call = name, count, "counted call");
                Some(Output::unit())
            }
            Handler::StubAndSpy(stub, counter) => {
                let count = counter.tick();
                trace!(
                    call = name,
                    count,
                    output = stub.type_name(),
                    "counted call, serving stub"
                );
                Some(stub.produce())
            }
            Handler::PassThrough => None,
        }
    }

    fn resolve(&self, name: &str) -> Handler<'_> {
        let stub = || self.stubs.as_ref().and_then(|stubs| stubs.get(name));
        let counter = || {
            self.counters
                .as_ref()
                .and_then(|counters| counters.get(name))
        };

        match self.routes.get(name) {
            Some(Route::Stub) => stub().map(Handler::Stub),
            Some(Route::Spy) => counter().map(Handler::Spy),
            Some(Route::StubAndSpy) => stub()
                .zip(counter())
                .map(|(stub, counter)| Handler::StubAndSpy(stub, counter)),
            None => None,
        }
        .unwrap_or(Handler::PassThrough)
    }

    fn reroute(&mut self, name: CallName) {
        let stubbed = self.is_stubbed(name.as_str());
        let watched = self.is_watched(name.as_str());

        if let Some(route) = Route::select(stubbed, watched) {
            let previous = self.routes.install(name.clone(), route);
            if previous != Some(route) {
                debug!(call = %name, ?previous, ?route, "installed dispatch route");
            }
        }
    }
}
