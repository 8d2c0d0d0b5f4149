use core::cell::Cell;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::name::CallName;

pub(crate) struct CallCounter {
    actual_count: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self {
            actual_count: Cell::new(0),
        }
    }

    pub fn tick(&self) -> usize {
        let count = self.actual_count.get() + 1;
        self.actual_count.set(count);
        count
    }

    pub fn count(&self) -> usize {
        self.actual_count.get()
    }
}

/// Call name to invocation count. A key exists only for watched names.
#[derive(Default)]
pub(crate) struct CallCounters {
    counters: BTreeMap<CallName, CallCounter>,
}

impl CallCounters {
    /// Start counting `name`. An existing count is left untouched.
    pub fn watch(&mut self, name: CallName) {
        self.counters.entry(name).or_insert_with(CallCounter::new);
    }

    pub fn get(&self, name: &str) -> Option<&CallCounter> {
        self.counters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counters.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counters
            .iter()
            .map(|(name, counter)| (name.as_str(), counter.count()))
    }
}

pub(crate) struct NCalls(pub usize);

impl Display for NCalls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "no calls"),
            1 => write!(f, "1 call"),
            _ => write!(f, "{} calls", self.0),
        }
    }
}

#[test]
fn rewatching_keeps_the_count() {
    let mut counters = CallCounters::default();
    counters.watch("ping".into());
    counters.get("ping").unwrap().tick();
    counters.get("ping").unwrap().tick();

    counters.watch("ping".into());

    assert_eq!(2, counters.get("ping").unwrap().count());
}

#[test]
fn ncalls_display() {
    assert_eq!("no calls", NCalls(0).to_string());
    assert_eq!("1 call", NCalls(1).to_string());
    assert_eq!("3 calls", NCalls(3).to_string());
}
