use core::any::Any;
use std::collections::BTreeMap;

use crate::name::CallName;
use crate::output::Output;

/// A stored return value that can be produced any number of times.
pub(crate) trait StubCell {
    fn produce(&self) -> Output;

    fn type_name(&self) -> &'static str;
}

pub(crate) struct CloneCell<V>(pub V);

impl<V: Any + Clone> StubCell for CloneCell<V> {
    fn produce(&self) -> Output {
        Output::new(self.0.clone())
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<V>()
    }
}

/// Call name to canned return value.
#[derive(Default)]
pub(crate) struct StubTable {
    stubs: BTreeMap<CallName, Box<dyn StubCell>>,
}

impl StubTable {
    /// Last write wins.
    pub fn insert<V: Any + Clone>(&mut self, name: CallName, value: V) {
        self.stubs.insert(name, Box::new(CloneCell(value)));
    }

    pub fn get(&self, name: &str) -> Option<&dyn StubCell> {
        self.stubs.get(name).map(|cell| &**cell)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stubs.contains_key(name)
    }
}

#[test]
fn last_write_wins() {
    let mut table = StubTable::default();
    table.insert("answer".into(), 1_u8);
    table.insert("answer".into(), "forty-two");

    let cell = table.get("answer").unwrap();
    assert_eq!("&str", cell.type_name());
    assert_eq!(Some(&"forty-two"), cell.produce().downcast_ref::<&str>());
}

#[test]
fn produces_a_fresh_clone_on_each_call() {
    let mut table = StubTable::default();
    table.insert("greet".into(), String::from("hi"));

    let cell = table.get("greet").unwrap();
    assert_eq!(Ok(String::from("hi")), cell.produce().take::<String>("greet"));
    assert_eq!(Ok(String::from("hi")), cell.produce().take::<String>("greet"));
}
