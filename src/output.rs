use core::any::Any;

use crate::error::{MockError, MockResult};

/// The value produced by invoking a call on a mock-enabled object.
///
/// A watched call without a stub produces the unit value `()`.
pub struct Output {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Output {
    pub fn new<V: Any>(value: V) -> Self {
        Self {
            value: Box::new(value),
            type_name: core::any::type_name::<V>(),
        }
    }

    /// The output of a call that has nothing meaningful to return.
    pub fn unit() -> Self {
        Self::new(())
    }

    pub fn is_unit(&self) -> bool {
        self.value.is::<()>()
    }

    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref()
    }

    /// Name of the type this output was created from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn into_any(self) -> Box<dyn Any> {
        self.value
    }

    /// Take the inner value as `V`, attributing a failure to the call `name`.
    pub fn take<V: Any>(self, name: &str) -> MockResult<V> {
        let actual = self.type_name;
        self.value
            .downcast::<V>()
            .map(|value| *value)
            .map_err(|_| MockError::Downcast {
                name: name.to_string(),
                expected: core::any::type_name::<V>(),
                actual,
            })
    }
}

impl core::fmt::Debug for Output {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Output").field(&self.type_name).finish()
    }
}

#[test]
fn unit_output_takes_as_unit() {
    let output = Output::unit();
    assert!(output.is_unit());
    assert_eq!(Ok(()), output.take::<()>("ping"));
}

#[test]
fn take_reports_both_types_on_mismatch() {
    let error = Output::new(42_i32).take::<String>("answer").unwrap_err();
    match error {
        MockError::Downcast {
            name,
            expected,
            actual,
        } => {
            assert_eq!("answer", name);
            assert!(expected.ends_with("String"));
            assert_eq!("i32", actual);
        }
        other => panic!("unexpected error: {other}"),
    }
}
