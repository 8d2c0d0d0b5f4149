use simplemock::*;

#[test]
fn stubbed_call_returns_value_on_every_invocation() {
    let mut mock = SimpleMock::new();
    mock.expects("imitated_method", true);

    assert!(mock.call::<bool>("imitated_method").unwrap());
    assert!(mock.call::<bool>("imitated_method").unwrap());
}

#[test]
fn unwatched_stub_is_never_counted() {
    let mut mock = SimpleMock::new();
    mock.expects("a", 1);

    for _ in 0..5 {
        assert_eq!(1, mock.call::<i32>("a").unwrap());
    }

    assert_eq!(0, mock.called_times("a"));
    assert!(mock.tally().is_empty());
}

#[test]
fn last_registration_wins() {
    let mut mock = SimpleMock::new();
    mock.expects("answer", 1);
    mock.expects("answer", 42);

    assert_eq!(42, mock.call::<i32>("answer").unwrap());
}

#[test]
fn restubbing_may_change_the_type() {
    let mut mock = SimpleMock::new();
    mock.expects("answer", 42);
    mock.expects("answer", String::from("forty-two"));

    assert_eq!("forty-two", mock.call::<String>("answer").unwrap());
}

#[test]
fn option_none_is_a_value_like_any_other() {
    let mut mock = SimpleMock::new();
    mock.expects("lookup", None::<u32>);

    assert_eq!(None, mock.call::<Option<u32>>("lookup").unwrap());
}

#[test]
fn objects_can_be_stubbed() {
    #[derive(Clone, Debug, PartialEq)]
    struct User {
        name: String,
    }

    let mut mock = SimpleMock::new();
    mock.expects(
        "current_user",
        User {
            name: "ferris".to_string(),
        },
    );

    assert_eq!(
        User {
            name: "ferris".to_string()
        },
        mock.call::<User>("current_user").unwrap()
    );
}

#[test]
fn function_values_are_returned_verbatim_not_invoked() {
    use std::rc::Rc;

    let mut mock = SimpleMock::new();
    let double: Rc<dyn Fn(i32) -> i32> = Rc::new(|n| n * 2);
    mock.expects("doubler", double);

    let returned = mock.call::<Rc<dyn Fn(i32) -> i32>>("doubler").unwrap();
    assert_eq!(8, returned(4));
}

#[test]
fn owned_names_work_like_static_names() {
    let mut mock = SimpleMock::new();
    let name = format!("method_{}", 7);
    mock.expects(name.clone(), 'x');

    assert_eq!('x', mock.call::<char>(&name).unwrap());
    assert_eq!('x', mock.call::<char>("method_7").unwrap());
}

#[test]
fn invoke_exposes_the_raw_output() {
    let mut mock = SimpleMock::new();
    mock.expects("greet", "hi");

    let output = mock.invoke("greet").unwrap();
    assert!(output.is::<&str>());
    assert!(!output.is_unit());
    assert_eq!(Some(&"hi"), output.downcast_ref::<&str>());
}
