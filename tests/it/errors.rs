use simplemock::*;

#[test]
fn unknown_call_is_not_found() {
    let mock = SimpleMock::new();

    let error = mock.invoke("missing").unwrap_err();

    assert_eq!(
        MockError::CallNotFound {
            name: "missing".to_string()
        },
        error
    );
    assert_eq!(
        "missing: No stub, watch or original implementation found.",
        error.to_string()
    );
}

#[test]
fn failed_lookup_changes_nothing() {
    let mut mock = SimpleMock::new();
    mock.watch("ping");

    assert!(mock.invoke("pong").is_err());

    assert_eq!(0, mock.called_times("ping"));
    assert_eq!(0, mock.called_times("pong"));
}

#[test]
fn wrong_output_type_is_a_downcast_error() {
    let mut mock = SimpleMock::new();
    mock.expects("answer", 42_u32);

    let error = mock.call::<String>("answer").unwrap_err();

    assert!(matches!(
        &error,
        MockError::Downcast { name, actual: "u32", .. } if name == "answer"
    ));
    assert!(error.to_string().starts_with("answer: Expected output of type"));
}

#[test]
fn downcast_error_still_counts_the_call() {
    let mut mock = SimpleMock::new();
    mock.expects("answer", 42_u32);
    mock.watch("answer");

    assert!(mock.call::<i64>("answer").is_err());
    assert_eq!(1, mock.called_times("answer"));
}

#[test]
fn watch_only_call_is_not_a_value() {
    let mut mock = SimpleMock::new();
    mock.watch("ping");

    assert!(matches!(
        mock.call::<i32>("ping"),
        Err(MockError::Downcast { actual: "()", .. })
    ));
}

#[test]
fn errors_are_std_errors() {
    fn boxed() -> Result<(), Box<dyn std::error::Error>> {
        SimpleMock::new().invoke("missing")?;
        Ok(())
    }

    assert_eq!(
        "missing: No stub, watch or original implementation found.",
        boxed().unwrap_err().to_string()
    );
}
