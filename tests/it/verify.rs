use pretty_assertions::assert_eq;
use simplemock::*;

#[test]
fn exact_count_is_verified() {
    let mut mock = SimpleMock::new();
    mock.watch("ping");
    mock.invoke("ping").unwrap();
    mock.invoke("ping").unwrap();

    assert_eq!(Ok(()), mock.verify("ping", CountExpectation::Exactly(2)));
    assert_eq!(
        Err(MockError::CountMismatch {
            name: "ping".to_string(),
            expectation: CountExpectation::Exactly(1),
            actual: 2,
        }),
        mock.verify("ping", CountExpectation::Exactly(1))
    );
}

#[test]
fn count_mismatch_message() {
    let mut mock = SimpleMock::new();
    mock.watch("ping");
    mock.invoke("ping").unwrap();

    assert_eq!(
        "ping: Expected exactly 2 calls, but it was actually called 1 call.",
        mock.verify("ping", CountExpectation::Exactly(2))
            .unwrap_err()
            .to_string()
    );
    assert_eq!(
        "ping: Expected at least 3 calls, but it was actually called 1 call.",
        mock.verify("ping", CountExpectation::AtLeast(3))
            .unwrap_err()
            .to_string()
    );
}

#[test]
fn at_least_count_is_verified() {
    let mut mock = SimpleMock::new();
    mock.watch("ping");
    for _ in 0..3 {
        mock.invoke("ping").unwrap();
    }

    assert_eq!(Ok(()), mock.verify("ping", CountExpectation::AtLeast(1)));
    assert_eq!(Ok(()), mock.verify("ping", CountExpectation::AtLeast(3)));
    assert!(mock.verify("ping", CountExpectation::AtLeast(4)).is_err());
}

#[test]
fn unwatched_names_cannot_be_verified() {
    let mock = SimpleMock::new();

    assert_eq!(
        Err(MockError::NotWatched {
            name: "ping".to_string()
        }),
        mock.verify("ping", CountExpectation::Exactly(0))
    );
}

#[test]
fn tally_is_compared_regardless_of_order() {
    let mut mock = SimpleMock::new();
    mock.watch("b");
    mock.watch("a");
    mock.invoke("a").unwrap();

    assert_eq!(Ok(()), mock.verify_tally([("b", 0), ("a", 1)]));
}

#[test]
fn tally_mismatch_carries_both_renderings() {
    let mut mock = SimpleMock::new();
    mock.watch("a");
    mock.watch("b");
    mock.invoke("a").unwrap();

    let error = mock.verify_tally([("a", 2)]).unwrap_err();

    assert_eq!(
        MockError::TallyMismatch {
            actual: "a: 1\nb: 0\n".to_string(),
            expected: "a: 2\n".to_string(),
        },
        error
    );
    assert!(error
        .to_string()
        .starts_with("Call tally mismatch (actual / expected):"));
}
