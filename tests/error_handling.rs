//! Error handling and edge case tests.

use quantum::{BoxError, Fallible, Quantum, QuantumError};

#[derive(Clone, Debug, Default)]
struct Payload {
    value: u64,
}

// --- Empty container ---

#[test]
fn test_current_before_any_selection() {
    let container = Quantum::new(Payload::default);
    assert!(matches!(container.current(), Err(QuantumError::Empty)));
}

#[test]
fn test_current_mut_before_any_selection() {
    let mut container = Quantum::new(Payload::default);
    assert!(matches!(container.current_mut(), Err(QuantumError::Empty)));
}

#[test]
fn test_mutate_before_any_selection() {
    let mut container = Quantum::new(Payload::default);
    let result = container.mutate(|p| p.value = 1);
    assert!(matches!(result, Err(QuantumError::NoCurrentState)));
}

// --- Fork errors ---

#[test]
fn test_fork_into_existing_identifier() {
    let mut container = Quantum::new(Payload::default);
    container.select("alpha").unwrap();
    container.select("beta").unwrap();

    let result = container.fork("alpha", "beta");

    assert!(matches!(result, Err(QuantumError::DuplicateState(ref id)) if id == "alpha"));
    // Nothing inserted, cursor untouched.
    assert_eq!(container.identifiers(), ["alpha", "beta"]);
    assert_eq!(container.current_id(), Some("beta"));
}

#[test]
fn test_fork_from_missing_base() {
    let mut container = Quantum::new(Payload::default);
    container.select("alpha").unwrap();

    let result = container.fork("beta", "ghost");

    assert!(matches!(result, Err(QuantumError::UnknownBaseState(ref id)) if id == "ghost"));
    assert_eq!(container.identifiers(), ["alpha"]);
    assert!(!container.has("beta"));
}

#[test]
fn test_fork_on_empty_container_reports_unknown_base() {
    let mut container = Quantum::new(Payload::default);

    let result = container.fork("beta", "alpha");

    assert!(matches!(result, Err(QuantumError::UnknownBaseState(_))));
    assert!(container.is_empty());
}

// --- Factory failures ---

#[test]
fn test_factory_error_carries_identifier_and_source() {
    let mut container = Quantum::new(Fallible(|| -> Result<Payload, BoxError> {
        Err("quota exceeded".into())
    }));

    let err = container.select("alpha").unwrap_err();

    match err {
        QuantumError::Factory { id, source } => {
            assert_eq!(id, "alpha");
            assert_eq!(source.to_string(), "quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_factory_failure_inserts_nothing() {
    let mut container = Quantum::new(Fallible(|ok: bool| -> Result<Payload, BoxError> {
        if ok {
            Ok(Payload::default())
        } else {
            Err("refused".into())
        }
    }));

    container.select_with("good", (true,)).unwrap();
    assert!(container.select_with("bad", (false,)).is_err());

    assert_eq!(container.identifiers(), ["good"]);
    assert!(!container.has("bad"));
    // Cursor stays on the last successful selection.
    assert_eq!(container.current_id(), Some("good"));
}

#[test]
fn test_selection_works_again_after_factory_failure() {
    let mut container = Quantum::new(Fallible(|ok: bool| -> Result<Payload, BoxError> {
        if ok {
            Ok(Payload { value: 7 })
        } else {
            Err("transient".into())
        }
    }));

    assert!(container.select_with("state", (false,)).is_err());
    // A later attempt with acceptable arguments creates the state.
    container.select_with("state", (true,)).unwrap();

    assert_eq!(container.current().unwrap().value, 7);
}

// --- Error display ---

#[test]
fn test_error_messages_name_the_offending_state() {
    let mut container = Quantum::new(Payload::default);
    container.select("alpha").unwrap();

    let dup = container.fork("alpha", "alpha").unwrap_err();
    assert_eq!(dup.to_string(), "state already exists: alpha");

    let unknown = container.fork("beta", "ghost").unwrap_err();
    assert_eq!(unknown.to_string(), "unknown base state: ghost");

    assert_eq!(
        QuantumError::NoCurrentState.to_string(),
        "no state has been selected"
    );
    assert_eq!(QuantumError::Empty.to_string(), "container holds no states");
}
