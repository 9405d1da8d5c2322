mod common;

use std::error::Error as _;

use miette::Diagnostic;
use throwtrace::errors::{
    InvalidParameterError, IoError, LogicError, NotFoundError, OverflowError, RuntimeError,
    TypeError, UnderflowError,
};
use throwtrace::{
    BindingClass, BindingError, Exception, ExceptionType, ForeignError, Registry, Tracepoint,
    exception_type,
};

exception_type! {
    pub struct TestError: RuntimeError;
}

exception_type! {
    pub struct UnboundError: OverflowError;
}

exception_type! {
    pub struct ShadowError: RuntimeError;
}

#[test]
fn translates_builtins_to_their_own_class() {
    common::init_tracing();
    let registry = Registry::with_builtins();
    let err = UnderflowError::new("math.rs", 3, "sub", "below zero");

    let foreign = registry.translate(&err);
    assert_eq!(foreign.class().name, "UnderflowError");
    assert_eq!(foreign.class().host_bases, &["ArithmeticError"]);
    assert_eq!(foreign.exception().qualified_name(), err.qualified_name());
    assert_eq!(foreign.what(), err.what());
}

#[test]
fn repr_wraps_what_in_class_name() {
    let registry = Registry::with_builtins();
    let err = LogicError::new("a.c", 1, "f", "message1");

    let foreign = registry.translate(&err);
    assert_eq!(
        foreign.repr(),
        "LogicError('0: LogicError thrown at a.c:1 in f\n0: Message: message1\n')"
    );
    assert_eq!(foreign.to_string(), err.to_string());
}

#[test]
fn unregistered_types_fall_back_to_nearest_ancestor() {
    common::init_tracing();
    let registry = Registry::with_builtins();
    let err = UnboundError::new("a.c", 1, "f", "too big");

    assert_eq!(registry.lookup(&UnboundError::INFO), None);
    let foreign = registry.translate(&err);
    assert_eq!(foreign.class().name, "OverflowError");
    assert!(foreign.exception().downcast_ref::<UnboundError>().is_some());
}

#[test]
fn empty_registry_falls_back_to_base_class() {
    let registry = Registry::new();
    let foreign = registry.translate(&TypeError::new("a.c", 1, "f", "m"));
    assert_eq!(foreign.class(), BindingClass::new("Exception"));
}

#[test]
fn custom_registration_and_duplicates() {
    let mut registry = Registry::with_builtins();
    registry
        .register::<TestError>(BindingClass::new("TestError"))
        .expect("first registration succeeds");

    let foreign = registry.translate(&TestError::new("t.rs", 8, "fail", "message2"));
    assert_eq!(foreign.class().name, "TestError");

    let err = registry
        .register::<TestError>(BindingClass::new("Other"))
        .expect_err("second registration is rejected");
    assert!(matches!(
        err,
        BindingError::AlreadyRegistered { qualified_name } if qualified_name == "binding_tests::TestError"
    ));
    assert!(err.to_string().contains("binding_tests::TestError"));
}

#[test]
fn builtins_cannot_be_registered_twice() {
    let mut registry = Registry::with_builtins();
    let err = registry
        .register::<Exception>(BindingClass::new("Exception"))
        .expect_err("base is always registered");
    assert!(matches!(err, BindingError::AlreadyRegistered { .. }));
}

#[test]
fn raise_builds_the_native_variant() {
    let registry = Registry::with_builtins();
    let err = registry
        .raise("LogicError", Tracepoint::new("script.py", 12, "<module>", "message1"))
        .expect("LogicError is registered");

    assert!(err.downcast_ref::<LogicError>().is_some());
    assert_eq!(err.kind(), "LogicError");
    assert_eq!(
        err.traceback(),
        &[Tracepoint::new("script.py", 12, "<module>", "message1")]
    );
}

#[test]
fn raise_rejects_unknown_classes() {
    let registry = Registry::with_builtins();
    let err = registry
        .raise("NoSuchError", Tracepoint::new("script.py", 1, "<module>", "m"))
        .expect_err("unknown class");
    assert!(matches!(err, BindingError::UnknownClass { ref name } if name == "NoSuchError"));
}

#[test]
fn payload_carries_class_and_traceback() {
    let registry = Registry::with_builtins();
    let mut err = OverflowError::new("a.c", 1, "f", "boom");
    err.add_message("b.c", 2, "g", "rethrown");

    let json = registry.translate(&err).to_json().expect("payload encodes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("payload is json");

    assert_eq!(value["class"]["name"], "OverflowError");
    assert_eq!(value["class"]["host_bases"][0], "OverflowError");
    assert_eq!(value["qualified_name"], "throwtrace::errors::OverflowError");
    assert_eq!(value["kind"], "OverflowError");
    assert_eq!(value["traceback"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["traceback"][1]["function"], "g");
    assert_eq!(
        value["host_bases"],
        serde_json::json!(["OverflowError", "RuntimeError"])
    );
    assert_eq!(
        value["ancestors"],
        serde_json::json!(["OverflowError", "RuntimeError", "Exception"])
    );
}

#[test]
fn foreign_error_owns_an_independent_copy() {
    let registry = Registry::with_builtins();
    let mut err = RuntimeError::new("a.c", 1, "f", "m");
    let foreign = registry.translate(&err);
    err.add_message("b.c", 2, "g", "later");

    assert_eq!(foreign.exception().traceback().len(), 1);
    let mut owned = foreign.into_exception();
    owned.add_message("c.c", 3, "h", "host side");
    assert_eq!(owned.traceback().len(), 2);
    assert_eq!(err.traceback().len(), 2);
}

#[test]
fn class_names_cannot_be_shared() {
    let mut registry = Registry::with_builtins();
    let err = registry
        .register::<ShadowError>(BindingClass::new("LogicError"))
        .expect_err("LogicError already wraps a type");
    assert!(matches!(
        err,
        BindingError::ClassNameTaken { name: "LogicError", owner: "throwtrace::errors::LogicError" }
    ));
    assert_eq!(registry.lookup(&ShadowError::INFO), None);

    for _ in 0..50 {
        let mut registry = Registry::with_builtins();
        let _ = registry.register::<ShadowError>(BindingClass::new("LogicError"));
        let raised = registry
            .raise("LogicError", Tracepoint::new("script.py", 1, "<module>", "m"))
            .expect("LogicError is registered");
        assert!(raised.downcast_ref::<LogicError>().is_some());
    }
}

#[test]
fn custom_types_inherit_host_bases() {
    common::init_tracing();
    let mut registry = Registry::with_builtins();
    registry
        .register::<TestError>(BindingClass::new("TestError"))
        .expect("first registration succeeds");

    assert_eq!(registry.host_bases(&TestError::INFO), vec!["RuntimeError"]);

    let foreign = registry.translate(&TestError::new("t.rs", 8, "fail", "message1"));
    assert_eq!(foreign.host_bases(), &["RuntimeError"]);
    assert_eq!(foreign.ancestors(), &["TestError", "RuntimeError", "Exception"]);
    assert!(foreign.catches("TestError"));
    assert!(foreign.catches("RuntimeError"));
    assert!(foreign.catches("Exception"));
    assert!(!foreign.catches("LogicError"));
}

fn assert_caught(
    registry: &Registry,
    err: Box<dyn ExceptionType>,
    caught_by: &[&str],
    missed_by: &[&str],
) {
    let foreign = registry.translate(err.as_ref());
    for class_name in caught_by {
        assert!(foreign.catches(class_name), "{} as {class_name}", err.kind());
    }
    for class_name in missed_by {
        assert!(!foreign.catches(class_name), "{} as {class_name}", err.kind());
    }
}

#[test]
fn builtins_are_caught_along_their_hierarchy() {
    let registry = Registry::with_builtins();
    assert_caught(
        &registry,
        InvalidParameterError::new("a.c", 1, "f", "m").into(),
        &["InvalidParameterError", "LogicError", "Exception"],
        &["RuntimeError", "LookupError"],
    );
    assert_caught(
        &registry,
        OverflowError::new("a.c", 1, "f", "m").into(),
        &["OverflowError", "RuntimeError", "Exception"],
        &["LogicError", "ArithmeticError"],
    );
    assert_caught(
        &registry,
        UnderflowError::new("a.c", 1, "f", "m").into(),
        &["UnderflowError", "RuntimeError", "Exception", "ArithmeticError"],
        &["OverflowError"],
    );
    assert_caught(
        &registry,
        NotFoundError::new("a.c", 1, "f", "m").into(),
        &["NotFoundError", "Exception", "LookupError"],
        &["RuntimeError"],
    );
    assert_caught(
        &registry,
        IoError::new("a.c", 1, "f", "m").into(),
        &["IoError", "RuntimeError", "Exception", "IOError"],
        &["LogicError"],
    );

    let underflow = registry.translate(&UnderflowError::new("a.c", 1, "f", "m"));
    assert_eq!(underflow.host_bases(), &["ArithmeticError", "RuntimeError"]);
}

fn translated(registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    let err = TypeError::new("a.c", 1, "f", "wrong type");
    let result: Result<(), ForeignError> = Err(registry.translate(&err));
    result?;
    Ok(())
}

#[test]
fn foreign_errors_are_std_errors() {
    let registry = Registry::with_builtins();
    let err = translated(&registry).expect_err("translation is returned as an error");

    let source = err.source().expect("wrapped exception is the source");
    assert_eq!(source.to_string(), err.to_string());
    assert!(err.to_string().starts_with("0: TypeError thrown at a.c:1 in f"));

    let foreign = registry.translate(&TypeError::new("a.c", 1, "f", "wrong type"));
    let code = foreign.code().map(|code| code.to_string());
    assert_eq!(code.as_deref(), Some("TypeError"));
}
