use error_json::{
    DynError, ErrorKind, Function, HostValue, PropertyDescriptor, SerializeError, serialize,
    serialize_value,
};
use serde_json::{Value, json};

const KINDS: [ErrorKind; 7] = [
    ErrorKind::Error,
    ErrorKind::EvalError,
    ErrorKind::TypeError,
    ErrorKind::ReferenceError,
    ErrorKind::SyntaxError,
    ErrorKind::UriError,
    ErrorKind::RangeError,
];

fn fresh_errors() -> Vec<DynError> {
    KINDS
        .iter()
        .map(|kind| DynError::new(*kind, ""))
        .collect()
}

#[test]
fn serialize_value_non_error_inputs_expected_invalid_argument() {
    let values = vec![
        HostValue::from("5"),
        HostValue::from(5),
        HostValue::Number(f64::NAN),
        HostValue::Null,
        HostValue::Undefined,
        HostValue::Bool(true),
        HostValue::Array(Vec::new()),
        HostValue::Object(Vec::new()),
        HostValue::Function(Function::new("anonymous")),
    ];
    let rendered = [
        "5",
        "5",
        "NaN",
        "null",
        "undefined",
        "true",
        "",
        "[object Object]",
        "function anonymous() {}",
    ];

    for (value, expected) in values.iter().zip(rendered) {
        match serialize_value(value) {
            Err(SerializeError::InvalidArgument(shown)) => {
                assert_eq!(shown, expected, "rendered value for {}", value.type_of());
            }
            other => panic!("expected invalid argument for {}, got {other:?}", value.type_of()),
        }
    }
}

#[test]
fn serialize_value_error_expected_object() {
    let value = HostValue::from(DynError::new(ErrorKind::Error, "beep"));
    let serialized = serialize_value(&value).expect("error value should serialize");
    assert!(serialized.to_value().is_object());
}

#[test]
fn serialize_every_builtin_kind_expected_type_tag() {
    let expected = [
        "Error",
        "EvalError",
        "TypeError",
        "ReferenceError",
        "SyntaxError",
        "URIError",
        "RangeError",
    ];
    for (err, expected) in fresh_errors().iter().zip(expected) {
        let value = serialize(err).to_value();
        assert_eq!(value["type"], json!(expected));
    }
}

#[test]
fn serialize_every_builtin_kind_expected_message() {
    let messages = ["a", "b", "c", "d", "e", "f", "g"];
    for (kind, message) in KINDS.iter().zip(messages) {
        let serialized = serialize(&DynError::new(*kind, message));
        assert_eq!(serialized.message, message);
    }
}

#[test]
fn serialize_empty_message_expected_present_empty_string() {
    let value = serialize(&DynError::new(ErrorKind::Error, "")).to_value();
    assert_eq!(value["message"], json!(""));
}

#[test]
fn serialize_assigned_stack_expected_copied() {
    let stacks = ["a", "b", "c", "d", "e", "f", "g"];
    for (mut err, stack) in fresh_errors().into_iter().zip(stacks) {
        err.set("stack", stack);
        assert_eq!(serialize(&err).stack.as_deref(), Some(stack));
    }
}

#[test]
fn serialize_missing_stack_expected_no_stack_key() {
    let mut err = DynError::new(ErrorKind::Error, "");
    err.define("stack", PropertyDescriptor::hidden(HostValue::Undefined));

    let value = serialize(&err).to_value();
    assert!(value.get("stack").is_none());
}

#[test]
fn serialize_assigned_name_expected_copied() {
    let names = ["a", "b", "c", "d", "e", "f", "g"];
    for (mut err, name) in fresh_errors().into_iter().zip(names) {
        err.set("name", name);
        assert_eq!(serialize(&err).name.as_deref(), Some(name));
    }
}

#[test]
fn serialize_missing_name_expected_no_name_key() {
    let mut err = DynError::new(ErrorKind::Error, "");
    err.define("name", PropertyDescriptor::hidden(HostValue::Undefined));

    let value = serialize(&err).to_value();
    assert!(value.get("name").is_none());
}

#[test]
fn serialize_numeric_code_expected_copied() {
    for (index, mut err) in fresh_errors().into_iter().enumerate() {
        let code = index as i64 + 1;
        err.set("code", code);
        assert_eq!(serialize(&err).code, Some(json!(code)));
    }
}

#[test]
fn serialize_errno_and_syscall_expected_copied() {
    let values = ["a", "b", "c", "d", "e", "f", "g"];
    for (mut err, value) in fresh_errors().into_iter().zip(values) {
        err.set("errno", value);
        err.set("syscall", value);
        let serialized = serialize(&err);
        assert_eq!(serialized.errno, Some(json!(value)));
        assert_eq!(serialized.syscall.as_deref(), Some(value));
    }
}

#[test]
fn serialize_falsy_conditional_fields_expected_omitted() {
    let falsy = [
        HostValue::from(0),
        HostValue::from(""),
        HostValue::Bool(false),
        HostValue::Null,
        HostValue::Undefined,
        HostValue::Number(f64::NAN),
    ];
    for value in falsy {
        let mut err = DynError::bare(ErrorKind::Error, "falsy");
        for key in ["name", "stack", "code", "errno", "syscall"] {
            err.set(key, value.clone());
        }
        let serialized = serialize(&err).to_value();
        assert_eq!(
            serialized,
            json!({"type": "Error", "message": "falsy"}),
            "falsy value {value:?}"
        );
    }
}

#[test]
fn serialize_system_error_fields_expected_identical_values() {
    let err = DynError::bare(ErrorKind::Error, "no such file")
        .with("code", "ENOENT")
        .with("errno", -2)
        .with("syscall", "open");

    let value = serialize(&err).to_value();
    assert_eq!(value["code"], json!("ENOENT"));
    assert_eq!(value["errno"], json!(-2));
    assert_eq!(value["syscall"], json!("open"));

    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["type", "message", "name", "code", "errno", "syscall"]);
}

#[test]
fn serialize_type_error_expected_documented_shape() {
    let err = DynError::new(ErrorKind::TypeError, "invalid type");
    let value = serialize(&err).to_value();

    assert_eq!(value["type"], json!("TypeError"));
    assert_eq!(value["message"], json!("invalid type"));
    assert_eq!(value["name"], json!("TypeError"));
    assert_eq!(value["stack"], err.get("stack").as_str().map(Value::from).unwrap_or_default());
}

#[test]
fn serialize_extra_data_properties_expected_copied() {
    let err = DynError::new(ErrorKind::Error, "errrr")
        .with("beep", "boop")
        .with("boop", "beep");

    let value = serialize(&err).to_value();
    assert_eq!(value["beep"], json!("boop"));
    assert_eq!(value["boop"], json!("beep"));
}

#[test]
fn serialize_extra_accessor_properties_expected_evaluated() {
    let mut err = DynError::new(ErrorKind::Error, "errrr");
    err.define("beep", PropertyDescriptor::getter(|| HostValue::from("boop")));
    err.define("boop", PropertyDescriptor::getter(|| HostValue::from("beep")));

    let value = serialize(&err).to_value();
    assert_eq!(value["beep"], json!("boop"));
    assert_eq!(value["boop"], json!("beep"));
}

#[test]
fn serialize_non_enumerable_properties_expected_skipped() {
    let mut err = DynError::new(ErrorKind::Error, "errrr");
    err.define("secret", PropertyDescriptor::hidden("hidden"));
    err.define(
        "computed",
        PropertyDescriptor::getter(|| HostValue::from(1)).enumerable(false),
    );

    let value = serialize(&err).to_value();
    assert!(value.get("secret").is_none());
    assert!(value.get("computed").is_none());
}

#[test]
fn serialize_extra_array_expected_deep_equal_and_independent() {
    let mut err = DynError::new(ErrorKind::Error, "errrr").with(
        "arr",
        HostValue::Array(vec![1.into(), 2.into(), HostValue::from(vec![3, 4, 5])]),
    );

    let serialized = serialize(&err);
    assert_eq!(serialized.extra["arr"], json!([1, 2, [3, 4, 5]]));

    err.set("arr", HostValue::Array(vec![9.into()]));
    assert_eq!(serialized.extra["arr"], json!([1, 2, [3, 4, 5]]));
    assert_eq!(serialize(&err).extra["arr"], json!([9]));
}

#[test]
fn serialize_extra_properties_expected_enumeration_order() {
    let err = DynError::bare(ErrorKind::Error, "order")
        .with("zeta", 1)
        .with("alpha", 2)
        .with("mid", 3);

    let keys: Vec<String> = serialize(&err).extra.keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn serialize_unconvertible_extra_values_expected_best_effort() {
    let err = DynError::bare(ErrorKind::Error, "mixed")
        .with("callback", HostValue::function("onDone"))
        .with("missing", HostValue::Undefined)
        .with("ratio", f64::NAN)
        .with("kept", "yes");

    let value = serialize(&err).to_value();
    assert_eq!(
        value,
        json!({"type": "Error", "message": "mixed", "name": "Error", "ratio": null, "kept": "yes"})
    );
}

#[test]
fn serialize_nested_error_property_expected_recursive_form() {
    let cause = DynError::bare(ErrorKind::RangeError, "too big").with("limit", 10);
    let err = DynError::bare(ErrorKind::Error, "outer").with("cause", cause);

    let value = serialize(&err).to_value();
    assert_eq!(
        value["cause"],
        json!({"type": "RangeError", "message": "too big", "name": "RangeError", "limit": 10})
    );
}

#[test]
fn serialize_twice_expected_equal_outputs() {
    let err = DynError::new(ErrorKind::SyntaxError, "bad syntax")
        .with("nested", HostValue::from(json!({"a": [1, {"b": null}]})));

    let first = serialize(&err);
    let second = serialize(&err);
    assert_eq!(first, second);
    assert_eq!(first.to_value(), second.to_value());
}

#[test]
fn serialize_does_not_mutate_input() {
    let err = DynError::new(ErrorKind::Error, "stable").with("data", vec![1, 2]);
    let keys_before: Vec<String> = err.own_enumerable_keys().map(str::to_string).collect();

    let _ = serialize(&err);

    let keys_after: Vec<String> = err.own_enumerable_keys().map(str::to_string).collect();
    assert_eq!(keys_before, keys_after);
    assert_eq!(err.get("message").as_str(), Some("stable"));
}
