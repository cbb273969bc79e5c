use tagmatch::{
    define_variants, match_literal, Cases, Error, Literal, LiteralCases, Pattern, Registry, VariantSet,
    Symbol, Tag, Value,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn status() -> Registry {
    define_variants(VariantSet::new()
        .marker("Pre")
        .constructor("Progress", 2, |args| Value::record([
            ("value", args[0].clone()),
            ("shown", args[1].clone()),
        ]))
        .constructor("Failed", 1, |args| args[0].clone())
        .constructor("Success", 1, |args| args[0].clone()))
}

fn progress(payload: &Value) -> String {
    match (payload.field("value").and_then(Value::as_str), payload.field("shown").and_then(Value::as_bool)) {
        (Some(value), Some(true)) => value.to_owned(),
        _ => "unknown".to_owned(),
    }
}

fn message(payload: &Value) -> String { payload.as_str().unwrap_or_default().to_owned() }

#[test]
fn progress_with_wildcard() {
    init_tracing();
    let status = status();
    let value = status.make("Progress", &["91".into(), true.into()]).unwrap();
    let cases = Cases::new()
        .on("Progress", progress)
        .otherwise(|_| "other".to_owned());
    assert_eq!(value.dispatch(&cases).unwrap(), "91");

    let hidden = status.make("Progress", &["91".into(), false.into()]).unwrap();
    assert_eq!(hidden.dispatch(&cases).unwrap(), "unknown");
}

#[test]
fn failed_through_wildcard_only() {
    init_tracing();
    let failed = status().make("Failed", &["err".into()]).unwrap();
    assert_eq!(failed.dispatch(&Cases::new().otherwise(message)).unwrap(), "err");
}

#[test]
fn exhaustive_match() {
    init_tracing();
    let status = status();
    let cases = Cases::new()
        .on("Pre", |_| "none".to_owned())
        .on("Progress", progress)
        .on("Failed", message)
        .on("Success", message);
    for tag in status.tags() {
        assert!(cases.handles(tag));
    }
    assert_eq!(status.value("Pre").unwrap().dispatch(&cases).unwrap(), "none");
    let success = status.make("Success", &["success message!".into()]).unwrap();
    assert_eq!(success.dispatch(&cases).unwrap(), "success message!");
}

#[test]
fn missing_handler_fails() {
    init_tracing();
    let pre = status().value("Pre").unwrap();
    let cases = Cases::new().on("Progress", progress).on("Failed", message);
    assert_eq!(pre.dispatch(&cases), Err(Error::UnhandledVariant(Tag::from("Pre"))));
}

#[test]
fn heterogeneous_results() {
    init_tracing();
    // A result type covering every handler's output.
    let success = status().make("Success", &["success message!".into()]).unwrap();
    let cases = Cases::new()
        .on("Pre", |_| Value::Bool(false))
        .on("Progress", |p| p.field("value").and_then(Value::as_str)
            .and_then(|v| v.parse::<i64>().ok()).map_or(Value::None, Value::Int))
        .otherwise(Value::clone);
    assert_eq!(success.dispatch(&cases).unwrap(), Value::from("success message!"));
}

#[test]
fn repeated_match_is_stable() {
    init_tracing();
    let value = status().make("Progress", &["91".into(), true.into()]).unwrap();
    let cases = Cases::new().on("Progress", progress);
    let first = value.dispatch(&cases).unwrap();
    let second = value.clone().dispatch(&cases).unwrap();
    assert_eq!(first, second);
}

#[test]
fn symbol_keys() {
    init_tracing();
    let pre = Symbol::with_description("Pre");
    let failed = Symbol::with_description("Failed");
    let status = define_variants(VariantSet::new()
        .marker(&pre)
        .constructor("Progress", 2, |args| Value::from(args.to_vec()))
        .constructor(&failed, 1, |args| args[0].clone())
        .constructor("Success", 1, |args| args[0].clone()));

    let cases = Cases::new().on(&pre, |_| 1).otherwise(|_| 2);
    assert_eq!(status.value(&pre).unwrap().dispatch(&cases).unwrap(), 1);
    assert_eq!(status.make(&failed, &["123".into()]).unwrap().dispatch(&cases).unwrap(), 2);

    let cases = Cases::new().on(&failed, message).otherwise(|_| String::new());
    assert_eq!(status.make(&failed, &["123".into()]).unwrap().dispatch(&cases).unwrap(), "123");
    assert!(!status.contains("Pre"));
}

#[test]
fn literals() {
    init_tracing();
    let cases = LiteralCases::new()
        .on("1 | 2 | 3", |v| format!("h({})", v))
        .otherwise(|v| format!("w({})", v));
    assert_eq!(match_literal(3, &cases).unwrap(), "h(3)");
    assert_eq!(match_literal(4, &cases).unwrap(), "w(4)");

    let cases = LiteralCases::new().on(2, |_| 1).on(3, |_| 2);
    let error = match_literal(1, &cases).unwrap_err();
    assert_eq!(error, Error::UnhandledLiteral(Literal::Int(1)));
    assert_eq!(error.to_string(), "Match did not handle key: '1'");

    let cases = LiteralCases::new()
        .on(Pattern::any_of(["x | y"]), |_| "whole")
        .on("x | y", |_| "split");
    assert_eq!(match_literal("x | y", &cases).unwrap(), "whole");
    assert_eq!(match_literal("y", &cases).unwrap(), "split");
}
