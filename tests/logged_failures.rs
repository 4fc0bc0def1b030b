use json_decode::result::successes;
use json_decode::{Decoder, array, number, result};
use serde_json::json;
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<String>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn log_errors<T: 'static>(log: &Log, decoder: Decoder<T>) -> Decoder<T> {
    let sink = Arc::clone(log);
    decoder.inspect_error(move |error| {
        sink.lock().expect("log lock").push(error.message.clone());
    })
}

/// Keep the valid members of an array, logging every invalid one
fn logged_array(decoder: Decoder<f64>, log: &Log) -> Decoder<Vec<f64>> {
    log_errors(log, array(result(log_errors(log, decoder)))).map(|items| successes(items))
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().expect("log lock").clone()
}

#[test]
fn valid_input_logs_nothing() {
    init_tracing();
    let log = Log::default();
    let decoded = logged_array(number(), &log).run(&json!([1, 2, 3, 4]));
    assert_eq!(decoded, Ok(vec![1.0, 2.0, 3.0, 4.0]));
    assert!(entries(&log).is_empty());
}

#[test]
fn invalid_members_are_logged_and_filtered() {
    init_tracing();
    let log = Log::default();
    let decoded = logged_array(number(), &log).run(&json!([true, [], 999]));
    assert_eq!(decoded, Ok(vec![999.0]));
    assert_eq!(
        entries(&log),
        vec![
            "expected a number, got a boolean".to_string(),
            "expected a number, got an array".to_string(),
        ]
    );
}

#[test]
fn non_array_fails_and_is_logged() {
    init_tracing();
    let log = Log::default();
    let error = logged_array(number(), &log)
        .run(&json!(5))
        .expect_err("not an array");
    assert_eq!(error.at, "input");
    assert_eq!(error.message, "expected an array, got a number");
    assert_eq!(entries(&log), vec!["expected an array, got a number".to_string()]);
}

#[test]
fn logged_decoder_passes_failures_through() {
    init_tracing();
    let decoder = array(number().logged("price"));
    let error = decoder.run(&json!([1, "2"])).expect_err("second price is a string");
    assert_eq!(error.at, "input[1]");

    let decoded = array(result(number().logged("price"))).run(&json!([1, "2"]));
    let items = decoded.expect("result never fails");
    assert_eq!(successes(items), vec![1.0]);
}
