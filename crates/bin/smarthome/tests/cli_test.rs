//! End-to-end tests for the `smarthome` binary.
//!
//! Each test runs the compiled binary with a script of service calls and
//! inspects what it prints.

use std::process::{Command, Output};

fn smarthome(args: &[&str], format: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_smarthome"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SMARTHOME_LOG")
        .env("SMARTHOME_OUTPUT", format)
        .output()
        .expect("binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn should_print_default_home_without_calls() {
    let output = smarthome(&[], "text");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "light: off\nthermostat: 68 (idle)\ndoor_lock: locked\n"
    );
}

#[test]
fn should_apply_calls_in_order() {
    let output = smarthome(
        &[
            "light.turn_on",
            "thermostat.set_temperature=72",
            "door_lock.unlock",
        ],
        "text",
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "light: on\nthermostat: 72 (heating)\ndoor_lock: unlocked\n"
    );
}

#[test]
fn should_print_json_when_requested() {
    let output = smarthome(&["thermostat.set_temperature=-5"], "json");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["thermostat"]["temperature"], -5);
    assert_eq!(value["thermostat"]["heating"], false);
    assert_eq!(value["light"]["on"], false);
}

#[test]
fn should_fail_without_printing_state_for_invalid_call() {
    let output = smarthome(&["light.turn_on", "thermostat.set_temperature=warm"], "text");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn should_fail_for_unknown_output_format() {
    let output = smarthome(&[], "xml");
    assert!(!output.status.success());
}
