//! Integration tests for the `amtwifi` CLI binary.
//!
//! These tests drive the binary end to end with documents written to temp
//! files and secrets piped on stdin. No device is involved.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `amtwifi` binary with env isolation.
fn amtwifi_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("amtwifi");
    cmd.env_remove("AMT_PASSWORD")
        .env_remove("AMTWIFI_OUTPUT")
        .env_remove("AMTWIFI_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn document(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const MIXED_DOCUMENT: &str = r#"{
  "password": "",
  "wifiConfigs": [
    {"profileName": "wifiWPA2", "ssid": "ssid", "priority": 1,
     "authenticationMethod": 6, "encryptionMethod": 4},
    {"profileName": "wifi8021x", "ssid": "ssid", "priority": 2,
     "authenticationMethod": 7, "encryptionMethod": 4,
     "ieee8021xProfileName": "ieee8021xEAP-TLS"}
  ],
  "ieee8021xConfigs": [
    {"profileName": "ieee8021xEAP-TLS", "username": "username",
     "authenticationProtocol": 0, "clientCert": "clientCert", "caCert": "caCert"}
  ]
}"#;

const PSK_FLAGS: [&str; 12] = [
    "--profile-name",
    "home",
    "--ssid",
    "homenet",
    "--priority",
    "1",
    "--authentication-method",
    "6",
    "--encryption-method",
    "4",
    "--psk-passphrase",
    "sup3rsecret",
];

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = amtwifi_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    amtwifi_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("802.1x")
            .and(predicate::str::contains("configure"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_completions_bash() {
    amtwifi_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Password resolution ─────────────────────────────────────────────

#[test]
fn test_enable_wifi_port_with_flag_password() {
    amtwifi_cmd()
        .args(["configure", "enable-wifi-port", "--password", "P@ssw0rd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command_line"));
}

#[test]
fn test_legacy_alias_is_accepted() {
    amtwifi_cmd()
        .args(["configure", "enablewifiport", "--password", "P@ssw0rd"])
        .assert()
        .success();
}

#[test]
fn test_environment_password_is_used() {
    amtwifi_cmd()
        .env("AMT_PASSWORD", "fromEnv")
        .args(["-o", "json", "configure", "enable-wifi-port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"password_source\": \"environment\""));
}

#[test]
fn test_prompted_password_is_read_from_stdin() {
    amtwifi_cmd()
        .args(["-o", "json", "configure", "enable-wifi-port"])
        .write_stdin("typed\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"password_source\": \"prompt\""))
        .stderr(predicate::str::contains("Please enter AMT Password"));
}

#[test]
fn test_missing_password_exits_3() {
    let output = amtwifi_cmd()
        .args(["configure", "enable-wifi-port"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let text = combined_output(&output);
    assert!(text.contains("AMT_PASSWORD"), "Expected help text in:\n{text}");
}

#[test]
fn test_password_mismatch_exits_3() {
    let file = document(".yaml", "password: documentPassword\n");
    amtwifi_cmd()
        .args(["configure", "wifi", "--password", "flagPassword", "--config"])
        .arg(file.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not match"));
}

// ── TLS mode ────────────────────────────────────────────────────────

#[test]
fn test_tls_modes_are_accepted() {
    for mode in ["Server", "ServerAndNonTLS", "Mutual", "MutualAndNonTLS"] {
        amtwifi_cmd()
            .args(["-o", "plain", "configure", "tls", "--password", "pw", "--mode", mode])
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{mode}\n")));
    }
}

#[test]
fn test_tls_mode_defaults_to_server() {
    amtwifi_cmd()
        .args(["-o", "plain", "configure", "tls", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Server\n"));
}

#[test]
fn test_unknown_tls_mode_is_usage_error() {
    amtwifi_cmd()
        .args(["configure", "tls", "--password", "pw", "--mode", "unknown"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown"));
}

// ── Wi-Fi profiles ──────────────────────────────────────────────────

#[test]
fn test_single_profile_flags() {
    amtwifi_cmd()
        .args(["configure", "wifi", "--password", "pw"])
        .args(PSK_FLAGS)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("home")
                .and(predicate::str::contains("WPA2-PSK"))
                .and(predicate::str::contains("sup3rsecret").not()),
        );
}

#[test]
fn test_wifi_without_any_profile_input_is_usage_error() {
    let output = amtwifi_cmd()
        .args(["-o", "json", "configure", "wifi", "--password", "pw"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "Expected no summary on stdout");
    let text = combined_output(&output);
    assert!(text.contains("--config"), "Expected input hint in:\n{text}");
}

#[test]
fn test_secrets_document_replaces_prompts() {
    let file = document(".json", MIXED_DOCUMENT);
    let secrets = document(
        ".yaml",
        "secrets:\n  \
           - profileName: wifiWPA2\n    \
             pskPassphrase: pskValue\n  \
           - profileName: ieee8021xEAP-TLS\n    \
             privateKey: privateKeyValue\n",
    );
    amtwifi_cmd()
        .args(["-o", "plain", "configure", "wifi", "--password", "pw", "--config"])
        .arg(file.path())
        .arg("--secrets")
        .arg(secrets.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff("wifiWPA2\nwifi8021x\n"))
        .stderr(predicate::str::contains("Please enter").not());
}

#[test]
fn test_document_secrets_are_prompted_in_order() {
    let file = document(".json", MIXED_DOCUMENT);
    amtwifi_cmd()
        .args(["-o", "plain", "configure", "addwifisettings", "--config"])
        .arg(file.path())
        .write_stdin("amtPassword\npskValue\nprivateKeyValue\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("wifiWPA2\nwifi8021x\n"))
        .stderr(
            predicate::str::contains("Please enter PskPassphrase for wifiWPA2")
                .and(predicate::str::contains("Please enter PrivateKey for ieee8021xEAP-TLS")),
        );
}

#[test]
fn test_exhausted_secret_input_exits_4() {
    let file = document(".json", MIXED_DOCUMENT);
    amtwifi_cmd()
        .args(["configure", "wifi", "--password", "pw", "--config"])
        .arg(file.path())
        .write_stdin("pskValue\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("1 of 2"));
}

#[test]
fn test_invalid_priority_exits_5() {
    let mut flags = PSK_FLAGS;
    flags[5] = "0";
    amtwifi_cmd()
        .args(["configure", "wifi", "--password", "pw"])
        .args(flags)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Priority"));
}

#[test]
fn test_dangling_reference_exits_5() {
    amtwifi_cmd()
        .args([
            "configure",
            "wifi",
            "--password",
            "pw",
            "--config-json",
            r#"{"wifiConfigs":[{"profileName":"corp","ssid":"ssid","priority":1,
                "authenticationMethod":7,"encryptionMethod":4,
                "ieee8021xProfileName":"missing"}]}"#,
        ])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("no IEEE 802.1x profile"));
}

#[test]
fn test_json_output_omits_secrets() {
    let output = amtwifi_cmd()
        .args(["-o", "json", "configure", "wifi", "--password", "pw"])
        .args(PSK_FLAGS)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["wifi_profiles"][0]["profile_name"], "home");
    assert_eq!(value["password_source"], "command_line");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("sup3rsecret"));
}

#[test]
fn test_missing_config_file() {
    amtwifi_cmd()
        .args([
            "configure",
            "wifi",
            "--password",
            "pw",
            "--config",
            "/nonexistent/amtwifi.yaml",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_and_config_json_conflict() {
    amtwifi_cmd()
        .args(["configure", "wifi", "--config", "a.yaml", "--config-json", "{}"])
        .assert()
        .code(2);
}
