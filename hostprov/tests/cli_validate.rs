use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn hostprov() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hostprov"))
}

#[test]
fn help_lists_subcommands() {
    hostprov()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-host"))
        .stdout(predicate::str::contains("remove-host"))
        .stdout(predicate::str::contains("rebuild-allow-list"))
        .stdout(predicate::str::contains("list-hosts"));
}

#[test]
fn add_host_rejects_malformed_hardware_address() {
    hostprov()
        .args(["add-host", "ws-new", "zz:bb:cc:dd:ee:ff", "10.0.0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid hardware address"));
}

#[test]
fn add_host_rejects_malformed_address() {
    hostprov()
        .args(["add-host", "ws-new", "aa:bb:cc:dd:ee:ff", "10.0.0.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid octet"));
}

#[test]
fn add_host_requires_address_unless_laptop() {
    hostprov()
        .args(["add-host", "ws-new", "aa:bb:cc:dd:ee:ff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--laptop").or(predicate::str::contains("ADDRESS")));
}

#[test]
fn add_host_rejects_address_combined_with_laptop() {
    hostprov()
        .args(["add-host", "ws-new", "aa:bb:cc:dd:ee:ff", "10.0.0.5", "--laptop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--laptop"));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let absent = dir.path().join("absent.toml");
    hostprov()
        .args(["add-host", "ws-new", "aa:bb:cc:dd:ee:ff", "10.0.0.5"])
        .arg("--config")
        .arg(&absent)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

#[test]
fn garbled_config_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "not valid toml [[").expect("write config");

    hostprov()
        .args(["add-host", "ws-new", "aa:bb:cc:dd:ee:ff", "10.0.0.5"])
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

#[test]
fn config_override_is_honored_before_validation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
directory_server = "dc.lab"
dns_server = "ns.lab"
dhcp_server = "dhcp.lab"
dns_domain = "lab"
allow_list_path = "/tmp/allow-test.txt"
temporary_container = "OU=Temp,DC=lab"
fallback_container = "OU=Hosts,DC=lab"
laptop_marker = "laptop"
"#,
    )
    .expect("write config");

    // settings parse fine, so the failure is the malformed hardware address
    hostprov()
        .args(["add-host", "ws-new", "not-a-mac", "10.0.0.5"])
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid hardware address"));
}
