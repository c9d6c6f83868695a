use assert_cmd::Command;
use predicates::str::contains;

fn csa() -> Command {
    let mut cmd = Command::cargo_bin("csa").unwrap();
    // Keep the test environment hermetic
    cmd.env_remove("ASC_KEY_ID");
    cmd.env_remove("ASC_ISSUER_ID");
    cmd.env_remove("ASC_KEY_FILE");
    cmd
}

#[test]
fn help_exits_zero() {
    csa()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("certificates"))
        .stdout(contains("profiles"));
}

#[test]
fn version_exits_zero() {
    csa().arg("--version").assert().success();
}

#[test]
fn bare_invocation_prints_help() {
    csa().assert().success().stdout(contains("Usage"));
}

#[test]
fn unknown_subcommand_exits_one() {
    csa().arg("frobnicate").assert().failure().code(1);
}

#[test]
fn unknown_flag_exits_one() {
    csa().arg("--frobnicate").assert().failure().code(1);
}

#[test]
fn invalid_status_filter_is_a_configuration_error() {
    csa()
        .args(["list", "--status", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid status filter(s): bogus"));
}

#[test]
fn stdin_key_conflicts_with_key_file_flag() {
    csa()
        .args(["list", "--api-key-stdin", "--api-key-file", "key.p8"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("cannot be used with"));
}

#[test]
fn empty_stdin_key_is_rejected() {
    csa()
        .args(["list", "--api-key-stdin"])
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("stdin was empty"));
}

#[test]
fn assets_flag_conflicts_with_asset_subcommands() {
    csa()
        .args(["certificates", "--assets", "profiles"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("--assets cannot be combined"));
}

#[test]
fn missing_credentials_fail_before_any_report() {
    let dir = tempfile::tempdir().unwrap();
    csa()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("no API key id"));
}
