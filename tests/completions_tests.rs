use predicates::prelude::*;

#[test]
fn completions_command_outputs_bash_script() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("simdash");
    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("simdash"));
}

#[test]
fn completions_do_not_need_simulation_data() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("simdash");
    cmd.args(["completions", "zsh", "-i", "does/not/exist.json"]);

    cmd.assert().success();
}
