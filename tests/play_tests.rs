mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use common::{path_arg, results_file};

#[test]
fn play_advances_and_wraps_around() {
    let input_file = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("simdash");
    cmd.args([
        "play",
        "-i",
        &path_arg(input_file.path()),
        "-p",
        "week",
        "--interval-ms",
        "10",
        "--ticks",
        "2",
    ]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let first = stdout.find("Period: week 2 of 2").unwrap();
    let wrapped = stdout.find("Period: week 1 of 2").unwrap();
    assert!(first < wrapped);
    assert_eq!(stdout.matches("Period Report").count(), 3);
    assert!(stdout.contains("Playback stopped at week 2 of 2"));
}

#[test]
fn play_with_zero_ticks_shows_current_window_only() {
    let input_file = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("simdash");
    cmd.args(["play", "-i", &path_arg(input_file.path()), "-p", "day", "--ticks", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Period: day 10 of 10 (days 9-9)"))
        .stdout(predicate::str::contains("Playback stopped").not());
}

#[test]
fn play_rejects_zero_interval() {
    let input_file = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("simdash");
    cmd.args([
        "play",
        "-i",
        &path_arg(input_file.path()),
        "--interval-ms",
        "0",
        "--ticks",
        "1",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Play interval must be greater than zero"));
}
