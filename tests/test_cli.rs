//! Tests for CLI argument parsing and end-to-end runs of the binary

use assert_cmd::Command;
use clap::Parser;
use countrytrans::cli::{Cli, Commands};
use predicates::prelude::*;
use std::path::PathBuf;

#[path = "common/mod.rs"]
mod common;

fn countrytrans() -> Command {
    let mut cmd = Command::cargo_bin("countrytrans").unwrap();
    cmd.arg("--quiet");
    cmd
}

#[test]
fn test_cli_default_paths() {
    let cli = Cli::parse_from(["countrytrans"]);

    assert_eq!(cli.data, common::bundled("sample.json"));
    assert_eq!(cli.countries, common::bundled("country-codes.txt"));
    assert_eq!(cli.languages, common::bundled("language-codes.txt"));
    assert!(!cli.quiet, "Default quiet should be false");
    assert!(cli.command.is_none(), "Interactive mode is the default");
}

#[test]
fn test_cli_custom_paths() {
    let cli = Cli::parse_from([
        "countrytrans",
        "--data",
        "my.json",
        "--countries",
        "c.txt",
        "--languages",
        "l.txt",
        "-q",
    ]);

    assert_eq!(cli.data, PathBuf::from("my.json"));
    assert_eq!(cli.countries, PathBuf::from("c.txt"));
    assert_eq!(cli.languages, PathBuf::from("l.txt"));
    assert!(cli.quiet);
}

#[test]
fn test_cli_lookup_subcommand() {
    let cli = Cli::parse_from(["countrytrans", "lookup", "Canada", "German"]);

    match cli.command {
        Some(Commands::Lookup { country, language }) => {
            assert_eq!(country, "Canada");
            assert_eq!(language, "German");
        }
        None => panic!("Expected the lookup subcommand"),
    }
}

#[test]
fn test_binary_quit_first() {
    countrytrans()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("select a country from above:"))
        .stdout(predicate::str::contains(" is ").not());
}

#[test]
fn test_binary_round_then_end_of_input() {
    countrytrans()
        .write_stdin("Canada\nGerman\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canada in German is Kanada"))
        .stdout(predicate::str::contains(
            "Press enter to continue or quit to exit.",
        ));
}

#[test]
fn test_binary_unicode_translation() {
    countrytrans()
        .write_stdin("Japan\nJapanese\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Japan in Japanese is 日本"));
}

#[test]
fn test_binary_status_lines_go_to_stderr() {
    Command::cargo_bin("countrytrans")
        .unwrap()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 12 countries"))
        .stdout(predicate::str::contains("Loaded").not());
}

#[test]
fn test_binary_lookup() {
    countrytrans()
        .args(["lookup", "Mexico", "Italian"])
        .assert()
        .success()
        .stdout("Mexico in Italian is Messico\n");
}

#[test]
fn test_binary_lookup_missing_language() {
    countrytrans()
        .args(["lookup", "Brazil", "German"])
        .assert()
        .success()
        .stdout("Brazil in German is (no translation)\n");
}

#[test]
fn test_binary_missing_dataset_is_fatal() {
    countrytrans()
        .args(["--data", "/nonexistent/sample.json"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load country dataset"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_binary_malformed_reference_is_fatal() {
    let (_dir, path) = common::create_temp_file("language-codes.txt", "ISO 639-1\tLanguage\nen\n");

    countrytrans()
        .arg("--languages")
        .arg(&path)
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load language code reference"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_binary_custom_dataset() {
    let (_dir, path) = common::create_temp_file("countries.json", common::SAMPLE_JSON);

    countrytrans()
        .arg("--data")
        .arg(&path)
        .args(["lookup", "Germany", "German"])
        .assert()
        .success()
        .stdout("Germany in German is Deutschland\n");
}

#[test]
fn test_binary_survives_undecodable_input() {
    countrytrans()
        .write_stdin(&b"Can\xffada\nGerman\nquit\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada in German is Country Not Found"));
}
