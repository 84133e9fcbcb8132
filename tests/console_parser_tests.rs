//! Parser tests for command line tokenizing

use tiny_cli::config::MAX_ARGS;
use tiny_cli::console::parser::{parse_line, Args};

#[test]
fn test_parse_simple_command() {
    let cmd = parse_line("help").unwrap();
    assert_eq!(cmd.command, "help");
    assert_eq!(cmd.args.len(), 0);
    assert_eq!(cmd.arg(0), None);
}

#[test]
fn test_parse_command_with_one_arg() {
    let cmd = parse_line("led 1").unwrap();
    assert_eq!(cmd.command, "led");
    assert_eq!(cmd.args.as_slice(), &["1"]);
    assert_eq!(cmd.arg(1), None);
}

#[test]
fn test_parse_collapses_space_runs() {
    let cmd = parse_line("  set   wpm  25  ").unwrap();
    assert_eq!(cmd.command, "set");
    assert_eq!(cmd.args.as_slice(), &["wpm", "25"]);
}

#[test]
fn test_parse_empty_line() {
    assert!(parse_line("").is_none());
    assert!(parse_line("     ").is_none());
}

#[test]
fn test_parse_max_args() {
    let cmd = parse_line("cmd a b c d e f g").unwrap();
    assert_eq!(cmd.command, "cmd");
    assert_eq!(cmd.args.len(), MAX_ARGS);
    assert_eq!(cmd.args.as_slice(), &["a", "b", "c", "d", "e"]);
    // "f" and "g" are dropped
}

#[test]
fn test_parse_splits_on_space_only() {
    let cmd = parse_line("echo a\tb").unwrap();
    assert_eq!(cmd.command, "echo");
    assert_eq!(cmd.arg(0), Some("a\tb"));
}

#[test]
fn test_parse_words_borrow_from_line() {
    let line = String::from("show keyer");
    let cmd = parse_line(&line).unwrap();

    let start = line.as_ptr() as usize;
    assert_eq!(cmd.command.as_ptr() as usize, start);
    assert_eq!(cmd.arg(0).unwrap().as_ptr() as usize, start + 5);
}

#[test]
fn test_args_from_words_caps_at_max() {
    let args = Args::from_words(["1", "2", "3", "4", "5", "6"]);
    assert_eq!(args.len(), MAX_ARGS);
    assert_eq!(args.iter().last(), Some("5"));
}
