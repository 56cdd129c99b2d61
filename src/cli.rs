//! Command dispatch for the `muster` binary. Exit codes: 0 success, 1 for
//! runtime failures, 2 for usage errors.

use std::fs;

use crate::roster::{normalize, UnitRecord};
use crate::transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Normalize,
    Decode,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("normalize") => Some(Command::Normalize),
        Some("decode") => Some(Command::Decode),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Normalize) => handle_normalize(args),
        Some(Command::Decode) => handle_decode(args),
        None => {
            eprintln!("usage: muster <normalize|decode> ...");
            2
        }
    }
}

fn handle_normalize(args: &[String]) -> i32 {
    let Some(path) = args.get(2).filter(|a| !a.starts_with("--")) else {
        eprintln!("usage: muster normalize <roster.json> [--out <path>]");
        return 2;
    };
    let Ok(out) = out_path(args) else {
        eprintln!("usage: muster normalize <roster.json> [--out <path>]");
        return 2;
    };
    let root = match transport::load_roster_file(path) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("normalize error: {err}");
            return 1;
        }
    };
    emit(&normalize(&root), out)
}

fn handle_decode(args: &[String]) -> i32 {
    let Some(encoded) = args.get(2).filter(|a| !a.starts_with("--")) else {
        eprintln!("usage: muster decode <encoded-payload> [--out <path>]");
        return 2;
    };
    let Ok(out) = out_path(args) else {
        eprintln!("usage: muster decode <encoded-payload> [--out <path>]");
        return 2;
    };
    let root = match transport::decode_fragment(encoded) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("decode error: {err}");
            return 1;
        }
    };
    emit(&normalize(&root), out)
}

/// Err when `--out` is present but its value is missing.
fn out_path(args: &[String]) -> Result<Option<&String>, ()> {
    match args.iter().position(|arg| arg == "--out") {
        Some(at) => match args.get(at + 1) {
            Some(path) => Ok(Some(path)),
            None => Err(()),
        },
        None => Ok(None),
    }
}

fn emit(records: &[UnitRecord], out: Option<&String>) -> i32 {
    let serialized = match serde_json::to_string_pretty(records) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("serialize error: {err}");
            return 1;
        }
    };
    match out {
        Some(path) => match fs::write(path, serialized) {
            Ok(()) => {
                println!("wrote {path}");
                0
            }
            Err(err) => {
                eprintln!("write error: {err}");
                1
            }
        },
        None => {
            println!("{serialized}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn known_commands_parse() {
        assert_eq!(
            parse_command(&args(&["muster", "normalize", "x.json"])),
            Some(Command::Normalize)
        );
        assert_eq!(
            parse_command(&args(&["muster", "decode", "abc"])),
            Some(Command::Decode)
        );
        assert_eq!(parse_command(&args(&["muster", "render"])), None);
        assert_eq!(parse_command(&args(&["muster"])), None);
    }

    #[test]
    fn out_path_follows_the_flag() {
        let argv = args(&["muster", "normalize", "x.json", "--out", "y.json"]);
        assert_eq!(out_path(&argv), Ok(Some(&"y.json".to_string())));
        assert_eq!(out_path(&args(&["muster", "normalize", "x.json"])), Ok(None));
    }

    #[test]
    fn out_flag_without_value_is_an_error() {
        let argv = args(&["muster", "normalize", "x.json", "--out"]);
        assert_eq!(out_path(&argv), Err(()));
    }
}
