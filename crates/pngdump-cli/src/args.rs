//! Argument scanning.
//!
//! A single left-to-right pass over an owned copy of the argument tokens.
//! Option names and command names are fixed `match` mappings; `--roi` pulls
//! exactly one extra token, everything else must be a command name. A bare
//! `--` ends option recognition for the rest of the line.

use std::str::FromStr;

use pngdump_core::{Command, RoiSpec};

/// Marker that introduces an option token.
const OPTION_MARKER: &str = "--";

/// A fully scanned argument list: at most one effective ROI request plus the
/// selected command.
#[derive(Clone, Copy, Debug)]
pub struct Invocation {
    pub roi: Option<RoiSpec>,
    pub command: Command,
}

/// Scanning failures. Each carries the token that triggered it where there
/// is one.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("unknown option \"{token}\"")]
    UnknownOption { token: String },
    #[error("expected {option} {pattern}, got \"{got}\"")]
    MalformedOption {
        option: &'static str,
        pattern: &'static str,
        got: String,
    },
    #[error("unexpected command \"{token}\"")]
    UnknownCommand { token: String },
    #[error("expected a command: dump or histogram")]
    MissingCommand,
}

/// Recognized options.
#[derive(Clone, Copy, Debug)]
enum OptionKind {
    Roi,
}

fn option_kind(name: &str) -> Option<OptionKind> {
    match name {
        "roi" => Some(OptionKind::Roi),
        _ => None,
    }
}

fn command_kind(token: &str) -> Option<Command> {
    match token {
        "dump" => Some(Command::Dump),
        "histogram" => Some(Command::Histogram),
        _ => None,
    }
}

/// Scan the argument tokens (program name excluded).
///
/// Options and the command may appear in any order. If `--roi` is given more
/// than once the last occurrence wins; if a known command is given more than
/// once the first occurrence wins. Unknown tokens fail immediately.
pub fn parse(tokens: &[String]) -> Result<Invocation, ParseError> {
    let mut roi = None;
    let mut command = None;
    let mut options_done = false;

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if !options_done {
            if token == OPTION_MARKER {
                options_done = true;
                continue;
            }
            if let Some(name) = token.strip_prefix(OPTION_MARKER) {
                match option_kind(name) {
                    Some(OptionKind::Roi) => {
                        let got = iter.next().map(String::as_str).unwrap_or_default();
                        let spec = RoiSpec::from_str(got).map_err(|_| {
                            ParseError::MalformedOption {
                                option: "--roi",
                                pattern: "X,Y:WxH",
                                got: got.to_owned(),
                            }
                        })?;
                        roi = Some(spec);
                    }
                    None => {
                        return Err(ParseError::UnknownOption {
                            token: token.clone(),
                        })
                    }
                }
                continue;
            }
        }
        match command_kind(token) {
            Some(cmd) => {
                command.get_or_insert(cmd);
            }
            None => {
                return Err(ParseError::UnknownCommand {
                    token: token.clone(),
                })
            }
        }
    }

    let command = command.ok_or(ParseError::MissingCommand)?;
    Ok(Invocation { roi, command })
}
