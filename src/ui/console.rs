//! Console command parsing
//!
//! The console front-end stands in for pointer input: each line names an
//! interaction (`click 3 3`, `hover 3 4`, `rainbow`, `reset 8`, ...).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::CellCoords;

/// Text shown when asking for a new board size
pub const RESET_PROMPT: &str = "How many cells per line (MIN = 1, MAX = 64)?";

pub const HELP: &str = "\
commands:
  reset [n]          new board with n cells per side (prompts when n is omitted)
  click <row> <col>  toggle the pen on a cell
  hover <row> <col>  move over a cell
  stroke <r> <c> <r> <c>
                     click, drag to the second cell, click
  rainbow            toggle rainbow mode
  show               print the board
  save <path>        write the board as PNG
  help               this text
  quit               exit";

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resize; None means ask with `RESET_PROMPT`
    Reset(Option<String>),
    Click(CellCoords),
    Hover(CellCoords),
    Stroke { from: CellCoords, to: CellCoords },
    Rainbow,
    Show,
    Save(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    WrongArguments { command: &'static str, expected: &'static str },
    #[error("`{0}` is not a cell index")]
    InvalidIndex(String),
}

/// Parses one console line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Err(CommandError::Empty);
    };
    let args: Vec<&str> = words.collect();

    match name.to_ascii_lowercase().as_str() {
        // The size stays free text; validation belongs to the grid config
        "reset" | "size" => Ok(Command::Reset((!args.is_empty()).then(|| args.join(" ")))),
        "click" | "c" => Ok(Command::Click(coords("click", &args)?)),
        "hover" | "h" => Ok(Command::Hover(coords("hover", &args)?)),
        "stroke" | "s" => {
            if args.len() != 4 {
                return Err(CommandError::WrongArguments {
                    command: "stroke",
                    expected: "<row> <col> <row> <col>",
                });
            }
            Ok(Command::Stroke {
                from: coords("stroke", &args[..2])?,
                to: coords("stroke", &args[2..])?,
            })
        }
        "rainbow" | "r" => no_args(Command::Rainbow, "rainbow", &args),
        "show" | "p" => no_args(Command::Show, "show", &args),
        "save" => match args.as_slice() {
            [path] => Ok(Command::Save(PathBuf::from(*path))),
            _ => Err(CommandError::WrongArguments {
                command: "save",
                expected: "a single path",
            }),
        },
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn no_args(command: Command, name: &'static str, args: &[&str]) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::WrongArguments {
            command: name,
            expected: "no arguments",
        })
    }
}

fn coords(command: &'static str, args: &[&str]) -> Result<CellCoords, CommandError> {
    let [row, col] = args else {
        return Err(CommandError::WrongArguments {
            command,
            expected: "<row> <col>",
        });
    };
    Ok(CellCoords::new(index(row)?, index(col)?))
}

fn index(word: &str) -> Result<u32, CommandError> {
    word.parse().map_err(|_| CommandError::InvalidIndex(word.to_string()))
}
