// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell command parser
//!
//! Every line typed into the shell is either text to convert or a
//! directive starting with `:`. A leading `::` escapes a literal colon,
//! so `::)` converts the text `:)`.
//!
//! # Directives
//! ```text
//! :swap    :s          toggle direction, exchange input/output
//! :copy    :c          copy output to clipboard
//! :history :h          show history
//! :mode [text|morse]   show or set direction
//! :clear               empty both buffers
//! :export PATH         write history as JSON
//! :save PATH           write current output
//! :table               list the symbol table
//! :help    :?          list directives
//! :quit    :q          leave the shell
//! ```
//!
//! The directive syntax is parsed with nom; argument meaning is resolved
//! afterwards in plain Rust.

use nom::{
    character::complete::{alpha1, char, space1},
    combinator::{opt, rest},
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

use crate::core::{Mode, ParseModeError};

/// One parsed shell line
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShellCommand {
    /// Convert this text in the active mode
    Convert(String),
    Swap,
    Copy,
    History,
    /// Show (`None`) or set the direction
    Mode(Option<Mode>),
    Clear,
    /// Export history to a path
    Export(String),
    /// Save current output to a path
    Save(String),
    Table,
    Help,
    Quit,
}

/// Shell line that could not be understood
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Malformed directive: '{0}'")]
    Malformed(String),

    #[error("Unknown directive ':{0}' (try :help)")]
    Unknown(String),

    #[error("':{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("':{name}' takes no argument, got '{argument}'")]
    UnexpectedArgument { name: String, argument: String },

    #[error(transparent)]
    InvalidMode(#[from] ParseModeError),
}

/// Parses one line of shell input
///
/// # Example
/// ```
/// use morse_desk::session::commands::{parse_line, ShellCommand};
///
/// assert_eq!(parse_line(":swap"), Ok(ShellCommand::Swap));
/// assert_eq!(parse_line("hello"), Ok(ShellCommand::Convert("hello".to_string())));
/// ```
pub fn parse_line(line: &str) -> Result<ShellCommand, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(literal) = line.strip_prefix("::") {
        return Ok(ShellCommand::Convert(format!(":{}", literal)));
    }

    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        return Ok(ShellCommand::Convert(line.to_string()));
    }

    let (_, (name, argument)) =
        parse_directive(trimmed).map_err(|_| CommandError::Malformed(trimmed.to_string()))?;

    let name = name.to_lowercase();
    let argument = argument.map(str::trim).filter(|a| !a.is_empty());

    match name.as_str() {
        "swap" | "s" => no_argument(ShellCommand::Swap, &name, argument),
        "copy" | "c" => no_argument(ShellCommand::Copy, &name, argument),
        "history" | "h" => no_argument(ShellCommand::History, &name, argument),
        "clear" => no_argument(ShellCommand::Clear, &name, argument),
        "table" => no_argument(ShellCommand::Table, &name, argument),
        "help" => no_argument(ShellCommand::Help, &name, argument),
        "quit" | "q" | "exit" => no_argument(ShellCommand::Quit, &name, argument),
        "mode" | "m" => match argument {
            Some(value) => Ok(ShellCommand::Mode(Some(value.parse()?))),
            None => Ok(ShellCommand::Mode(None)),
        },
        "export" => argument
            .map(|path| ShellCommand::Export(path.to_string()))
            .ok_or(CommandError::MissingArgument("export")),
        "save" => argument
            .map(|path| ShellCommand::Save(path.to_string()))
            .ok_or(CommandError::MissingArgument("save")),
        _ => Err(CommandError::Unknown(name)),
    }
}

/// Parses `:name` with an optional space-separated remainder
///
/// Format: `:NAME [ARGUMENT...]`
pub fn parse_directive(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    if input == ":?" {
        return Ok(("", ("help", None)));
    }

    preceded(char(':'), (alpha1, opt(preceded(space1, rest)))).parse(input)
}

fn no_argument(
    command: ShellCommand,
    name: &str,
    argument: Option<&str>,
) -> Result<ShellCommand, CommandError> {
    match argument {
        None => Ok(command),
        Some(argument) => Err(CommandError::UnexpectedArgument {
            name: name.to_string(),
            argument: argument.to_string(),
        }),
    }
}
