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

//! Line-oriented interactive shell
//!
//! The presentation layer for a session: reads lines, parses them with
//! [`parse_line`], forwards commands to the [`Controller`] and renders the
//! result. Reader and writer are generic so the whole loop can be driven
//! from tests.

use colored::*;
use std::{
    io::{self, BufRead, Write},
    path::Path,
    time::Instant,
};
use tracing::debug;

use crate::core::SymbolTable;
use crate::export;
use crate::session::{
    clipboard::ClipboardSink,
    commands::{parse_line, ShellCommand},
    Controller,
};

const HELP: &str = "\
  <text>               convert in the active direction
  ::<text>             convert text starting with ':'
  :swap    :s          toggle direction and exchange input/output
  :copy    :c          copy output to clipboard
  :history :h          show recent conversions
  :mode [text|morse]   show or set direction
  :clear               empty input and output
  :export PATH         write history as JSON
  :save PATH           write current output
  :table               list the symbol table
  :help    :?          this list
  :quit    :q          leave";

/// Interactive session bound to a controller and a clipboard
pub struct Shell {
    controller: Controller,
    clipboard: Box<dyn ClipboardSink>,
}

impl Shell {
    pub fn new(controller: Controller, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            controller,
            clipboard,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Runs until `:quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "{} {}",
            "Morse Desk".bold(),
            "(:help for commands, :quit to leave)".dimmed()
        )?;

        let mut line = String::new();
        loop {
            self.write_prompt(&mut writer)?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                writeln!(writer)?;
                break;
            }

            let command = match parse_line(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(writer, "{} {}", "✗".red(), e)?;
                    continue;
                }
            };

            debug!(?command, "Shell command");

            if !self.execute(command, &mut writer)? {
                break;
            }
        }

        Ok(())
    }

    /// Executes one command, returning false when the shell should exit
    pub fn execute<W: Write>(&mut self, command: ShellCommand, writer: &mut W) -> io::Result<bool> {
        match command {
            ShellCommand::Convert(text) => {
                let outcome = self.controller.submit(&text);
                if !outcome.output.is_empty() {
                    writeln!(writer, "{}", outcome.output.green())?;
                }
            }
            ShellCommand::Swap => {
                self.controller.swap();
                writeln!(
                    writer,
                    "{} {}",
                    "⇄".cyan(),
                    format!("{}", self.controller.mode()).bold()
                )?;
                if !self.controller.input().is_empty() {
                    writeln!(writer, "  input:  {}", self.controller.input())?;
                    writeln!(writer, "  output: {}", self.controller.output())?;
                }
            }
            ShellCommand::Copy => {
                if self.controller.output().is_empty() {
                    writeln!(writer, "{}", "Nothing to copy".yellow())?;
                } else if self.controller.copy(self.clipboard.as_mut(), Instant::now()) {
                    writeln!(writer, "{} {}", "✓".green(), "Copied".green())?;
                }
            }
            ShellCommand::History => self.write_history(writer)?,
            ShellCommand::Mode(None) => {
                writeln!(writer, "{}", format!("{}", self.controller.mode()).bold())?;
            }
            ShellCommand::Mode(Some(mode)) => {
                self.controller.set_mode(mode);
                writeln!(writer, "{} {}", "→".cyan(), format!("{}", mode).bold())?;
            }
            ShellCommand::Clear => self.controller.clear_buffers(),
            ShellCommand::Export(path) => {
                match export::write_history(Path::new(&path), self.controller.history()) {
                    Ok(written) => writeln!(
                        writer,
                        "{} Exported {} entr{} to {}",
                        "✓".green(),
                        self.controller.history().len(),
                        if self.controller.history().len() == 1 { "y" } else { "ies" },
                        written.display()
                    )?,
                    Err(e) => writeln!(writer, "{} {}", "✗".red(), e)?,
                }
            }
            ShellCommand::Save(path) => {
                if self.controller.output().is_empty() {
                    writeln!(writer, "{}", "Nothing to save".yellow())?;
                } else {
                    match export::write_output(Path::new(&path), self.controller.output()) {
                        Ok(written) => {
                            writeln!(writer, "{} Saved to {}", "✓".green(), written.display())?
                        }
                        Err(e) => writeln!(writer, "{} {}", "✗".red(), e)?,
                    }
                }
            }
            ShellCommand::Table => write_table(self.controller.codec().table(), writer)?,
            ShellCommand::Help => writeln!(writer, "{}", HELP)?,
            ShellCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn write_prompt<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let badge = if self.controller.copy_confirmed(Instant::now()) {
            format!(" {}", "✓ copied".green())
        } else {
            String::new()
        };

        write!(
            writer,
            "{}{} {} ",
            format!("[{}]", self.controller.mode()).cyan(),
            badge,
            ">".bold()
        )?;
        writer.flush()
    }

    fn write_history<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let history = self.controller.history();
        if history.is_empty() {
            return writeln!(writer, "{}", "No conversions yet".dimmed());
        }

        for (i, record) in history.iter().enumerate() {
            writeln!(
                writer,
                "{} {} {}",
                format!("{:>2}.", i + 1).dimmed(),
                record.created_at.format("%H:%M:%S").to_string().dimmed(),
                format!("{}", record.mode).magenta()
            )?;
            writeln!(writer, "    {} → {}", record.input, record.output.green())?;
        }

        writeln!(
            writer,
            "{}",
            format!("{} of {} kept", history.len(), history.limit()).dimmed()
        )
    }
}

/// Lists the symbol table, four entries per row
pub fn write_table<W: Write>(table: &SymbolTable, writer: &mut W) -> io::Result<()> {
    for row in table.entries().chunks(4) {
        let cells: Vec<String> = row
            .iter()
            .map(|(c, token)| {
                let label = if *c == ' ' { "␣".to_string() } else { c.to_string() };
                format!("{} {:<8}", label.cyan().bold(), token)
            })
            .collect();
        writeln!(writer, "{}", cells.join("  "))?;
    }
    Ok(())
}
