//! CLI entry point for morse-desk
//!
//! Provides one-shot encode/decode, a symbol table listing, and the
//! interactive shell (the default when no subcommand is given).

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;
use morse_desk::{
    config::{AppConfig, ConfigError, DEFAULT_COPY_FEEDBACK_MS, DEFAULT_HISTORY_LIMIT},
    core::{codec::join_lines, Codec},
    export, logging,
    session::{clipboard::SystemClipboard, shell::write_table, Controller, Shell},
    Mode,
};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "morse-desk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of conversions kept in session history
    #[arg(long, global = true, env = "MORSE_DESK_HISTORY_LIMIT", default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// How long the copy confirmation stays visible, in milliseconds
    #[arg(long, global = true, env = "MORSE_DESK_COPY_FEEDBACK_MS", default_value_t = DEFAULT_COPY_FEEDBACK_MS)]
    copy_feedback_ms: u64,

    /// Disable colored output (NO_COLOR is also honoured)
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text as Morse code
    Encode(ConvertArgs),

    /// Decode Morse code to text
    Decode(ConvertArgs),

    /// List the symbol table
    Table,

    /// Start an interactive session
    Shell {
        /// Starting direction (text or morse)
        #[arg(short, long, env = "MORSE_DESK_MODE", default_value = "text")]
        mode: String,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Input (joined with spaces); read from stdin when omitted
    input: Vec<String>,

    /// Read input from a file instead
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    config.apply_color();

    match cli.command {
        Some(Commands::Encode(args)) => convert_once(Mode::TextToMorse, &args)?,
        Some(Commands::Decode(args)) => convert_once(Mode::MorseToText, &args)?,
        Some(Commands::Table) => write_table(Codec::new().table(), &mut io::stdout())?,
        Some(Commands::Shell { .. }) | None => run_shell(&config)?,
    }

    Ok(())
}

/// Assembles and validates settings from the parsed command line
///
/// Runs before any subcommand, so bad flags are rejected the same way
/// everywhere.
fn build_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default()
        .with_history_limit(cli.history_limit)
        .with_copy_feedback_ms(cli.copy_feedback_ms)
        .with_color(!cli.no_color);

    if let Some(Commands::Shell { mode }) = &cli.command {
        config = config.with_mode_name(mode)?;
    }

    config.validate()?;
    Ok(config)
}

/// Runs a single conversion and prints or saves the result
fn convert_once(mode: Mode, args: &ConvertArgs) -> anyhow::Result<()> {
    let input = join_lines(mode, &read_input(args)?);
    let output = Codec::new().convert(mode, &input);
    debug!(%mode, input_len = input.len(), output_len = output.len(), "One-shot conversion");

    match &args.output {
        Some(path) => {
            let written = export::write_output(path, &output)?;
            println!("{} Saved to {}", "✓".green(), written.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Collects input from arguments, a file, or stdin
fn read_input(args: &ConvertArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.file {
        let path = export::expand_path(path)?;
        return read_file(&path);
    }

    if !args.input.is_empty() {
        return Ok(args.input.join(" "));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No input given (pass text, --file, or pipe into stdin)");
    }

    io::read_to_string(stdin).context("Failed to read stdin")
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Runs the interactive shell on stdin/stdout
fn run_shell(config: &AppConfig) -> anyhow::Result<()> {
    let controller = Controller::new(config);
    let mut shell = Shell::new(controller, Box::new(SystemClipboard::new()));

    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_no_color_flag_has_no_env_binding() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "no_color")
            .unwrap();

        // NO_COLOR=1 must not be parsed as a clap boolean
        assert!(arg.get_env().is_none());
    }

    #[test]
    fn test_invalid_flags_rejected_for_every_subcommand() {
        for args in [
            vec!["morse-desk", "--history-limit", "0", "encode", "hi"],
            vec!["morse-desk", "--history-limit", "0", "decode", "..."],
            vec!["morse-desk", "--copy-feedback-ms", "0", "table"],
            vec!["morse-desk", "--history-limit", "0", "shell"],
        ] {
            let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
            assert!(build_config(&cli).is_err(), "Should reject {:?}", args);
        }
    }

    #[test]
    fn test_shell_mode_applied() {
        let cli = Cli::try_parse_from(["morse-desk", "shell", "--mode", "morse"]).unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.default_mode, Mode::MorseToText);

        let cli = Cli::try_parse_from(["morse-desk", "shell", "--mode", "flags"]).unwrap();
        assert!(matches!(build_config(&cli), Err(ConfigError::InvalidMode(_))));
    }

    #[test]
    fn test_no_color_flag_disables_color() {
        let cli = Cli::try_parse_from(["morse-desk", "--no-color", "table"]).unwrap();
        assert!(!build_config(&cli).unwrap().color);
    }
}
