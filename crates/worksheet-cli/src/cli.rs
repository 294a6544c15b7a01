//! `worksheet` - command-line access to the worksheet editor text tools.

mod logging;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use worksheet_editor::{CaseAction, EditorPreferences, PreferenceOverrides};

use logging::{LoggingConfig, init_logging};

#[derive(Debug, Parser)]
#[command(name = "worksheet", version, about = "SQL worksheet editor text tools")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Toggle the case of code, keeping quoted strings and aliases as written
    Case {
        /// Uppercase everything instead of toggling
        #[arg(long, conflicts_with = "lower")]
        upper: bool,

        /// Lowercase everything instead of toggling
        #[arg(long)]
        lower: bool,

        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Resolve a stored preference string and print the full preference set
    Prefs {
        /// Reject invalid values instead of ignoring them
        #[arg(long)]
        strict: bool,

        /// Preference JSON (reads stdin when omitted)
        json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    init_logging(&config);

    let output = match cli.command {
        Command::Case { upper, lower, file } => {
            let input = read_input(file.as_deref())?;
            run_case(&input, case_action(upper, lower))
        }
        Command::Prefs { strict, json } => {
            let input = match json {
                Some(json) => json,
                None => read_input(None)?,
            };
            run_prefs(&input, strict)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;
    Ok(())
}

fn case_action(upper: bool, lower: bool) -> CaseAction {
    match (upper, lower) {
        (true, _) => CaseAction::Uppercase,
        (_, true) => CaseAction::Lowercase,
        _ => CaseAction::ToggleCase,
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn run_case(input: &str, action: CaseAction) -> String {
    tracing::debug!(?action, bytes = input.len(), "Transforming case");
    action.apply(input)
}

fn run_prefs(input: &str, strict: bool) -> Result<String> {
    let input = input.trim();
    let prefs = if strict {
        let overrides = if input.is_empty() {
            PreferenceOverrides::default()
        } else {
            PreferenceOverrides::parse_strict(input).context("Invalid preference string")?
        };
        let mut prefs = EditorPreferences::default();
        prefs.apply(&overrides);
        prefs
    } else {
        EditorPreferences::from_preferences_string(input)
    };

    let mut output = prefs.to_preferences_string()?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_upper_conflicts_with_lower() {
        let result = Cli::try_parse_from(["worksheet", "case", "--upper", "--lower"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_case_action_selection() {
        assert_eq!(case_action(false, false), CaseAction::ToggleCase);
        assert_eq!(case_action(true, false), CaseAction::Uppercase);
        assert_eq!(case_action(false, true), CaseAction::Lowercase);
    }

    #[test]
    fn test_run_case_toggles() {
        assert_eq!(
            run_case("SELECT 'Keep' FROM Dual\n", CaseAction::ToggleCase),
            "select 'Keep' from dual\n"
        );
    }

    #[test]
    fn test_run_prefs_lenient() {
        let output = run_prefs(r#"{"theme":"bogus","ruler":true}"#, false).unwrap();
        assert!(output.contains(r#""theme":"automatic""#));
        assert!(output.contains(r#""ruler":true"#));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_run_prefs_strict() {
        assert!(run_prefs(r#"{"theme":"bogus"}"#, true).is_err());

        let output = run_prefs(r#"{"theme":"vs"}"#, true).unwrap();
        assert!(output.contains(r#""theme":"vs""#));
        // Strict parsing leaves unset booleans at their defaults.
        assert!(output.contains(r#""lineNumbers":true"#));
    }

    #[test]
    fn test_run_prefs_empty_is_default() {
        let output = run_prefs("", false).unwrap();
        assert_eq!(
            output.trim_end(),
            EditorPreferences::default().to_preferences_string().unwrap()
        );
    }
}
