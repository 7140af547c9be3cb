use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use scicalc::calculator::{CalcResult, copy_to_clipboard, evaluate_expression};
use scicalc::config::{self, Config};
use scicalc::session::Session;
use scicalc::shell::Shell;
use scicalc::ui::ThemeMode;

#[derive(Parser)]
#[command(
    name = "scicalc",
    version,
    about = "Scientific calculator: trigonometry in degrees, logarithms, roots, powers and factorials"
)]
struct Cli {
    /// Expression to evaluate once; starts the interactive shell when omitted
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,

    /// Color theme, overriding the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show which config file is used and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.show_config {
        println!("{}", config::show_config_path(cli.config.as_deref()));
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::load_config(cli.config.as_deref())?;

    if cli.expression.is_empty() {
        run_shell(&cli, &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let expression = cli.expression.join(" ");
    let result = evaluate_expression(&expression, &config.display.number_format());
    Ok(print_once(&cli, &config, &result))
}

fn print_once(cli: &Cli, config: &Config, result: &CalcResult) -> ExitCode {
    if cli.json {
        let output = match result {
            CalcResult::Success { value, .. } => json!({
                "expression": result.expression(),
                "value": value,
                "display": result.display(),
            }),
            CalcResult::Error { kind, message, .. } => json!({
                "expression": result.expression(),
                "error": message,
                "kind": kind,
            }),
        };
        println!("{output}");
    } else if result.is_success() {
        println!("{}", result.display());
    } else {
        eprintln!("{}", result.display());
    }

    if let Some(text) = result.clipboard()
        && (cli.copy || config.clipboard.copy_on_submit)
        && let Err(err) = copy_to_clipboard(text)
    {
        tracing::warn!("{err:#}");
    }

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_shell(cli: &Cli, config: &Config) -> Result<()> {
    let theme = cli.theme.unwrap_or(config.theme.mode);
    let session = Session::new(theme, config.display.number_format());
    let mut shell = Shell::new(session, cli.copy || config.clipboard.copy_on_submit);

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        tracing::debug!("reading expressions from a pipe");
    }
    shell.run(stdin.lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_may_start_with_minus() {
        let cli = Cli::try_parse_from(["scicalc", "-3*2"]).unwrap();
        assert_eq!(cli.expression, ["-3*2"]);

        let cli = Cli::try_parse_from(["scicalc", "--json", "-4", "+", "1"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.expression.join(" "), "-4 + 1");
    }
}
