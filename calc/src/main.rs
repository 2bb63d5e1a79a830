//! Calculator and collection utilities CLI.
//!
//! `calc eval` and `calc fold` run single calculations; `calc demo`,
//! `calc students` and `calc cart` report over inputs from a TOML config
//! (built-in sample data when the file is absent).

use std::path::PathBuf;

use anyhow::Result;
use calc::core::dispatcher::{Operation, calculate, try_fold_with_strategy};
use calc::demo::demo_lines;
use calc::exit_codes;
use calc::io::config::{init_config, load_config};
use calc::logging;
use calc::report::{OutputFormat, render_cart, render_students};
use clap::{Parser, Subcommand};
use tracing::debug;

const DEFAULT_CONFIG: &str = "calc.toml";

#[derive(Parser)]
#[command(
    name = "calc",
    version,
    about = "Calculator, strategy dispatch and collection utilities"
)]
struct Cli {
    /// Log calc diagnostics at debug level (ignored when `RUST_LOG` is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config (sample data) if missing.
    Init {
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the full walkthrough of every operation.
    Demo {
        /// TOML file with demo inputs.
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
    /// Apply one operation (`+ - * x /` or its name) to two numbers.
    Eval {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Fold an operation left-to-right over numbers; prints `none` when empty.
    Fold {
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Rank passing students by average.
    Students {
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Summarize the shopping cart total and price tiers.
    Cart {
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Init { config, force } => cmd_init(config, force),
        Command::Demo { config } => cmd_demo(config),
        Command::Eval { a, op, b } => Ok(cmd_eval(a, op, b)),
        Command::Fold { op, numbers } => Ok(cmd_fold(op, &numbers)),
        Command::Students { config, format } => {
            let cfg = load_config(&config)?;
            print!("{}", render_students(&cfg.students, format)?);
            Ok(exit_codes::OK)
        }
        Command::Cart { config, format } => {
            let cfg = load_config(&config)?;
            print!("{}", render_cart(&cfg.cart, format)?);
            Ok(exit_codes::OK)
        }
    }
}

fn cmd_init(config: PathBuf, force: bool) -> Result<i32> {
    if init_config(&config, force)? {
        println!("wrote {}", config.display());
    } else {
        println!("kept {}", config.display());
    }
    Ok(exit_codes::OK)
}

fn cmd_demo(config: PathBuf) -> Result<i32> {
    let cfg = load_config(&config)?;
    for line in demo_lines(&cfg) {
        println!("{}", line);
    }
    Ok(exit_codes::OK)
}

fn cmd_eval(a: f64, op: Operation, b: f64) -> i32 {
    debug!(a, b, %op, "eval");
    match calculate(a, b, op) {
        Ok(value) => {
            println!("{}", value);
            exit_codes::OK
        }
        Err(err) => {
            eprintln!("error: {}", err);
            exit_codes::ARITHMETIC
        }
    }
}

fn cmd_fold(op: Operation, numbers: &[f64]) -> i32 {
    debug!(%op, count = numbers.len(), "fold");
    match try_fold_with_strategy(numbers, |acc, x| op.apply(acc, x)) {
        Ok(Some(value)) => {
            println!("{}", value);
            exit_codes::OK
        }
        Ok(None) => {
            println!("none");
            exit_codes::OK
        }
        Err(err) => {
            eprintln!("error: {}", err);
            exit_codes::ARITHMETIC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eval_with_symbol() {
        let cli = Cli::parse_from(["calc", "eval", "6", "/", "3"]);
        assert!(matches!(
            cli.command,
            Command::Eval {
                op: Operation::Division,
                ..
            }
        ));
    }

    #[test]
    fn parse_eval_negative_operand() {
        let cli = Cli::parse_from(["calc", "eval", "-2", "mul", "-3.5"]);
        match cli.command {
            Command::Eval { a, op, b } => {
                assert_eq!(a, -2.0);
                assert_eq!(op, Operation::Multiplication);
                assert_eq!(b, -3.5);
            }
            _ => panic!("expected eval"),
        }
    }

    #[test]
    fn parse_rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["calc", "eval", "1", "%", "2"]).is_err());
    }

    #[test]
    fn parse_fold_without_numbers() {
        let cli = Cli::parse_from(["calc", "fold", "+"]);
        match cli.command {
            Command::Fold { numbers, .. } => assert!(numbers.is_empty()),
            _ => panic!("expected fold"),
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["calc", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["calc", "demo", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_students_json() {
        let cli = Cli::parse_from(["calc", "students", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Command::Students {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn eval_division_by_zero_exit_code() {
        assert_eq!(cmd_eval(1.0, Operation::Division, 0.0), exit_codes::ARITHMETIC);
        assert_eq!(cmd_eval(1.0, Operation::Addition, 0.0), exit_codes::OK);
    }
}
