//! Command-line front end.
//!
//! Replaces the HTML form of the browser version: two comma-separated
//! operand lists, a declared pair count, a tick duration, and an output
//! format. All validation happens here before the scheduler sees a
//! single operand.

use clap::{Parser, ValueEnum};
use tracing::debug;

use shiftadd_core::PipelineScheduler;

use crate::error::Result;
use crate::input::{parse_duration, parse_operands};
use crate::report::{Report, result_line};
use crate::table;

#[derive(Debug, Parser)]
#[command(
    name = "shiftadd",
    about = "Simulate a shift-and-add binary multiplication pipeline",
    version
)]
pub struct Cli {
    /// Comma-separated multiplicands (A), decimal, 0-255.
    #[arg(long, short = 'a', value_name = "LIST")]
    pub first: String,

    /// Comma-separated multipliers (B), decimal, 0-255.
    #[arg(long, short = 'b', value_name = "LIST")]
    pub second: String,

    /// Declared pair count; both lists must match it exactly.
    #[arg(long, short = 'n', value_name = "COUNT")]
    pub count: usize,

    /// Time per tick, a positive integer in arbitrary units.
    #[arg(long, short = 't', value_name = "TIME", default_value_t = 1)]
    pub time: i64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// How the finished run is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Result line plus the diagonal stage table.
    Text,
    /// Machine-readable report (results, elapsed time, histories).
    Json,
}

pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let duration = parse_duration(cli.time)?;
    let first = parse_operands(&cli.first, cli.count)?;
    let second = parse_operands(&cli.second, cli.count)?;

    let mut scheduler = PipelineScheduler::new(duration);
    for (a, b) in first.into_iter().zip(second) {
        scheduler.submit(a, b);
    }
    scheduler.run_to_completion();
    debug!(
        pairs = cli.count,
        elapsed = scheduler.elapsed(),
        "simulation complete"
    );

    match cli.format {
        Format::Text => {
            println!("{}", result_line(&scheduler.collect_results()));
            print!("{}", table::render(&scheduler.collect_histories()));
        }
        Format::Json => {
            println!("{}", Report::from_scheduler(&scheduler).to_json()?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::input::InputError;

    fn cli(first: &str, second: &str, count: usize, time: i64) -> Cli {
        Cli {
            first: first.to_owned(),
            second: second.to_owned(),
            count,
            time,
            format: Format::Text,
        }
    }

    #[test]
    fn args_parse_from_the_command_line() {
        let cli = Cli::parse_from([
            "shiftadd", "--first", "3,12", "--second", "5,12", "--count", "2", "--time", "1",
        ]);
        assert_eq!(cli.first, "3,12");
        assert_eq!(cli.count, 2);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn short_flags_and_format_parse() {
        let cli = Cli::parse_from([
            "shiftadd", "-a", "3", "-b", "5", "-n", "1", "--format", "json",
        ]);
        assert_eq!(cli.time, 1);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn run_validates_before_simulating() {
        let result = run(cli("3,5", "5", 2, 1));
        assert!(matches!(
            result,
            Err(CliError::Input(InputError::InvalidCount { .. }))
        ));

        let result = run(cli("3", "5", 1, 0));
        assert!(matches!(
            result,
            Err(CliError::Input(InputError::InvalidDuration { value: 0 }))
        ));
    }

    #[test]
    fn run_accepts_a_valid_batch() {
        assert!(run(cli("2,10", "2,10", 2, 1)).is_ok());
    }
}
