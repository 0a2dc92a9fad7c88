use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};

/// daytint: a background that follows the time of day.
#[derive(Parser, Debug)]
#[command(name = "daytint", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `daytint=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the current appearance once and exit.
    #[arg(long)]
    pub once: bool,

    /// Evaluate at a fixed local time (HH:MM) instead of the clock.
    #[arg(long, value_parser = parse_clock_time)]
    pub at: Option<NaiveTime>,

    /// Emit appearances as JSON instead of CSS.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the stored settings record.
    Settings,
    /// Validate a settings record (JSON) and store it.
    ///
    /// Fields left out keep their current values.
    Apply {
        /// JSON object, e.g. '{"mode":"single-color","singleColor":"#336699"}'.
        json: String,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_clock_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| format!("expected HH:MM (24-hour), got {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_running() {
        let args = Args::try_parse_from(["daytint"]).unwrap();
        assert!(!args.once);
        assert!(!args.json);
        assert!(args.at.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn parses_fixed_time() {
        let args = Args::try_parse_from(["daytint", "--once", "--at", "08:30"]).unwrap();
        assert!(args.once);
        assert_eq!(args.at, NaiveTime::from_hms_opt(8, 30, 0));
    }

    #[test]
    fn rejects_bad_time() {
        for bad in ["8h30", "24:00", "12:60", ""] {
            assert!(
                Args::try_parse_from(["daytint", "--at", bad]).is_err(),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn parses_apply() {
        let args = Args::try_parse_from([
            "daytint",
            "--config",
            "/tmp/d.toml",
            "apply",
            r#"{"mode":"gradient"}"#,
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/d.toml")));
        assert_eq!(
            args.command,
            Some(Command::Apply {
                json: r#"{"mode":"gradient"}"#.into()
            })
        );
    }
}
