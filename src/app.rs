use std::io::{BufRead, BufWriter, Write, stdin, stdout};

use crate::{
    common::{clock::Clock, error::AppError},
    demo,
    domain::ledger::Ledger,
    io::reader::Menu,
    worker::processor::{Flow, Processor},
};

pub const DEFAULT_TOP_N: usize = 3;

const USAGE: &str = "usage: wallet_ledger [--no-demo] [--top <N>]";

/// Command-line settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_demo: bool,
    pub top_n: usize,
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            top_n: DEFAULT_TOP_N,
            show_help: false,
        }
    }
}

impl AppConfig {
    /// Parses flags; the first item is the program name and is skipped.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = AppConfig::default();
        let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--no-demo" => config.seed_demo = false,
                "--help" | "-h" => config.show_help = true,
                "--top" => {
                    let value = args.next().unwrap_or_default();
                    config.top_n = value.parse().map_err(|_| AppError::InvalidArgValue {
                        flag: "--top",
                        value,
                    })?;
                }
                _ => return Err(AppError::UnknownArg(arg)),
            }
        }
        Ok(config)
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = AppConfig::from_args(args)?;

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    if config.show_help {
        writeln!(out, "{USAGE}")?;
        out.flush()?;
        return Ok(());
    }

    let mut ledger = Ledger::new();
    if config.seed_demo {
        demo::seed_demo(&mut ledger)?;
    }

    let stdin = stdin();
    let mut input = stdin.lock();
    run_session(&config, &mut ledger, &mut input, &mut out)
}

/// The interactive loop: read a command, process it, repeat until exit or
/// end of input.
pub fn run_session<C, R, W>(
    config: &AppConfig,
    ledger: &mut Ledger<C>,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let menu = Menu::new(config.top_n);
    let mut processor = Processor::new(config.top_n);

    writeln!(out, "=== Personal Finance Management System ===")?;
    while let Some(command) = menu.read_command(input, out)? {
        if processor.process(ledger, out, command)? == Flow::Exit {
            break;
        }
        out.flush()?;
    }

    writeln!(out, "Thank you! Goodbye.")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::clock::FixedClock;
    use chrono::Utc;

    #[test]
    fn parses_flags() {
        let config = AppConfig::from_args(["prog", "--no-demo", "--top", "5"]).unwrap();
        assert_eq!(
            config,
            AppConfig {
                seed_demo: false,
                top_n: 5,
                show_help: false,
            }
        );
        assert_eq!(AppConfig::from_args(["prog"]).unwrap(), AppConfig::default());
    }

    #[test]
    fn rejects_unknown_flags_and_bad_values() {
        assert!(matches!(
            AppConfig::from_args(["prog", "--verbose"]),
            Err(AppError::UnknownArg(ref a)) if a == "--verbose"
        ));
        assert!(matches!(
            AppConfig::from_args(["prog", "--top", "-1"]),
            Err(AppError::InvalidArgValue { flag: "--top", .. })
        ));
        assert!(matches!(
            AppConfig::from_args(["prog", "--top"]),
            Err(AppError::InvalidArgValue { .. })
        ));
    }

    #[test]
    fn session_runs_until_exit() {
        let mut ledger = Ledger::with_clock(FixedClock(Utc::now()));
        let mut input = "1\nCash\n1\n2\nCash\n500\n0\n2\nCash\n1\n".as_bytes();
        let mut out = Vec::new();

        run_session(&AppConfig::default(), &mut ledger, &mut input, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("=== Personal Finance Management System ==="));
        assert!(out.contains("DEBIT account added: Cash"));
        assert!(out.contains("Deposit successful. Balance: 500.00"));
        assert!(out.ends_with("Thank you! Goodbye.\n"));
        // nothing after exit is processed
        assert_eq!(ledger.account("Cash").unwrap().transactions().len(), 1);
    }

    #[test]
    fn session_ends_cleanly_at_eof() {
        let mut ledger = Ledger::with_clock(FixedClock(Utc::now()));
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        run_session(&AppConfig::default(), &mut ledger, &mut input, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Thank you! Goodbye.\n"));
    }
}
