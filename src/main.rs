//! Damage probability estimator.
//!
//! Plays many independent games and prints the damage distribution, one
//! `<damage>,<count>,<probability>` line per observed damage value.
//!
//! Usage:
//!   damage-probabilities [OPTIONS]
//!
//! Options:
//!   --max-damage N   Weapon maximum damage (default: 10)
//!   --iterations N   Number of trials (default: 100000)
//!   --seed N         RNG seed (default: current time)
//!   --quiet          Skip the run header on stderr

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use damage_probabilities::{Simulation, SimulationOptions};
use thiserror::Error;

struct Config {
    options: SimulationOptions,
    seed: u64,
    quiet: bool,
}

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{0} requires a number")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown argument: {0}")]
    Unknown(String),
    #[error("help requested")]
    Help,
}

fn parse_number<T: core::str::FromStr>(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, ArgsError> {
    let value = args
        .next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_owned()))?;
    value.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_owned(),
        value,
    })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Config, ArgsError> {
    let mut config = Config {
        options: SimulationOptions::default(),
        seed: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        quiet: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-damage" => {
                let max_damage = parse_number(&arg, &mut args)?;
                config.options = config.options.with_weapon_max_damage(max_damage);
            }
            "--iterations" => {
                let iterations = parse_number(&arg, &mut args)?;
                config.options = config.options.with_iterations(iterations);
            }
            "--seed" => config.seed = parse_number(&arg, &mut args)?,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => return Err(ArgsError::Help),
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(config)
}

fn print_usage() {
    eprintln!(
        "Damage probability estimator\n\
         \n\
         Usage: damage-probabilities [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --max-damage N   Weapon maximum damage (default: 10)\n\
         \x20 --iterations N   Number of trials (default: 100000)\n\
         \x20 --seed N         RNG seed (default: current time)\n\
         \x20 --quiet          Skip the run header\n\
         \x20 --help, -h       Show this help"
    );
}

fn main() -> ExitCode {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ArgsError::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if !config.quiet {
        eprintln!(
            "Simulating {} trials, max damage {}, seed={}",
            config.options.iterations, config.options.weapon_max_damage, config.seed,
        );
    }

    match Simulation::new(config.options, config.seed).run() {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Simulation failed: {err}");
            if let Some(source) = core::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults_match_reference_constants() {
        let config = parse_args(args(&[])).unwrap();
        assert_eq!(config.options, SimulationOptions::default());
        assert_eq!(config.options.weapon_max_damage, 10);
        assert_eq!(config.options.iterations, 100_000);
        assert!(!config.quiet);
    }

    #[test]
    fn flags_override_options() {
        let config = parse_args(args(&[
            "--max-damage",
            "4",
            "--iterations",
            "250",
            "--seed",
            "7",
            "--quiet",
        ]))
        .unwrap();
        assert_eq!(config.options.weapon_max_damage, 4);
        assert_eq!(config.options.iterations, 250);
        assert_eq!(config.seed, 7);
        assert!(config.quiet);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(
            parse_args(args(&["--seed"])),
            Err(ArgsError::MissingValue(_))
        ));
        assert!(matches!(
            parse_args(args(&["--iterations", "lots"])),
            Err(ArgsError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_args(args(&["--fast"])),
            Err(ArgsError::Unknown(_))
        ));
        assert!(matches!(parse_args(args(&["-h"])), Err(ArgsError::Help)));
    }
}
