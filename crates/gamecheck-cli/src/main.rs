use clap::{Parser, Subcommand};
use gamecheck_core::{eval, normalize, PlayerInput, PuzzleSpec, Validator, Verdict};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Content-QA checker for the mini-game puzzle documents
#[derive(Parser)]
#[command(name = "gamecheck", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Judge a player input against a puzzle spec
    Check {
        /// Path to the puzzle spec JSON document
        #[arg(long)]
        spec: PathBuf,
        /// Path to the player input JSON
        #[arg(long)]
        input: PathBuf,
        /// Word list for chain puzzles, one word per line
        #[arg(long)]
        dict: Option<PathBuf>,
    },
    /// Evaluate a quick-math expression
    Eval {
        /// Expression such as "12 / 4 * 3"
        expression: String,
    },
}

/// What `check` prints, as JSON
#[derive(Serialize)]
struct CheckReport<'a> {
    kind: &'a str,
    verdict: &'a Verdict,
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Check { spec, input, dict } => check(&spec, &input, dict.as_deref()),
        Command::Eval { expression } => match eval(&expression) {
            Some(value) => {
                println!("{}", value);
                ExitCode::SUCCESS
            }
            None => {
                println!("no result");
                ExitCode::from(1)
            }
        },
    }
}

fn check(
    spec_path: &Path,
    input_path: &Path,
    dict: Option<&Path>,
) -> ExitCode {
    let spec: PuzzleSpec = match load_json(spec_path) {
        Ok(spec) => spec,
        Err(message) => return fail(&message),
    };
    let input: PlayerInput = match load_json(input_path) {
        Ok(input) => input,
        Err(message) => return fail(&message),
    };

    let validator = match dict {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => {
                let words: HashSet<String> = contents
                    .lines()
                    .map(normalize)
                    .filter(|line| !line.is_empty())
                    .collect();
                Validator::with_dictionary(words)
            }
            Err(err) => return fail(&format!("cannot read {}: {}", path.display(), err)),
        },
        None => Validator::new(),
    };

    let verdict = validator.evaluate(&spec, &input);
    let report = CheckReport {
        kind: spec.kind_name(),
        verdict: &verdict,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(err) => return fail(&format!("cannot encode report: {}", err)),
    }

    if verdict.is_correct {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents =
        fs::read_to_string(path).map_err(|err| format!("cannot read {}: {}", path.display(), err))?;
    serde_json::from_str(&contents)
        .map_err(|err| format!("cannot parse {}: {}", path.display(), err))
}

fn fail(message: &str) -> ExitCode {
    eprintln!("Error: {}", message);
    ExitCode::from(2)
}
