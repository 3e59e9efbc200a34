use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::info;
use std::process;

mod input;
mod output;
mod quiz;

use crate::input::terminal::TerminalInput;
use crate::output::terminal::TerminalOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::{Outcome, Quiz, Settings};

const USAGE: &str = "Usage: solana-quiz [num_questions]";

/// Multiple-choice quiz about the Solana patent NFT marketplace.
#[derive(Parser, Debug)]
#[command(name = "solana-quiz", version)]
struct Args {
    /// How many random questions to ask
    #[arg(value_parser = parse_question_count)]
    num_questions: Option<usize>,
}

/// Any whole number is accepted. Counts beyond `usize` saturate, the bank caps them anyway.
fn parse_question_count(value: &str) -> Result<usize> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("`{}` is not a question count", value);
    }
    Ok(digits.parse().unwrap_or(usize::MAX))
}

fn run(args: Args) -> Result<()> {
    let definition = QuizDefinition::builtin()?;

    let mut settings = Settings::default();
    if let Some(num_questions) = args.num_questions {
        settings.question_count = num_questions;
    }

    let input = TerminalInput::new()?;
    let mut quiz = Quiz::new(
        &definition,
        &settings,
        TerminalOutput::new(),
        input,
        rand::thread_rng(),
    );

    let outcome = quiz.run()?;
    match &outcome {
        Outcome::Finished(_) => info!("Quiz finished: {:?}", quiz.get_session()),
        Outcome::AbortedEarly(_) => info!("Quiz aborted early: {:?}", quiz.get_session()),
    }
    info!("Final tier: {:?}", outcome.report().tier);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", USAGE);
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(args) {
        eprintln!("fatal: {:?}", e);
        process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_counts() {
        assert_eq!(parse_question_count("0").unwrap(), 0);
        assert_eq!(parse_question_count("12").unwrap(), 12);
        assert_eq!(parse_question_count("+7").unwrap(), 7);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_question_count(" 5 ").unwrap(), 5);
        assert_eq!(parse_question_count("\t3\n").unwrap(), 3);
    }

    #[test]
    fn saturates_huge_counts() {
        assert_eq!(
            parse_question_count("99999999999999999999999").unwrap(),
            usize::MAX
        );
    }

    #[test]
    fn rejects_non_numbers() {
        for value in &["", " ", "abc", "-3", "1.5", "5x", "+"] {
            assert!(parse_question_count(value).is_err(), "{:?}", value);
        }
    }
}
