use anyhow::*;
use std::fmt;

use crate::output::{GameOutput, Message};
use crate::quiz::{Session, State};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Outstanding,
    Great,
    Good,
    KeepStudying,
}

impl Tier {
    /// Thresholds are inclusive and compared exactly, without going through floats.
    pub fn for_score(score: u32, answered: u32) -> Tier {
        let reaches = |percent: u64| u64::from(score) * 100 >= percent * u64::from(answered);
        if answered == 0 {
            Tier::KeepStudying
        } else if reaches(90) {
            Tier::Outstanding
        } else if reaches(75) {
            Tier::Great
        } else if reaches(60) {
            Tier::Good
        } else {
            Tier::KeepStudying
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Outstanding => "🏆",
            Tier::Great => "🎉",
            Tier::Good => "👍",
            Tier::KeepStudying => "📚",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Outstanding => "Outstanding! You're a Solana expert!",
            Tier::Great => "Great job! You have a solid understanding of Solana development.",
            Tier::Good => "Good work! Review TEACHME.md for areas to improve.",
            Tier::KeepStudying => "Keep studying! Read TEACHME.md and try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub score: u32,
    pub answered: u32,
    pub percentage: f64,
    pub tier: Tier,
}

impl Report {
    pub fn new(session: &Session) -> Self {
        let percentage = if session.answered > 0 {
            f64::from(session.score) / f64::from(session.answered) * 100.0
        } else {
            0.0
        };
        Report {
            score: session.score,
            answered: session.answered,
            percentage,
            tier: Tier::for_score(session.score, session.answered),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You scored: {}/{} ({:.1}%)\n\n{} {}",
            self.score,
            self.answered,
            self.percentage,
            self.tier.emoji(),
            self.tier.message()
        )
    }
}

#[derive(Debug)]
pub struct ResultsState<O> {
    report: Report,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(session: &Session, output: O) -> Self {
        ResultsState {
            report: Report::new(session),
            output,
        }
    }

    pub fn get_report(&self) -> &Report {
        &self.report
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_begin(&mut self) -> Result<()> {
        self.output.say(&Message::QuizResults(self.report.clone()))?;
        self.output.say(&Message::Resources)
    }

    fn on_end(&mut self) -> Result<()> {
        Ok(())
    }
}
