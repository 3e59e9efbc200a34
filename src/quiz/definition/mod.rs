use anyhow::*;
use log::debug;
use rand::seq::index;
use rand::Rng;
use std::convert::TryFrom;
use std::io::Read;

pub mod question;

pub use question::{Question, RawQuestion};

const BANK: &str = include_str!("bank.csv");

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn builtin() -> Result<QuizDefinition> {
        QuizDefinition::from_reader(BANK.as_bytes()).context("Could not load built-in question bank")
    }

    pub fn from_reader<R: Read>(source: R) -> Result<QuizDefinition> {
        let mut questions = Vec::new();

        let mut csv_reader = csv::Reader::from_reader(source);
        for (index, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion =
                question.with_context(|| format!("Malformed question #{}", index + 1))?;
            questions.push(Question::try_from(raw_question)?);
        }

        debug!("Loaded {} questions", questions.len());
        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    /// Picks up to `count` distinct questions, in random order.
    pub fn select_questions<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        let amount = count.min(self.questions.len());
        index::sample(rng, self.questions.len(), amount)
            .into_iter()
            .map(|i| self.questions[i].clone())
            .collect()
    }
}
