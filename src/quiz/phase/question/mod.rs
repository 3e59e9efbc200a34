use anyhow::*;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::output::{GameOutput, Message};
use crate::quiz::definition::Question;
use crate::quiz::State;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessResult {
    pub choice: usize,
    pub is_correct: bool,
}

pub struct QuestionState<O> {
    question: Question,
    number: usize,
    total: usize,
    // (index in the original question, option text), in display order
    options: Vec<(usize, String)>,
    guess: Option<GuessResult>,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    pub fn new<R: Rng + ?Sized>(
        question: Question,
        number: usize,
        total: usize,
        output: O,
        rng: &mut R,
    ) -> Self {
        let mut options: Vec<(usize, String)> =
            question.options.iter().cloned().enumerate().collect();
        options.shuffle(rng);
        QuestionState {
            question,
            number,
            total,
            options,
            guess: None,
            output,
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn correct_position(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|(index, _)| *index == self.question.correct_index)
    }

    pub fn prompt(&mut self) -> Result<()> {
        self.output.say(&Message::AnswerPrompt(self.option_count()))
    }

    /// Evaluates one line of player input. Returns `None` and asks again when
    /// the line is not a valid option number.
    pub fn guess(&mut self, line: &str) -> Result<Option<GuessResult>> {
        if let Some(guess) = &self.guess {
            return Ok(Some(guess.clone()));
        }

        let choice = match self.parse_choice(line) {
            Some(choice) => choice,
            None => {
                debug!("Rejected answer `{}`", line.trim());
                self.output
                    .say(&Message::InvalidAnswer(self.option_count()))?;
                return Ok(None);
            }
        };

        let is_correct = Some(choice) == self.correct_position();
        let guess_result = GuessResult { choice, is_correct };
        debug!("Player picked option {} (correct: {})", guess_result.choice + 1, is_correct);
        self.guess = Some(guess_result.clone());

        if is_correct {
            self.output.say(&Message::GuessCorrect)?;
        } else {
            self.output.say(&Message::GuessIncorrect(
                self.question.correct_option().to_owned(),
            ))?;
        }
        self.output
            .say(&Message::Explanation(self.question.explanation.clone()))?;

        Ok(Some(guess_result))
    }

    fn parse_choice(&self, line: &str) -> Option<usize> {
        let number: usize = line.trim().parse().ok()?;
        if number >= 1 && number <= self.option_count() {
            Some(number - 1)
        } else {
            None
        }
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) -> Result<()> {
        self.output.say(&Message::QuestionBegins {
            number: self.number,
            total: self.total,
            prompt: self.question.prompt.clone(),
            options: self.options.iter().map(|(_, text)| text.clone()).collect(),
        })
    }

    fn on_end(&mut self) -> Result<()> {
        Ok(())
    }
}
