use anyhow::*;

use crate::quiz::Report;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    AnswerPrompt(usize),
    Explanation(String),
    GuessCorrect,
    GuessIncorrect(String),
    InvalidAnswer(usize),
    QuestionBegins {
        number: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
    },
    QuizInterrupted,
    QuizResults(Report),
    QuizRules(usize),
    Resources,
}

pub trait GameOutput {
    fn say(&self, message: &Message) -> Result<()>;
}
