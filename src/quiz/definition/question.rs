use anyhow::*;
use serde::Deserialize;
use std::convert::TryFrom;

#[derive(Deserialize, Debug, Hash, PartialEq, Eq)]
pub struct RawQuestion {
    pub prompt: String,
    pub options: String,
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let options: Vec<String> = raw_question
            .options
            .split('|')
            .map(|option| option.trim().to_owned())
            .filter(|option| !option.is_empty())
            .collect();

        if options.len() < 2 {
            bail!(
                "Question `{}` needs at least two options",
                raw_question.prompt
            );
        }
        if raw_question.correct_index >= options.len() {
            bail!(
                "Question `{}` has correct index {} but only {} options",
                raw_question.prompt,
                raw_question.correct_index,
                options.len()
            );
        }

        Ok(Question {
            prompt: raw_question.prompt,
            options,
            correct_index: raw_question.correct_index,
            explanation: raw_question.explanation,
        })
    }
}
