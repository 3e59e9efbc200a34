use anyhow::*;

use crate::output::{GameOutput, Message};
use crate::quiz::State;


#[derive(Clone, Debug)]
pub struct StartupState<O> {
    question_count: usize,
    output: O,
}

impl<O: GameOutput> StartupState<O> {
    pub fn new(question_count: usize, output: O) -> Self {
        StartupState {
            question_count,
            output,
        }
    }
}

impl<O: GameOutput> State for StartupState<O> {
    fn on_begin(&mut self) -> Result<()> {
        self.output.say(&Message::QuizRules(self.question_count))
    }

    fn on_end(&mut self) -> Result<()> {
        Ok(())
    }
}
