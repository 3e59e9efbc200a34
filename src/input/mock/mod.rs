use std::collections::VecDeque;

use crate::input::{AnswerSource, Input};

/// Replays canned lines, then behaves like a closed terminal.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        ScriptedInput {
            lines: lines
                .iter()
                .map(|line| Input::Line(line.as_ref().to_owned()))
                .collect(),
        }
    }

    pub fn cancel(mut self) -> Self {
        self.lines.push_back(Input::Cancelled);
        self
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl AnswerSource for ScriptedInput {
    fn next_line(&mut self) -> Input {
        self.lines.pop_front().unwrap_or(Input::Cancelled)
    }
}
