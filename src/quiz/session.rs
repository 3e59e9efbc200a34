#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub answered: u32,
}

impl Session {
    pub fn record_answer(&mut self, is_correct: bool) {
        self.answered += 1;
        if is_correct {
            self.score += 1;
        }
    }
}
