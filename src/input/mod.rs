#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Cancelled,
}

/// A blocking stream of answers typed by the player.
pub trait AnswerSource {
    fn next_line(&mut self) -> Input;
}
