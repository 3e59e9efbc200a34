use anyhow::*;
use log::{debug, info};
use rand::Rng;

use self::definition::*;
use self::phase::*;
use crate::input::{AnswerSource, Input};
use crate::output::{GameOutput, Message};

pub mod definition;
mod phase;
mod session;
mod settings;

pub use self::phase::{Report, Tier};
pub use self::session::Session;
pub use self::settings::Settings;


trait State {
    fn on_begin(&mut self) -> Result<()>;
    fn on_end(&mut self) -> Result<()>;
}

enum Phase<O> {
    NotStarted,
    Startup(StartupState<O>),
    Question(QuestionState<O>),
    Results(ResultsState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> Option<&mut dyn State> {
        match self {
            Phase::NotStarted => None,
            Phase::Startup(s) => Some(s),
            Phase::Question(s) => Some(s),
            Phase::Results(s) => Some(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Finished(Report),
    AbortedEarly(Report),
}

impl Outcome {
    pub fn report(&self) -> &Report {
        match self {
            Outcome::Finished(report) | Outcome::AbortedEarly(report) => report,
        }
    }
}

pub struct Quiz<O, A, R> {
    current_phase: Phase<O>,
    questions: Vec<Question>,
    next_question: usize,
    session: Session,
    interrupted: bool,
    input: A,
    rng: R,
    output: O,
}

impl<O, A, R> Quiz<O, A, R>
where
    O: GameOutput + Clone,
    A: AnswerSource,
    R: Rng,
{
    pub fn new(
        definition: &QuizDefinition,
        settings: &Settings,
        output: O,
        input: A,
        mut rng: R,
    ) -> Self {
        let questions = definition.select_questions(settings.question_count, &mut rng);
        info!(
            "Selected {} of {} questions",
            questions.len(),
            definition.get_questions().len()
        );
        Quiz {
            current_phase: Phase::NotStarted,
            questions,
            next_question: 0,
            session: Session::default(),
            interrupted: false,
            input,
            rng,
            output,
        }
    }

    pub fn get_session(&self) -> &Session {
        &self.session
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Results(_) => true,
            _ => false,
        }
    }

    /// Plays every selected question, then reports. Cancellation skips straight to the report.
    pub fn run(&mut self) -> Result<Outcome> {
        while !self.is_over() {
            if let Phase::Question(_) = self.current_phase {
                self.ask()?;
            }
            self.advance()?;
        }

        let report = match &self.current_phase {
            Phase::Results(state) => state.get_report().clone(),
            _ => Report::new(&self.session),
        };
        if self.interrupted {
            Ok(Outcome::AbortedEarly(report))
        } else {
            Ok(Outcome::Finished(report))
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) -> Result<()> {
        if let Some(state) = self.current_phase.get_state() {
            state.on_end()?;
        }

        self.current_phase = phase;

        if let Some(state) = self.current_phase.get_state() {
            state.on_begin()?;
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::NotStarted => {
                let state = StartupState::new(self.questions.len(), self.output.clone());
                self.set_current_phase(Phase::Startup(state))
            }
            Phase::Startup(_) | Phase::Question(_) => {
                if self.interrupted {
                    self.output.say(&Message::QuizInterrupted)?;
                    self.begin_results()
                } else {
                    self.begin_question()
                }
            }
            Phase::Results(_) => Ok(()),
        }
    }

    fn begin_question(&mut self) -> Result<()> {
        match self.questions.get(self.next_question).cloned() {
            Some(question) => {
                self.next_question += 1;
                debug!("Asking question {}/{}", self.next_question, self.questions.len());
                let state = QuestionState::new(
                    question,
                    self.next_question,
                    self.questions.len(),
                    self.output.clone(),
                    &mut self.rng,
                );
                self.set_current_phase(Phase::Question(state))
            }
            None => self.begin_results(),
        }
    }

    fn begin_results(&mut self) -> Result<()> {
        let state = ResultsState::new(&self.session, self.output.clone());
        self.set_current_phase(Phase::Results(state))
    }

    fn ask(&mut self) -> Result<()> {
        let state = match &mut self.current_phase {
            Phase::Question(state) => state,
            _ => return Err(anyhow!("There is no active question")),
        };

        loop {
            state.prompt()?;
            let line = match self.input.next_line() {
                Input::Line(line) => line,
                Input::Cancelled => {
                    info!("Quiz cancelled after {} answers", self.session.answered);
                    self.interrupted = true;
                    return Ok(());
                }
            };
            if let Some(guess_result) = state.guess(&line)? {
                self.session.record_answer(guess_result.is_correct);
                return Ok(());
            }
        }
    }
}
