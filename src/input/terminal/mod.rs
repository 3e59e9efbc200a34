use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::input::{AnswerSource, Input};

/// Reads answers from stdin. Ctrl-C and end of input both surface as `Input::Cancelled`.
pub struct TerminalInput {
    receiver: Receiver<Input>,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let (sender, receiver) = mpsc::channel();

        let interrupt_sender = sender.clone();
        ctrlc::set_handler(move || {
            debug!("Received interrupt signal");
            interrupt_sender.send(Input::Cancelled).ok();
        })
        .context("Could not install Ctrl-C handler")?;

        thread::Builder::new()
            .name("stdin".into())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            warn!("Could not read from stdin: {}", e);
                            break;
                        }
                    };
                    if sender.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                debug!("Reached end of stdin");
                sender.send(Input::Cancelled).ok();
            })
            .context("Could not spawn stdin reader")?;

        Ok(TerminalInput { receiver })
    }
}

impl AnswerSource for TerminalInput {
    fn next_line(&mut self) -> Input {
        self.receiver.recv().unwrap_or(Input::Cancelled)
    }
}
