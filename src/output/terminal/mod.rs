use anyhow::*;
use itertools::Itertools;
use std::io::{self, Write};

use crate::output::{GameOutput, Message};

const RULE_WIDTH: usize = 70;

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        let heavy_rule = "=".repeat(RULE_WIDTH);
        match message {
            QuizRules(count) => format!(
                "\n{rule}\n🎓 SOLANA PATENT NFT MARKETPLACE QUIZ\n{rule}\n\nYou will be asked {} random questions.\nThis quiz tests your knowledge of:\n  • Solana program architecture\n  • Program Derived Addresses (PDAs)\n  • Anchor framework concepts\n  • Execution flows and file locations\n  • Solana vs Ethereum differences\n\nGood luck!\n\n",
                count,
                rule = heavy_rule
            ),
            QuestionBegins { number, total, prompt, options } => {
                let options = options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| format!("  {}. {}", index + 1, option))
                    .join("\n");
                format!(
                    "\n{}\nQuestion {}/{}:\n\n{}\n\n{}\n",
                    "─".repeat(RULE_WIDTH),
                    number,
                    total,
                    prompt,
                    options
                )
            }
            AnswerPrompt(option_count) => format!("\nYour answer (1-{}): ", option_count),
            InvalidAnswer(option_count) => {
                format!("Please enter a number between 1 and {}\n", option_count)
            }
            GuessCorrect => "\n✅ Correct!\n".into(),
            GuessIncorrect(answer) => {
                format!("\n❌ Incorrect. The correct answer was: {}\n", answer)
            }
            Explanation(explanation) => format!("\n💡 Explanation: {}\n", explanation),
            QuizInterrupted => "\nQuiz interrupted.\n".into(),
            QuizResults(report) => format!(
                "\n{rule}\n📊 QUIZ RESULTS\n{rule}\n\n{}\n",
                report,
                rule = heavy_rule
            ),
            Resources => format!(
                "\n{}\n\n📖 Resources:\n  • TEACHME.md - Detailed architecture and execution flows\n  • FAQ_SOLANA.md - 60 questions covering all aspects\n  • DEPLOYMENT.md - Deployment instructions\n  • MIGRATION_GUIDE.md - Ethereum to Solana migration\n\n",
                heavy_rule
            ),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) -> Result<()> {
        let text = self.interpret_message(message);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(text.as_bytes())
            .and_then(|_| handle.flush())
            .context("Could not write to terminal")
    }
}
