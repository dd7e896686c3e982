//! Terminal front-end
//!
//! Presentation layer for the chat: prints bot messages after a simulated
//! "thinking" pause, renders strain cards, shows numbered choice menus, and
//! runs the age-verification gate.

pub mod spinner;

use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::chat::{render, Reply};
use crate::config::ChatConfig;
use crate::state::ProfileStorage;
use crate::utils::errors::Result;
use crate::utils::helpers::normalize_label;
use spinner::Spinner;

/// Phrases the spinner cycles through; the original widget's copy drifted
/// between versions, so variety is part of the look.
const THINKING_PHRASES: &[&str] = &["Thinking", "One moment", "Checking the shelf"];

/// Terminal chat console over stdin/stdout
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
    chat: ChatConfig,
}

/// What the user did at a choice menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Choice(String),
    Quit,
}

impl Console {
    pub fn new(chat: ChatConfig) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            chat,
        }
    }

    /// Run the age-verification gate. Returns false when the user declines
    /// (or stdin closes), in which case the chat must not start.
    pub async fn age_gate(&mut self, profile: &ProfileStorage) -> Result<bool> {
        if profile.is_age_verified()? {
            return Ok(true);
        }

        println!("Before we chat: are you 21 or older? (yes/no)");
        loop {
            let line = match self.lines.next_line().await? {
                Some(line) => line,
                None => return Ok(false),
            };

            match normalize_label(&line).as_str() {
                "yes" | "y" => {
                    profile.set_age_verified(true)?;
                    return Ok(true);
                }
                "no" | "n" => return Ok(false),
                _ => println!("Please answer yes or no."),
            }
        }
    }

    /// Print a reply: each message after a thinking pause, then the cards,
    /// then the numbered choice menu.
    pub async fn show_reply(&self, reply: &Reply) {
        for message in &reply.messages {
            self.thinking_pause().await;
            println!("🤖 {}", message);
        }

        if !reply.cards.is_empty() {
            println!("{}", render::strain_cards(&reply.cards));
        }

        tokio::time::sleep(Duration::from_millis(self.chat.choice_delay_ms)).await;
        for (i, choice) in reply.choices.iter().enumerate() {
            println!("  [{}] {}", i + 1, choice);
        }
    }

    /// Read a selection: a menu number, a typed label, or quit/EOF.
    pub async fn read_selection(&mut self, choices: &[String]) -> Result<Selection> {
        use std::io::Write;

        loop {
            print!("> ");
            let _ = std::io::stdout().flush();

            let line = match self.lines.next_line().await? {
                Some(line) => line,
                None => return Ok(Selection::Quit),
            };
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }
            if matches!(normalize_label(trimmed).as_str(), "quit" | "exit") {
                return Ok(Selection::Quit);
            }

            if let Ok(index) = trimmed.parse::<usize>() {
                if index >= 1 && index <= choices.len() {
                    return Ok(Selection::Choice(choices[index - 1].clone()));
                }
                println!("Pick a number between 1 and {}.", choices.len());
                continue;
            }

            let wanted = normalize_label(trimmed);
            if let Some(choice) = choices.iter().find(|c| normalize_label(c) == wanted) {
                return Ok(Selection::Choice(choice.clone()));
            }

            println!("That's not one of the options. Type a number or the option text.");
        }
    }

    /// Simulated thinking pause with a spinner
    async fn thinking_pause(&self) {
        if self.chat.thinking_delay_ms == 0 {
            return;
        }

        let phrase = THINKING_PHRASES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("Thinking");
        let spinner = Spinner::start(phrase);
        tokio::time::sleep(Duration::from_millis(self.chat.thinking_delay_ms)).await;
        spinner.stop().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_phrases_non_empty() {
        assert!(!THINKING_PHRASES.is_empty());
        for phrase in THINKING_PHRASES {
            assert!(!phrase.is_empty());
        }
    }
}
