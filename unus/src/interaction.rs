use std::collections::VecDeque;

use crate::card::Card;
use crate::error::{Result, UnusError};
use crate::player::Player;

/// The seat at the table: everything the game shows or asks goes through here.
///
/// `prompt` blocks until an answer is available.
pub trait Interaction {
    fn prompt(&mut self, message: &str) -> Result<String>;

    fn notify(&mut self, message: &str) -> Result<()>;

    fn show_top(&mut self, top: &Card) -> Result<()>;

    fn show_hand(&mut self, player: &Player) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Prompt(String),
    Notify(String),
    Top(Card),
    Hand { player: String, cards: Vec<Card> },
}

/// Answers prompts from a fixed script and records everything it was shown.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<String>,
    transcript: Vec<Event>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[Event] {
        &self.transcript
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                Event::Prompt(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                Event::Notify(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.transcript.push(Event::Prompt(message.to_string()));
        self.answers.pop_front().ok_or(UnusError::InputClosed)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.transcript.push(Event::Notify(message.to_string()));
        Ok(())
    }

    fn show_top(&mut self, top: &Card) -> Result<()> {
        self.transcript.push(Event::Top(*top));
        Ok(())
    }

    fn show_hand(&mut self, player: &Player) -> Result<()> {
        self.transcript.push(Event::Hand {
            player: player.name().to_string(),
            cards: player.hand.iter().copied().collect(),
        });
        Ok(())
    }
}
