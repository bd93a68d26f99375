use std::fmt::Debug;

use thiserror::Error;

use crate::card::Color;

#[derive(Error, Debug)]
pub enum UnusError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("{0} must be between [0,9]")]
    InvalidNumber(u8),
    #[error("A {color} card cannot make the next player draw {count}")]
    InvalidDrawCount { color: Color, count: u8 },
    #[error("The draw pile is empty")]
    EmptyDraw,
    #[error("There are no cards left to draw or recycle")]
    CardsExhausted,
    #[error("Input closed while waiting for a response")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// A failed attempt at playing a card. The turn re-prompts with the message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayError {
    #[error("{0} is not a valid integer, please try again.")]
    NotAnInteger(String),
    #[error("{0} is not a valid index, please try again.")]
    InvalidIndex(String),
    #[error("Card {0} cannot currently be played, please try again.")]
    IllegalPlay(String),
}

/// A failed answer to the skip target dialogue.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SkipError {
    #[error("{0} is not a recognized command, please try again.")]
    UnrecognizedCommand(String),
    #[error("{0} not an int, please try again.")]
    NotAnInt(String),
    #[error("{index} is not valid. {choices}")]
    NotValid { index: i64, choices: String },
}

pub type Result<T, E = UnusError> = std::result::Result<T, E>;
