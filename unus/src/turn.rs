use crate::card::Card;
use crate::error::{PlayError, SkipError};

pub(crate) const SKIP_PROMPT: &str = "Who would you like to skip? (n)ext or (s)pecific user?";
pub(crate) const PLAY_PROMPT: &str = "Which card would you like to play?";
pub(crate) const DREW_MESSAGE: &str = "Your hand had no matches, a card was drawn.";
pub(crate) const PASS_MESSAGE: &str = "Your hand still has no matches your turn is being passed";

/// How a single turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Played { card: Card, drew: bool },
    Passed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub player: usize,
    pub outcome: TurnOutcome,
    pub won: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TurnState {
    CheckMatch,
    DrawOne,
    PromptPlay,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipCommand {
    Next,
    Specific,
}

pub(crate) fn parse_skip_command(input: &str) -> Result<SkipCommand, SkipError> {
    match input {
        "n" => Ok(SkipCommand::Next),
        "s" => Ok(SkipCommand::Specific),
        _ => Err(SkipError::UnrecognizedCommand(input.to_string())),
    }
}

/// Seats listed for a specific skip, each followed by a space.
pub(crate) fn list_choices(choices: &[usize]) -> String {
    choices.iter().map(|seat| format!("{seat} ")).collect()
}

pub(crate) fn parse_skip_target(input: &str, choices: &[usize]) -> Result<isize, SkipError> {
    let index = input
        .parse::<i64>()
        .map_err(|_| SkipError::NotAnInt(input.to_string()))?;
    match usize::try_from(index) {
        Ok(seat) if choices.contains(&seat) => Ok(seat as isize),
        _ => Err(SkipError::NotValid {
            index,
            choices: list_choices(choices),
        }),
    }
}

/// Parses a hand position. Negative numbers parse but are never a valid index.
pub(crate) fn parse_card_index(input: &str, hand_size: usize) -> Result<usize, PlayError> {
    let index = input
        .parse::<i64>()
        .map_err(|_| PlayError::NotAnInteger(input.to_string()))?;
    usize::try_from(index)
        .ok()
        .filter(|index| *index < hand_size)
        .ok_or_else(|| PlayError::InvalidIndex(input.to_string()))
}
