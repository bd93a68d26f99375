//! Rules engine for Unus, a turn-based Uno-style card game.
//!
//! [`unus::Unus`] owns a game session: the draw pile, the discard stack, every
//! hand and the [`rotation::Rotation`] that decides whose turn it is. Anything a
//! player sees or answers goes through an [`interaction::Interaction`].

pub mod card;
pub mod constants;
pub mod deck;
pub mod discard;
pub mod error;
pub mod hand;
pub mod interaction;
pub mod player;
pub mod rotation;
pub mod turn;
pub mod unus;
