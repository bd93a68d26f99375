use std::fmt::{self, Display};

use crate::card::Card;
use crate::hand::Hand;

#[derive(Debug)]
pub struct Player {
    name: String,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.cards_count()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
