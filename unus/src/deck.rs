use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, Color},
    constants::*,
    error::{Result, UnusError},
};

/// The fixed 108 card composition, in construction order.
#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in Color::iter().filter(|color| !color.is_wild()) {
            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::skip(color));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::reverse(color));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::draw_two(color));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        Self(cards)
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }
}

/// The face-down supply. Cards come off the front; every addition reshuffles.
#[derive(Debug)]
pub struct DrawPile {
    pub(crate) cards: Vec<Card>,
    rng: StdRng,
}

impl DrawPile {
    pub fn new(cards: Vec<Card>, rng: StdRng) -> Self {
        let mut pile = Self { cards, rng };
        pile.shuffle();
        pile
    }

    pub fn standard(rng: StdRng) -> Self {
        Self::new(Deck::standard().into_cards(), rng)
    }

    pub fn seeded(cards: Vec<Card>, seed: u64) -> Self {
        Self::new(cards, StdRng::seed_from_u64(seed))
    }

    pub fn draw(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(UnusError::EmptyDraw);
        }
        Ok(self.cards.remove(0))
    }

    /// Takes up to `count` cards off the front.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(0..count).collect::<Vec<_>>()
    }

    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self.shuffle();
    }

    pub(crate) fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
