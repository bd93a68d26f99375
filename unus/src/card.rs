use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::constants::{DRAW_FOUR, DRAW_TWO, MAX_NUMBER};
use crate::error::{Result, UnusError};

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Wild,
}

impl Color {
    /// Wild matches every color, including itself.
    pub fn matches(self, other: Color) -> bool {
        self == other || self == Color::Wild || other == Color::Wild
    }

    pub fn is_wild(self) -> bool {
        self == Color::Wild
    }

    pub fn initial(self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Yellow => "Y",
            Color::Blue => "B",
            Color::Green => "G",
            Color::Wild => "W",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    Draw(u8),
    Wild,
    /// Stands in for the discard top while the discard stack is empty.
    None,
}

impl CardKind {
    fn matches(&self, other: &CardKind) -> bool {
        match (self, other) {
            (CardKind::None, _) | (_, CardKind::None) => true,
            (CardKind::Number(a), CardKind::Number(b)) => a == b,
            (CardKind::Draw(a), CardKind::Draw(b)) => a == b,
            (CardKind::Skip, CardKind::Skip)
            | (CardKind::Reverse, CardKind::Reverse)
            | (CardKind::Wild, CardKind::Wild) => true,
            _ => false,
        }
    }
}

/// What playing a card does to the game, besides landing on the discard stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Nothing,
    Skip,
    Reverse,
    Draw(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: Color,
    kind: CardKind,
}

impl Card {
    pub fn try_number(color: Color, number: u8) -> Result<Self> {
        if number > MAX_NUMBER {
            return Err(UnusError::InvalidNumber(number));
        }
        Ok(Self {
            color,
            kind: CardKind::Number(number),
        })
    }

    /// Panics when `number` is outside `0..=9`; a deck with such a card is broken.
    pub fn number(color: Color, number: u8) -> Self {
        Self::try_number(color, number).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn skip(color: Color) -> Self {
        Self {
            color,
            kind: CardKind::Skip,
        }
    }

    pub fn reverse(color: Color) -> Self {
        Self {
            color,
            kind: CardKind::Reverse,
        }
    }

    pub fn try_draw(color: Color, count: u8) -> Result<Self> {
        let valid = match count {
            DRAW_TWO => true,
            DRAW_FOUR => color.is_wild(),
            _ => false,
        };
        if !valid {
            return Err(UnusError::InvalidDrawCount { color, count });
        }
        Ok(Self {
            color,
            kind: CardKind::Draw(count),
        })
    }

    pub fn draw_two(color: Color) -> Self {
        Self::try_draw(color, DRAW_TWO).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: Color::Wild,
            kind: CardKind::Draw(DRAW_FOUR),
        }
    }

    pub fn wild() -> Self {
        Self {
            color: Color::Wild,
            kind: CardKind::Wild,
        }
    }

    pub fn none() -> Self {
        Self {
            color: Color::Wild,
            kind: CardKind::None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn is_none(&self) -> bool {
        self.kind == CardKind::None
    }

    /// Two cards match when their colors match or they carry the same value.
    pub fn matches(&self, other: &Card) -> bool {
        self.color.matches(other.color) || self.kind.matches(&other.kind)
    }

    pub fn effect(&self) -> Effect {
        match self.kind {
            CardKind::Skip => Effect::Skip,
            CardKind::Reverse => Effect::Reverse,
            CardKind::Draw(count) => Effect::Draw(count),
            CardKind::Number(_) | CardKind::Wild | CardKind::None => Effect::Nothing,
        }
    }

    /// Short face label used when drawing the card.
    pub fn label(&self) -> String {
        match self.kind {
            CardKind::Number(number) => number.to_string(),
            CardKind::Skip => "S".to_string(),
            CardKind::Reverse => "Rev".to_string(),
            CardKind::Draw(count) => format!("D+{count}"),
            CardKind::Wild => "W".to_string(),
            CardKind::None => String::new(),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Number(number) => write!(f, "{} {}", self.color, number),
            CardKind::Skip => write!(f, "{} Skip", self.color),
            CardKind::Reverse => write!(f, "{} Reverse", self.color),
            CardKind::Draw(count) => write!(f, "{} Draw {}", self.color, count),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::number(Color::Red, 3);
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::number(Color::Yellow, 5);
        assert_eq!(yellow_5.to_string(), "Yellow 5");

        let blue_9 = Card::number(Color::Blue, 9);
        assert_eq!(blue_9.to_string(), "Blue 9");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        assert_eq!(Card::skip(Color::Red).to_string(), "Red Skip");
        assert_eq!(Card::reverse(Color::Green).to_string(), "Green Reverse");
        assert_eq!(Card::draw_two(Color::Blue).to_string(), "Blue Draw 2");
        assert_eq!(Card::wild_draw_four().to_string(), "Wild Draw 4");
        assert_eq!(Card::wild().to_string(), "Wild");
        assert_eq!(Card::none().to_string(), "None");
    }

    #[test]
    fn labels_fit_the_card_face() {
        assert_eq!(Card::number(Color::Red, 0).label(), "0");
        assert_eq!(Card::skip(Color::Red).label(), "S");
        assert_eq!(Card::reverse(Color::Red).label(), "Rev");
        assert_eq!(Card::draw_two(Color::Red).label(), "D+2");
        assert_eq!(Card::wild_draw_four().label(), "D+4");
        assert_eq!(Card::wild().label(), "W");
        assert_eq!(Card::none().label(), "");
    }

    #[test]
    fn number_out_of_range_is_rejected() {
        assert!(matches!(
            Card::try_number(Color::Red, 10),
            Err(UnusError::InvalidNumber(10))
        ));
        assert!(Card::try_number(Color::Red, 9).is_ok());
    }

    #[test]
    #[should_panic(expected = "12 must be between [0,9]")]
    fn number_constructor_panics_out_of_range() {
        Card::number(Color::Green, 12);
    }

    #[test]
    fn draw_four_must_be_wild() {
        assert!(matches!(
            Card::try_draw(Color::Red, 4),
            Err(UnusError::InvalidDrawCount {
                color: Color::Red,
                count: 4
            })
        ));
        assert!(matches!(
            Card::try_draw(Color::Wild, 3),
            Err(UnusError::InvalidDrawCount { count: 3, .. })
        ));
        assert_eq!(Card::try_draw(Color::Wild, 4).unwrap(), Card::wild_draw_four());
        assert!(Card::try_draw(Color::Wild, 2).is_ok());
    }

    #[test]
    fn same_color_matches() {
        assert!(Card::number(Color::Red, 3).matches(&Card::skip(Color::Red)));
        assert!(!Card::number(Color::Red, 3).matches(&Card::skip(Color::Blue)));
    }

    #[test]
    fn same_value_matches_across_colors() {
        assert!(Card::number(Color::Red, 3).matches(&Card::number(Color::Blue, 3)));
        assert!(!Card::number(Color::Red, 3).matches(&Card::number(Color::Blue, 4)));
        assert!(Card::skip(Color::Red).matches(&Card::skip(Color::Green)));
        assert!(Card::reverse(Color::Yellow).matches(&Card::reverse(Color::Blue)));
        assert!(Card::draw_two(Color::Red).matches(&Card::draw_two(Color::Green)));
        assert!(!Card::skip(Color::Red).matches(&Card::reverse(Color::Green)));
    }

    #[test]
    fn wild_cards_match_any_color() {
        assert!(Card::wild().matches(&Card::number(Color::Blue, 7)));
        assert!(Card::wild_draw_four().matches(&Card::skip(Color::Yellow)));
        assert!(Card::number(Color::Blue, 7).matches(&Card::wild_draw_four()));
    }

    #[test]
    fn none_matches_everything_both_ways() {
        let none = Card::none();
        for card in Deck::standard().0 {
            assert!(none.matches(&card));
            assert!(card.matches(&none));
        }
        assert!(none.matches(&none));
    }

    #[test]
    fn matching_is_symmetric() {
        let mut cards = Deck::standard().0;
        cards.push(Card::none());
        cards.push(Card::draw_two(Color::Wild));
        for a in &cards {
            for b in &cards {
                assert_eq!(a.matches(b), b.matches(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn effects_follow_the_kind() {
        assert_eq!(Card::number(Color::Red, 1).effect(), Effect::Nothing);
        assert_eq!(Card::skip(Color::Red).effect(), Effect::Skip);
        assert_eq!(Card::reverse(Color::Red).effect(), Effect::Reverse);
        assert_eq!(Card::draw_two(Color::Red).effect(), Effect::Draw(2));
        assert_eq!(Card::wild_draw_four().effect(), Effect::Draw(4));
        assert_eq!(Card::wild().effect(), Effect::Nothing);
        assert_eq!(Card::none().effect(), Effect::Nothing);
    }
}
