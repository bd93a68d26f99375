use crate::card::Card;

/// The face-up stack of played cards. The last pushed card is the top.
#[derive(Debug, Default)]
pub struct DiscardStack(pub(crate) Vec<Card>);

impl DiscardStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The card new plays must match, or the `None` sentinel when nothing is showing.
    pub fn top(&self) -> Card {
        self.0.last().copied().unwrap_or_else(Card::none)
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Empties the stack, top card included.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.0)
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
