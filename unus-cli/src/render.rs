use unus::{card::Card, hand::Hand};

const CARD_EDGE_TOP: &str = "/-------\\";
const CARD_EDGE_BOTTOM: &str = "\\-------/";
const CARD_WIDTH: usize = CARD_EDGE_TOP.len();

/// A card as three text lines: top edge, color and label, bottom edge.
pub fn card_lines(card: &Card) -> [String; 3] {
    [
        CARD_EDGE_TOP.to_string(),
        format!("| {} |{:^3}|", card.color().initial(), card.label()),
        CARD_EDGE_BOTTOM.to_string(),
    ]
}

pub fn render_card(card: &Card) -> String {
    card_lines(card).join("\n")
}

/// Cards side by side with each position centered underneath.
pub fn render_hand(hand: &Hand) -> String {
    let cards = hand.iter().map(card_lines).collect::<Vec<_>>();
    let mut rows = vec![String::new(); 4];

    for (index, lines) in cards.iter().enumerate() {
        for (row, line) in rows.iter_mut().zip(lines) {
            row.push_str(line);
            row.push(' ');
        }
        rows[3].push_str(&format!("{index:^width$} ", width = CARD_WIDTH));
    }

    rows.join("\n")
}
