use std::io::{BufRead, Write};

use unus::{
    card::Card,
    error::{Result, UnusError},
    interaction::Interaction,
    player::Player,
};

use crate::render::{render_card, render_hand};

/// Line-based play over any reader and writer, normally stdin and stdout.
pub struct ConsoleInteraction<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(UnusError::InputClosed);
        }
        Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn show_top(&mut self, top: &Card) -> Result<()> {
        writeln!(self.output, "{}", render_card(top))?;
        Ok(())
    }

    fn show_hand(&mut self, player: &Player) -> Result<()> {
        writeln!(self.output, "{}", render_hand(&player.hand))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use unus::card::Color;

    #[test]
    fn prompt_echoes_question_and_strips_line_ending() {
        let mut console = ConsoleInteraction::new(Cursor::new("2\r\nn\n"), Vec::new());

        assert_eq!(console.prompt("Which card?").unwrap(), "2");
        assert_eq!(console.prompt("Skip?").unwrap(), "n");

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Which card?\nSkip?\n");
    }

    #[test]
    fn prompt_keeps_inner_whitespace() {
        let mut console = ConsoleInteraction::new(Cursor::new(" 1 \n"), Vec::new());

        assert_eq!(console.prompt("?").unwrap(), " 1 ");
    }

    #[test]
    fn end_of_input_closes_the_game() {
        let mut console = ConsoleInteraction::new(Cursor::new(""), Vec::new());

        assert!(matches!(console.prompt("?"), Err(UnusError::InputClosed)));
    }

    #[test]
    fn shows_cards_as_boxes() {
        let mut console = ConsoleInteraction::new(Cursor::new(""), Vec::new());
        console.notify("Play area:").unwrap();
        console.show_top(&Card::number(Color::Green, 7)).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Play area:\n/-------\\\n| G | 7 |\n\\-------/\n");
    }
}
