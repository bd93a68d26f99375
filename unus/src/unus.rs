use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::card::{Card, Effect};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS, STARTING_HAND_SIZE};
use crate::deck::DrawPile;
use crate::discard::DiscardStack;
use crate::error::{PlayError, Result, UnusError};
use crate::interaction::Interaction;
use crate::player::Player;
use crate::rotation::Rotation;
use crate::turn::{
    list_choices, parse_card_index, parse_skip_command, parse_skip_target, PlayTurnResult,
    SkipCommand, TurnOutcome, TurnState, DREW_MESSAGE, PASS_MESSAGE, PLAY_PROMPT, SKIP_PROMPT,
};

/// One game session. Owns every card and the rotation; nothing else mutates them.
#[derive(Debug)]
pub struct Unus {
    draw_pile: DrawPile,
    discard: DiscardStack,
    players: Vec<Player>,
    rotation: Rotation,
}

impl Unus {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_rng(player_names, StdRng::from_entropy())
    }

    pub fn with_seed(player_names: Vec<String>, seed: u64) -> Result<Self> {
        Self::with_rng(player_names, StdRng::seed_from_u64(seed))
    }

    /// Seats `count` players named `Player 0`, `Player 1`, ...
    pub fn with_player_count(count: usize) -> Result<Self> {
        Self::new(player_names(count))
    }

    fn with_rng(player_names: Vec<String>, rng: StdRng) -> Result<Self> {
        if player_names.len() < MIN_PLAYERS {
            return Err(UnusError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(UnusError::TooManyPlayers);
        }

        let mut draw_pile = DrawPile::standard(rng);
        let mut players = player_names
            .into_iter()
            .map(Player::new)
            .collect::<Vec<_>>();

        for player in &mut players {
            for card in draw_pile.draw_cards(STARTING_HAND_SIZE) {
                player.add_card(card);
            }
        }

        let rotation = Rotation::new(players.len());

        Ok(Unus {
            draw_pile,
            discard: DiscardStack::new(),
            players,
            rotation,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn current_player_index(&self) -> usize {
        self.rotation.current()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.rotation.current()]
    }

    /// Who plays after the current player, without moving play on.
    pub fn next_player_index(&self) -> usize {
        self.rotation.peek_next()
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn discard(&self) -> &DiscardStack {
        &self.discard
    }

    pub fn top_card(&self) -> Card {
        self.discard.top()
    }

    /// Cards across the draw pile, the discard stack and every hand.
    pub fn card_count(&self) -> usize {
        self.draw_pile.cards_count()
            + self.discard.cards_count()
            + self
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    /// Shuffles the whole discard stack, top included, back into the draw pile.
    pub fn recycle(&mut self) {
        let cards = self.discard.take_all();
        debug!(count = cards.len(), "discard stack recycled into draw pile");
        self.draw_pile.add_cards(cards);
    }

    pub fn draw_cards_to_player(&mut self, index: usize, count: usize) -> Result<()> {
        let mut drawn = 0;
        while drawn < count {
            match self.draw_pile.draw() {
                Ok(card) => {
                    self.players[index].add_card(card);
                    drawn += 1;
                }
                Err(UnusError::EmptyDraw) => {
                    if self.discard.is_empty() {
                        return Err(UnusError::CardsExhausted);
                    }
                    self.recycle();
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    pub fn apply_effect(&mut self, card: &Card, io: &mut dyn Interaction) -> Result<()> {
        match card.effect() {
            Effect::Nothing => {}
            Effect::Skip => {
                let target = self.choose_skip_target(io)?;
                self.rotation.skip(target);
            }
            Effect::Reverse => self.rotation.reverse_direction(),
            Effect::Draw(count) => {
                let target = self.rotation.peek_next();
                debug!(player = target, count, "forced draw");
                self.draw_cards_to_player(target, count.into())?;
            }
        }
        Ok(())
    }

    /// Plays the current player's card at `index` against the discard top.
    pub fn play_card(&mut self, index: usize, io: &mut dyn Interaction) -> Result<Card> {
        self.play_from_hand(index, &index.to_string(), io)
    }

    fn play_input(&mut self, input: &str, io: &mut dyn Interaction) -> Result<Card> {
        let hand_size = self.current_player().cards_count();
        let index = parse_card_index(input, hand_size)?;
        self.play_from_hand(index, input, io)
    }

    fn play_from_hand(
        &mut self,
        index: usize,
        echo: &str,
        io: &mut dyn Interaction,
    ) -> Result<Card> {
        let acting = self.rotation.current();
        let card = *self.players[acting]
            .hand
            .get(index)
            .ok_or_else(|| PlayError::InvalidIndex(echo.to_string()))?;

        if !card.matches(&self.discard.top()) {
            return Err(PlayError::IllegalPlay(echo.to_string()).into());
        }

        self.apply_effect(&card, io)?;
        self.discard.push(card);
        self.players[acting].hand.remove_card(index);
        debug!(player = acting, %card, "card played");

        Ok(card)
    }

    fn choose_skip_target(&mut self, io: &mut dyn Interaction) -> Result<isize> {
        loop {
            let answer = io.prompt(SKIP_PROMPT)?;
            let attempt = match parse_skip_command(&answer) {
                Ok(SkipCommand::Next) => Ok(self.rotation.current() as isize
                    + self.rotation.direction().step()),
                Ok(SkipCommand::Specific) => {
                    let choices = self.skip_choices();
                    let input = io.prompt(&format!(
                        "Please choose from the following numbers: {}",
                        list_choices(&choices)
                    ))?;
                    parse_skip_target(&input, &choices)
                }
                Err(err) => Err(err),
            };
            match attempt {
                Ok(target) => return Ok(target),
                Err(err) => io.notify(&err.to_string())?,
            }
        }
    }

    fn skip_choices(&self) -> Vec<usize> {
        let acting = self.rotation.current();
        (0..self.players.len()).filter(|seat| *seat != acting).collect()
    }

    /// Runs the current player's turn to completion without moving play on.
    #[instrument(skip(self, io), fields(player = self.rotation.current()))]
    pub fn take_turn(&mut self, io: &mut dyn Interaction) -> Result<TurnOutcome> {
        let acting = self.rotation.current();
        let mut drew = false;

        io.notify("Play area:")?;
        io.show_top(&self.discard.top())?;

        let mut state = TurnState::CheckMatch;
        loop {
            state = match state {
                TurnState::CheckMatch => {
                    let top = self.discard.top();
                    if top.is_none() || self.players[acting].hand.has_match(&top) {
                        TurnState::PromptPlay
                    } else if drew {
                        TurnState::Pass
                    } else {
                        TurnState::DrawOne
                    }
                }
                TurnState::DrawOne => {
                    io.notify(DREW_MESSAGE)?;
                    self.draw_cards_to_player(acting, 1)?;
                    drew = true;
                    TurnState::CheckMatch
                }
                TurnState::Pass => {
                    self.show_hand(acting, io)?;
                    io.notify(PASS_MESSAGE)?;
                    debug!(player = acting, "turn passed");
                    return Ok(TurnOutcome::Passed);
                }
                TurnState::PromptPlay => {
                    self.show_hand(acting, io)?;
                    let input = io.prompt(PLAY_PROMPT)?;
                    match self.play_input(&input, io) {
                        Ok(card) => return Ok(TurnOutcome::Played { card, drew }),
                        Err(UnusError::Play(err)) => io.notify(&err.to_string())?,
                        Err(err) => return Err(err),
                    }
                    TurnState::PromptPlay
                }
            };
        }
    }

    fn show_hand(&self, index: usize, io: &mut dyn Interaction) -> Result<()> {
        let player = &self.players[index];
        io.notify(&format!("{player} Hand: "))?;
        io.show_hand(player)
    }

    /// Plays one turn, moves play on, then checks whether the player who just
    /// acted has emptied their hand.
    pub fn play_turn(&mut self, io: &mut dyn Interaction) -> Result<PlayTurnResult> {
        let player = self.rotation.current();
        let outcome = self.take_turn(io)?;
        self.rotation.next();

        let won = self.players[player].has_empty_hand();
        Ok(PlayTurnResult {
            player,
            outcome,
            won,
        })
    }

    /// Plays turns until someone wins and returns the winner's seat.
    pub fn play(&mut self, io: &mut dyn Interaction) -> Result<usize> {
        info!(players = self.players.len(), "game started");
        io.notify("Welcome to Unus!")?;

        loop {
            let result = self.play_turn(io)?;
            if result.won {
                let winner = &self.players[result.player];
                info!(%winner, "game over");
                io.notify(&format!("{winner} won!"))?;
                return Ok(result.player);
            }
        }
    }
}

pub fn player_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Player {i}")).collect()
}
