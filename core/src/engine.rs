use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Whether a turn is half-way through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No card is waiting for a partner; the next flip starts a turn.
    #[default]
    Idle,
    /// One card is face up and the next flip completes the turn.
    AwaitingSecond(Position),
}

impl TurnState {
    pub const fn pending(self) -> Option<Position> {
        match self {
            Self::Idle => None,
            Self::AwaitingSecond(position) => Some(position),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a turn.
    FirstCard,
    NoMatch,
    Match,
    /// Matched the last remaining pair.
    Won,
}

impl FlipOutcome {
    /// Whether this flip completed a matching pair.
    pub const fn found_match(self) -> bool {
        matches!(self, Self::Match | Self::Won)
    }

    pub const fn is_turn_complete(self) -> bool {
        !matches!(self, Self::FirstCard)
    }

    /// Whether the pair counter changed.
    pub const fn has_update(self) -> bool {
        self.found_match()
    }
}

/// A single round: the dealt cards plus turn and score bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryGame {
    board_size: BoardSize,
    cards: Vec<Card>,
    num_pairs_found: Saturating<CardCount>,
    num_card_flips: Saturating<u32>,
    turn: TurnState,
}

impl MemoryGame {
    pub fn new(deck: Deck) -> Self {
        Self {
            board_size: deck.size(),
            cards: deck.into_cards(),
            num_pairs_found: Saturating(0),
            num_card_flips: Saturating(0),
            turn: TurnState::Idle,
        }
    }

    /// Deals a fresh shuffled round.
    pub fn deal(board_size: BoardSize, source: IdentifierSource, seed: u64) -> Result<Self> {
        RandomDeckGenerator::new(seed, source)
            .generate(board_size)
            .map(Self::new)
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, position: Position) -> Result<&Card> {
        self.cards.get(position).ok_or(GameError::InvalidPosition)
    }

    /// Cards laid out as `(row, column)`.
    pub fn grid(&self) -> Result<ArrayView2<'_, Card>> {
        ArrayView2::from_shape(self.board_size.grid_shape(), &self.cards)
            .map_err(|_| GameError::InvalidBoardShape)
    }

    pub fn is_face_up(&self, position: Position) -> Result<bool> {
        self.card_at(position).map(Card::is_face_up)
    }

    pub fn have_won_game(&self) -> bool {
        self.num_pairs_found.0 == self.board_size.num_pairs()
    }

    pub fn num_pairs_found(&self) -> CardCount {
        self.num_pairs_found.0
    }

    pub fn num_card_flips(&self) -> u32 {
        self.num_card_flips.0
    }

    /// Completed turns. A turn in progress is not counted yet.
    pub fn num_moves(&self) -> u32 {
        self.num_card_flips.0 / 2
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn pending_flip(&self) -> Option<Position> {
        self.turn.pending()
    }

    /// Fraction of pairs found, from `0.0` to `1.0`.
    pub fn pair_progress(&self) -> f32 {
        f32::from(self.num_pairs_found.0) / f32::from(self.board_size.num_pairs())
    }

    pub fn can_flip_at(&self, position: Position) -> bool {
        self.check_flippable(position).is_ok()
    }

    /// Flips the card at `position`, resolving the turn if it is the second card.
    pub fn flip_card(&mut self, position: Position) -> Result<FlipOutcome> {
        self.check_flippable(position)?;
        self.num_card_flips += 1;

        let outcome = match self.turn {
            TurnState::Idle => {
                self.restore_cards();
                self.turn = TurnState::AwaitingSecond(position);
                FlipOutcome::FirstCard
            }
            TurnState::AwaitingSecond(first) => {
                self.turn = TurnState::Idle;
                if self.check_for_match(first, position) {
                    if self.have_won_game() {
                        FlipOutcome::Won
                    } else {
                        FlipOutcome::Match
                    }
                } else {
                    FlipOutcome::NoMatch
                }
            }
        };
        self.cards[position].turn_face_up();

        log::debug!(
            "Flipped card {} ({}), outcome {:?}, flips {}",
            position,
            self.cards[position].identifier(),
            outcome,
            self.num_card_flips
        );
        match outcome {
            FlipOutcome::Match => log::info!(
                "Pair found {}/{}",
                self.num_pairs_found,
                self.board_size.num_pairs()
            ),
            FlipOutcome::Won => log::info!("Game won in {} moves", self.num_moves()),
            _ => {}
        }

        Ok(outcome)
    }

    fn check_flippable(&self, position: Position) -> Result<()> {
        let card = self.card_at(position)?;
        if self.have_won_game() {
            return Err(GameError::AlreadyWon);
        }
        if card.is_face_up() {
            return Err(GameError::AlreadyFaceUp);
        }
        Ok(())
    }

    fn check_for_match(&mut self, first: Position, second: Position) -> bool {
        if self.cards[first].identifier() != self.cards[second].identifier() {
            return false;
        }

        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.num_pairs_found += 1;
        true
    }

    /// Turns every unmatched card back face down.
    fn restore_cards(&mut self) {
        for card in &mut self.cards {
            card.turn_face_down();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Icon::*;

    /// `[A, B, A, C, D, B, C, D]`
    fn scripted_game() -> MemoryGame {
        let order = [Star, Moon, Star, Cake, Gift, Moon, Cake, Gift];
        let deck = Deck::from_identifiers(
            BoardSize::Easy,
            order.into_iter().map(Identifier::Icon).collect(),
        )
        .unwrap();
        MemoryGame::new(deck)
    }

    fn face_up_positions(game: &MemoryGame) -> Vec<Position> {
        (0..game.cards().len())
            .filter(|&pos| game.is_face_up(pos).unwrap())
            .collect()
    }

    #[test]
    fn scripted_round_plays_to_a_win() {
        let mut game = scripted_game();

        assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::FirstCard);
        assert!(game.is_face_up(0).unwrap());
        assert_eq!(game.num_moves(), 0);

        let outcome = game.flip_card(1).unwrap();
        assert!(!outcome.found_match());
        assert_eq!(game.num_moves(), 1);
        assert_eq!(face_up_positions(&game), [0, 1]);
        assert_eq!(game.num_pairs_found(), 0);

        assert_eq!(game.flip_card(2).unwrap(), FlipOutcome::FirstCard);
        assert_eq!(face_up_positions(&game), [2]);
        assert_eq!(game.num_moves(), 1);

        assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::Match);
        assert_eq!(game.num_pairs_found(), 1);
        assert!(game.card_at(0).unwrap().is_matched());
        assert!(game.card_at(2).unwrap().is_matched());
        assert_eq!(game.num_moves(), 2);

        for (first, second) in [(1, 5), (3, 6)] {
            game.flip_card(first).unwrap();
            assert_eq!(game.flip_card(second).unwrap(), FlipOutcome::Match);
        }
        assert!(!game.have_won_game());
        game.flip_card(4).unwrap();
        assert_eq!(game.flip_card(7).unwrap(), FlipOutcome::Won);

        assert!(game.have_won_game());
        assert_eq!(game.num_moves(), 5);
        assert!(game.cards().iter().all(Card::is_matched));
    }

    #[test]
    fn matched_cards_survive_restore() {
        let mut game = scripted_game();
        game.flip_card(0).unwrap();
        game.flip_card(2).unwrap();

        game.flip_card(1).unwrap();
        game.flip_card(3).unwrap();
        game.flip_card(4).unwrap();

        assert_eq!(face_up_positions(&game), [0, 2, 4]);
    }

    #[test]
    fn even_flip_counts_leave_no_pending_card() {
        let mut game = scripted_game();
        for (first, second) in [(0, 1), (3, 4), (0, 2), (1, 3)] {
            game.flip_card(first).unwrap();
            assert_eq!(game.pending_flip(), Some(first));
            game.flip_card(second).unwrap();
            assert_eq!(game.turn_state(), TurnState::Idle);
            assert_eq!(game.num_moves(), game.num_card_flips() / 2);
        }
    }

    #[test]
    fn rejected_flips_change_nothing() {
        let mut game = scripted_game();
        game.flip_card(0).unwrap();
        let before = game.clone();

        assert_eq!(game.flip_card(0), Err(GameError::AlreadyFaceUp));
        assert_eq!(game.flip_card(8), Err(GameError::InvalidPosition));
        assert_eq!(game.is_face_up(8), Err(GameError::InvalidPosition));
        assert_eq!(game, before);
    }

    #[test]
    fn just_revealed_mismatch_cannot_be_reflipped() {
        let mut game = scripted_game();
        game.flip_card(0).unwrap();
        game.flip_card(1).unwrap();

        assert!(!game.can_flip_at(1));
        assert_eq!(game.flip_card(1), Err(GameError::AlreadyFaceUp));
        assert_eq!(game.num_card_flips(), 2);
    }

    #[test]
    fn won_game_stays_won_and_rejects_flips() {
        let mut game = scripted_game();
        for position in [0, 2, 1, 5, 3, 6, 4, 7] {
            game.flip_card(position).unwrap();
        }

        assert!(game.have_won_game());
        assert_eq!(game.pair_progress(), 1.0);
        assert!((0..8).all(|pos| !game.can_flip_at(pos)));
        let before = game.clone();
        assert_eq!(game.flip_card(0), Err(GameError::AlreadyWon));
        assert_eq!(game.flip_card(8), Err(GameError::InvalidPosition));
        assert_eq!(game, before);
        assert!(game.have_won_game());
    }

    #[test]
    fn won_flag_tracks_matched_cards() {
        let mut game = MemoryGame::deal(BoardSize::Medium, IdentifierSource::default(), 3).unwrap();
        let cards: Vec<Identifier> = game.cards().iter().map(|c| c.identifier().clone()).collect();

        let mut done = Vec::new();
        for first in 0..cards.len() {
            if done.contains(&first) {
                continue;
            }
            let second = (first + 1..cards.len())
                .find(|&pos| cards[pos] == cards[first])
                .unwrap();
            game.flip_card(first).unwrap();
            game.flip_card(second).unwrap();
            done.extend([first, second]);

            let all_matched = game.cards().iter().all(Card::is_matched);
            assert_eq!(game.have_won_game(), all_matched);
        }

        assert!(game.have_won_game());
        assert_eq!(game.num_moves(), 9);
    }

    #[test]
    fn grid_is_row_major() {
        let game = scripted_game();
        let grid = game.grid().unwrap();

        assert_eq!(grid.dim(), (4, 2));
        assert_eq!(grid[(1, 0)].identifier(), &Identifier::Icon(Star));
        assert_eq!(grid[(3, 1)].identifier(), &Identifier::Icon(Gift));
    }
}
