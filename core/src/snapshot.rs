use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player can currently see of a round, laid out as `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub board_size: BoardSize,
    pub faces: Array2<Option<Identifier>>,
    pub matched: Array2<bool>,
    pub num_moves: u32,
    pub num_pairs_found: CardCount,
    pub won: bool,
}

impl TableView {
    pub fn from_game(game: &MemoryGame) -> Self {
        let board_size = game.board_size();
        let shape = board_size.grid_shape();
        let width = usize::from(board_size.width());
        let mut faces = Array2::from_elem(shape, None);
        let mut matched = Array2::from_elem(shape, false);

        for (position, card) in game.cards().iter().enumerate() {
            let index = [position / width, position % width];
            faces[index] = card.visible_identifier().cloned();
            matched[index] = card.is_matched();
        }

        Self {
            board_size,
            faces,
            matched,
            num_moves: game.num_moves(),
            num_pairs_found: game.num_pairs_found(),
            won: game.have_won_game(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (
            usize::from(self.board_size.height()),
            usize::from(self.board_size.width()),
        );
        if self.faces.dim() != expected || self.matched.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn from_game_hides_face_down_cards() {
        use Icon::*;
        let order = [Key, Key, Bell, Bell, Leaf, Home, Leaf, Home];
        let deck = Deck::from_identifiers(
            BoardSize::Easy,
            order.into_iter().map(Identifier::Icon).collect::<Vec<_>>(),
        )
        .unwrap();
        let mut game = MemoryGame::new(deck);
        game.flip_card(0).unwrap();
        game.flip_card(1).unwrap();
        game.flip_card(4).unwrap();

        let view = TableView::from_game(&game);

        assert_eq!(view.validate(), Ok(()));
        assert_eq!(view.faces[(0, 0)], Some(Identifier::Icon(Icon::Key)));
        assert_eq!(view.faces[(2, 0)], Some(Identifier::Icon(Icon::Leaf)));
        assert_eq!(view.faces[(1, 0)], None);
        assert!(view.matched[(0, 1)]);
        assert!(!view.matched[(2, 0)]);
        assert_eq!((view.num_moves, view.num_pairs_found, view.won), (1, 1, false));
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let view = TableView {
            board_size: BoardSize::Easy,
            faces: Array2::from_elem([4, 2], None),
            matched: Array2::from_elem([2, 4], false),
            num_moves: 0,
            num_pairs_found: 0,
            won: false,
        };

        assert_eq!(view.validate(), Err(GameError::InvalidBoardShape));
    }
}
