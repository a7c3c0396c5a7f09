use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// The closed set of board shapes a round can be played on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of columns.
    pub const fn width(self) -> Dim {
        use BoardSize::*;
        match self {
            Easy => 2,
            Medium => 3,
            Hard => 6,
        }
    }

    /// Number of rows.
    pub const fn height(self) -> Dim {
        use BoardSize::*;
        match self {
            Easy => 4,
            Medium => 6,
            Hard => 6,
        }
    }

    pub const fn num_pairs(self) -> CardCount {
        use BoardSize::*;
        match self {
            Easy => 4,
            Medium => 9,
            Hard => 18,
        }
    }

    pub const fn num_cards(self) -> CardCount {
        mult(self.width(), self.height())
    }

    pub const fn name(self) -> &'static str {
        use BoardSize::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    pub(crate) fn grid_shape(self) -> [usize; 2] {
        [self.height().into(), self.width().into()]
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownBoardSize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_size_fills_its_grid_with_pairs() {
        for size in BoardSize::ALL {
            assert_eq!(size.num_cards(), 2 * size.num_pairs(), "{size}");
        }
    }

    #[test]
    fn dimensions_match_table() {
        assert_eq!((BoardSize::Easy.width(), BoardSize::Easy.height()), (2, 4));
        assert_eq!((BoardSize::Medium.width(), BoardSize::Medium.height()), (3, 6));
        assert_eq!((BoardSize::Hard.width(), BoardSize::Hard.height()), (6, 6));
        assert_eq!(BoardSize::Hard.num_pairs(), 18);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Medium".parse::<BoardSize>(), Ok(BoardSize::Medium));
        assert_eq!(" hard ".parse::<BoardSize>(), Ok(BoardSize::Hard));
        assert_eq!(
            "impossible".parse::<BoardSize>(),
            Err(GameError::UnknownBoardSize)
        );
    }
}
