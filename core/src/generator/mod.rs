use alloc::vec::Vec;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, size: BoardSize) -> Result<Deck>;
}

/// Where the faces of a new deck come from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierSource {
    /// Draw the needed number of faces from a larger pool.
    Pool(Vec<Identifier>),
    /// Use exactly these faces, one per pair.
    Custom(Vec<Identifier>),
}

impl IdentifierSource {
    pub fn default_icons() -> Self {
        Self::Pool(DEFAULT_ICONS.into_iter().map(Identifier::Icon).collect())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    pub fn identifiers(&self) -> &[Identifier] {
        match self {
            Self::Pool(identifiers) | Self::Custom(identifiers) => identifiers,
        }
    }

    /// Checks that a deck for `size` can be drawn from this source.
    pub fn validate(&self, size: BoardSize) -> Result<()> {
        let needed = usize::from(size.num_pairs());
        let identifiers = self.identifiers();
        ensure_distinct(identifiers)?;

        match self {
            Self::Pool(_) if identifiers.len() < needed => Err(GameError::NotEnoughIdentifiers {
                needed,
                available: identifiers.len(),
            }),
            Self::Custom(_) if identifiers.len() != needed => Err(GameError::WrongCustomCount {
                expected: needed,
                actual: identifiers.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for IdentifierSource {
    fn default() -> Self {
        Self::default_icons()
    }
}

pub(crate) fn ensure_distinct(identifiers: &[Identifier]) -> Result<()> {
    let mut seen = HashSet::with_capacity(identifiers.len());
    if identifiers.iter().all(|identifier| seen.insert(identifier)) {
        Ok(())
    } else {
        Err(GameError::DuplicateIdentifier)
    }
}

/// Ordered card faces for one board, every face present exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    size: BoardSize,
    identifiers: Vec<Identifier>,
}

impl Deck {
    pub(crate) fn new_unchecked(size: BoardSize, identifiers: Vec<Identifier>) -> Self {
        Self { size, identifiers }
    }

    /// Builds a deck with a fixed order instead of a shuffled one.
    pub fn from_identifiers(size: BoardSize, identifiers: Vec<Identifier>) -> Result<Self> {
        if identifiers.len() != usize::from(size.num_cards()) {
            return Err(GameError::InvalidDeck);
        }

        let all_paired = {
            let mut counts: HashMap<&Identifier, u8> =
                HashMap::with_capacity(usize::from(size.num_pairs()));
            for identifier in &identifiers {
                *counts.entry(identifier).or_default() += 1;
            }
            counts.values().all(|&count| count == 2)
        };
        if !all_paired {
            return Err(GameError::InvalidDeck);
        }

        Ok(Self::new_unchecked(size, identifiers))
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.identifiers.into_iter().map(Card::new).collect()
    }
}
