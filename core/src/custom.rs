use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const MIN_GAME_NAME_LENGTH: usize = 3;
pub const MAX_GAME_NAME_LENGTH: usize = 14;

fn validate_game_name(name: &str) -> Result<&str> {
    let name = name.trim();
    let length = name.chars().count();
    if (MIN_GAME_NAME_LENGTH..=MAX_GAME_NAME_LENGTH).contains(&length) {
        Ok(name)
    } else {
        Err(GameError::InvalidGameName)
    }
}

/// Image references picked so far while building a custom game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSelection {
    board_size: BoardSize,
    images: Vec<String>,
}

impl ImageSelection {
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            images: Vec::new(),
        }
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn required(&self) -> usize {
        usize::from(self.board_size.num_pairs())
    }

    pub fn remaining(&self) -> usize {
        self.required().saturating_sub(self.images.len())
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Adds one image, returning whether it was kept. Picks past the
    /// required count and repeated references are dropped.
    pub fn add(&mut self, image: impl Into<String>) -> bool {
        let image = image.into();
        if self.is_complete() || self.images.contains(&image) {
            log::debug!("Ignoring image pick {image}");
            return false;
        }
        self.images.push(image);
        true
    }

    /// Adds a batch of picks, returning how many were kept.
    pub fn extend<I, S>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        images
            .into_iter()
            .map(|image| self.add(image))
            .filter(|&kept| kept)
            .count()
    }

    pub fn can_save(&self, name: &str) -> bool {
        self.images.len() == self.required() && validate_game_name(name).is_ok()
    }

    pub fn finish(self, name: &str) -> Result<CustomGame> {
        CustomGame::new(name, self.board_size, self.images)
    }
}

/// A named set of uploaded images, one per pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGame {
    name: String,
    board_size: BoardSize,
    images: Vec<String>,
}

impl CustomGame {
    pub fn new(name: &str, board_size: BoardSize, images: Vec<String>) -> Result<Self> {
        let game = Self {
            name: validate_game_name(name)?.into(),
            board_size,
            images,
        };
        game.validate()?;
        Ok(game)
    }

    /// Re-checks a definition, e.g. one decoded from a document.
    pub fn validate(&self) -> Result<()> {
        if validate_game_name(&self.name)? != self.name {
            return Err(GameError::InvalidGameName);
        }
        self.identifier_source().validate(self.board_size)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn identifier_source(&self) -> IdentifierSource {
        IdentifierSource::Custom(self.images.iter().cloned().map(Identifier::Image).collect())
    }
}
