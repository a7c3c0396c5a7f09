use rand::prelude::*;

use crate::*;

/// Runs consecutive rounds. Every new round replaces the previous game.
#[derive(Clone, Debug)]
pub struct Session {
    board_size: BoardSize,
    custom: Option<CustomGame>,
    rng: SmallRng,
    game: MemoryGame,
}

impl Session {
    pub fn new(board_size: BoardSize, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = MemoryGame::deal(board_size, IdentifierSource::default(), rng.random())?;
        Ok(Self {
            board_size,
            custom: None,
            rng,
            game,
        })
    }

    pub fn with_custom(custom: CustomGame, seed: u64) -> Result<Self> {
        custom.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let board_size = custom.board_size();
        let game = MemoryGame::deal(board_size, custom.identifier_source(), rng.random())?;
        log::info!("Starting custom game {:?} on {} board", custom.name(), board_size);
        Ok(Self {
            board_size,
            custom: Some(custom),
            rng,
            game,
        })
    }

    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn custom_game(&self) -> Option<&CustomGame> {
        self.custom.as_ref()
    }

    pub fn view(&self) -> TableView {
        TableView::from_game(&self.game)
    }

    pub fn flip(&mut self, position: Position) -> Result<FlipOutcome> {
        self.game.flip_card(position)
    }

    /// Whether starting over would throw away progress.
    pub fn needs_quit_confirmation(&self) -> bool {
        self.game.num_moves() > 0 && !self.game.have_won_game()
    }

    /// New round with the same size and faces.
    pub fn restart(&mut self) -> Result<()> {
        let source = match &self.custom {
            Some(custom) => custom.identifier_source(),
            None => IdentifierSource::default(),
        };
        self.deal(source)
    }

    /// New default-icon round at `board_size`, leaving any custom game.
    pub fn change_size(&mut self, board_size: BoardSize) -> Result<()> {
        log::info!("Switching board size from {} to {}", self.board_size, board_size);
        self.board_size = board_size;
        self.custom = None;
        self.deal(IdentifierSource::default())
    }

    pub fn play_custom(&mut self, custom: CustomGame) -> Result<()> {
        custom.validate()?;
        log::info!(
            "Starting custom game {:?} on {} board",
            custom.name(),
            custom.board_size()
        );
        self.board_size = custom.board_size();
        let source = custom.identifier_source();
        self.custom = Some(custom);
        self.deal(source)
    }

    fn deal(&mut self, source: IdentifierSource) -> Result<()> {
        self.game = MemoryGame::deal(self.board_size, source, self.rng.random())?;
        Ok(())
    }
}
