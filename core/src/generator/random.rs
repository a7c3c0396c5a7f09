use super::*;

/// Deals a deck by drawing faces from the source and shuffling the pairs, deterministic for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
    source: IdentifierSource,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64, source: IdentifierSource) -> Self {
        Self { seed, source }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, size: BoardSize) -> Result<Deck> {
        use rand::prelude::*;

        self.source.validate(size)?;
        let num_pairs = usize::from(size.num_pairs());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut chosen = match self.source {
            IdentifierSource::Pool(mut pool) => {
                pool.shuffle(&mut rng);
                pool.truncate(num_pairs);
                pool
            }
            IdentifierSource::Custom(identifiers) => identifiers,
        };

        let mut identifiers = Vec::with_capacity(2 * num_pairs);
        identifiers.extend(chosen.iter().cloned());
        identifiers.append(&mut chosen);
        identifiers.shuffle(&mut rng);

        log::debug!(
            "Dealt {} cards for {} board, seed {}",
            identifiers.len(),
            size,
            self.seed
        );
        Ok(Deck::new_unchecked(size, identifiers))
    }
}
