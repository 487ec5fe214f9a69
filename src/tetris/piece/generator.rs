use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Debug)]
/// Deals out new pieces.
///
/// The generator owns the id counter, so every piece it creates carries an id one higher than the last,
/// starting from 0 for a fresh generator.
pub struct Generator
{
    next_id: u32,
    rng:     StdRng,
}

impl Default for Generator
{
    fn default() -> Self
    {
        Generator::new()
    }
}

impl Generator
{
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self
    {
        Generator::with_rng(StdRng::from_entropy())
    }

    /// Creates a generator whose sequence of shapes is reproducible.
    pub fn seeded(seed: u64) -> Self
    {
        Generator::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self
    {
        Generator { next_id: 0, rng }
    }

    /// Creates a piece of a uniformly random shape with the next id.
    pub fn generate(&mut self) -> Piece
    {
        let shape = Shape::all()[self.rng.gen_range(0..Shape::COUNT)];
        let piece = Piece::new(shape, self.next_id);
        self.next_id += 1;

        log::trace!("generated {}", piece);
        piece
    }

    /// The id the next generated piece will receive.
    pub fn next_id(&self) -> u32
    {
        self.next_id
    }
}
