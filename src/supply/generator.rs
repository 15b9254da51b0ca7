use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use super::piece::{Piece, PieceKind};

/// Source of new pieces.
///
/// Owns both the random source for the labels and the id counter, so two
/// generators built from the same seed hand out the same sequence.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: StdRng,
    next_id: u32,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            next_id: 0,
        }
    }

    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;

        debug!(%piece, "generated piece");
        piece
    }

    /// The id the next generated piece will get.
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }
}
