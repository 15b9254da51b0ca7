use std::fmt::{self, Debug};

use super::{error::SupplyError, piece::Piece};
use crate::debug;

/// Bounded LIFO of reserved pieces. The top is the last element.
#[derive(Clone, Default)]
pub struct ReserveStack {
    values: Vec<Piece>,
}

impl ReserveStack {
    pub const CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(Self::CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= Self::CAPACITY
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::StackFull);
        }
        self.values.push(piece);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Piece, SupplyError> {
        self.values.pop().ok_or(SupplyError::StackEmpty)
    }

    /// The piece `depth` positions below the top (0 is the top).
    pub fn peek_at(&self, depth: usize) -> Option<Piece> {
        let idx = self.index_from_top(depth)?;
        Some(self.values[idx])
    }

    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.values.last_mut()
    }

    /// Pieces from top to base.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.values.iter().rev()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        self.values.iter_mut().rev()
    }

    fn index_from_top(&self, depth: usize) -> Option<usize> {
        self.values.len().checked_sub(depth + 1)
    }
}

impl Debug for ReserveStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug::write_row(f, self.iter())
    }
}
