use std::{
    fmt::{self, Debug},
    mem,
};

use super::{generator::Generator, piece::Piece};
use crate::debug;

/// Circular queue of upcoming pieces. Always full.
#[derive(Clone)]
pub struct PieceQueue {
    slots: [Piece; Self::CAPACITY],
    front: usize,
}

impl PieceQueue {
    pub const CAPACITY: usize = 5;

    /// Fill every slot with a fresh piece, front first.
    pub fn new(generator: &mut Generator) -> Self {
        Self {
            slots: std::array::from_fn(|_| generator.generate()),
            front: 0,
        }
    }

    /// Physical index of the front slot.
    pub fn front_index(&self) -> usize {
        self.front
    }

    pub fn peek_front(&self) -> Piece {
        self.slots[self.front]
    }

    /// Remove the front piece and return it.
    ///
    /// The vacated slot becomes the new rear and is refilled on the spot, so
    /// the queue never shrinks.
    pub fn advance(&mut self, generator: &mut Generator) -> Piece {
        let removed = mem::replace(&mut self.slots[self.front], generator.generate());
        self.front = (self.front + 1) % Self::CAPACITY;
        removed
    }

    /// Overwrite the front piece without advancing. Returns the old piece.
    pub fn replace_front(&mut self, piece: Piece) -> Piece {
        self.replace_at(0, piece)
    }

    /// Overwrite the piece `offset` positions behind the front.
    pub fn replace_at(&mut self, offset: usize, piece: Piece) -> Piece {
        mem::replace(self.slot_mut(offset), piece)
    }

    pub fn get(&self, offset: usize) -> Option<&Piece> {
        if offset >= Self::CAPACITY {
            return None;
        }
        Some(&self.slots[self.slot_index(offset)])
    }

    /// Pieces in logical order, front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..Self::CAPACITY).map(move |offset| &self.slots[self.slot_index(offset)])
    }

    fn slot_mut(&mut self, offset: usize) -> &mut Piece {
        let idx = self.slot_index(offset);
        &mut self.slots[idx]
    }

    fn slot_index(&self, offset: usize) -> usize {
        assert!(offset < Self::CAPACITY, "queue offset out of range: {offset}");
        (self.front + offset) % Self::CAPACITY
    }
}

impl Debug for PieceQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Physical layout, with the front slot marked.
            for (i, piece) in self.slots.iter().enumerate() {
                let marker = if i == self.front { '>' } else { ' ' };
                writeln!(f, "{marker}{i}: {piece}")?;
            }
            return Ok(());
        }
        debug::write_row(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(queue: &PieceQueue) -> Vec<u32> {
        queue.iter().map(|p| p.id).collect()
    }

    #[test]
    fn starts_full_in_generation_order() {
        let mut gen = Generator::new(123);
        let queue = PieceQueue::new(&mut gen);
        assert_eq!(ids(&queue), [0, 1, 2, 3, 4]);
        assert_eq!(queue.peek_front().id, 0);
        assert_eq!(gen.peek_next_id(), 5);
    }

    #[test]
    fn advance_refills_the_rear() {
        let mut gen = Generator::new(123);
        let mut queue = PieceQueue::new(&mut gen);

        let removed = queue.advance(&mut gen);
        assert_eq!(removed.id, 0);
        assert_eq!(ids(&queue), [1, 2, 3, 4, 5]);
        assert_eq!(queue.front_index(), 1);
    }

    #[test]
    fn front_wraps_around() {
        let mut gen = Generator::new(123);
        let mut queue = PieceQueue::new(&mut gen);

        for _ in 0..7 {
            queue.advance(&mut gen);
        }
        assert_eq!(queue.front_index(), 2);
        assert_eq!(ids(&queue), [7, 8, 9, 10, 11]);
        assert_eq!(queue.iter().count(), PieceQueue::CAPACITY);
    }

    #[test]
    fn replace_does_not_generate() {
        let mut gen = Generator::new(123);
        let mut queue = PieceQueue::new(&mut gen);
        queue.advance(&mut gen);

        let stranger = Piece::new(crate::PieceKind::O, 99);
        let old = queue.replace_front(stranger);
        assert_eq!(old.id, 1);
        assert_eq!(queue.peek_front(), stranger);

        let old = queue.replace_at(4, Piece::new(crate::PieceKind::L, 100));
        assert_eq!(old.id, 5);
        assert_eq!(ids(&queue), [99, 2, 3, 4, 100]);
        assert_eq!(gen.peek_next_id(), 6);
    }

    #[test]
    fn get_past_capacity_is_none() {
        let mut gen = Generator::new(123);
        let queue = PieceQueue::new(&mut gen);
        assert!(queue.get(4).is_some());
        assert!(queue.get(5).is_none());
    }
}
