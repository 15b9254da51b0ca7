use std::fmt::{self, Display};

/// The four piece shapes the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    pub fn label(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

/// Formats as `[I 0]`.
impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_bracketed_token() {
        assert_eq!(Piece::new(PieceKind::T, 12).to_string(), "[T 12]");
        assert_eq!(Piece::new(PieceKind::I, 0).to_string(), "[I 0]");
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<char> = PieceKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, ['I', 'O', 'T', 'L']);
    }
}
