//! Helpers for Debug and Display impls.

use std::fmt;

use crate::supply::Piece;

/// Write a row of space-separated `[I 0]` tokens.
pub(crate) fn write_row<'a>(
    f: &mut impl fmt::Write,
    pieces: impl IntoIterator<Item = &'a Piece>,
) -> fmt::Result {
    let mut pieces = pieces.into_iter();
    if let Some(first) = pieces.next() {
        write!(f, "{first}")?;
    }
    for piece in pieces {
        write!(f, " {piece}")?;
    }
    Ok(())
}

/// Render a row into a `String`.
pub(crate) fn row_string<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_row(&mut s, pieces);
    s
}
