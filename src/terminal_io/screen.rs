//! Text layout for everything the session prints.

use crate::supply::{Command, Piece, PieceKind, PieceQueue, ReserveStack};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};

pub const DIVIDER: &str = "-------------------------------------------------";

const RULES: &str = "\
This program simulates a piece supply inspired by Tetris. The queue holds
the next pieces the player will receive, while the stack holds reserved
pieces.

HOW IT WORKS:
- The queue always holds 5 pieces.
- The stack can hold up to 3 pieces.
- Play piece: removes the piece at the front of the queue.
- Reserve piece: moves the front piece of the queue to the top of the stack.
- Use reserved piece: removes the piece at the top of the stack.
- Swap current piece: swaps the front of the queue with the top of the stack.
- Block swap: swaps the first 3 queue pieces with the 3 stacked pieces.
- Every time a piece is played or reserved, a new one is generated.
";

pub fn write_banner(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "======================================")?;
    writeln!(w, "   WELCOME TO TETRIS STACK DELUXE!")?;
    writeln!(w, "======================================")?;
    writeln!(w)
}

pub fn write_menu(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "========== MAIN MENU ==========")?;
    for command in Command::MENU {
        writeln!(w, "{} - {}", command.selection(), command.description())?;
    }
    write!(w, "Choose an option: ")
}

pub fn write_rules(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "========== GAME RULES ==========")?;
    writeln!(w, "{RULES}")
}

pub fn write_state(
    w: &mut impl Write,
    queue: &PieceQueue,
    stack: &ReserveStack,
    color: bool,
) -> io::Result<()> {
    write!(w, "Piece queue: ")?;
    write_pieces(w, queue.iter(), color)?;
    writeln!(w)?;

    write!(w, "Reserve stack (top -> base): ")?;
    if stack.is_empty() {
        write!(w, "(empty)")?;
    } else {
        write_pieces(w, stack.iter(), color)?;
    }
    writeln!(w)?;

    writeln!(w, "{DIVIDER}")
}

fn write_pieces<'a>(
    w: &mut impl Write,
    pieces: impl Iterator<Item = &'a Piece>,
    color: bool,
) -> io::Result<()> {
    if !color {
        return write!(w, "{}", crate::debug::row_string(pieces));
    }

    for (i, piece) in pieces.enumerate() {
        if i > 0 {
            w.queue(Print(' '))?;
        }
        w.queue(Print('['))?
            .queue(SetForegroundColor(kind_color(piece.kind)))?
            .queue(Print(piece.kind))?
            .queue(ResetColor)?
            .queue(Print(format!(" {}]", piece.id)))?;
    }
    Ok(())
}

/// Guideline colors; orange is not available, so L gets dark yellow.
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::DarkYellow,
    }
}
