mod debug;
mod supply;
mod terminal_io;

pub mod config;

pub use supply::{
    io::SupplyIo, Command, Generator, Outcome, Piece, PieceKind, PieceQueue, PieceSupply,
    ReserveStack, Session, SupplyError, BLOCK_SWAP_LEN,
};
pub use terminal_io::{screen, TerminalIo};
