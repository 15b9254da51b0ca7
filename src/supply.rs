mod command;
mod error;
mod generator;
mod piece;
mod queue;
mod stack;

pub mod io;

pub use command::{Command, Outcome};
pub use error::SupplyError;
pub use generator::Generator;
pub use piece::{Piece, PieceKind};
pub use queue::PieceQueue;
pub use stack::ReserveStack;

use self::io::SupplyIo;
use anyhow::Result;
use tracing::{debug, info, warn};

/// How many pieces a block swap exchanges.
pub const BLOCK_SWAP_LEN: usize = 3;

/// The upcoming-piece queue, the reserve stack, and the generator that
/// refills the queue.
#[derive(Debug, Clone)]
pub struct PieceSupply {
    generator: Generator,
    queue: PieceQueue,
    stack: ReserveStack,
}

impl PieceSupply {
    pub fn new(mut generator: Generator) -> Self {
        let queue = PieceQueue::new(&mut generator);
        Self {
            generator,
            queue,
            stack: ReserveStack::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Generator::new(seed))
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Apply one command. On `Err`, nothing was changed.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SupplyError> {
        let outcome = match command {
            Command::Play => Outcome::Played(self.play()),
            Command::Reserve => Outcome::Reserved(self.reserve()?),
            Command::UseReserved => Outcome::UsedReserved(self.use_reserved()?),
            Command::SwapFront => {
                let (front, top) = self.swap_front()?;
                Outcome::Swapped { front, top }
            }
            Command::BlockSwap => {
                self.block_swap()?;
                Outcome::BlockSwapped
            }
            Command::ShowRules => Outcome::Rules,
            Command::ShowState => Outcome::State,
            Command::Exit => Outcome::Exit,
        };
        debug!(?command, ?outcome, queue = ?self.queue, stack = ?self.stack, "applied");
        Ok(outcome)
    }

    /// Drop the front piece. The queue refills itself.
    pub fn play(&mut self) -> Piece {
        self.queue.advance(&mut self.generator)
    }

    /// Move the front piece onto the stack. The piece leaves the queue, which
    /// refills itself.
    pub fn reserve(&mut self) -> Result<Piece, SupplyError> {
        if self.stack.is_full() {
            return Err(SupplyError::StackFull);
        }
        let piece = self.queue.advance(&mut self.generator);
        self.stack.push(piece)?;
        Ok(piece)
    }

    pub fn use_reserved(&mut self) -> Result<Piece, SupplyError> {
        self.stack.pop()
    }

    /// Exchange the front piece with the stack top. Returns the new
    /// `(front, top)` pair.
    pub fn swap_front(&mut self) -> Result<(Piece, Piece), SupplyError> {
        let top = self.stack.top_mut().ok_or(SupplyError::StackEmpty)?;
        *top = self.queue.replace_front(*top);
        Ok((self.queue.peek_front(), *top))
    }

    /// Exchange queue offset `i` with stack depth `i`, for the first
    /// `BLOCK_SWAP_LEN` positions.
    pub fn block_swap(&mut self) -> Result<(), SupplyError> {
        if self.stack.len() < BLOCK_SWAP_LEN {
            return Err(SupplyError::InsufficientStackDepth {
                required: BLOCK_SWAP_LEN,
                available: self.stack.len(),
            });
        }

        for (offset, reserved) in self.stack.iter_mut().take(BLOCK_SWAP_LEN).enumerate() {
            *reserved = self.queue.replace_at(offset, *reserved);
        }
        Ok(())
    }
}

/// Drives a `PieceSupply` from menu selections read through a `SupplyIo`.
#[derive(Debug)]
pub struct Session<'a> {
    supply: PieceSupply,
    io: &'a mut dyn SupplyIo,
}

impl<'a> Session<'a> {
    pub fn new(supply: PieceSupply, io: &'a mut dyn SupplyIo) -> Self {
        Self { supply, io }
    }

    /// Run until Exit or end of input. Returns the final state.
    pub fn run(mut self) -> Result<PieceSupply> {
        info!(next_id = self.supply.generator.peek_next_id(), "session started");
        self.io.show_banner()?;

        loop {
            self.io.show_menu()?;

            let Some(line) = self.io.read_selection()? else {
                info!("end of input, exiting");
                break;
            };

            if !self.step(&line)? {
                break;
            }
        }

        info!("session finished");
        Ok(self.supply)
    }

    /// Handle one input line. Returns `false` once the session should end.
    fn step(&mut self, line: &str) -> Result<bool> {
        let outcome = line
            .parse::<Command>()
            .and_then(|command| self.supply.apply(command));

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%err, "command rejected");
                self.io.show_error(&err)?;
                return Ok(true);
            }
        };

        match outcome {
            Outcome::Exit => {
                self.io.show_goodbye()?;
                return Ok(false);
            }
            Outcome::Rules => self.io.show_rules()?,
            Outcome::State => {}
            _ => self.io.show_message(&outcome.to_string())?,
        }

        if outcome.shows_state() {
            self.io.show_state(&self.supply.queue, &self.supply.stack)?;
        }
        Ok(true)
    }
}
