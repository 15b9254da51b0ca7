use anyhow::Result;
use std::fmt::Debug;

use super::{error::SupplyError, queue::PieceQueue, stack::ReserveStack};

/// The input/output methods needed by a `Session`.
pub trait SupplyIo: Debug {
    /// Printed once, before the first menu.
    fn show_banner(&mut self) -> Result<()> {
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()>;

    /// Block until the user enters a line. `None` means end of input.
    fn read_selection(&mut self) -> Result<Option<String>>;

    /// Queue front to rear, stack top to base, then a divider.
    fn show_state(&mut self, queue: &PieceQueue, stack: &ReserveStack) -> Result<()>;

    fn show_rules(&mut self) -> Result<()>;

    /// A plain line of text, e.g. the action that was just taken.
    fn show_message(&mut self, message: &str) -> Result<()>;

    /// A rejected command.
    fn show_error(&mut self, err: &SupplyError) -> Result<()> {
        self.show_message(&err.to_string())
    }

    fn show_goodbye(&mut self) -> Result<()> {
        Ok(())
    }
}
