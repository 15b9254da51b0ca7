use std::{
    fmt::{self, Display},
    str::FromStr,
};

use super::{error::SupplyError, piece::Piece};

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Play,
    Reserve,
    UseReserved,
    SwapFront,
    BlockSwap,
    ShowRules,
    ShowState,
    Exit,
}

impl Command {
    /// Menu order, as printed.
    pub const MENU: [Command; 8] = [
        Command::Play,
        Command::Reserve,
        Command::UseReserved,
        Command::SwapFront,
        Command::BlockSwap,
        Command::ShowRules,
        Command::ShowState,
        Command::Exit,
    ];

    pub fn selection(self) -> u8 {
        match self {
            Command::Exit => 0,
            Command::Play => 1,
            Command::Reserve => 2,
            Command::UseReserved => 3,
            Command::SwapFront => 4,
            Command::BlockSwap => 5,
            Command::ShowRules => 6,
            Command::ShowState => 7,
        }
    }

    pub fn from_selection(n: u8) -> Option<Self> {
        Self::MENU.into_iter().find(|c| c.selection() == n)
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Play => "Play piece (dequeue)",
            Command::Reserve => "Reserve piece (send to stack)",
            Command::UseReserved => "Use reserved piece (pop stack top)",
            Command::SwapFront => "Swap front piece with stack top",
            Command::BlockSwap => "Swap first 3 queue pieces with the 3 in the stack",
            Command::ShowRules => "Show rules",
            Command::ShowState => "Show current state",
            Command::Exit => "Exit",
        }
    }

    /// Does this command change the queue or the stack?
    pub fn is_mutating(self) -> bool {
        !matches!(
            self,
            Command::ShowRules | Command::ShowState | Command::Exit
        )
    }
}

/// Parses a menu line, e.g. `"2\n"`.
impl FromStr for Command {
    type Err = SupplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u8>()
            .ok()
            .and_then(Command::from_selection)
            .ok_or_else(|| SupplyError::InvalidSelection(s.to_owned()))
    }
}

/// What an accepted command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    Swapped { front: Piece, top: Piece },
    BlockSwapped,
    Rules,
    State,
    Exit,
}

impl Outcome {
    /// Whether the full state should be shown after this outcome.
    pub fn shows_state(self) -> bool {
        !matches!(self, Outcome::Rules | Outcome::Exit)
    }
}

/// The action line printed before the state, if any.
impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(piece) => write!(f, "Action: playing piece {piece}..."),
            Outcome::Reserved(piece) => write!(f, "Action: reserving piece {piece}..."),
            Outcome::UsedReserved(piece) => {
                write!(f, "Action: using reserved piece {piece}...")
            }
            Outcome::Swapped { front, top } => write!(
                f,
                "Action: swapping front piece with stack top (front is now {front}, top is now {top})..."
            ),
            Outcome::BlockSwapped => write!(f, "Action: swapping a block of 3 pieces..."),
            Outcome::Rules | Outcome::State | Outcome::Exit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_number() {
        for command in Command::MENU {
            let line = format!("{}\n", command.selection());
            assert_eq!(line.parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn rejects_unknown_numbers_and_garbage() {
        for line in ["8", "42", "-1", "", "abc", "1.5", "2 3"] {
            assert_eq!(
                line.parse::<Command>(),
                Err(SupplyError::InvalidSelection(line.trim().to_owned())),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!("  5 \r\n".parse::<Command>(), Ok(Command::BlockSwap));
    }

    #[test]
    fn display_commands_do_not_mutate() {
        assert!(!Command::ShowRules.is_mutating());
        assert!(!Command::ShowState.is_mutating());
        assert!(Command::Play.is_mutating());
    }
}
