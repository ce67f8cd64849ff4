use core::fmt;
use serde::{Deserialize, Serialize};

/// Player annotation on a hidden cell, never consulted when revealing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    None,
    Question,
    Flag,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) mine_neighbors: u8,
    pub(crate) mark: Mark,
    pub(crate) is_revealed: bool,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn mine_neighbors(&self) -> u8 {
        self.mine_neighbors
    }

    pub const fn mark(&self) -> Mark {
        self.mark
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }
}

/// Two columns wide; the mine emoji already renders double width.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_revealed {
            return f.write_str(match self.mark {
                Mark::None => "□ ",
                Mark::Question => "? ",
                Mark::Flag => "⚠ ",
            });
        }

        match (self.is_mine, self.mine_neighbors) {
            (true, _) => f.write_str("💣"),
            (false, 0) => f.write_str(". "),
            (false, count) => write!(f, "{count} "),
        }
    }
}
