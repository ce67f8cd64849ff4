use std::collections::VecDeque;
use std::fmt;

use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Square minefield together with everything the player has uncovered so far.
///
/// Only built through the constructors below, which keep the grid square and
/// the neighbor counts in sync with the mines.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    game_over: bool,
}

impl Board {
    /// Generates a board with the default mine probability, drawing from the thread RNG.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_rng(size, &GameConfig::default(), &mut rand::rng())
    }

    /// Generates a board where every cell independently becomes a mine with
    /// `config.mine_probability` percent chance. The size range of `config` is
    /// not enforced here.
    pub fn with_rng<R: Rng + ?Sized>(
        size: usize,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let size = check_nonzero(size)?;
        let mines = Array2::from_shape_fn((size, size), |_| {
            rng.random_range(0..100) < config.mine_probability
        });

        let board = Self::from_mine_mask(mines);
        log::debug!(
            "Generated {}x{} board with {} mines at {}%",
            size,
            size,
            board.mine_count(),
            config.mine_probability
        );
        Ok(board)
    }

    /// Builds a board with mines exactly at `mine_coords`.
    pub fn from_mines(size: usize, mine_coords: &[Coord2]) -> Result<Self> {
        let size = check_nonzero(size)?;
        let mut mines: Array2<bool> = Array2::default((size, size));

        for &(x, y) in mine_coords {
            if x >= size || y >= size {
                return Err(GameError::OutOfBounds { x, y, size });
            }
            mines[[x, y]] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mut cells = mines.mapv(|is_mine| Cell {
            is_mine,
            ..Default::default()
        });

        let size = cells.dim().0;
        for x in 0..size {
            for y in 0..size {
                let count = cells
                    .iter_neighbors((x, y))
                    .filter(|&pos| cells[pos.to_nd_index()].is_mine)
                    .count();
                cells[[x, y]].mine_neighbors = count as u8;
            }
        }

        Self {
            cells,
            game_over: false,
        }
    }

    pub fn size(&self) -> usize {
        self.cells.dim().0
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        let coords = self.validate_coords((x, y))?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed).count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                x: coords.0,
                y: coords.1,
                size,
            })
        }
    }

    /// Stores a player annotation. Revealed cells keep whatever they had.
    pub fn set_mark(&mut self, x: usize, y: usize, mark: Mark) -> Result<()> {
        let coords = self.validate_coords((x, y))?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_revealed {
            cell.mark = mark;
        }
        Ok(())
    }

    /// Uncovers the cell at `(x, y)`.
    ///
    /// A mine ends the game and uncovers the whole board. A cell without
    /// mined neighbors opens its entire zero region along with the numbered
    /// cells bordering it. Already revealed cells are left alone.
    pub fn reveal(&mut self, x: usize, y: usize) -> Result<()> {
        let coords = self.validate_coords((x, y))?;

        let target = &mut self.cells[coords.to_nd_index()];
        if target.is_revealed {
            log::trace!("{:?} already revealed", coords);
            return Ok(());
        }

        if target.is_mine {
            log::info!("Mine hit at {:?}, game over", coords);
            self.cells.iter_mut().for_each(|cell| cell.is_revealed = true);
            self.game_over = true;
            return Ok(());
        }

        target.is_revealed = true;
        if target.mine_neighbors != 0 {
            log::trace!("Revealed {:?} ({})", coords, target.mine_neighbors);
            return Ok(());
        }

        // cells are marked on discovery so each one is queued at most once
        let mut revealed = 1;
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            if self.cells[visit_coords.to_nd_index()].mine_neighbors != 0 {
                continue;
            }

            for pos in self.cells.iter_neighbors(visit_coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if !cell.is_revealed {
                    cell.is_revealed = true;
                    revealed += 1;
                    to_visit.push_back(pos);
                }
            }
        }

        log::debug!("Cascade from {:?} revealed {} cells", coords, revealed);
        Ok(())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for y in 0..size {
            for x in 0..size {
                write!(f, "{}", self.cells[[x, y]])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_nonzero(size: usize) -> Result<usize> {
    if size == 0 {
        Err(GameError::InvalidSize {
            size,
            min: 1,
            max: usize::MAX,
        })
    } else {
        Ok(size)
    }
}
