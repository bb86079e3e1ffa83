use std::mem;

use anyhow::ensure;
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{pos::Position, stats::GameStats};

/// Moore neighbourhood offsets as `[dx, dy]`, x-offset outer and y-offset inner.
const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: TileState,

    /// Snapshot of how many neighbours were alive when last computed.
    /// Anything that flips a neighbour's state must refresh it, see [`CellGrid::set_state`].
    pub alive_neighbours: usize,

    pub coordinates: Position,

    /// Coordinates of the adjacent cells inside the same grid.
    pub neighbours: Vec<Position>,
}

impl Cell {
    pub fn new(coordinates: Position, state: TileState) -> Self {
        Self {
            state,
            alive_neighbours: 0,
            coordinates,
            neighbours: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

/// Row-major arena of cells. Cells refer to each other by [`Position`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCellGrid")]
pub struct CellGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

/// Unchecked shape of a serialized [`CellGrid`].
#[derive(Deserialize)]
struct RawCellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawCellGrid> for CellGrid {
    type Error = anyhow::Error;

    fn try_from(raw: RawCellGrid) -> anyhow::Result<Self> {
        let RawCellGrid {
            width,
            height,
            cells,
        } = raw;

        ensure!(
            width.checked_mul(height) == Some(cells.len()),
            "Grid is {width}x{height} but holds {} cells",
            cells.len()
        );

        let grid = Self {
            width,
            height,
            cells,
        };

        for (index, cell) in grid.cells.iter().enumerate() {
            let expected = grid.index_to_pos(index);
            ensure!(
                cell.coordinates == expected,
                "Cell at index {index} claims {:?}, expected {expected:?}",
                cell.coordinates
            );

            ensure!(
                cell.neighbours.iter().all(|neighbour| grid.contains(*neighbour)),
                "Cell at {expected:?} links to a neighbour outside the grid"
            );
        }

        Ok(grid)
    }
}

impl CellGrid {
    /// Builds a `size.x` by `size.y` grid where each cell is alive with chance `probability`,
    /// then links every cell to its neighbours once all of them exist.
    pub fn generate<R>(size: Position, probability: f64, rng: &mut R) -> (Self, GameStats)
    where
        R: Rng + ?Sized,
    {
        let mut stats = GameStats::default();

        let cells = (0..size.y)
            .cartesian_product(0..size.x)
            .map(|(y, x)| {
                // Strict `<` rather than the original `<=`, so that 0 never yields a live cell
                // even when the sample is exactly 0, and 1 always does.
                let state = TileState::from(rng.random::<f64>() < probability);

                if state.is_alive() {
                    stats.alive += 1;
                }
                stats.cells += 1;

                Cell::new(Position { x, y }, state)
            })
            .collect_vec();

        let mut grid = Self {
            width: size.x,
            height: size.y,
            cells,
        };
        grid.link_neighbours();

        (grid, stats)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn cell<P>(&self, pos: P) -> Option<&Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    /// Lookup with signed coordinates, anything outside the grid is `None`.
    pub fn cell_at(&self, x: isize, y: isize) -> Option<&Cell> {
        let pos = Position {
            x: usize::try_from(x).ok()?,
            y: usize::try_from(y).ok()?,
        };

        self.cell(pos)
    }

    /// Positions of the in-bounds cells around `pos`, excluding `pos` itself.
    pub fn neighbours(&self, pos: Position) -> Vec<Position> {
        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[dx, dy]| pos.offset(*dx, *dy))
            .filter(|neighbour| self.contains(*neighbour))
            .collect()
    }

    /// Resolves the neighbours stored on the cell at `pos`.
    pub fn neighbour_cells(&self, pos: Position) -> impl Iterator<Item = &Cell> {
        self.cell(pos)
            .into_iter()
            .flat_map(|cell| cell.neighbours.iter())
            .filter_map(|neighbour| self.cell(*neighbour))
    }

    pub fn for_all_cells<F>(&self, callback: F)
    where
        F: FnMut(&Cell),
    {
        self.cells.iter().for_each(callback);
    }

    pub fn for_all_cells_mut<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Cell),
    {
        self.cells.iter_mut().for_each(callback);
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Sets the state of a single cell and keeps its neighbours' cached counts in sync.
    /// Returns the previous state, or `None` if `pos` is outside the grid.
    pub fn set_state(&mut self, pos: Position, state: TileState) -> Option<TileState> {
        let cell = self.cell_mut(pos)?;
        let previous = mem::replace(&mut cell.state, state);

        if previous != state {
            let neighbours = cell.neighbours.clone();

            for neighbour_pos in neighbours {
                let Some(neighbour) = self.cell_mut(neighbour_pos) else {
                    continue;
                };

                if state.is_alive() {
                    neighbour.alive_neighbours += 1;
                } else {
                    neighbour.alive_neighbours = neighbour.alive_neighbours.saturating_sub(1);
                }
            }
        }

        Some(previous)
    }

    fn link_neighbours(&mut self) {
        let links = self
            .cells
            .iter()
            .map(|cell| {
                let neighbours = self.neighbours(cell.coordinates);
                let alive_neighbours = count_alive_neighbours(
                    neighbours.iter().filter_map(|neighbour| self.cell(*neighbour)),
                );

                (neighbours, alive_neighbours)
            })
            .collect_vec();

        for (cell, (neighbours, alive_neighbours)) in self.cells.iter_mut().zip_eq(links) {
            cell.neighbours = neighbours;
            cell.alive_neighbours = alive_neighbours;
        }
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }
}

pub fn count_alive_neighbours<'a, I>(neighbours: I) -> usize
where
    I: IntoIterator<Item = &'a Cell>,
{
    neighbours
        .into_iter()
        .filter(|neighbour| neighbour.is_alive())
        .count()
}
