use crate::{CellState, Error, Result};

use boolinator::Boolinator;
use itertools::iproduct;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many cells to bring to life when populating a grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Population {
    /// Draw this many uniformly random coordinates and set each one alive.
    /// Draws may repeat, so fewer cells can end up alive.
    Count(usize),
    /// Every cell is independently alive with this probability.
    Proportion(f64),
}

/// A fixed-size toroidal grid of cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: Vec<CellState>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Make a new grid with every cell empty.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let size = Self::check_dims(height, width)?;
        Ok(Grid {
            cells: vec![CellState::Empty; size],
            height,
            width,
        })
    }

    /// Make a new grid directly from a row-major iter of cells.
    pub fn new_iter<I>(height: usize, width: usize, iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = CellState>,
    {
        let size = Self::check_dims(height, width)?;
        let cells: Vec<_> = iter.into_iter().take(size + 1).collect();
        (cells.len() == size).as_result(
            (),
            Error::CellCount {
                height,
                width,
                found: cells.len(),
            },
        )?;
        Ok(Grid {
            cells,
            height,
            width,
        })
    }

    /// Make a grid by evaluating each (row, col) to a cell with a closure.
    pub fn new_coord_map<F>(height: usize, width: usize, mut coord_map: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> CellState,
    {
        Self::new_iter(
            height,
            width,
            iproduct!(0..height, 0..width).map(move |(row, col)| coord_map(row, col)),
        )
    }

    /// Make a grid where the given coordinates are alive. Coordinates wrap.
    pub fn new_alive_coords<I>(height: usize, width: usize, coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let mut grid = Self::new(height, width)?;
        for (row, col) in coords {
            grid.assign(row, col, CellState::Alive);
        }
        Ok(grid)
    }

    /// An empty grid with the same dimensions as this one.
    pub fn empty_like(&self) -> Self {
        Grid {
            cells: vec![CellState::Empty; self.size()],
            height: self.height,
            width: self.width,
        }
    }

    /// Validate the dimensions and return the cell count.
    ///
    /// Coordinates are `isize`, so the cell count must fit in one as well.
    fn check_dims(height: usize, width: usize) -> Result<usize> {
        (height > 0 && width > 0).as_result((), Error::EmptyGrid { height, width })?;
        height
            .checked_mul(width)
            .filter(|&size| size <= isize::MAX as usize)
            .ok_or(Error::GridTooLarge { height, width })
    }

    /// Map any coordinate onto the torus and return its cell index.
    #[inline]
    pub fn wrap_index(&self, row: isize, col: isize) -> usize {
        let row = row.rem_euclid(self.height as isize) as usize;
        let col = col.rem_euclid(self.width as isize) as usize;
        row * self.width + col
    }

    /// The cell index of an in-range coordinate, or `None` if it lies off the grid.
    #[inline]
    pub fn index_of(&self, row: isize, col: isize) -> Option<usize> {
        (row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width)
            .as_some_from(|| row as usize * self.width + col as usize)
    }

    /// Read a cell. Never fails; the coordinate wraps around both edges.
    #[inline]
    pub fn query(&self, row: isize, col: isize) -> CellState {
        self.cells[self.wrap_index(row, col)]
    }

    /// Write a cell. Never fails; the coordinate wraps around both edges.
    #[inline]
    pub fn assign(&mut self, row: isize, col: isize, state: CellState) {
        let ix = self.wrap_index(row, col);
        self.cells[ix] = state;
    }

    /// Bring cells to life at random.
    ///
    /// `Population::Count` only ever adds live cells. `Population::Proportion`
    /// redraws every cell, so cells that lose the draw become empty.
    pub fn populate<R>(&mut self, population: Population, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        match population {
            Population::Count(n) => {
                for _ in 0..n {
                    let row = rng.gen_range(0..self.height);
                    let col = rng.gen_range(0..self.width);
                    self.cells[row * self.width + col] = CellState::Alive;
                }
            }
            Population::Proportion(p) => {
                (p.is_finite() && (0.0..=1.0).contains(&p))
                    .as_result((), Error::InvalidProportion(p))?;
                for cell in &mut self.cells {
                    *cell = rng.gen_bool(p).into();
                }
            }
        }
        Ok(())
    }

    /// Iterate over `(row, col, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        iproduct!(0..self.height, 0..self.width)
            .zip(self.cells.iter().copied())
            .map(|((row, col), state)| (row, col, state))
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_coords(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, _, state)| state.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Get the Grid's Cell slice.
    #[inline]
    pub fn get_cells(&self) -> &[CellState] {
        &self.cells[..]
    }

    /// Get the Grid's Cell slice mutably.
    #[inline]
    pub fn get_cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells[..]
    }

    /// Get the Grid's width.
    #[inline]
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Get the Grid's height.
    #[inline]
    pub fn get_height(&self) -> usize {
        self.height
    }

    /// Get the Grid's size.
    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }
}
