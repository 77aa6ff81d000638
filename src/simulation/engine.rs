use crate::ant::Ant;
use crate::config::SimulationConfig;
use crate::direction::Heading;
use crate::error::{BoundaryError, ConfigError, Result};
use crate::grid::Grid;
use crate::simulation::boundary::BoundaryPolicy;

/// Langton's Ant: one ant on a rectangular grid.
///
/// Rule per step: white (`false`) turns clockwise, black (`true`) turns
/// counter-clockwise; the cell is flipped and the ant moves one cell forward.
/// Leaving the grid is resolved by the configured [`BoundaryPolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangtonsAnt {
    grid: Grid,
    ant: Ant,
    steps: u64,
    boundary: BoundaryPolicy,
}

impl LangtonsAnt {
    /// Create an engine over an existing grid
    pub fn new(grid: Grid, config: SimulationConfig) -> Result<Self> {
        let (row, col) = config.start_for(grid.rows(), grid.cols());
        if grid.get(row, col).is_none() {
            return Err(ConfigError::StartOutOfBounds {
                row,
                col,
                rows: grid.rows(),
                cols: grid.cols(),
            }
            .into());
        }

        Ok(Self {
            grid,
            ant: Ant::new(row, col, config.heading),
            steps: 0,
            boundary: config.boundary,
        })
    }

    /// Create an engine from explicit rows (`true` = black)
    pub fn from_rows(rows: Vec<Vec<bool>>, config: SimulationConfig) -> Result<Self> {
        Self::new(Grid::from_rows(rows)?, config)
    }

    /// Create an engine over an all-white grid
    pub fn with_size(rows: usize, cols: usize, config: SimulationConfig) -> Result<Self> {
        Self::new(Grid::new(rows, cols)?, config)
    }

    /// Apply the rule once and return the ant's new state.
    ///
    /// Under `Reject`, a step that would leave the grid returns
    /// `SimError::Boundary` and leaves grid, ant and step count untouched.
    pub fn step(&mut self) -> Result<Ant> {
        let (row, col) = self.ant.position();
        let black = self.grid.cell(row, col);

        let mut next = self.ant;
        next.turn(black);

        let advance = self
            .boundary
            .advance(&mut self.grid, &next)
            .ok_or(BoundaryError {
                row,
                col,
                heading: next.heading,
                step: self.steps + 1,
            })?;

        self.grid.flip(row + advance.shift.0, col + advance.shift.1);
        next.move_to(advance.to.0, advance.to.1);
        self.ant = next;
        self.steps += 1;

        Ok(self.ant)
    }

    /// Run exactly `max_steps` steps, stopping at the first error
    pub fn run(&mut self, max_steps: u64) -> Result<()> {
        for _ in 0..max_steps {
            self.step()?;
        }
        Ok(())
    }

    /// Run up to `max_steps` steps, ending early once `stop` returns true.
    ///
    /// `stop` is checked before every step. Returns the number of steps taken.
    pub fn run_until<F>(&mut self, max_steps: u64, mut stop: F) -> Result<u64>
    where
        F: FnMut(&LangtonsAnt) -> bool,
    {
        let mut taken = 0;
        while taken < max_steps && !stop(self) {
            self.step()?;
            taken += 1;
        }
        Ok(taken)
    }

    /// Read-only view of the grid
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn ant(&self) -> Ant {
        self.ant
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        self.ant.position()
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.ant.heading
    }

    /// Completed steps since construction
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }
}
