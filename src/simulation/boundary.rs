use crate::ant::Ant;
use crate::error::ConfigError;
use crate::grid::Grid;
use std::str::FromStr;

/// What happens when the ant's next cell is outside the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Toroidal topology: leave one edge, enter at the opposite edge
    #[default]
    Wrap,
    /// Refuse the step with a `BoundaryError`
    Reject,
    /// Extend the grid by one white row or column
    Grow,
}

/// Destination of one move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Advance {
    pub to: (usize, usize),
    /// `(rows, cols)` prepended to the grid while resolving the move
    pub shift: (usize, usize),
}

impl Advance {
    #[inline]
    fn at(row: usize, col: usize) -> Self {
        Self {
            to: (row, col),
            shift: (0, 0),
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            b"wrap" | b"torus" => Ok(BoundaryPolicy::Wrap),
            b"reject" => Ok(BoundaryPolicy::Reject),
            b"grow" => Ok(BoundaryPolicy::Grow),
            _ => Err(ConfigError::InvalidBoundary(s.to_string())),
        }
    }
}

impl BoundaryPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            BoundaryPolicy::Wrap => "wrap",
            BoundaryPolicy::Reject => "reject",
            BoundaryPolicy::Grow => "grow",
        }
    }

    /// Resolve the cell the ant moves into, or `None` if the step must be refused.
    ///
    /// `Reject` never touches the grid. `Grow` extends it before returning, so
    /// the result is in grown coordinates and `shift` says how far existing
    /// cells moved.
    pub(crate) fn advance(self, grid: &mut Grid, ant: &Ant) -> Option<Advance> {
        let (row, col) = ant.ahead();
        if grid.contains(row, col) {
            return Some(Advance::at(row as usize, col as usize));
        }

        match self {
            BoundaryPolicy::Reject => None,
            BoundaryPolicy::Wrap => Some(Advance::at(
                row.rem_euclid(grid.rows() as isize) as usize,
                col.rem_euclid(grid.cols() as isize) as usize,
            )),
            BoundaryPolicy::Grow => {
                // Only one axis can be out of range for a unit move
                if row < 0 {
                    grid.grow_top();
                    Some(Advance {
                        to: (0, col as usize),
                        shift: (1, 0),
                    })
                } else if col < 0 {
                    grid.grow_left();
                    Some(Advance {
                        to: (row as usize, 0),
                        shift: (0, 1),
                    })
                } else if row as usize >= grid.rows() {
                    grid.grow_bottom();
                    Some(Advance::at(row as usize, col as usize))
                } else {
                    grid.grow_right();
                    Some(Advance::at(row as usize, col as usize))
                }
            }
        }
    }
}
