use crate::direction::Heading;
use std::fmt;

/// Invalid construction inputs, raised before any step runs
#[derive(Debug)]
pub enum ConfigError {
    /// IO operation failed while reading a grid file
    Io(std::io::Error),
    /// Grid has no rows
    EmptyGrid,
    /// Grid rows have no cells
    EmptyRow,
    /// A row length differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Start position lies outside the grid
    StartOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// `rows * cols` cells cannot be allocated
    GridTooLarge { rows: usize, cols: usize },
    /// Neither a grid size nor a grid file was given
    MissingGridSize,
    /// Invalid heading string
    InvalidHeading(String),
    /// Invalid boundary policy string
    InvalidBoundary(String),
    /// Unknown glyph in a grid file
    InvalidCell { line: usize, glyph: char },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::EmptyGrid => write!(f, "grid must contain at least one row"),
            ConfigError::EmptyRow => write!(f, "grid rows must contain at least one cell"),
            ConfigError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {} (grid must be rectangular)",
                row, found, expected
            ),
            ConfigError::StartOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "start position ({}, {}) is outside the {}x{} grid",
                row, col, rows, cols
            ),
            ConfigError::GridTooLarge { rows, cols } => {
                write!(f, "a {}x{} grid is too large to allocate", rows, cols)
            }
            ConfigError::MissingGridSize => {
                write!(f, "a grid size (--grid-size / --rows / --cols) or --map is required")
            }
            ConfigError::InvalidHeading(s) => write!(f, "Invalid heading: {}", s),
            ConfigError::InvalidBoundary(s) => write!(f, "Invalid boundary policy: {}", s),
            ConfigError::InvalidCell { line, glyph } => {
                write!(f, "Invalid cell {:?} on line {}", glyph, line)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

/// The ant would leave the grid under the `Reject` boundary policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryError {
    pub row: usize,
    pub col: usize,
    pub heading: Heading,
    /// Number of the step that was refused (1-based)
    pub step: u64,
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {}: ant at ({}, {}) heading {} would leave the grid",
            self.step,
            self.row,
            self.col,
            self.heading.as_str()
        )
    }
}

impl std::error::Error for BoundaryError {}

/// Top-level error for the simulator
#[derive(Debug)]
pub enum SimError {
    Config(ConfigError),
    Boundary(BoundaryError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(err) => write!(f, "Configuration error: {}", err),
            SimError::Boundary(err) => write!(f, "Boundary error: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(err) => Some(err),
            SimError::Boundary(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(err: ConfigError) -> Self {
        SimError::Config(err)
    }
}

impl From<BoundaryError> for SimError {
    fn from(err: BoundaryError) -> Self {
        SimError::Boundary(err)
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Config(ConfigError::Io(err))
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
