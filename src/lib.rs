//! # Langton's Ant
//!
//! A single ant walks a grid of black and white cells. On a white cell it
//! turns right, on a black cell it turns left; either way it flips the cell
//! and steps forward.
//!
//! This library provides the grid, the ant, the transition engine with its
//! boundary policies, and the text rendering used by the binary.

pub mod ant;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod render;
pub mod simulation;
pub mod utils;

pub use ant::Ant;
pub use cli::Args;
pub use config::SimulationConfig;
pub use direction::Heading;
pub use error::{BoundaryError, ConfigError, Result, SimError};
pub use grid::Grid;
pub use simulation::{BoundaryPolicy, LangtonsAnt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, BoundaryError, BoundaryPolicy, ConfigError, Grid, Heading, LangtonsAnt,
        Result, SimError, SimulationConfig,
    };
}
