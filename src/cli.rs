use crate::config::SimulationConfig;
use crate::direction::Heading;
use crate::error::ConfigError;
use crate::grid::{parse_grid, Grid};
use crate::simulation::BoundaryPolicy;
use crate::utils::DEFAULT_EPOCHS;
use clap::Parser;

/// CLI arguments for the Langton's Ant simulator
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", about = "🐜 Langton's Ant on a rectangular grid")]
pub struct Args {
    /// Square grid size (rows = columns)
    #[arg(short = 'g', long = "grid-size")]
    pub grid_size: Option<usize>,

    /// Grid rows (overrides --grid-size)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns (overrides --grid-size)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Initial grid file: one row per line, '.' white, '#' black
    #[arg(short = 'm', long = "map")]
    pub map: Option<String>,

    /// Start row (default: grid centre)
    #[arg(long, requires = "col")]
    pub row: Option<usize>,

    /// Start column (default: grid centre)
    #[arg(long, requires = "row")]
    pub col: Option<usize>,

    /// Start heading: up, right, down or left
    #[arg(long, default_value = "up")]
    pub heading: Heading,

    /// Pick the start heading at random (see --seed)
    #[arg(long, default_value_t = false, conflicts_with = "heading")]
    pub random_heading: bool,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// What happens at the grid edge: wrap, reject or grow
    #[arg(short = 'b', long, default_value = "wrap")]
    pub boundary: BoundaryPolicy,

    /// Number of steps
    #[arg(short = 'e', long = "epochs", default_value_t = DEFAULT_EPOCHS)]
    pub epochs: u64,

    /// Print the grid after every epoch
    #[arg(long, default_value_t = false)]
    pub animate: bool,

    /// Delay between animated epochs, in milliseconds
    #[arg(short = 'd', long = "delay-ms", default_value_t = 0)]
    pub delay_ms: u64,

    /// Do not clear the screen between animated epochs
    #[arg(long, default_value_t = false)]
    pub no_clear: bool,

    /// Print the summary only
    #[arg(short = 'q', long, default_value_t = false, conflicts_with = "animate")]
    pub quiet: bool,
}

impl Args {
    /// Build the initial grid from --map or the size flags
    pub fn load_grid(&self) -> Result<Grid, ConfigError> {
        if let Some(path) = &self.map {
            return parse_grid(path);
        }

        let rows = self.rows.or(self.grid_size);
        let cols = self.cols.or(self.grid_size);
        match (rows, cols) {
            (Some(rows), Some(cols)) => Grid::new(rows, cols),
            _ => Err(ConfigError::MissingGridSize),
        }
    }

    /// Engine options; draws the random heading from `rng` when asked to
    pub fn simulation_config(&self, rng: &mut fastrand::Rng) -> SimulationConfig {
        let heading = if self.random_heading {
            Heading::random(rng)
        } else {
            self.heading
        };

        let mut config = SimulationConfig::new()
            .with_heading(heading)
            .with_boundary(self.boundary);
        if let (Some(row), Some(col)) = (self.row, self.col) {
            config = config.with_start(row, col);
        }
        config
    }
}
