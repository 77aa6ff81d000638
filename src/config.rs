use crate::direction::Heading;
use crate::simulation::BoundaryPolicy;

/// Construction options for [`LangtonsAnt`](crate::simulation::LangtonsAnt).
///
/// Defaults: start at the grid centre `(rows / 2, cols / 2)`, heading `Up`,
/// `Wrap` boundary policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Start `(row, col)`; `None` means the grid centre
    pub start: Option<(usize, usize)>,
    pub heading: Heading,
    pub boundary: BoundaryPolicy,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, row: usize, col: usize) -> Self {
        self.start = Some((row, col));
        self
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Start position for a grid of the given size
    pub fn start_for(&self, rows: usize, cols: usize) -> (usize, usize) {
        self.start.unwrap_or((rows / 2, cols / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimulationConfig::default();

        assert_eq!(cfg.heading, Heading::Up);
        assert_eq!(cfg.boundary, BoundaryPolicy::Wrap);
        assert_eq!(cfg.start_for(5, 8), (2, 4));
    }

    #[test]
    fn test_builder() {
        let cfg = SimulationConfig::new()
            .with_start(1, 2)
            .with_heading(Heading::Left)
            .with_boundary(BoundaryPolicy::Grow);

        assert_eq!(cfg.start_for(10, 10), (1, 2));
        assert_eq!(cfg.heading, Heading::Left);
        assert_eq!(cfg.boundary, BoundaryPolicy::Grow);
    }
}
