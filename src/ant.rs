use crate::direction::Heading;

/// Ant position and heading on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub row: usize,
    pub col: usize,
    pub heading: Heading,
}

impl Ant {
    /// Create a new ant at the given position
    pub fn new(row: usize, col: usize, heading: Heading) -> Self {
        Self { row, col, heading }
    }

    /// Current `(row, col)`
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Turn according to the colour of the cell underneath
    #[inline]
    pub fn turn(&mut self, black: bool) {
        self.heading = self.heading.turn(black);
    }

    /// Move ant to new position
    #[inline]
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    /// Signed coordinates of the cell in front of the ant
    #[inline]
    pub fn ahead(&self) -> (isize, isize) {
        let (dr, dc) = self.heading.offset();
        (self.row as isize + dr, self.col as isize + dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(3, 4, Heading::Left);

        assert_eq!(ant.position(), (3, 4));
        assert_eq!(ant.heading, Heading::Left);
    }

    #[test]
    fn test_ant_turn() {
        let mut ant = Ant::new(0, 0, Heading::Up);

        ant.turn(false);
        assert_eq!(ant.heading, Heading::Right);

        ant.turn(true);
        ant.turn(true);
        assert_eq!(ant.heading, Heading::Left);
    }

    #[test]
    fn test_ant_ahead() {
        let mut ant = Ant::new(0, 0, Heading::Up);
        assert_eq!(ant.ahead(), (-1, 0));

        ant.heading = Heading::Right;
        assert_eq!(ant.ahead(), (0, 1));

        ant.move_to(5, 5);
        ant.heading = Heading::Down;
        assert_eq!(ant.ahead(), (6, 5));
    }
}
