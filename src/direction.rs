use crate::error::ConfigError;
use std::str::FromStr;

/// The four cardinal headings, in clockwise order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Heading {
    #[default]
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl FromStr for Heading {
    type Err = ConfigError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            b"up" | b"north" => Ok(Heading::Up),
            b"right" | b"east" => Ok(Heading::Right),
            b"down" | b"south" => Ok(Heading::Down),
            b"left" | b"west" => Ok(Heading::Left),
            _ => Err(ConfigError::InvalidHeading(s.to_string())),
        }
    }
}

impl Heading {
    /// All headings, clockwise starting from `Up`
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Get heading index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotate 90° clockwise
    #[inline]
    pub const fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Rotate 90° counter-clockwise
    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// The rule: white (`false`) turns clockwise, black (`true`) turns counter-clockwise.
    #[inline]
    pub const fn turn(self, black: bool) -> Self {
        if black {
            self.counter_clockwise()
        } else {
            self.clockwise()
        }
    }

    /// `(d_row, d_col)` of one move along this heading; row 0 is the top
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }

    /// Pick a heading uniformly at random
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    /// Glyph used to draw the ant
    pub const fn glyph(self) -> char {
        match self {
            Heading::Up => '^',
            Heading::Right => '>',
            Heading::Down => 'v',
            Heading::Left => '<',
        }
    }

    /// Get heading name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
        }
    }
}
