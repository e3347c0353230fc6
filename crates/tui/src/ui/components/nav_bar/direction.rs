use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Reading direction of the navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Interprets a `direction` attribute value.
    ///
    /// Only the exact value `right-to-left` reverses the bar; every other
    /// value, including unknown ones, reads left to right.
    pub fn from_attribute(value: &str) -> Self {
        if value == "right-to-left" {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "left-to-right",
            Direction::RightToLeft => "right-to-left",
        }
    }

    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::RightToLeft)
    }

    pub const fn flipped(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

impl FromStr for Direction {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_attribute(value))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
