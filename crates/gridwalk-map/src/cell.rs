//! Map cell kinds and the characters that spell them.

use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

/// What occupies one grid cell.
///
/// Cells missing from an input map default to [`MapCell::Wall`], so an empty
/// or short map yields disconnected cells rather than open floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MapCell {
    Open,
    #[default]
    Wall,
    Start,
    Goal,
}

impl MapCell {
    /// Whether a search may step onto this cell.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, MapCell::Wall)
    }
}

/// The four marker characters a map file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alphabet {
    pub open: char,
    pub wall: char,
    pub start: char,
    pub goal: char,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            open: 'o',
            wall: 'X',
            start: 'S',
            goal: 'G',
        }
    }
}

impl Alphabet {
    /// Build an alphabet, rejecting repeated characters.
    pub fn new(open: char, wall: char, start: char, goal: char) -> Result<Self, MapError> {
        let chars = [open, wall, start, goal];
        for (i, c) in chars.iter().enumerate() {
            if chars[i + 1..].contains(c) {
                return Err(MapError::InvalidAlphabet(chars.iter().collect()));
            }
        }
        Ok(Self {
            open,
            wall,
            start,
            goal,
        })
    }

    /// The cell spelled by `c`, or `None` if `c` is not a marker.
    #[inline]
    pub fn cell(&self, c: char) -> Option<MapCell> {
        match c {
            _ if c == self.open => Some(MapCell::Open),
            _ if c == self.wall => Some(MapCell::Wall),
            _ if c == self.start => Some(MapCell::Start),
            _ if c == self.goal => Some(MapCell::Goal),
            _ => None,
        }
    }

    /// The character for `cell`.
    #[inline]
    pub fn symbol(&self, cell: MapCell) -> char {
        match cell {
            MapCell::Open => self.open,
            MapCell::Wall => self.wall,
            MapCell::Start => self.start,
            MapCell::Goal => self.goal,
        }
    }
}

/// Parses four characters in open, wall, start, goal order, e.g. `"oXSG"`.
impl FromStr for Alphabet {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars[..] {
            [open, wall, start, goal] => Alphabet::new(open, wall, start, goal),
            _ => Err(MapError::InvalidAlphabet(s.to_string())),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.open, self.wall, self.start, self.goal)
    }
}
