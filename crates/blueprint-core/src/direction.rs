use serde::{Deserialize, Serialize};

/// One of the four horizontal neighbor directions. North is toward lower y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cardinal {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

/// All four cardinals in token order (N, S, E, W).
pub const ALL_CARDINALS: [Cardinal; 4] = [
    Cardinal::North,
    Cardinal::South,
    Cardinal::East,
    Cardinal::West,
];

impl Cardinal {
    /// Single-letter name used in track tokens.
    pub fn letter(self) -> char {
        match self {
            Cardinal::North => 'N',
            Cardinal::South => 'S',
            Cardinal::East => 'E',
            Cardinal::West => 'W',
        }
    }
}

/// Set of directions a minecart track segment connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackDirections {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl TrackDirections {
    pub fn from_cardinals(dirs: &[Cardinal]) -> Self {
        let mut set = Self::default();
        for dir in dirs {
            match dir {
                Cardinal::North => set.north = true,
                Cardinal::South => set.south = true,
                Cardinal::East => set.east = true,
                Cardinal::West => set.west = true,
            }
        }
        set
    }

    pub fn contains(&self, dir: Cardinal) -> bool {
        match dir {
            Cardinal::North => self.north,
            Cardinal::South => self.south,
            Cardinal::East => self.east,
            Cardinal::West => self.west,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.north || self.south || self.east || self.west)
    }

    /// Direction letters in N, S, E, W order, e.g. "NSE".
    pub fn letters(&self) -> String {
        ALL_CARDINALS
            .iter()
            .filter(|d| self.contains(**d))
            .map(|d| d.letter())
            .collect()
    }
}

/// Side a screw pump draws from, or the direction rollers push toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowDirection {
    FromNorth,
    FromEast,
    FromSouth,
    FromWest,
}

/// Raising or retracting behavior of a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeDirection {
    Retracting,
    Left,
    Right,
    Up,
    Down,
}
