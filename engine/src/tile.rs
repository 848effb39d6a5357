use serde::{Deserialize, Serialize};

/// Specific terrain in a single map cell.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(try_from = "char", into = "char")]
pub enum MapTile {
    #[default]
    Wall,
    Ground,
    /// Waist-high wall, can be seen over but not crossed.
    LowWall,
    /// Closed door, can be walked through but not seen through.
    Door,
    Water,
}

use MapTile::*;

impl MapTile {
    pub fn blocks_sight(self) -> bool {
        matches!(self, Wall | Door)
    }

    pub fn is_transparent(self) -> bool {
        !self.blocks_sight()
    }

    pub fn blocks_movement(self) -> bool {
        matches!(self, Wall | LowWall | Water)
    }

    pub fn is_walkable(self) -> bool {
        !self.blocks_movement()
    }
}

impl TryFrom<char> for MapTile {
    type Error = &'static str;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Ground),
            '#' => Ok(Wall),
            '-' => Ok(LowWall),
            '+' => Ok(Door),
            '~' => Ok(Water),
            _ => Err("invalid terrain char"),
        }
    }
}

impl From<MapTile> for char {
    fn from(val: MapTile) -> Self {
        // NB. This must match MapTile's TryFrom inputs above.
        match val {
            Ground => '.',
            Wall => '#',
            LowWall => '-',
            Door => '+',
            Water => '~',
        }
    }
}
