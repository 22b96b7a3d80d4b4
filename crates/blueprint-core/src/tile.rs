use serde::{Deserialize, Serialize};

/// Terrain shape of a tile, independent of its material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileShape {
    /// Void or otherwise unknown tile type.
    #[default]
    None,
    Empty,
    Floor,
    Boulder,
    Pebbles,
    Wall,
    Fortification,
    StairUp,
    StairDown,
    StairUpDown,
    Ramp,
    /// Open space directly above a ramp.
    RampTop,
    BrookBed,
    BrookTop,
    Branch,
    TrunkBranch,
    Twig,
    Sapling,
    Shrub,
    EndlessPit,
}

/// Every tile shape, in declaration order.
pub const ALL_SHAPES: [TileShape; 20] = [
    TileShape::None,
    TileShape::Empty,
    TileShape::Floor,
    TileShape::Boulder,
    TileShape::Pebbles,
    TileShape::Wall,
    TileShape::Fortification,
    TileShape::StairUp,
    TileShape::StairDown,
    TileShape::StairUpDown,
    TileShape::Ramp,
    TileShape::RampTop,
    TileShape::BrookBed,
    TileShape::BrookTop,
    TileShape::Branch,
    TileShape::TrunkBranch,
    TileShape::Twig,
    TileShape::Sapling,
    TileShape::Shrub,
    TileShape::EndlessPit,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_unique() {
        for (i, a) in ALL_SHAPES.iter().enumerate() {
            for (j, b) in ALL_SHAPES.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "shapes {i} and {j} are duplicates");
                }
            }
        }
    }

    #[test]
    fn test_default_shape_is_none() {
        assert_eq!(TileShape::default(), TileShape::None);
    }
}
