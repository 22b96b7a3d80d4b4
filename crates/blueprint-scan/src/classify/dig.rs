use blueprint_core::tile::TileShape;

/// Excavation keys for a terrain shape. Tiles without a type behave like an
/// unknown shape and are left alone.
pub fn dig_keys(shape: Option<TileShape>) -> Option<&'static str> {
    match shape.unwrap_or_default() {
        TileShape::Empty | TileShape::RampTop => Some("h"),
        TileShape::Floor | TileShape::Boulder | TileShape::Pebbles | TileShape::BrookTop => {
            Some("d")
        }
        TileShape::Fortification => Some("F"),
        TileShape::StairUp => Some("u"),
        TileShape::StairDown => Some("j"),
        TileShape::StairUpDown => Some("i"),
        TileShape::Ramp => Some("r"),
        TileShape::Wall
        | TileShape::None
        | TileShape::BrookBed
        | TileShape::Branch
        | TileShape::TrunkBranch
        | TileShape::Twig
        | TileShape::Sapling
        | TileShape::Shrub
        | TileShape::EndlessPit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::tile::ALL_SHAPES;

    #[test]
    fn test_open_space() {
        assert_eq!(dig_keys(Some(TileShape::Empty)), Some("h"));
        assert_eq!(dig_keys(Some(TileShape::RampTop)), Some("h"));
    }

    #[test]
    fn test_floors() {
        for shape in [
            TileShape::Floor,
            TileShape::Boulder,
            TileShape::Pebbles,
            TileShape::BrookTop,
        ] {
            assert_eq!(dig_keys(Some(shape)), Some("d"), "{shape:?}");
        }
    }

    #[test]
    fn test_stairs_are_distinct() {
        let up = dig_keys(Some(TileShape::StairUp));
        let down = dig_keys(Some(TileShape::StairDown));
        let updown = dig_keys(Some(TileShape::StairUpDown));
        assert_eq!((up, down, updown), (Some("u"), Some("j"), Some("i")));
    }

    #[test]
    fn test_walls_and_unknown_produce_nothing() {
        assert_eq!(dig_keys(Some(TileShape::Wall)), None);
        assert_eq!(dig_keys(Some(TileShape::None)), None);
        assert_eq!(dig_keys(None), None);
    }

    #[test]
    fn test_only_open_shapes_are_dug() {
        let dug = ALL_SHAPES.iter().filter(|s| dig_keys(Some(**s)).is_some()).count();
        assert_eq!(dug, 11);
        for shape in [TileShape::Shrub, TileShape::Sapling, TileShape::EndlessPit] {
            assert_eq!(dig_keys(Some(shape)), None, "{shape:?}");
        }
    }

    #[test]
    fn test_fortification_and_ramp() {
        assert_eq!(dig_keys(Some(TileShape::Fortification)), Some("F"));
        assert_eq!(dig_keys(Some(TileShape::Ramp)), Some("r"));
    }
}
