use std::path::Path;

use blueprint_core::structure::Structure;
use blueprint_core::tile::TileShape;
use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::tile_map::TileMap;
use crate::WorldQuery;

/// A box of tiles sharing one shape, both corners inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileFill {
    pub min: IVec3,
    pub max: IVec3,
    pub shape: TileShape,
}

/// On-disk description of a world, parsed from RON.
///
/// Fills are applied in order, then single tiles, so later entries win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Tile counts per axis.
    pub bounds: IVec3,
    #[serde(default)]
    pub cursor: Option<IVec3>,
    #[serde(default)]
    pub fills: Vec<TileFill>,
    #[serde(default)]
    pub tiles: Vec<(IVec3, TileShape)>,
    #[serde(default)]
    pub structures: Vec<Structure>,
}

impl WorldSnapshot {
    /// Build the in-memory world this snapshot describes.
    pub fn into_tile_map(self) -> Result<TileMap, WorldError> {
        let mut map = TileMap::new(self.bounds)?;
        map.set_cursor(self.cursor);
        for fill in &self.fills {
            map.fill(fill.min, fill.max, fill.shape)?;
        }
        for (pos, shape) in &self.tiles {
            map.set_tile(*pos, *shape)?;
        }
        for structure in self.structures {
            map.add_structure(structure)?;
        }
        let bounds = map.bounds();
        log::debug!(
            "loaded world {}x{}x{}: {} tiles, {} structures",
            bounds.x,
            bounds.y,
            bounds.z,
            map.tile_count(),
            map.structures().len()
        );
        Ok(map)
    }
}

/// Parse a world snapshot from a RON string.
pub fn load_world_from_str(ron_str: &str) -> Result<TileMap, WorldError> {
    let options = ron::Options::default();
    let snapshot: WorldSnapshot = options
        .from_str(ron_str)
        .map_err(|e| WorldError::Parse(e.to_string()))?;
    snapshot.into_tile_map()
}

/// Read and parse a world snapshot file.
pub fn load_world(path: &Path) -> Result<TileMap, WorldError> {
    let contents = std::fs::read_to_string(path).map_err(|source| WorldError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::structure::StructureKind;

    const SMALL_WORLD: &str = r#"(
        bounds: (10, 10, 3),
        cursor: Some((1, 1, 0)),
        fills: [
            (min: (0, 0, 0), max: (9, 9, 0), shape: Floor),
        ],
        tiles: [
            ((4, 4, 0), StairDown),
        ],
        structures: [
            (
                kind: Workshop(Masons),
                footprint: (x1: 1, y1: 1, x2: 3, y2: 3),
                z: 0,
            ),
            (
                kind: Stockpile([Wood, Stone]),
                footprint: (x1: 5, y1: 5, x2: 6, y2: 6),
                z: 0,
                is_room: true,
            ),
        ],
    )"#;

    #[test]
    fn test_load_small_world() {
        let map = load_world_from_str(SMALL_WORLD).expect("should parse");
        assert_eq!(map.bounds(), IVec3::new(10, 10, 3));
        assert_eq!(map.cursor(), Some(IVec3::new(1, 1, 0)));
        assert_eq!(map.tile_shape_at(IVec3::new(0, 9, 0)), Some(TileShape::Floor));
        assert_eq!(
            map.tile_shape_at(IVec3::new(4, 4, 0)),
            Some(TileShape::StairDown)
        );
        assert_eq!(map.tile_shape_at(IVec3::new(0, 0, 1)), None);
        assert_eq!(map.structures().len(), 2);

        let pile = map
            .structure_at(IVec3::new(6, 6, 0))
            .expect("stockpile covers (6,6)");
        assert!(pile.is_room);
        match &pile.kind {
            StructureKind::Stockpile(categories) => assert_eq!(categories.count(), 2),
            other => panic!("expected stockpile, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let result = load_world_from_str("(bounds: [this is not RON");
        assert!(matches!(result, Err(WorldError::Parse(_))));
    }

    #[test]
    fn test_structure_outside_bounds_rejected() {
        let ron = r#"(
            bounds: (4, 4, 1),
            structures: [
                (kind: Bed, footprint: (x1: 5, y1: 0, x2: 5, y2: 0), z: 0),
            ],
        )"#;
        let result = load_world_from_str(ron);
        assert!(matches!(result, Err(WorldError::OutOfBounds(_))));
    }

    #[test]
    fn test_load_world_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("world.ron");
        std::fs::write(&path, SMALL_WORLD).expect("write");
        let map = load_world(&path).expect("should load");
        assert_eq!(map.structures().len(), 2);
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_world(&dir.path().join("nope.ron"));
        assert!(matches!(result, Err(WorldError::Read { .. })));
    }
}
