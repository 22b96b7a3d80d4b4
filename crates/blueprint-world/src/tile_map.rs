use std::collections::HashMap;

use blueprint_core::structure::{Footprint, Structure};
use blueprint_core::tile::TileShape;
use blueprint_core::types::Position;
use glam::IVec3;

use crate::error::WorldError;
use crate::WorldQuery;

/// In-memory world: sparse tile shapes plus a structure list with a
/// per-tile index into it.
pub struct TileMap {
    bounds: IVec3,
    cursor: Option<Position>,
    tiles: HashMap<Position, TileShape>,
    structures: Vec<Structure>,
    /// Footprint tile -> index into `structures`.
    occupancy: HashMap<Position, usize>,
}

impl TileMap {
    pub fn new(bounds: IVec3) -> Result<Self, WorldError> {
        if bounds.x <= 0 || bounds.y <= 0 || bounds.z <= 0 {
            return Err(WorldError::InvalidBounds(bounds));
        }
        Ok(Self {
            bounds,
            cursor: None,
            tiles: HashMap::new(),
            structures: Vec::new(),
            occupancy: HashMap::new(),
        })
    }

    pub fn set_cursor(&mut self, cursor: Option<Position>) {
        self.cursor = cursor;
    }

    pub fn set_tile(&mut self, pos: Position, shape: TileShape) -> Result<(), WorldError> {
        if !self.is_valid_tile(pos) {
            return Err(WorldError::OutOfBounds(pos));
        }
        self.tiles.insert(pos, shape);
        Ok(())
    }

    /// Set every tile in the inclusive box `[min, max]`.
    pub fn fill(&mut self, min: Position, max: Position, shape: TileShape) -> Result<(), WorldError> {
        let lo = min.min(max);
        let hi = min.max(max);
        for pos in [lo, hi] {
            if !self.is_valid_tile(pos) {
                return Err(WorldError::OutOfBounds(pos));
            }
        }
        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    self.tiles.insert(IVec3::new(x, y, z), shape);
                }
            }
        }
        Ok(())
    }

    /// Place a structure. Every footprint tile must be inside the world and
    /// not already covered. Returns the structure's index.
    pub fn add_structure(&mut self, mut structure: Structure) -> Result<usize, WorldError> {
        let fp = structure.footprint;
        structure.footprint = Footprint::new(fp.x1, fp.y1, fp.x2, fp.y2);
        let z = structure.z;
        for (x, y) in structure.footprint.tiles() {
            let pos = IVec3::new(x, y, z);
            if !self.is_valid_tile(pos) {
                return Err(WorldError::OutOfBounds(pos));
            }
            if self.occupancy.contains_key(&pos) {
                return Err(WorldError::Overlap(pos));
            }
        }

        let index = self.structures.len();
        for (x, y) in structure.footprint.tiles() {
            self.occupancy.insert(IVec3::new(x, y, z), index);
        }
        self.structures.push(structure);
        Ok(index)
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Number of tiles with an explicit shape.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

impl WorldQuery for TileMap {
    fn tile_shape_at(&self, pos: Position) -> Option<TileShape> {
        self.tiles.get(&pos).copied()
    }

    fn structure_at(&self, pos: Position) -> Option<&Structure> {
        let index = *self.occupancy.get(&pos)?;
        self.structures.get(index)
    }

    fn bounds(&self) -> IVec3 {
        self.bounds
    }

    fn cursor(&self) -> Option<Position> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::structure::{StructureKind, WorkshopType};

    fn small_map() -> TileMap {
        TileMap::new(IVec3::new(8, 8, 4)).expect("valid bounds")
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = TileMap::new(IVec3::new(8, 0, 4));
        assert!(matches!(result, Err(WorldError::InvalidBounds(_))));
    }

    #[test]
    fn test_tile_lookup() {
        let mut map = small_map();
        map.set_tile(IVec3::new(1, 2, 3), TileShape::Ramp)
            .expect("in bounds");
        assert_eq!(map.tile_shape_at(IVec3::new(1, 2, 3)), Some(TileShape::Ramp));
        assert_eq!(map.tile_shape_at(IVec3::new(0, 0, 0)), None);
    }

    #[test]
    fn test_fill_box() {
        let mut map = small_map();
        map.fill(IVec3::new(2, 2, 1), IVec3::new(0, 0, 0), TileShape::Floor)
            .expect("in bounds");
        assert_eq!(map.tile_count(), 18);
        assert_eq!(map.tile_shape_at(IVec3::new(2, 2, 1)), Some(TileShape::Floor));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut map = small_map();
        let result = map.set_tile(IVec3::new(8, 0, 0), TileShape::Floor);
        assert!(matches!(result, Err(WorldError::OutOfBounds(_))));
        assert!(!map.is_valid_tile(IVec3::new(-1, 0, 0)));
        assert!(map.is_valid_tile(IVec3::new(7, 7, 3)));
    }

    #[test]
    fn test_structure_covers_footprint() {
        let mut map = small_map();
        let ws = Structure::new(
            StructureKind::Workshop(WorkshopType::Masons),
            Footprint::new(1, 1, 3, 3),
            0,
        );
        map.add_structure(ws).expect("fits");

        for (x, y) in Footprint::new(1, 1, 3, 3).tiles() {
            let found = map.structure_at(IVec3::new(x, y, 0));
            assert!(found.is_some(), "({x},{y}) should be covered");
        }
        assert!(map.structure_at(IVec3::new(0, 0, 0)).is_none());
        assert!(map.structure_at(IVec3::new(2, 2, 1)).is_none());
    }

    #[test]
    fn test_overlapping_structures_rejected() {
        let mut map = small_map();
        map.add_structure(Structure::new(
            StructureKind::FarmPlot,
            Footprint::new(0, 0, 2, 2),
            0,
        ))
        .expect("fits");
        let result = map.add_structure(Structure::new(
            StructureKind::Bed,
            Footprint::single(2, 2),
            0,
        ));
        assert!(matches!(result, Err(WorldError::Overlap(_))));
        assert_eq!(map.structures().len(), 1);
    }

    #[test]
    fn test_structure_outside_world_rejected() {
        let mut map = small_map();
        let result = map.add_structure(Structure::new(
            StructureKind::FarmPlot,
            Footprint::new(6, 6, 9, 9),
            0,
        ));
        assert!(matches!(result, Err(WorldError::OutOfBounds(_))));
        assert!(map.structure_at(IVec3::new(6, 6, 0)).is_none());
    }
}
