pub mod error;
pub mod snapshot;
pub mod tile_map;

use blueprint_core::structure::Structure;
use blueprint_core::tile::TileShape;
use blueprint_core::types::Position;
use glam::IVec3;

pub use error::WorldError;
pub use snapshot::{load_world, load_world_from_str, WorldSnapshot};
pub use tile_map::TileMap;

/// Read-only view of a world that the scanner walks.
pub trait WorldQuery {
    /// Terrain shape at a tile, or `None` if the tile has no type.
    fn tile_shape_at(&self, pos: Position) -> Option<TileShape>;

    /// Structure covering a tile, if any.
    fn structure_at(&self, pos: Position) -> Option<&Structure>;

    /// Tile counts per axis (x, y, z).
    fn bounds(&self) -> IVec3;

    /// Cursor position, if one is set.
    fn cursor(&self) -> Option<Position>;

    fn is_valid_tile(&self, pos: Position) -> bool {
        let bounds = self.bounds();
        pos.x >= 0
            && pos.x < bounds.x
            && pos.y >= 0
            && pos.y < bounds.y
            && pos.z >= 0
            && pos.z < bounds.z
    }
}
