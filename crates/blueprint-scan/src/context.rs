use blueprint_core::params::OutputFormat;
use blueprint_core::structure::Structure;
use blueprint_core::types::Position;
use blueprint_world::WorldQuery;

/// Per-tile state shared by every phase classifying that tile.
///
/// The structure lookup happens at most once per tile, the first time a phase
/// asks for it.
#[derive(Debug, Clone, Copy)]
pub struct TileContext<'w> {
    pub pos: Position,
    pub format: OutputFormat,
    structure: Option<Option<&'w Structure>>,
}

impl<'w> TileContext<'w> {
    pub fn new(pos: Position, format: OutputFormat) -> Self {
        Self {
            pos,
            format,
            structure: None,
        }
    }

    /// Resolve the structure at this tile unless already resolved.
    pub fn ensure_structure<W: WorldQuery + ?Sized>(&mut self, world: &'w W) {
        if self.structure.is_none() {
            self.structure = Some(world.structure_at(self.pos));
        }
    }

    /// The structure covering this tile. `None` both when there is none and
    /// when it has not been resolved yet.
    pub fn structure(&self) -> Option<&'w Structure> {
        self.structure.flatten()
    }

    pub fn is_resolved(&self) -> bool {
        self.structure.is_some()
    }

    /// Token for non-anchor tiles of a multi-tile structure.
    pub fn placeholder(&self) -> &'static str {
        self.format.placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::structure::{Footprint, StructureKind};
    use blueprint_world::TileMap;
    use glam::IVec3;

    #[test]
    fn test_structure_resolved_lazily_once() {
        let mut map = TileMap::new(IVec3::new(4, 4, 1)).expect("bounds");
        map.add_structure(Structure::new(StructureKind::Bed, Footprint::single(1, 1), 0))
            .expect("fits");

        let mut ctx = TileContext::new(IVec3::new(1, 1, 0), OutputFormat::Minimal);
        assert!(!ctx.is_resolved());
        assert!(ctx.structure().is_none());

        ctx.ensure_structure(&map);
        assert!(ctx.is_resolved());
        assert_eq!(ctx.structure().map(|s| &s.kind), Some(&StructureKind::Bed));
    }

    #[test]
    fn test_empty_tile_resolves_to_none() {
        let map = TileMap::new(IVec3::new(4, 4, 1)).expect("bounds");
        let mut ctx = TileContext::new(IVec3::new(2, 2, 0), OutputFormat::Pretty);
        ctx.ensure_structure(&map);
        assert!(ctx.is_resolved());
        assert!(ctx.structure().is_none());
        assert_eq!(ctx.placeholder(), "");
    }
}
