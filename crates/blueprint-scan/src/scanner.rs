use blueprint_core::params::OutputFormat;
use blueprint_core::phase::Phase;
use blueprint_core::types::Position;
use blueprint_core::volume::SparseVolume;
use blueprint_world::WorldQuery;

use crate::cache::TokenCache;
use crate::classify::classify_token;
use crate::context::TileContext;

/// Box of tiles to scan. `start` is inclusive, `end` exclusive on every
/// axis. `end.z` may lie below `start.z`, in which case layers are walked
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRegion {
    pub start: Position,
    pub end: Position,
}

impl ScanRegion {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Layers in walk order, nearest to `start` first.
    pub fn layers(&self) -> impl Iterator<Item = i32> {
        let (start, end) = (self.start.z, self.end.z);
        let step = if end >= start { 1 } else { -1 };
        let count = (end - start).unsigned_abs();
        (0..count as i32).map(move |i| start + i * step)
    }

    /// Row and column offsets plus the layer offset of a tile in the region.
    fn offsets(&self, pos: Position) -> (u32, u32, u32) {
        (
            (pos.z - self.start.z).unsigned_abs(),
            (pos.y - self.start.y) as u32,
            (pos.x - self.start.x) as u32,
        )
    }
}

/// What one phase recorded over a region.
#[derive(Debug)]
pub struct PhaseScan {
    pub phase: Phase,
    pub volume: SparseVolume,
}

/// Classify every tile of `region` for each of `phases`.
///
/// Tiles are visited layer by layer, rows then columns ascending. The
/// structure under a tile is looked up once and shared by every phase that
/// needs it. Results come back in the order of `phases`.
pub fn scan<W: WorldQuery + ?Sized>(
    world: &W,
    region: &ScanRegion,
    phases: &[Phase],
    format: OutputFormat,
    cache: &mut TokenCache,
) -> Vec<PhaseScan> {
    let mut scans: Vec<PhaseScan> = phases
        .iter()
        .map(|&phase| PhaseScan {
            phase,
            volume: SparseVolume::new(),
        })
        .collect();
    let needs_structure = phases.iter().any(|p| p.needs_structure());

    for z in region.layers() {
        for y in region.start.y..region.end.y {
            for x in region.start.x..region.end.x {
                let pos = Position::new(x, y, z);
                let mut ctx = TileContext::new(pos, format);
                if needs_structure {
                    ctx.ensure_structure(world);
                }
                let (layer, row, col) = region.offsets(pos);
                for scan in &mut scans {
                    let token = classify_token(scan.phase, world, &ctx, cache);
                    scan.volume.record(layer, row, col, token);
                }
            }
        }
    }

    for scan in &scans {
        log::debug!("{}: {} tiles recorded", scan.phase, scan.volume.len());
    }
    scans
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::structure::{Footprint, Structure, StructureKind, WorkshopType};
    use blueprint_core::tile::TileShape;
    use blueprint_world::TileMap;
    use glam::IVec3;

    fn masons_world() -> TileMap {
        let mut map = TileMap::new(IVec3::new(6, 6, 2)).expect("bounds");
        map.fill(IVec3::new(0, 0, 0), IVec3::new(5, 5, 0), TileShape::Floor)
            .expect("fill");
        map.add_structure(
            Structure::new(
                StructureKind::Workshop(WorkshopType::Masons),
                Footprint::new(1, 1, 3, 3),
                0,
            )
            .with_room(true),
        )
        .expect("fits");
        map
    }

    #[test]
    fn test_layers_walk_both_directions() {
        let up = ScanRegion::new(IVec3::new(0, 0, 3), IVec3::new(1, 1, 6));
        assert_eq!(up.layers().collect::<Vec<_>>(), vec![3, 4, 5]);

        let down = ScanRegion::new(IVec3::new(0, 0, 2), IVec3::new(1, 1, -1));
        assert_eq!(down.layers().collect::<Vec<_>>(), vec![2, 1, 0]);

        let none = ScanRegion::new(IVec3::new(0, 0, 2), IVec3::new(1, 1, 2));
        assert_eq!(none.layers().count(), 0);
    }

    #[test]
    fn test_offsets_relative_to_start() {
        let region = ScanRegion::new(IVec3::new(2, 3, 5), IVec3::new(6, 6, 1));
        assert_eq!(region.offsets(IVec3::new(4, 3, 2)), (3, 0, 2));
    }

    #[test]
    fn test_scan_phases_independently() {
        let map = masons_world();
        let region = ScanRegion::new(IVec3::new(1, 1, 0), IVec3::new(4, 4, 1));
        let mut cache = TokenCache::new();
        let scans = scan(
            &map,
            &region,
            &[Phase::Dig, Phase::Build, Phase::Query],
            OutputFormat::Minimal,
            &mut cache,
        );
        assert_eq!(scans.len(), 3);

        let dig = &scans[0].volume;
        assert_eq!(dig.len(), 9);
        assert_eq!(dig.get(0, 2, 2).map(|t| &**t), Some("d"));

        let build = &scans[1].volume;
        assert_eq!(build.len(), 9);
        assert_eq!(build.get(0, 1, 1).map(|t| &**t), Some("wm"));
        assert_eq!(build.get(0, 0, 0).map(|t| &**t), Some("`"));

        let query = &scans[2].volume;
        assert_eq!(query.len(), 9);
        assert_eq!(query.get(0, 0, 0).map(|t| &**t), Some("r+"));
    }

    #[test]
    fn test_tokens_interned_across_phases() {
        let map = masons_world();
        let region = ScanRegion::new(IVec3::new(0, 0, 0), IVec3::new(6, 6, 1));
        let mut cache = TokenCache::new();
        let scans = scan(&map, &region, &[Phase::Dig], OutputFormat::Pretty, &mut cache);
        let vol = &scans[0].volume;
        let a = vol.get(0, 0, 0).expect("floor dug");
        let b = vol.get(0, 5, 5).expect("floor dug");
        assert!(std::rc::Rc::ptr_eq(a, b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_descending_scan_layers() {
        let mut map = TileMap::new(IVec3::new(2, 2, 3)).expect("bounds");
        map.set_tile(IVec3::new(0, 0, 2), TileShape::StairDown)
            .expect("in bounds");
        map.set_tile(IVec3::new(0, 0, 0), TileShape::StairUp)
            .expect("in bounds");
        let region = ScanRegion::new(IVec3::new(0, 0, 2), IVec3::new(2, 2, -1));
        let mut cache = TokenCache::new();
        let scans = scan(&map, &region, &[Phase::Dig], OutputFormat::Minimal, &mut cache);
        let vol = &scans[0].volume;
        assert_eq!(vol.get(0, 0, 0).map(|t| &**t), Some("j"));
        assert_eq!(vol.get(2, 0, 0).map(|t| &**t), Some("u"));
    }

    #[test]
    fn test_empty_phase_list() {
        let map = masons_world();
        let region = ScanRegion::new(IVec3::ZERO, IVec3::new(6, 6, 1));
        let mut cache = TokenCache::new();
        assert!(scan(&map, &region, &[], OutputFormat::Minimal, &mut cache).is_empty());
        assert!(cache.is_empty());
    }
}
