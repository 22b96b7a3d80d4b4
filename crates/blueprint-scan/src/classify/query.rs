use blueprint_core::constants::ROOM_TOKEN;

use crate::context::TileContext;

/// Room marker for tiles whose structure is flagged as a room.
pub fn query_keys(ctx: &TileContext<'_>) -> Option<&'static str> {
    match ctx.structure() {
        Some(structure) if structure.is_room => Some(ROOM_TOKEN),
        _ => None,
    }
}
