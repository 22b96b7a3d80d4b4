//! Per-tile classifiers, one per phase.
//!
//! Every classifier is total: it returns the keys for the tile or `None` when
//! the tile contributes nothing to that phase. Structures the replay tool
//! cannot express still produce a visible token rather than an error.

pub mod build;
pub mod dig;
pub mod place;
pub mod query;

use std::borrow::Cow;

use blueprint_core::phase::Phase;
use blueprint_core::types::Token;
use blueprint_world::WorldQuery;

use crate::cache::TokenCache;
use crate::context::TileContext;

/// Keystroke text for one tile, before interning.
pub type Keys = Cow<'static, str>;

/// Keys a tile produces for one phase.
///
/// Phases that look at structures expect `ctx` to have its structure
/// resolved already.
pub fn classify<W: WorldQuery + ?Sized>(
    phase: Phase,
    world: &W,
    ctx: &TileContext<'_>,
) -> Option<Keys> {
    debug_assert!(
        ctx.is_resolved() || !phase.needs_structure(),
        "{phase} classified before the structure lookup"
    );
    match phase {
        Phase::Dig => dig::dig_keys(world.tile_shape_at(ctx.pos)).map(Cow::Borrowed),
        Phase::Build => build::build_keys(ctx),
        Phase::Place => place::place_keys(ctx),
        Phase::Query => query::query_keys(ctx).map(Cow::Borrowed),
    }
}

/// Classify and intern in one step.
pub fn classify_token<W: WorldQuery + ?Sized>(
    phase: Phase,
    world: &W,
    ctx: &TileContext<'_>,
    cache: &mut TokenCache,
) -> Option<Token> {
    classify(phase, world, ctx).map(|keys| cache.intern(&keys))
}
