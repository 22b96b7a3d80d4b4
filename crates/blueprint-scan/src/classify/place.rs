use std::borrow::Cow;

use blueprint_core::constants::{AMBIGUOUS_STOCKPILE, UNSUPPORTED};
use blueprint_core::structure::{StockpileCategories, StockpileCategory, StructureKind};

use super::Keys;
use crate::context::TileContext;

/// Stockpile designation keys for a tile of the place phase.
///
/// The north-west corner carries the category letter and the pile size;
/// the rest of the footprint is filled with the continuation placeholder.
pub fn place_keys(ctx: &TileContext<'_>) -> Option<Keys> {
    let structure = ctx.structure()?;
    let StructureKind::Stockpile(categories) = &structure.kind else {
        return None;
    };
    let fp = &structure.footprint;
    if !fp.is_north_west(ctx.pos) {
        return Some(Cow::Borrowed(ctx.placeholder()));
    }
    let keys = match stockpile_letter(*categories) {
        Ok(letter) => format!("{letter}({}x{})", fp.width(), fp.height()),
        Err(token) => token.to_string(),
    };
    Some(Cow::Owned(keys))
}

/// The one-letter designation for a single-category pile, or the token that
/// stands in for piles no single letter describes.
fn stockpile_letter(categories: StockpileCategories) -> Result<char, &'static str> {
    if categories.count() > 1 {
        return Err(AMBIGUOUS_STOCKPILE);
    }
    categories
        .single()
        .and_then(category_letter)
        .ok_or(UNSUPPORTED)
}

fn category_letter(category: StockpileCategory) -> Option<char> {
    let letter = match category {
        StockpileCategory::Animals => 'a',
        StockpileCategory::Food => 'f',
        StockpileCategory::Furniture => 'u',
        StockpileCategory::Corpses => 'y',
        StockpileCategory::Refuse => 'r',
        StockpileCategory::Wood => 'w',
        StockpileCategory::Stone => 's',
        StockpileCategory::Gems => 'e',
        StockpileCategory::BarsBlocks => 'b',
        StockpileCategory::Cloth => 'h',
        StockpileCategory::Leather => 'l',
        StockpileCategory::Ammo => 'z',
        StockpileCategory::Coins => 'n',
        StockpileCategory::FinishedGoods => 'g',
        StockpileCategory::Weapons => 'p',
        StockpileCategory::Armor => 'd',
        StockpileCategory::Sheet => return None,
    };
    Some(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::params::OutputFormat;
    use blueprint_core::structure::{Footprint, Structure, ALL_STOCKPILE_CATEGORIES};
    use blueprint_world::TileMap;
    use glam::IVec3;

    fn pile_world(categories: &[StockpileCategory], fp: Footprint) -> TileMap {
        let mut map = TileMap::new(IVec3::new(10, 10, 1)).expect("bounds");
        let kind = StructureKind::Stockpile(StockpileCategories::from_categories(categories));
        map.add_structure(Structure::new(kind, fp, 0)).expect("fits");
        map
    }

    fn keys_at(map: &TileMap, x: i32, y: i32, format: OutputFormat) -> Option<String> {
        let mut ctx = TileContext::new(IVec3::new(x, y, 0), format);
        ctx.ensure_structure(map);
        place_keys(&ctx).map(Cow::into_owned)
    }

    #[test]
    fn test_single_category_anchor() {
        let map = pile_world(&[StockpileCategory::Stone], Footprint::new(1, 1, 3, 2));
        assert_eq!(
            keys_at(&map, 1, 1, OutputFormat::Minimal).as_deref(),
            Some("s(3x2)")
        );
        assert_eq!(keys_at(&map, 2, 2, OutputFormat::Minimal).as_deref(), Some("`"));
        assert_eq!(keys_at(&map, 3, 1, OutputFormat::Pretty).as_deref(), Some(""));
        assert_eq!(keys_at(&map, 0, 0, OutputFormat::Minimal), None);
    }

    #[test]
    fn test_multi_category_is_ambiguous() {
        let map = pile_world(
            &[StockpileCategory::Wood, StockpileCategory::Stone],
            Footprint::new(0, 0, 1, 1),
        );
        assert_eq!(
            keys_at(&map, 0, 0, OutputFormat::Minimal).as_deref(),
            Some(AMBIGUOUS_STOCKPILE)
        );
        assert_eq!(keys_at(&map, 1, 1, OutputFormat::Minimal).as_deref(), Some("`"));
    }

    #[test]
    fn test_letterless_piles_unsupported() {
        let sheet = pile_world(&[StockpileCategory::Sheet], Footprint::single(0, 0));
        assert_eq!(
            keys_at(&sheet, 0, 0, OutputFormat::Minimal).as_deref(),
            Some(UNSUPPORTED)
        );
        let none = pile_world(&[], Footprint::single(0, 0));
        assert_eq!(
            keys_at(&none, 0, 0, OutputFormat::Minimal).as_deref(),
            Some(UNSUPPORTED)
        );
    }

    #[test]
    fn test_non_stockpile_ignored() {
        let mut map = TileMap::new(IVec3::new(4, 4, 1)).expect("bounds");
        map.add_structure(Structure::new(StructureKind::Table, Footprint::single(0, 0), 0))
            .expect("fits");
        assert_eq!(keys_at(&map, 0, 0, OutputFormat::Minimal), None);
    }

    #[test]
    fn test_letters_are_unique() {
        let letters: Vec<char> = ALL_STOCKPILE_CATEGORIES
            .iter()
            .filter_map(|c| category_letter(*c))
            .collect();
        assert_eq!(letters.len(), 16);
        let mut deduped = letters.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), letters.len());
    }
}
