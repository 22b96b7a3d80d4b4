use std::borrow::Cow;

use blueprint_core::constants::{DUMP_MARKER, FRICTION_LADDER, FRICTION_MARKER, UNSUPPORTED};
use blueprint_core::direction::{BridgeDirection, FlowDirection};
use blueprint_core::structure::{
    ConstructionType, FurnaceType, SiegeEngineType, Structure, StructureKind, TrackStop,
    TrapType, WorkshopType,
};

use super::Keys;
use crate::context::TileContext;

/// Which footprint tile of a multi-tile structure carries its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    NorthWest,
    Center,
    SouthEast,
}

/// Keys of a structure plus where they go.
struct BuildKeys {
    keys: Keys,
    /// `None` puts the keys on every footprint tile.
    anchor: Option<Anchor>,
    /// Append the footprint size, `(WxH)`, at the anchor.
    sized: bool,
}

impl BuildKeys {
    fn plain(keys: impl Into<Keys>) -> Self {
        Self {
            keys: keys.into(),
            anchor: None,
            sized: false,
        }
    }

    fn at(keys: impl Into<Keys>, anchor: Anchor) -> Self {
        Self {
            anchor: Some(anchor),
            ..Self::plain(keys)
        }
    }

    fn sized(keys: impl Into<Keys>) -> Self {
        Self {
            sized: true,
            ..Self::at(keys, Anchor::NorthWest)
        }
    }

    fn center(keys: impl Into<Keys>) -> Self {
        Self::at(keys, Anchor::Center)
    }
}

/// Construction keys for a tile of the build phase.
///
/// Stockpiles belong to the place phase and produce nothing here.
pub fn build_keys(ctx: &TileContext<'_>) -> Option<Keys> {
    let structure = ctx.structure()?;
    let BuildKeys { keys, anchor, sized } = structure_keys(structure)?;

    let Some(anchor) = anchor else {
        return Some(keys);
    };
    let fp = &structure.footprint;
    let is_anchor = match anchor {
        Anchor::NorthWest => fp.is_north_west(ctx.pos),
        Anchor::Center => fp.is_center(ctx.pos),
        Anchor::SouthEast => fp.is_south_east(ctx.pos),
    };
    if !is_anchor {
        return Some(Cow::Borrowed(ctx.placeholder()));
    }
    if sized {
        return Some(Cow::Owned(format!("{keys}({}x{})", fp.width(), fp.height())));
    }
    Some(keys)
}

fn structure_keys(structure: &Structure) -> Option<BuildKeys> {
    let keys = match &structure.kind {
        StructureKind::Armorstand => BuildKeys::plain("a"),
        StructureKind::Bed => BuildKeys::plain("b"),
        StructureKind::Chair => BuildKeys::plain("c"),
        StructureKind::Door => BuildKeys::plain("d"),
        StructureKind::Floodgate => BuildKeys::plain("x"),
        StructureKind::Cabinet => BuildKeys::plain("f"),
        StructureKind::Box => BuildKeys::plain("h"),
        StructureKind::FarmPlot => BuildKeys::sized("p"),
        StructureKind::Weaponrack => BuildKeys::plain("r"),
        StructureKind::Statue => BuildKeys::plain("s"),
        StructureKind::Table => BuildKeys::plain("t"),
        StructureKind::RoadPaved => BuildKeys::sized("o"),
        StructureKind::RoadDirt => BuildKeys::sized("O"),
        StructureKind::Bridge(dir) => BuildKeys::sized(bridge_keys(*dir)),
        StructureKind::Well => BuildKeys::plain("l"),
        StructureKind::SiegeEngine(engine) => BuildKeys::center(siege_keys(*engine)),
        StructureKind::Workshop(workshop) => BuildKeys::center(workshop_keys(*workshop)),
        StructureKind::Furnace(furnace) => BuildKeys::center(furnace_keys(*furnace)),
        StructureKind::WindowGlass => BuildKeys::plain("y"),
        StructureKind::WindowGem => BuildKeys::plain("Y"),
        StructureKind::Construction(kind) => BuildKeys::plain(construction_keys(*kind)),
        StructureKind::Shop => BuildKeys::center("z"),
        StructureKind::AnimalTrap => BuildKeys::plain("m"),
        StructureKind::Chain => BuildKeys::plain("v"),
        StructureKind::Cage => BuildKeys::plain("j"),
        StructureKind::TradeDepot => BuildKeys::center("D"),
        StructureKind::Trap(trap) => BuildKeys::plain(trap_keys(*trap)),
        StructureKind::ScrewPump(dir) => BuildKeys::at(screw_pump_keys(*dir), Anchor::SouthEast),
        StructureKind::WaterWheel { vertical } => {
            BuildKeys::center(if *vertical { "Mw" } else { "Mws" })
        }
        StructureKind::Windmill => BuildKeys::center("Mm"),
        StructureKind::GearAssembly => BuildKeys::plain("Mg"),
        StructureKind::AxleHorizontal { vertical } => {
            BuildKeys::sized(if *vertical { "Mhs" } else { "Mh" })
        }
        StructureKind::AxleVertical => BuildKeys::plain("Mv"),
        StructureKind::Rollers(dir) => BuildKeys::sized(roller_keys(*dir)),
        StructureKind::Support => BuildKeys::plain("S"),
        StructureKind::ArcheryTarget => BuildKeys::plain("A"),
        StructureKind::TractionBench => BuildKeys::plain("R"),
        StructureKind::Hatch => BuildKeys::plain("H"),
        StructureKind::NestBox => BuildKeys::plain("N"),
        StructureKind::GrateWall => BuildKeys::plain("W"),
        StructureKind::GrateFloor => BuildKeys::plain("G"),
        StructureKind::BarsVertical => BuildKeys::plain("B"),
        StructureKind::Coffin
        | StructureKind::Kennel
        | StructureKind::Slab
        | StructureKind::Hive
        | StructureKind::BarsFloor
        | StructureKind::Other(_) => BuildKeys::plain(UNSUPPORTED),
        StructureKind::Stockpile(_) => return None,
    };
    Some(keys)
}

fn bridge_keys(dir: BridgeDirection) -> &'static str {
    match dir {
        BridgeDirection::Retracting => "gs",
        BridgeDirection::Left => "ga",
        BridgeDirection::Right => "gd",
        BridgeDirection::Up => "gw",
        BridgeDirection::Down => "gx",
    }
}

fn siege_keys(engine: SiegeEngineType) -> &'static str {
    match engine {
        SiegeEngineType::Catapult => "ic",
        SiegeEngineType::Ballista => "ib",
    }
}

fn workshop_keys(workshop: WorkshopType) -> &'static str {
    match workshop {
        WorkshopType::Leatherworks => "we",
        WorkshopType::Quern => "wq",
        WorkshopType::Millstone => "wM",
        WorkshopType::Loom => "wo",
        WorkshopType::Clothiers => "wk",
        WorkshopType::Bowyers => "wb",
        WorkshopType::Carpenters => "wc",
        WorkshopType::MetalsmithsForge => "wf",
        WorkshopType::MagmaForge => "wv",
        WorkshopType::Jewelers => "wj",
        WorkshopType::Masons => "wm",
        WorkshopType::Butchers => "wu",
        WorkshopType::Tanners => "wn",
        WorkshopType::Craftsdwarfs => "wr",
        WorkshopType::Siege => "ws",
        WorkshopType::Mechanics => "wt",
        WorkshopType::Still => "wl",
        WorkshopType::Farmers => "ww",
        WorkshopType::Kitchen => "wz",
        WorkshopType::Fishery => "wh",
        WorkshopType::Ashery => "wy",
        WorkshopType::Dyers => "wd",
        WorkshopType::Kennels => "k",
        WorkshopType::Custom | WorkshopType::Tool => UNSUPPORTED,
    }
}

fn furnace_keys(furnace: FurnaceType) -> &'static str {
    match furnace {
        FurnaceType::WoodFurnace => "ew",
        FurnaceType::Smelter => "es",
        FurnaceType::GlassFurnace => "eg",
        FurnaceType::Kiln => "ek",
        FurnaceType::MagmaSmelter => "el",
        FurnaceType::MagmaGlassFurnace => "ea",
        FurnaceType::MagmaKiln => "en",
        FurnaceType::Custom => UNSUPPORTED,
    }
}

fn construction_keys(kind: ConstructionType) -> Keys {
    let keys = match kind {
        ConstructionType::Fortification => "CF",
        ConstructionType::Wall => "CW",
        ConstructionType::Floor => "Cf",
        ConstructionType::UpStair => "Cu",
        ConstructionType::DownStair => "Cj",
        ConstructionType::UpDownStair => "Cx",
        ConstructionType::Ramp => "Cr",
        ConstructionType::Track(dirs) if !dirs.is_empty() => {
            return Cow::Owned(format!("track{}", dirs.letters()));
        }
        ConstructionType::TrackRamp(dirs) if !dirs.is_empty() => {
            return Cow::Owned(format!("trackramp{}", dirs.letters()));
        }
        ConstructionType::Track(_) | ConstructionType::TrackRamp(_) | ConstructionType::None => {
            UNSUPPORTED
        }
    };
    Cow::Borrowed(keys)
}

fn trap_keys(trap: TrapType) -> Keys {
    let keys = match trap {
        TrapType::StoneFallTrap => "Ts",
        TrapType::WeaponTrap => "Tw",
        TrapType::Lever => "Tl",
        TrapType::PressurePlate => "Tp",
        TrapType::CageTrap => "Tc",
        TrapType::TrackStop(stop) => return Cow::Owned(track_stop_keys(stop)),
        TrapType::Other => UNSUPPORTED,
    };
    Cow::Borrowed(keys)
}

/// `CS`, then dump direction presses, then friction presses.
///
/// Friction is lowered one step per `a`, starting from the highest setting,
/// so a value matching ladder entry `i` takes one press for that entry and
/// one for each entry after it. Values off the ladder add nothing.
fn track_stop_keys(stop: TrackStop) -> String {
    let mut keys = String::from("CS");
    if let Some(shift) = stop.dump {
        let presses = match (shift.x == 0, shift.y > 0, shift.x < 0) {
            (true, true, _) => 2,
            (true, false, _) => 1,
            (false, _, true) => 4,
            (false, _, false) => 3,
        };
        keys.extend(std::iter::repeat(DUMP_MARKER).take(presses));
    }
    if let Some(index) = FRICTION_LADDER.iter().position(|&f| f == stop.friction) {
        let presses = FRICTION_LADDER.len() - index;
        keys.extend(std::iter::repeat(FRICTION_MARKER).take(presses));
    }
    keys
}

fn screw_pump_keys(dir: FlowDirection) -> &'static str {
    match dir {
        FlowDirection::FromNorth => "Msu",
        FlowDirection::FromEast => "Msk",
        FlowDirection::FromSouth => "Msm",
        FlowDirection::FromWest => "Msh",
    }
}

fn roller_keys(dir: FlowDirection) -> &'static str {
    match dir {
        FlowDirection::FromNorth => "Mr",
        FlowDirection::FromEast => "Mrs",
        FlowDirection::FromSouth => "Mrss",
        FlowDirection::FromWest => "Mrsss",
    }
}
