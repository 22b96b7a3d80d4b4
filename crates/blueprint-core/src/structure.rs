use serde::{Deserialize, Serialize};

use crate::direction::{BridgeDirection, FlowDirection, TrackDirections};
use crate::types::Position;

/// Rectangular tile area occupied by a structure, given by two opposite
/// corners (inclusive). `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Footprint {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Footprint of a single tile.
    pub fn single(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn width(&self) -> u32 {
        (self.x2 - self.x1 + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y2 - self.y1 + 1) as u32
    }

    /// Center tile, rounding toward the north-west corner on even sizes.
    pub fn center(&self) -> (i32, i32) {
        (
            (self.x1 + self.x2).div_euclid(2),
            (self.y1 + self.y2).div_euclid(2),
        )
    }

    pub fn is_north_west(&self, pos: Position) -> bool {
        pos.x == self.x1 && pos.y == self.y1
    }

    pub fn is_south_east(&self, pos: Position) -> bool {
        pos.x == self.x2 && pos.y == self.y2
    }

    pub fn is_center(&self, pos: Position) -> bool {
        (pos.x, pos.y) == self.center()
    }

    /// Iterator over every (x, y) in the footprint, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y1..=self.y2).flat_map(move |y| (self.x1..=self.x2).map(move |x| (x, y)))
    }
}

/// A building, construction, or zone occupying one or more tiles.
/// Read-only to the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub footprint: Footprint,
    /// Layer the structure sits on.
    pub z: i32,
    /// Whether the structure has been designated as a room.
    #[serde(default)]
    pub is_room: bool,
}

impl Structure {
    pub fn new(kind: StructureKind, footprint: Footprint, z: i32) -> Self {
        Self {
            kind,
            footprint,
            z,
            is_room: false,
        }
    }

    pub fn with_room(mut self, is_room: bool) -> Self {
        self.is_room = is_room;
        self
    }
}

/// Every structure kind the scanner knows, each carrying only the fields
/// its encoding needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructureKind {
    Armorstand,
    Bed,
    Chair,
    Coffin,
    Door,
    Floodgate,
    Cabinet,
    Box,
    Kennel,
    FarmPlot,
    Weaponrack,
    Statue,
    Table,
    RoadPaved,
    RoadDirt,
    Bridge(BridgeDirection),
    Well,
    SiegeEngine(SiegeEngineType),
    Workshop(WorkshopType),
    Furnace(FurnaceType),
    WindowGlass,
    WindowGem,
    Construction(ConstructionType),
    Shop,
    AnimalTrap,
    Chain,
    Cage,
    TradeDepot,
    Trap(TrapType),
    ScrewPump(FlowDirection),
    WaterWheel { vertical: bool },
    Windmill,
    GearAssembly,
    AxleHorizontal { vertical: bool },
    AxleVertical,
    Rollers(FlowDirection),
    Support,
    ArcheryTarget,
    TractionBench,
    Hatch,
    Slab,
    NestBox,
    Hive,
    GrateWall,
    GrateFloor,
    BarsVertical,
    BarsFloor,
    Stockpile(StockpileCategories),
    /// Any structure type the world reports that has no dedicated variant.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiegeEngineType {
    Catapult,
    Ballista,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkshopType {
    Carpenters,
    Farmers,
    Masons,
    Craftsdwarfs,
    Jewelers,
    MetalsmithsForge,
    MagmaForge,
    Bowyers,
    Mechanics,
    Siege,
    Butchers,
    Leatherworks,
    Tanners,
    Clothiers,
    Fishery,
    Still,
    Loom,
    Quern,
    Kennels,
    Kitchen,
    Ashery,
    Dyers,
    Millstone,
    Custom,
    Tool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnaceType {
    WoodFurnace,
    Smelter,
    GlassFurnace,
    Kiln,
    MagmaSmelter,
    MagmaGlassFurnace,
    MagmaKiln,
    Custom,
}

/// What a construction tile was built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionType {
    None,
    Fortification,
    Wall,
    Floor,
    UpStair,
    DownStair,
    UpDownStair,
    Ramp,
    Track(TrackDirections),
    TrackRamp(TrackDirections),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrapType {
    StoneFallTrap,
    WeaponTrap,
    Lever,
    PressurePlate,
    CageTrap,
    TrackStop(TrackStop),
    Other,
}

/// Minecart track stop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackStop {
    /// Dump target offset, if the stop dumps its cart contents.
    #[serde(default)]
    pub dump: Option<DumpShift>,
    pub friction: u32,
}

/// Offset of the tile a track stop dumps into, relative to the stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DumpShift {
    pub x: i32,
    pub y: i32,
}

/// One stockpile item group. The discriminant is the group's bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StockpileCategory {
    Animals = 0,
    Food = 1,
    Furniture = 2,
    Corpses = 3,
    Refuse = 4,
    Stone = 5,
    Ammo = 6,
    Coins = 7,
    BarsBlocks = 8,
    Gems = 9,
    FinishedGoods = 10,
    Leather = 11,
    Cloth = 12,
    Wood = 13,
    Weapons = 14,
    Armor = 15,
    Sheet = 16,
}

/// All stockpile groups, in bit order.
pub const ALL_STOCKPILE_CATEGORIES: [StockpileCategory; 17] = [
    StockpileCategory::Animals,
    StockpileCategory::Food,
    StockpileCategory::Furniture,
    StockpileCategory::Corpses,
    StockpileCategory::Refuse,
    StockpileCategory::Stone,
    StockpileCategory::Ammo,
    StockpileCategory::Coins,
    StockpileCategory::BarsBlocks,
    StockpileCategory::Gems,
    StockpileCategory::FinishedGoods,
    StockpileCategory::Leather,
    StockpileCategory::Cloth,
    StockpileCategory::Wood,
    StockpileCategory::Weapons,
    StockpileCategory::Armor,
    StockpileCategory::Sheet,
];

impl StockpileCategory {
    pub fn mask(self) -> u32 {
        1 << (self as u8)
    }
}

/// Bitmask of the item groups a stockpile accepts.
/// Stored in data files as a list of category names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<StockpileCategory>", into = "Vec<StockpileCategory>")]
pub struct StockpileCategories(pub u32);

impl StockpileCategories {
    pub fn from_categories(categories: &[StockpileCategory]) -> Self {
        Self(categories.iter().fold(0, |bits, c| bits | c.mask()))
    }

    pub fn contains(&self, category: StockpileCategory) -> bool {
        self.0 & category.mask() != 0
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// The only category in the set, if there is exactly one.
    pub fn single(&self) -> Option<StockpileCategory> {
        if self.count() != 1 {
            return None;
        }
        ALL_STOCKPILE_CATEGORIES
            .iter()
            .copied()
            .find(|c| self.contains(*c))
    }

    pub fn iter(&self) -> impl Iterator<Item = StockpileCategory> + '_ {
        ALL_STOCKPILE_CATEGORIES
            .iter()
            .copied()
            .filter(move |c| self.contains(*c))
    }
}

impl From<Vec<StockpileCategory>> for StockpileCategories {
    fn from(categories: Vec<StockpileCategory>) -> Self {
        Self::from_categories(&categories)
    }
}

impl From<StockpileCategories> for Vec<StockpileCategory> {
    fn from(set: StockpileCategories) -> Self {
        set.iter().collect()
    }
}
