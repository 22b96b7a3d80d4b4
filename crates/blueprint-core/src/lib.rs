pub mod constants;
pub mod direction;
pub mod error;
pub mod params;
pub mod phase;
pub mod structure;
pub mod tile;
pub mod types;
pub mod volume;

pub use error::BlueprintError;
pub use params::{OutputFormat, RunParams, SplitStrategy};
pub use phase::{Phase, PhaseSelection};
pub use structure::{Footprint, Structure, StructureKind};
pub use tile::TileShape;
pub use types::{Position, Token};
pub use volume::SparseVolume;
