use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One classification pass over the scanned volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phase {
    /// Excavation: terrain shape only.
    Dig = 0,
    /// Buildings and constructions.
    Build = 1,
    /// Stockpiles.
    Place = 2,
    /// Room flags.
    Query = 3,
}

/// All phases in the order they are scanned and written.
pub const ALL_PHASES: [Phase; 4] = [Phase::Dig, Phase::Build, Phase::Place, Phase::Query];

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Dig => "dig",
            Phase::Build => "build",
            Phase::Place => "place",
            Phase::Query => "query",
        }
    }

    /// Whether classifying this phase needs the structure at the tile.
    pub fn needs_structure(self) -> bool {
        !matches!(self, Phase::Dig)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PHASES
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown phase '{s}'"))
    }
}

/// Which phases a run produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhaseSelection {
    /// Every applicable phase.
    #[default]
    Auto,
    Explicit(Vec<Phase>),
}

impl PhaseSelection {
    /// Selected phases in scan order, without duplicates.
    pub fn active(&self) -> Vec<Phase> {
        match self {
            PhaseSelection::Auto => ALL_PHASES.to_vec(),
            PhaseSelection::Explicit(phases) => ALL_PHASES
                .iter()
                .copied()
                .filter(|p| phases.contains(p))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names_roundtrip() {
        for phase in ALL_PHASES {
            assert_eq!(phase.name().parse::<Phase>(), Ok(phase));
        }
        assert!("carve".parse::<Phase>().is_err());
    }

    #[test]
    fn test_only_dig_skips_structure_lookup() {
        assert!(!Phase::Dig.needs_structure());
        assert!(Phase::Build.needs_structure());
        assert!(Phase::Place.needs_structure());
        assert!(Phase::Query.needs_structure());
    }

    #[test]
    fn test_explicit_selection_is_ordered_and_deduplicated() {
        let sel = PhaseSelection::Explicit(vec![Phase::Query, Phase::Dig, Phase::Query]);
        assert_eq!(sel.active(), vec![Phase::Dig, Phase::Query]);
    }

    #[test]
    fn test_auto_selects_all() {
        assert_eq!(PhaseSelection::Auto.active(), ALL_PHASES.to_vec());
    }

    #[test]
    fn test_empty_selection() {
        assert!(PhaseSelection::Explicit(Vec::new()).active().is_empty());
    }
}
