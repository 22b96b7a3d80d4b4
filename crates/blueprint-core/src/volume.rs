use std::collections::BTreeMap;

use crate::types::Token;

/// Recorded tokens of one row, keyed by column offset.
pub type Row = BTreeMap<u32, Token>;

/// Recorded rows of one layer, keyed by row offset.
pub type Layer = BTreeMap<u32, Row>;

/// Sparse layer -> row -> column map of the tokens one phase produced.
///
/// Offsets are relative to the scan's start corner. The layer offset is the
/// absolute distance from the start layer, so iteration always runs from the
/// start layer outward whichever way the scan moved. A key exists at any
/// level only if some tile below it recorded a token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVolume {
    layers: BTreeMap<u32, Layer>,
    tiles: usize,
}

impl SparseVolume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tile's token. `None` leaves the volume untouched.
    pub fn record(&mut self, layer: u32, row: u32, col: u32, token: Option<Token>) {
        let Some(token) = token else {
            return;
        };
        let previous = self
            .layers
            .entry(layer)
            .or_default()
            .entry(row)
            .or_default()
            .insert(col, token);
        if previous.is_none() {
            self.tiles += 1;
        }
    }

    pub fn get(&self, layer: u32, row: u32, col: u32) -> Option<&Token> {
        self.layers.get(&layer)?.get(&row)?.get(&col)
    }

    pub fn layer(&self, layer: u32) -> Option<&Layer> {
        self.layers.get(&layer)
    }

    /// Layers in ascending offset order.
    pub fn layers(&self) -> impl Iterator<Item = (u32, &Layer)> {
        self.layers.iter().map(|(k, v)| (*k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of recorded tiles.
    pub fn len(&self) -> usize {
        self.tiles
    }
}
