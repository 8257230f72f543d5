//! The destination for compositing: a multi-layer sparse tile grid.

use hashbrown::HashMap;

use crate::Tile;
use crate::math::{GridAab, GridPoint, GridVector};

/// One layer of a [`TileGrid`]: a sparse, unbounded plane of tiles.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TileLayer {
    cells: HashMap<GridPoint, Tile>,
}

impl TileLayer {
    /// The tile at `cell`, or [`None`] if empty.
    pub fn get(&self, cell: GridPoint) -> Option<Tile> {
        self.cells.get(&cell).copied()
    }

    /// Writes a tile, replacing whatever was at `cell`.
    pub fn set(&mut self, cell: GridPoint, tile: Tile) {
        self.cells.insert(cell, tile);
    }

    /// Sets `cell` back to empty.
    pub fn clear_cell(&mut self, cell: GridPoint) {
        self.cells.remove(&cell);
    }

    /// Returns whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over occupied cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, Tile)> + '_ {
        self.cells.iter().map(|(&cell, &tile)| (cell, tile))
    }
}

/// An indexed stack of [`TileLayer`]s: the whole level's tile content, shared
/// across every generated room.
///
/// The layer count is fixed at construction and must match the layer count of
/// every template composited in. The `origin` is a cosmetic container offset the
/// host applies when displaying the grid; the optional centering step is its only
/// writer within this crate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TileGrid {
    layers: Vec<TileLayer>,
    origin: GridVector,
}

impl TileGrid {
    /// Constructs an empty grid with the given number of layers.
    pub fn new(layer_count: usize) -> Self {
        Self {
            layers: vec![TileLayer::default(); layer_count],
            origin: GridVector::zero(),
        }
    }

    /// Number of layers; fixed for the lifetime of the grid.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Borrows one layer.
    ///
    /// Panics if `layer` is out of range.
    pub fn layer(&self, layer: usize) -> &TileLayer {
        &self.layers[layer]
    }

    /// The tile at `cell` on `layer`, or [`None`] if empty.
    ///
    /// Panics if `layer` is out of range.
    pub fn get(&self, layer: usize, cell: GridPoint) -> Option<Tile> {
        self.layers[layer].get(cell)
    }

    /// Writes a tile, replacing whatever was at `cell` on `layer`.
    ///
    /// Panics if `layer` is out of range.
    pub fn set(&mut self, layer: usize, cell: GridPoint, tile: Tile) {
        self.layers[layer].set(cell, tile);
    }

    /// Sets `cell` back to empty on `layer`.
    ///
    /// Panics if `layer` is out of range.
    pub fn clear_cell(&mut self, layer: usize, cell: GridPoint) {
        self.layers[layer].clear_cell(cell);
    }

    /// Sets `cell` back to empty on every layer.
    pub fn clear_all_layers(&mut self, cell: GridPoint) {
        for layer in &mut self.layers {
            layer.clear_cell(cell);
        }
    }

    /// Returns whether every layer is entirely empty.
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(TileLayer::is_empty)
    }

    /// The bounding rectangle of all occupied cells across all layers, or
    /// [`None`] if the grid is empty.
    pub fn occupied_bounds(&self) -> Option<GridAab> {
        self.layers
            .iter()
            .flat_map(|layer| layer.iter().map(|(cell, _)| GridAab::single_cell(cell)))
            .reduce(GridAab::union_box)
    }

    /// The container offset; purely cosmetic, see the type documentation.
    pub fn origin(&self) -> GridVector {
        self.origin
    }

    /// Replaces the container offset.
    pub fn set_origin(&mut self, origin: GridVector) {
        self.origin = origin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: u32) -> Tile {
        Tile::new(id).unwrap()
    }

    #[test]
    fn set_get_clear() {
        let mut grid = TileGrid::new(2);
        let cell = GridPoint::new(3, -4);
        grid.set(1, cell, tile(5));
        assert_eq!(grid.get(1, cell), Some(tile(5)));
        assert_eq!(grid.get(0, cell), None);
        assert_eq!(
            grid.layer(1).iter().collect::<Vec<_>>(),
            vec![(cell, tile(5))]
        );
        grid.clear_all_layers(cell);
        assert!(grid.is_empty());
    }

    #[test]
    fn occupied_bounds_spans_layers() {
        let mut grid = TileGrid::new(2);
        assert_eq!(grid.occupied_bounds(), None);
        grid.set(0, GridPoint::new(-1, 0), tile(1));
        grid.set(1, GridPoint::new(4, 7), tile(2));
        assert_eq!(
            grid.occupied_bounds(),
            Some(GridAab::from_lower_upper([-1, 0], [5, 8]))
        );
    }
}
