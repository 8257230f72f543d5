//! Pre-authored room tile content: [`TileTemplate`] and [`TemplateProvider`].

use std::sync::Arc;

use hashbrown::{HashMap, HashSet};

use crate::Tile;
use crate::graph::RoomDescriptorId;
use crate::math::{GridAab, GridPoint, GridRotation};

/// One layer of a [`TileTemplate`]: a dense rectangle of optional tiles in the
/// template's local coordinate space.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TemplateLayer {
    bounds: GridAab,
    /// Cells in the order produced by `bounds.interior_iter()`.
    cells: Box<[Option<Tile>]>,
}

impl TemplateLayer {
    /// Constructs a layer by evaluating `function` at every cell of `bounds`.
    pub fn from_fn(bounds: GridAab, mut function: impl FnMut(GridPoint) -> Option<Tile>) -> Self {
        Self {
            bounds,
            cells: bounds.interior_iter().map(&mut function).collect(),
        }
    }

    /// The rectangle of cells this layer covers (occupied or not).
    pub fn bounds(&self) -> GridAab {
        self.bounds
    }

    /// The tile at `cell`, or [`None`] if the cell is empty or outside the bounds.
    pub fn get(&self, cell: GridPoint) -> Option<Tile> {
        if !self.bounds.contains(cell) {
            return None;
        }
        let lower = self.bounds.lower_bounds();
        let width = self.bounds.size().width as usize;
        let index = (cell.y - lower.y) as usize * width + (cell.x - lower.x) as usize;
        self.cells[index]
    }

    /// Iterates over the cells holding tiles, in deterministic row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (GridPoint, Tile)> + '_ {
        self.bounds
            .interior_iter()
            .zip(self.cells.iter())
            .filter_map(|(cell, &tile)| tile.map(|tile| (cell, tile)))
    }

    /// Rotates or reflects the layer about the local origin.
    #[must_use]
    pub fn transform(&self, rotation: GridRotation) -> Self {
        let inverse = rotation.inverse();
        Self::from_fn(self.bounds.transform(rotation), |cell| {
            self.get(inverse.transform_point(cell))
        })
    }
}

/// Pre-authored local-space tile content for one room or corridor variant,
/// spanning one or more layers.
///
/// Layers are index-aligned with the destination
/// [`TileGrid`](crate::grid::TileGrid)'s layers; a template must have exactly as
/// many layers as the grid it is composited into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TileTemplate {
    /// Layers in render order.
    pub layers: Vec<TemplateLayer>,
    /// Authored door markers: directed local-space segments, carried through
    /// transformation for downstream tooling. Not consumed by compositing.
    pub door_markers: Vec<[GridPoint; 2]>,
}

impl TileTemplate {
    /// Constructs a template from its layers, with no door markers.
    pub fn new(layers: Vec<TemplateLayer>) -> Self {
        Self {
            layers,
            door_markers: Vec::new(),
        }
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The union of cells holding tiles across *all* layers: the template's
    /// footprint. A cell occupied on any one layer is part of the footprint on
    /// every layer.
    pub fn footprint(&self) -> HashSet<GridPoint> {
        let mut cells = HashSet::new();
        for layer in &self.layers {
            cells.extend(layer.iter_tiles().map(|(cell, _)| cell));
        }
        cells
    }

    /// Rotates or reflects every layer and door marker, consistently, about the
    /// local origin.
    #[must_use]
    pub fn transform(&self, rotation: GridRotation) -> Self {
        Self {
            layers: self
                .layers
                .iter()
                .map(|layer| layer.transform(rotation))
                .collect(),
            door_markers: self
                .door_markers
                .iter()
                .map(|&[a, b]| [rotation.transform_point(a), rotation.transform_point(b)])
                .collect(),
        }
    }
}

/// Maps each [`RoomDescriptorId`] to the single [`TileTemplate`] that realizes it.
///
/// Templates are shared: many descriptors may point at the same `Arc`, and one
/// descriptor is referenced by arbitrarily many graph nodes.
#[derive(Clone, Debug, Default)]
pub struct TemplateProvider {
    map: HashMap<RoomDescriptorId, Arc<TileTemplate>>,
}

impl TemplateProvider {
    /// Constructs a provider from `(descriptor, template)` pairs.
    pub fn new(
        entries: impl IntoIterator<Item = (RoomDescriptorId, Arc<TileTemplate>)>,
    ) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// Adds or replaces the template for one descriptor.
    pub fn insert(&mut self, descriptor: RoomDescriptorId, template: Arc<TileTemplate>) {
        self.map.insert(descriptor, template);
    }

    /// Looks up the template for a descriptor.
    pub fn get(&self, descriptor: RoomDescriptorId) -> Option<&Arc<TileTemplate>> {
        self.map.get(&descriptor)
    }
}
