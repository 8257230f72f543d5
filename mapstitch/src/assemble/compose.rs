//! Compositing placed templates into the destination grid.

use crate::assemble::{GenError, InvariantViolation, PlacedLevel, PlacedRoom};
use crate::grid::TileGrid;

/// Writes every placement's tile content into `grid`.
///
/// Records are processed in two passes: first every non-corridor room, then every
/// corridor, each pass preserving the records' relative order. Corridors are
/// authored to join onto room openings, so they are drawn after rooms and their
/// tiles are the ones visible wherever the two overlap; later writes win.
///
/// Each record's clear-and-write completes before the next record begins, which
/// together with the fixed pass order makes the result deterministic: compositing
/// the same records into the same starting grid always yields the same grid.
///
/// Before a record's tiles are written, its entire footprint (the union of
/// occupied cells across *all* of its template's layers) is cleared on *every*
/// destination layer, even layers where this template has nothing at that cell.
/// This keeps a room's footprint exclusively its own: no stale tile from an
/// earlier overlapping placement can bleed through on a layer the template leaves
/// empty there. Callers combining templates with partially-empty layers should
/// note that this can erase earlier content whose footprints coincide in grid
/// coordinates.
pub fn composite(level: &PlacedLevel, grid: &mut TileGrid) -> Result<(), GenError> {
    for room in level.rooms.iter().filter(|room| !room.corridor) {
        composite_room(room, grid)?;
    }
    for room in level.rooms.iter().filter(|room| room.corridor) {
        composite_room(room, grid)?;
    }
    Ok(())
}

fn composite_room(room: &PlacedRoom, grid: &mut TileGrid) -> Result<(), GenError> {
    let template = &room.template;
    if template.layer_count() != grid.layer_count() {
        return Err(InvariantViolation::LayerCountMismatch {
            node: room.node,
            expected: grid.layer_count(),
            actual: template.layer_count(),
        }
        .into());
    }
    let offset = room.position.to_vector();

    // Clear phase: scrub the full footprint on every destination layer.
    for cell in template.footprint() {
        grid.clear_all_layers(cell + offset);
    }

    // Write phase: per layer, copy the occupied cells.
    for (index, layer) in template.layers.iter().enumerate() {
        for (cell, tile) in layer.iter_tiles() {
            grid.set(index, cell + offset, tile);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile;
    use crate::graph::RoomId;
    use crate::math::{GridAab, GridPoint};
    use crate::template::{TemplateLayer, TileTemplate};
    use crate::testing::filled_template;
    use pretty_assertions::assert_eq;

    fn tile(id: u32) -> Tile {
        Tile::new(id).unwrap()
    }

    fn record(node: u32, position: (i32, i32), template: TileTemplate, corridor: bool) -> PlacedRoom {
        PlacedRoom {
            node: RoomId(node),
            position: GridPoint::new(position.0, position.1),
            template,
            corridor,
            doors: vec![],
            layout_index: node as usize,
        }
    }

    fn square(size: i32) -> GridAab {
        GridAab::from_lower_size([0, 0], [size as u32, size as u32])
    }

    #[test]
    fn layer_count_mismatch_is_fatal() {
        let level = PlacedLevel {
            rooms: vec![record(0, (0, 0), filled_template(square(2), tile(1), 2), false)],
        };
        let mut grid = TileGrid::new(1);
        let result = composite(&level, &mut grid);
        assert!(
            matches!(
                result,
                Err(GenError::Invariant(InvariantViolation::LayerCountMismatch {
                    node: RoomId(0),
                    expected: 1,
                    actual: 2,
                }))
            ),
            "{result:?}"
        );
    }

    /// A record's full multi-layer footprint is scrubbed before writing: a stale
    /// tile under the footprint disappears even on a layer where the incoming
    /// template is empty at that cell.
    #[test]
    fn footprint_is_exclusive_across_layers() {
        // Layer 0 occupies (0,0); layer 1 occupies (1,0). Footprint: both cells.
        let template = TileTemplate::new(vec![
            TemplateLayer::from_fn(square(2), |cell| {
                (cell == GridPoint::new(0, 0)).then(|| tile(10))
            }),
            TemplateLayer::from_fn(square(2), |cell| {
                (cell == GridPoint::new(1, 0)).then(|| tile(11))
            }),
        ]);

        let mut grid = TileGrid::new(2);
        // Stale content on both layers, under and next to the footprint.
        grid.set(0, GridPoint::new(1, 0), tile(99)); // layer 0, where only layer 1 has content
        grid.set(1, GridPoint::new(0, 0), tile(99)); // layer 1, where only layer 0 has content
        grid.set(0, GridPoint::new(5, 5), tile(99)); // outside the footprint

        composite(
            &PlacedLevel {
                rooms: vec![record(0, (0, 0), template, false)],
            },
            &mut grid,
        )
        .unwrap();

        assert_eq!(grid.get(0, GridPoint::new(0, 0)), Some(tile(10)));
        assert_eq!(grid.get(1, GridPoint::new(1, 0)), Some(tile(11)));
        // The stale tiles under the footprint are gone, on both layers.
        assert_eq!(grid.get(0, GridPoint::new(1, 0)), None);
        assert_eq!(grid.get(1, GridPoint::new(0, 0)), None);
        // Content outside the footprint is untouched.
        assert_eq!(grid.get(0, GridPoint::new(5, 5)), Some(tile(99)));
    }

    /// Corridors are composited after rooms regardless of record order, so the
    /// corridor's tile is the one visible at an overlap.
    #[test]
    fn corridors_overwrite_rooms_at_overlaps() {
        let overlap = GridPoint::new(2, 0);
        let room = record(0, (0, 0), filled_template(square(3), tile(1), 1), false);
        let corridor = record(1, (2, 0), filled_template(square(1), tile(2), 1), true);

        for rooms in [
            vec![room.clone(), corridor.clone()],
            vec![corridor.clone(), room.clone()],
        ] {
            let mut grid = TileGrid::new(1);
            composite(&PlacedLevel { rooms }, &mut grid).unwrap();
            assert_eq!(grid.get(0, overlap), Some(tile(2)));
            // Non-overlapping room cells are intact.
            assert_eq!(grid.get(0, GridPoint::new(0, 0)), Some(tile(1)));
        }
    }

    /// Within a pass, later records win where footprints overlap, and the result
    /// is a pure function of the record sequence.
    #[test]
    fn deterministic_and_repeatable() {
        let level = PlacedLevel {
            rooms: vec![
                record(0, (0, 0), filled_template(square(3), tile(1), 1), false),
                record(1, (2, 0), filled_template(square(3), tile(2), 1), false),
            ],
        };

        let mut once = TileGrid::new(1);
        composite(&level, &mut once).unwrap();

        let mut twice = TileGrid::new(1);
        composite(&level, &mut twice).unwrap();
        assert_eq!(once, twice);

        // Re-running over the already-composited grid changes nothing: each
        // record clears its own footprint before writing.
        composite(&level, &mut twice).unwrap();
        assert_eq!(once, twice);

        // The overlap belongs to the later record.
        assert_eq!(once.get(0, GridPoint::new(2, 0)), Some(tile(2)));
    }
}
