//! Procedural assembly of tile-based dungeon levels from abstract
//! room-connectivity graphs.
//!
//! Given a [`graph::LevelGraph`] describing rooms and the corridors between them, a
//! [`layout::LayoutGenerator`] implementing the actual constraint search (external to
//! this crate), and a [`template::TemplateProvider`] mapping each room shape to its
//! pre-authored tile content, [`assemble::assemble_level()`]:
//!
//! 1. acquires a spatial layout from the search within a wall-clock budget,
//! 2. normalizes each room into a concrete placement (position, orientation, doors),
//! 3. composites every room's tile content into a shared multi-layer [`grid::TileGrid`].
//!
//! The search algorithm itself, template authoring tools, and rendering are all
//! outside this crate; see the [`layout`] module for the contract the search must
//! satisfy.

// re-export of the foundation crate's module
pub use mapstitch_base::math;

pub mod assemble;
pub mod graph;
pub mod grid;
pub mod layout;
pub mod template;
pub mod testing;

mod tile;
pub use tile::Tile;
