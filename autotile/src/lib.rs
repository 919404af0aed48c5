//! Auto-tiling for a grid of on/off cells.
//!
//! A [`Grid`] holds which cells are painted. For every active cell the tiler
//! packs its four orthogonal neighbors into a [`NeighborSignature`] and looks
//! up the matching tile on a 4x4 sprite sheet:
//!
//! ```
//! use autotile::{Grid, neighbor_signature, sprite_for, SpriteCoord};
//!
//! let mut grid = Grid::new(10, 5)?;
//! grid.toggle(0)?;
//! grid.toggle(1)?;
//!
//! let signature = neighbor_signature(&grid, 0)?;
//! assert_eq!(signature.bits(), 0b0100);
//! assert_eq!(sprite_for(signature), SpriteCoord::new(1, 0));
//! # Ok::<(), autotile::TileError>(())
//! ```

mod error;
mod grid;
mod tiler;

pub use error::TileError;
pub use grid::Grid;
pub use tiler::{
    NeighborSignature, SHEET_COLUMNS, SHEET_ROWS, SpriteCoord, neighbor_signature,
    signature_for_sprite, sprite_for, sprite_for_bits, tile_at, tile_map,
};
