// tiler.rs - Neighbor signatures and the sprite lookup table
//
// Each active cell looks at its four orthogonal neighbors and packs them into
// a 4-bit signature (bitset 0bSEWN). The signature picks one of the 16 tiles
// on a 4x4 sprite sheet.

use bitflags::bitflags;

use crate::{Grid, TileError};

pub const SHEET_COLUMNS: u32 = 4;
pub const SHEET_ROWS: u32 = 4;

bitflags! {
    /// Which orthogonal neighbors of a cell are active.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NeighborSignature: u8 {
        const NORTH = 0b0001;
        const WEST  = 0b0010;
        const EAST  = 0b0100;
        const SOUTH = 0b1000;
    }
}

/// Tile position on the sprite sheet, in tiles rather than pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteCoord {
    pub x: u32,
    pub y: u32,
}

impl SpriteCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Background offset that brings this tile under a `tile_size` viewport.
    pub fn offset(self, tile_size: u32) -> (i64, i64) {
        let size = i64::from(tile_size);
        (-size * i64::from(self.x), -size * i64::from(self.y))
    }
}

const fn at(x: u32, y: u32) -> SpriteCoord {
    SpriteCoord::new(x, y)
}

/// Sprite for every signature, indexed by the signature bits.
///
/// Sheet columns follow west/east (none, E, WE, W), rows follow north/south
/// (none, S, NS, N).
const SIGNATURE_TABLE: [SpriteCoord; 16] = [
    at(0, 0), // 0b0000
    at(0, 3), // 0b0001  N
    at(3, 0), // 0b0010  W
    at(3, 3), // 0b0011  W N
    at(1, 0), // 0b0100  E
    at(1, 3), // 0b0101  E N
    at(2, 0), // 0b0110  E W
    at(2, 3), // 0b0111  E W N
    at(0, 1), // 0b1000  S
    at(0, 2), // 0b1001  S N
    at(3, 1), // 0b1010  S W
    at(3, 2), // 0b1011  S W N
    at(1, 1), // 0b1100  S E
    at(1, 2), // 0b1101  S E N
    at(2, 1), // 0b1110  S E W
    at(2, 2), // 0b1111  S E W N
];

/// Compute the neighbor signature of the cell at `index`.
///
/// Neighbors off the grid count as inactive. West and east are checked
/// against the cell's row so `index - 1` / `index + 1` never wrap into an
/// adjacent row; north and south only need the linear bounds.
pub fn neighbor_signature(grid: &Grid, index: usize) -> Result<NeighborSignature, TileError> {
    let len = grid.len();
    let width = grid.width();
    if index >= len {
        return Err(TileError::IndexOutOfRange { index, len });
    }

    let col = index % width;
    let cells = grid.cells();

    let north = index >= width && cells[index - width];
    let south = index + width < len && cells[index + width];
    let west = col > 0 && cells[index - 1];
    let east = col < width - 1 && cells[index + 1];

    let mut signature = NeighborSignature::empty();
    signature.set(NeighborSignature::NORTH, north);
    signature.set(NeighborSignature::WEST, west);
    signature.set(NeighborSignature::EAST, east);
    signature.set(NeighborSignature::SOUTH, south);
    Ok(signature)
}

pub fn sprite_for(signature: NeighborSignature) -> SpriteCoord {
    SIGNATURE_TABLE[usize::from(signature.bits())]
}

/// Look up a raw signature value; only 0..=15 are valid.
pub fn sprite_for_bits(bits: u8) -> Result<SpriteCoord, TileError> {
    NeighborSignature::from_bits(bits)
        .map(sprite_for)
        .ok_or(TileError::InvalidSignature(bits))
}

/// Which signature a sheet tile is drawn for, if `coord` lies on the sheet.
pub fn signature_for_sprite(coord: SpriteCoord) -> Option<NeighborSignature> {
    SIGNATURE_TABLE
        .iter()
        .position(|&c| c == coord)
        .and_then(|bits| NeighborSignature::from_bits(bits as u8))
}

/// Sprite of the cell at `index`, `None` while the cell is inactive.
pub fn tile_at(grid: &Grid, index: usize) -> Result<Option<SpriteCoord>, TileError> {
    if !grid.is_active(index)? {
        return Ok(None);
    }
    Ok(Some(sprite_for(neighbor_signature(grid, index)?)))
}

/// Sprites for the whole grid in index order.
pub fn tile_map(grid: &Grid) -> Vec<Option<SpriteCoord>> {
    (0..grid.len())
        .map(|i| tile_at(grid, i).ok().flatten())
        .collect()
}
