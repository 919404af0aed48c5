// sheet.rs - Generated sprite sheet
//
// No tileset image ships with the editor, so the 4x4 sheet is painted at
// startup. Every tile is a solid block; sides facing an inactive neighbor get
// an outline, and an exposed top gets a strip of grass.

use autotile::{NeighborSignature, SHEET_COLUMNS, SHEET_ROWS, SpriteCoord, signature_for_sprite};
use egui::{Color32, ColorImage, Pos2, Rect, Vec2};

const BODY: Color32 = Color32::from_rgb(181, 124, 82);
const OUTLINE: Color32 = Color32::from_rgb(74, 48, 33);
const GRASS: Color32 = Color32::from_rgb(96, 178, 70);
const GRASS_DEPTH: usize = 4;

/// Paint the whole sheet, `SHEET_COLUMNS` x `SHEET_ROWS` tiles of `tile_size` pixels.
pub fn build_sheet(tile_size: u32) -> ColorImage {
    let tile = tile_size as usize;
    let size = [tile * SHEET_COLUMNS as usize, tile * SHEET_ROWS as usize];
    let mut image = ColorImage::new(size, Color32::TRANSPARENT);

    for tile_y in 0..SHEET_ROWS {
        for tile_x in 0..SHEET_COLUMNS {
            let Some(signature) = signature_for_sprite(SpriteCoord::new(tile_x, tile_y)) else {
                continue;
            };
            let x0 = tile_x as usize * tile;
            let y0 = tile_y as usize * tile;
            for y in 0..tile {
                for x in 0..tile {
                    image[(x0 + x, y0 + y)] = pixel(signature, x, y, tile);
                }
            }
        }
    }
    image
}

fn pixel(signature: NeighborSignature, x: usize, y: usize, tile: usize) -> Color32 {
    let open = |side| signature.contains(side);
    let last = tile - 1;

    if !open(NeighborSignature::NORTH) {
        if y == 0 {
            return OUTLINE;
        }
        if y <= GRASS_DEPTH {
            return GRASS;
        }
    }
    if (!open(NeighborSignature::SOUTH) && y == last)
        || (!open(NeighborSignature::WEST) && x == 0)
        || (!open(NeighborSignature::EAST) && x == last)
    {
        return OUTLINE;
    }
    BODY
}

/// UV rectangle of one tile, from the sheet offset of its coordinate.
pub fn uv_rect(coord: SpriteCoord, tile_size: u32) -> Rect {
    let (offset_x, offset_y) = coord.offset(tile_size);
    let sheet = Vec2::new(
        (tile_size * SHEET_COLUMNS) as f32,
        (tile_size * SHEET_ROWS) as f32,
    );
    let min = Pos2::new(-offset_x as f32 / sheet.x, -offset_y as f32 / sheet.y);
    Rect::from_min_size(min, Vec2::splat(tile_size as f32) / sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_size() {
        let image = build_sheet(18);
        assert_eq!(image.size, [72, 72]);
        assert_eq!(image.pixels.len(), 72 * 72);
    }

    #[test]
    fn test_isolated_tile_is_outlined() {
        let image = build_sheet(18);
        // (0, 0) has no neighbors
        assert_eq!(image[(0, 0)], OUTLINE);
        assert_eq!(image[(9, 2)], GRASS);
        assert_eq!(image[(9, 17)], OUTLINE);
        assert_eq!(image[(0, 9)], OUTLINE);
        assert_eq!(image[(17, 9)], OUTLINE);
        assert_eq!(image[(9, 9)], BODY);
    }

    #[test]
    fn test_fully_connected_tile_has_no_edges() {
        let image = build_sheet(18);
        // (2, 2) connects on all four sides
        let (x0, y0) = (36, 36);
        for (x, y) in [(0, 0), (17, 0), (0, 17), (17, 17), (9, 2), (9, 9)] {
            assert_eq!(image[(x0 + x, y0 + y)], BODY, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_uv_rect() {
        let uv = uv_rect(SpriteCoord::new(0, 0), 18);
        assert_eq!(uv.min, Pos2::new(0.0, 0.0));
        assert_eq!(uv.max, Pos2::new(0.25, 0.25));

        let uv = uv_rect(SpriteCoord::new(3, 1), 18);
        assert_eq!(uv.min, Pos2::new(0.75, 0.25));
        assert_eq!(uv.max, Pos2::new(1.0, 0.5));
    }
}
