// Editing sessions on the 10x5 reference grid.

use autotile::{Grid, NeighborSignature, SpriteCoord, TileError, neighbor_signature, sprite_for};

const WIDTH: usize = 10;
const HEIGHT: usize = 5;

fn reference_grid() -> Grid {
    Grid::new(WIDTH, HEIGHT).expect("10x5 grid")
}

fn tile(grid: &Grid, index: usize) -> (u8, SpriteCoord) {
    let signature = neighbor_signature(grid, index).unwrap();
    (signature.bits(), sprite_for(signature))
}

#[test]
fn lone_cell_uses_isolated_tile() {
    let mut grid = reference_grid();
    grid.toggle(0).unwrap();
    assert_eq!(tile(&grid, 0), (0b0000, SpriteCoord::new(0, 0)));
}

#[test]
fn horizontal_pair_connects_east_and_west() {
    let mut grid = reference_grid();
    grid.toggle(0).unwrap();
    grid.toggle(1).unwrap();
    assert_eq!(tile(&grid, 0), (0b0100, SpriteCoord::new(1, 0)));
    assert_eq!(tile(&grid, 1), (0b0010, SpriteCoord::new(3, 0)));
}

#[test]
fn vertical_pair_connects_north_and_south() {
    let mut grid = reference_grid();
    grid.toggle(0).unwrap();
    grid.toggle(10).unwrap();
    assert_eq!(tile(&grid, 10), (0b0001, SpriteCoord::new(0, 3)));
    assert_eq!(tile(&grid, 0), (0b1000, SpriteCoord::new(0, 1)));
}

#[test]
fn untoggling_a_neighbor_restores_the_tile() {
    let mut grid = reference_grid();
    grid.toggle(12).unwrap();
    grid.toggle(13).unwrap();
    assert_eq!(tile(&grid, 12).1, SpriteCoord::new(1, 0));
    grid.toggle(13).unwrap();
    assert_eq!(tile(&grid, 12).1, SpriteCoord::new(0, 0));
}

#[test]
fn plus_shape_center_connects_all_sides() {
    let mut grid = reference_grid();
    for i in [13, 22, 23, 24, 33] {
        grid.toggle(i).unwrap();
    }
    assert_eq!(tile(&grid, 23), (0b1111, SpriteCoord::new(2, 2)));
    assert_eq!(tile(&grid, 13).0, NeighborSignature::SOUTH.bits());
    assert_eq!(tile(&grid, 22).0, NeighborSignature::EAST.bits());
    assert_eq!(tile(&grid, 24).0, NeighborSignature::WEST.bits());
    assert_eq!(tile(&grid, 33).0, NeighborSignature::NORTH.bits());
}

#[test]
fn edge_bits_stay_clear_whatever_the_neighbors() {
    let mut grid = reference_grid();
    grid.fill();
    for i in 0..grid.len() {
        let bits = tile(&grid, i).0;
        if i % WIDTH == 0 {
            assert_eq!(bits & 0b0010, 0, "west bit on left edge cell {i}");
        }
        if i % WIDTH == WIDTH - 1 {
            assert_eq!(bits & 0b0100, 0, "east bit on right edge cell {i}");
        }
        if i < WIDTH {
            assert_eq!(bits & 0b0001, 0, "north bit on top row cell {i}");
        }
        if i >= WIDTH * (HEIGHT - 1) {
            assert_eq!(bits & 0b1000, 0, "south bit on bottom row cell {i}");
        }
    }
}

#[test]
fn errors_name_the_bad_input() {
    let mut grid = reference_grid();
    let err = grid.toggle(99).unwrap_err();
    assert_eq!(err, TileError::IndexOutOfRange { index: 99, len: 50 });
    assert_eq!(err.to_string(), "cell index 99 is outside a grid of 50 cells");
    assert_eq!(
        Grid::new(0, 0).unwrap_err().to_string(),
        "grid dimensions 0x0 must both be non-zero"
    );
}
