// patterns.rs - Preset paintings for the editor

use autotile::{Grid, TileError};

pub struct Preset {
    pub name: &'static str,
    pub apply: fn(&mut Grid) -> Result<(), TileError>,
}

pub const PRESETS: &[Preset] = &[
    Preset { name: "Clear All", apply: clear },
    Preset { name: "Fill All", apply: fill },
    Preset { name: "Checkerboard", apply: checkerboard },
    Preset { name: "Frame", apply: frame },
];

fn clear(grid: &mut Grid) -> Result<(), TileError> {
    grid.clear();
    Ok(())
}

fn fill(grid: &mut Grid) -> Result<(), TileError> {
    grid.fill();
    Ok(())
}

fn checkerboard(grid: &mut Grid) -> Result<(), TileError> {
    paint_where(grid, |row, col| (row + col) % 2 == 0)
}

/// Ring of cells along the grid border.
fn frame(grid: &mut Grid) -> Result<(), TileError> {
    let (last_row, last_col) = (grid.height() - 1, grid.width() - 1);
    paint_where(grid, |row, col| {
        row == 0 || col == 0 || row == last_row || col == last_col
    })
}

fn paint_where(grid: &mut Grid, active: impl Fn(usize, usize) -> bool) -> Result<(), TileError> {
    for index in 0..grid.len() {
        let (row, col) = (index / grid.width(), index % grid.width());
        grid.set(index, active(row, col))?;
    }
    Ok(())
}
