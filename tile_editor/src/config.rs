// config.rs - Compile-time editor configuration

pub const GRID_WIDTH: usize = 10;                 // Cells per row
pub const GRID_HEIGHT: usize = 5;                 // Rows (50 cells in total)

pub const TILE_SIZE: u32 = 18;                    // Sprite size on the sheet, in pixels
pub const PREVIEW_ZOOM: f32 = 3.0;                // Preview scale factor for the 18px tiles
pub const BUTTON_SIZE: f32 = 34.0;                // Editor button edge length

pub const WINDOW_SIZE: [f32; 2] = [1000.0, 480.0];
