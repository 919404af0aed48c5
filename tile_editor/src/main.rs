// main.rs - Autotiler toy: grid editor with a live auto-tiled preview

use eframe::egui;
use egui::Color32;

use autotile::Grid;

mod config;    // Grid size and display constants
mod patterns;  // Preset paintings
mod sheet;     // Generated sprite sheet
mod ui;        // eframe::App implementation

use patterns::Preset;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let grid = Grid::new(config::GRID_WIDTH, config::GRID_HEIGHT)?;
    log::info!("starting editor on a {}x{} grid", grid.width(), grid.height());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Autotiler toy",
        options,
        Box::new(move |cc| Box::new(TileEditor::new(cc, grid))),
    )?;
    Ok(())
}

/// Editor state: the painted grid plus display settings.
pub struct TileEditor {
    pub grid: Grid,
    pub sheet: egui::TextureHandle,
    pub active_color: Color32,
    pub idle_color: Color32,
    pub hovered: Option<usize>,   // Preview cell under the pointer
}

impl TileEditor {
    pub fn new(cc: &eframe::CreationContext<'_>, grid: Grid) -> Self {
        let sheet = cc.egui_ctx.load_texture(
            "tileset",
            sheet::build_sheet(config::TILE_SIZE),
            egui::TextureOptions::NEAREST,
        );

        Self {
            grid,
            sheet,
            active_color: Color32::from_rgb(96, 178, 70),
            idle_color: Color32::from_gray(60),
            hovered: None,
        }
    }

    pub fn toggle_cell(&mut self, index: usize) {
        match self.grid.toggle(index) {
            Ok(active) => log::debug!("cell {index} is now {}", if active { "on" } else { "off" }),
            Err(err) => log::warn!("ignoring click: {err}"),
        }
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        match (preset.apply)(&mut self.grid) {
            Ok(()) => log::debug!("applied preset {:?}", preset.name),
            Err(err) => log::warn!("preset {:?} failed: {err}", preset.name),
        }
    }
}
