// ui.rs - Editor buttons on the left, auto-tiled preview on the right

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use autotile::{Grid, neighbor_signature, sprite_for, tile_map};

use crate::{TileEditor, config, patterns, sheet};

impl eframe::App for TileEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Autotiler toy");
            ui.label("Paint cells on the left; each tile on the right is picked from its four neighbors.");

            ui.separator();

            // Controls
            ui.horizontal(|ui| {
                for preset in patterns::PRESETS {
                    if ui.button(preset.name).clicked() {
                        self.apply_preset(preset);
                    }
                }

                ui.separator();

                ui.label("Active:");
                ui.color_edit_button_srgba(&mut self.active_color);
                ui.label("Idle:");
                ui.color_edit_button_srgba(&mut self.idle_color);
            });

            ui.separator();

            ui.horizontal_top(|ui| {
                self.editor_panel(ui);
                ui.separator();
                self.preview_panel(ui);
            });

            ui.separator();

            self.status_line(ui);
        });
    }
}

impl TileEditor {
    /// One numbered button per cell, laid out row by row.
    fn editor_panel(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        egui::Grid::new("tile_editor_buttons")
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                for row in 0..self.grid.height() {
                    for col in 0..self.grid.width() {
                        let index = row * self.grid.width() + col;
                        let fill = if self.grid.cells()[index] {
                            self.active_color
                        } else {
                            self.idle_color
                        };
                        let button = egui::Button::new(index.to_string())
                            .fill(fill)
                            .min_size(Vec2::splat(config::BUTTON_SIZE));
                        if ui.add(button).clicked() {
                            clicked = Some(index);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(index) = clicked {
            self.toggle_cell(index);
        }
    }

    /// Sprites for every active cell, drawn straight from the sheet texture.
    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        let cell_size = config::TILE_SIZE as f32 * config::PREVIEW_ZOOM;
        let total_size = Vec2::new(
            cell_size * self.grid.width() as f32,
            cell_size * self.grid.height() as f32,
        );

        let (response, painter) = ui.allocate_painter(total_size, Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from_rgb(208, 232, 244));
        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));

        for (index, sprite) in tile_map(&self.grid).into_iter().enumerate() {
            let Some(sprite) = sprite else { continue };
            let Some((row, col)) = self.grid.position(index) else { continue };

            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32, row as f32) * cell_size,
                Vec2::splat(cell_size),
            );
            painter.image(
                self.sheet.id(),
                rect,
                sheet::uv_rect(sprite, config::TILE_SIZE),
                Color32::WHITE,
            );
        }

        self.hovered = response
            .hover_pos()
            .and_then(|pos| cell_at(&self.grid, origin, cell_size, pos));

        // Clicking the preview paints too
        if response.clicked() {
            if let Some(index) = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(&self.grid, origin, cell_size, pos))
            {
                self.toggle_cell(index);
            }
        }
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Active cells: {} / {}", self.grid.active_count(), self.grid.len()));

            ui.separator();

            let Some(index) = self.hovered else {
                ui.label("Hover the preview to inspect a tile");
                return;
            };
            match (self.grid.is_active(index), neighbor_signature(&self.grid, index)) {
                (Ok(true), Ok(signature)) => {
                    let sprite = sprite_for(signature);
                    ui.label(format!(
                        "Cell {index}: signature {:#06b} -> tile ({}, {})",
                        signature.bits(),
                        sprite.x,
                        sprite.y,
                    ));
                }
                (Ok(false), _) => {
                    ui.label(format!("Cell {index}: empty"));
                }
                (Err(err), _) | (_, Err(err)) => {
                    ui.label(err.to_string());
                }
            }
        });
    }
}

/// Grid index under `pos` for cells of `cell_size` starting at `origin`.
fn cell_at(grid: &Grid, origin: Pos2, cell_size: f32, pos: Pos2) -> Option<usize> {
    let rel = pos - origin;
    if rel.x < 0.0 || rel.y < 0.0 {
        return None;
    }
    grid.index_of((rel.y / cell_size) as usize, (rel.x / cell_size) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at() {
        let grid = Grid::new(10, 5).unwrap();
        let origin = Pos2::new(100.0, 50.0);

        assert_eq!(cell_at(&grid, origin, 54.0, Pos2::new(100.0, 50.0)), Some(0));
        assert_eq!(cell_at(&grid, origin, 54.0, Pos2::new(160.0, 50.0)), Some(1));
        assert_eq!(cell_at(&grid, origin, 54.0, Pos2::new(100.0, 110.0)), Some(10));
        assert_eq!(cell_at(&grid, origin, 54.0, Pos2::new(639.0, 319.0)), Some(49));
        assert_eq!(cell_at(&grid, origin, 54.0, Pos2::new(99.0, 60.0)), None);
        assert_eq!(cell_at(&grid, origin, 54.0, Pos2::new(641.0, 60.0)), None);
    }
}
