// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame timeline.
//!
//! Shows one tile per frame, lets the user select, add, and delete
//! frames.

use drillboard::models::{Action, Drill};

const TILE_SIZE: egui::Vec2 = egui::vec2(96.0, 64.0);

/// Display the timeline strip. Returns the action the user triggered, if any.
pub fn show(ui: &mut egui::Ui, drill: &Drill) -> Option<Action> {
    let mut action = None;
    let frame_count = drill.frame_count();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("TIMELINE ({} steps)", frame_count)).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ Add Step").clicked() {
                action = Some(Action::AddFrame);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            for (idx, frame) in drill.frames().iter().enumerate() {
                let selected = idx == drill.current_frame_index();
                ui.vertical(|ui| {
                    let text = egui::RichText::new(format!("{}", idx + 1)).size(20.0).strong();
                    let tile = ui.add_sized(TILE_SIZE, egui::SelectableLabel::new(selected, text));
                    let tile = match frame.notes.as_deref() {
                        Some(notes) => tile.on_hover_text(notes),
                        None => tile,
                    };
                    if tile.clicked() {
                        action = Some(Action::SetCurrentFrame(idx));
                    }

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{} arrows", frame.arrows.len()))
                                .small()
                                .weak(),
                        );
                        if ui
                            .add_enabled(frame_count > 1, egui::Button::new("🗑").small())
                            .on_hover_text("Delete step")
                            .clicked()
                        {
                            action = Some(Action::DeleteFrame(idx));
                        }
                    });
                });
            }

            if ui.add_sized(egui::vec2(40.0, TILE_SIZE.y), egui::Button::new("+")).clicked() {
                action = Some(Action::AddFrame);
            }
        });
    });

    action
}
