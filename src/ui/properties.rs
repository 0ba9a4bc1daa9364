// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drill properties panel.
//!
//! This module provides the side panel for editing the drill
//! description, the notes of the current frame, and which actor each
//! arrow in the current frame belongs to.

use drillboard::models::{Action, Actor, ActorId, Drill};

/// Display the properties panel. Returns the action the user triggered, if any.
pub fn show(ui: &mut egui::Ui, drill: &Drill) -> Option<Action> {
    let mut action = None;

    ui.heading("Drill");
    ui.separator();

    ui.label("Description");
    let mut description = drill.description().to_string();
    if ui
        .add(egui::TextEdit::multiline(&mut description).desired_rows(4))
        .changed()
    {
        action = Some(Action::SetDescription(description));
    }

    ui.add_space(8.0);
    let index = drill.current_frame_index();
    let frame = drill.current_frame();
    ui.label(format!("Notes for step {}", index + 1));
    let mut notes = frame.notes.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::multiline(&mut notes).desired_rows(3))
        .changed()
    {
        action = Some(Action::SetFrameNotes {
            index,
            notes: Some(notes),
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(egui::RichText::new(format!("Actors ({})", drill.actors().len())).strong());
    egui::ScrollArea::vertical()
        .id_source("actors")
        .max_height(160.0)
        .show(ui, |ui| {
            for actor in drill.actors() {
                let pos = frame
                    .position(&actor.id)
                    .map(|p| format!("({:.0}, {:.0})", p.x, p.y))
                    .unwrap_or_else(|| "-".to_string());
                ui.horizontal(|ui| {
                    ui.label(display_name(actor));
                    ui.label(egui::RichText::new(pos).weak());
                });
            }
        });

    ui.separator();
    ui.label(egui::RichText::new(format!("Arrows in step {} ({})", index + 1, frame.arrows.len())).strong());
    for (n, arrow) in frame.arrows.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("#{}", n + 1));
            let mut linked = arrow.linked_actor_id;
            egui::ComboBox::from_id_source(("arrow-link", arrow.id))
                .selected_text(linked_name(drill, linked))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut linked, None, "unlinked");
                    for actor in drill.actors() {
                        ui.selectable_value(&mut linked, Some(actor.id), display_name(actor));
                    }
                });
            if linked != arrow.linked_actor_id {
                action = Some(Action::LinkArrow {
                    arrow: arrow.id,
                    actor: linked,
                });
            }
            if ui.small_button("✖").on_hover_text("Delete arrow").clicked() {
                action = Some(Action::DeleteArrow(arrow.id));
            }
        });
    }

    action
}

fn display_name(actor: &Actor) -> String {
    if actor.is_ball() {
        "Ball".to_string()
    } else {
        actor.label.clone()
    }
}

fn linked_name(drill: &Drill, linked: Option<ActorId>) -> String {
    linked
        .and_then(|id| drill.actor(&id))
        .map(display_name)
        .unwrap_or_else(|| "unlinked".to_string())
}
