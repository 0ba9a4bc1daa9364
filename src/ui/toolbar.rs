// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar: drill title, actor and arrow creation, playback control.

use drillboard::models::{Action, ActorKind, Drill, PlaybackState, Team};

/// Display the toolbar. Returns the action the user triggered, if any.
pub fn show(ui: &mut egui::Ui, drill: &Drill) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let mut title = drill.title().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut title)
                .hint_text("Drill Title")
                .desired_width(240.0)
                .font(egui::TextStyle::Heading),
        );
        if response.changed() {
            action = Some(Action::SetTitle(title));
        }

        ui.separator();

        if ui
            .button(egui::RichText::new("⊕ Team A").color(egui::Color32::from_rgb(220, 60, 60)))
            .clicked()
        {
            action = Some(Action::AddActor {
                kind: ActorKind::Player,
                team: Some(Team::A),
            });
        }
        if ui
            .button(egui::RichText::new("⊕ Team B").color(egui::Color32::from_rgb(50, 100, 220)))
            .clicked()
        {
            action = Some(Action::AddActor {
                kind: ActorKind::Player,
                team: Some(Team::B),
            });
        }
        if ui
            .button(egui::RichText::new("● Ball").color(egui::Color32::from_rgb(230, 180, 20)))
            .clicked()
        {
            action = Some(Action::AddActor {
                kind: ActorKind::Ball,
                team: None,
            });
        }
        if ui.button("➡ Arrow").clicked() {
            action = Some(Action::AddArrow);
        }

        ui.separator();

        let play_label = match drill.playback_state() {
            PlaybackState::Playing => "⏸ Pause",
            PlaybackState::Stopped => "▶ Play Animation",
        };
        if ui.button(play_label).clicked() {
            action = Some(Action::TogglePlay);
        }

        ui.separator();

        let hint = if drill.is_playing() {
            "Playing - editing still applies to the frame on screen"
        } else {
            "Drag players and arrow handles, click the grey dot to remove an arrow"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    action
}
