// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the drill, applies the actions produced
//! by the UI components, and drives playback from the frame loop.

use crate::ui::{court, properties, timeline, toolbar};
use drillboard::config::EditorConfig;
use drillboard::io::serialization;
use drillboard::models::{Action, Drill};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;

/// Result of a background drill load.
type LoadResult = Result<(PathBuf, Drill), String>;

/// Main application state.
pub struct DrillboardApp {
    /// Session settings, re-applied to every drill that is opened
    config: EditorConfig,

    /// The drill being edited
    drill: Drill,

    /// Drag in progress on the court, if any
    court_drag: Option<court::CourtDrag>,

    /// File the drill was last loaded from or saved to
    file_path: Option<PathBuf>,

    /// Receiver for background drill loading
    drill_loader: Option<Receiver<LoadResult>>,

    /// Last error shown in the status bar
    status: Option<String>,
}

impl DrillboardApp {
    /// Create a new application instance with an empty drill.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            drill: Drill::with_config(config.clone()),
            config,
            court_drag: None,
            file_path: None,
            drill_loader: None,
            status: None,
        }
    }

    /// Apply an action to the drill, reporting rejections in the status bar.
    fn dispatch(&mut self, action: Action) {
        log::debug!("Applying {:?}", action);
        match self.drill.apply(action) {
            Ok(_) => self.status = None,
            Err(e) => {
                log::warn!("Rejected edit: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn new_drill(&mut self) {
        self.drill = Drill::with_config(self.config.clone());
        self.court_drag = None;
        self.file_path = None;
        log::info!("Started a new drill");
    }

    /// Save the drill to a file.
    fn save_drill(&mut self, path: PathBuf) {
        match serialization::export(&self.drill, &path) {
            Ok(_) => {
                log::info!("Saved drill to {}", path.display());
                self.file_path = Some(path);
                self.status = None;
            }
            Err(e) => {
                log::error!("Failed to save drill: {:#}", e);
                self.status = Some(format!("{:#}", e));
            }
        }
    }

    /// Load a drill from a file (asynchronously).
    fn open_drill(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.drill_loader = Some(receiver);

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = serialization::import(&path)
                .map(|drill| (path, drill))
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    fn receive_loaded_drill(&mut self) {
        let Some(ref receiver) = self.drill_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.drill_loader = None;

        match result {
            Ok((path, mut drill)) => {
                drill.configure(self.config.clone());
                log::info!(
                    "Loaded drill '{}' from {} ({} actors, {} frames)",
                    drill.title(),
                    path.display(),
                    drill.actors().len(),
                    drill.frame_count()
                );
                self.drill = drill;
                self.court_drag = None;
                self.file_path = Some(path);
                self.status = None;
            }
            Err(e) => {
                log::error!("Failed to load drill: {}", e);
                self.status = Some(e);
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Drill").clicked() {
                        self.new_drill();
                        ui.close_menu();
                    }
                    if ui.button("Open Drill...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Drills", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_drill(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let can_save = self.file_path.is_some();
                    if ui.add_enabled(can_save, egui::Button::new("Save (Ctrl+S)")).clicked() {
                        if let Some(path) = self.file_path.clone() {
                            self.save_drill(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Save As", |ui| {
                        if ui.button("YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("drill.yaml")
                                .save_file()
                            {
                                self.save_drill(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("drill.json")
                                .save_file()
                            {
                                self.save_drill(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Playback", |ui| {
                    let label = if self.drill.is_playing() { "Pause (Space)" } else { "Play (Space)" };
                    if ui.button(label).clicked() {
                        self.dispatch(Action::TogglePlay);
                        ui.close_menu();
                    }
                    if ui.button("Step Forward").clicked() {
                        self.dispatch(Action::Tick);
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Only process if no text field is focused (to avoid stealing typing)
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.dispatch(Action::TogglePlay);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            let next = self.drill.current_frame_index() + 1;
            if next < self.drill.frame_count() {
                self.dispatch(Action::SetCurrentFrame(next));
            }
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            if let Some(prev) = self.drill.current_frame_index().checked_sub(1) {
                self.dispatch(Action::SetCurrentFrame(prev));
            }
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S)) {
            if let Some(path) = self.file_path.clone() {
                self.save_drill(path);
            }
        }
    }
}

impl eframe::App for DrillboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_loaded_drill();
        if self.drill_loader.is_some() {
            ctx.request_repaint();
        }

        // Playback ticks run on this thread, between user edits
        let now = Instant::now();
        if let Some(index) = self.drill.poll_playback(now) {
            log::debug!("Showing frame {}", index + 1);
        }
        if let Some(wait) = self.drill.playback().time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        self.menu_bar(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            actions.extend(toolbar::show(ui, &self.drill));
        });

        egui::TopBottomPanel::bottom("timeline")
            .resizable(false)
            .exact_height(150.0)
            .show(ctx, |ui| {
                actions.extend(timeline::show(ui, &self.drill));
                if let Some(ref message) = self.status {
                    ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 38, 38)));
                }
            });

        egui::SidePanel::right("properties")
            .default_width(250.0)
            .show(ctx, |ui| {
                actions.extend(properties::show(ui, &self.drill));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.drill_loader.is_some() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            } else {
                actions.extend(court::show(ui, &self.drill, &mut self.court_drag));
            }
        });

        self.handle_keyboard(ctx);

        for action in actions {
            self.dispatch(action);
        }
    }
}
