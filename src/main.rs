// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drillboard - sports drill diagram editor
//!
//! A cross-platform desktop application for placing players and a ball on
//! a court, drawing arrows, and playing the resulting frames back as a
//! stop-motion animation.

mod app;
mod ui;

use anyhow::Result;
use app::DrillboardApp;
use drillboard::config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::from_env()?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Drillboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Drillboard",
        options,
        Box::new(|_cc| Ok(Box::new(DrillboardApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
