// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drillboard - sports drill diagrams as stop-motion frame sequences.
//!
//! The [`models::Drill`] holds persistent actors (players and a ball),
//! an ordered list of frames with per-frame positions and arrows, a
//! frame cursor, and a playback schedule. The desktop frontend lives in
//! the binary; everything here is usable without a UI.

pub mod config;
pub mod io;
pub mod models;
pub mod util;

pub use config::EditorConfig;
pub use models::{Action, Drill, DrillError, Outcome};
