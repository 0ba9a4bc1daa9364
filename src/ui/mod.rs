// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Drillboard application.
//!
//! Each view reads the drill and returns at most one [`Action`] per
//! frame; only the app applies them.
//!
//! [`Action`]: drillboard::models::Action

pub mod court;
pub mod properties;
pub mod timeline;
pub mod toolbar;
