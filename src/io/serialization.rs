// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drill serialization and deserialization.
//!
//! This module handles exporting and importing drills in YAML and JSON
//! formats. The document is the full drill state with actor ids kept
//! verbatim; imports are validated before they are handed back.

use crate::models::drill::Drill;
use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;

/// File format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export a drill to YAML format.
pub fn export_yaml(drill: &Drill, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(drill)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a drill to JSON format.
pub fn export_json(drill: &Drill, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(drill)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a drill from YAML format.
pub fn import_yaml(path: &Path) -> Result<Drill> {
    let yaml = std::fs::read_to_string(path)?;
    let drill: Drill = serde_yaml::from_str(&yaml)?;
    checked(drill)
}

/// Import a drill from JSON format.
pub fn import_json(path: &Path) -> Result<Drill> {
    let json = std::fs::read_to_string(path)?;
    let drill: Drill = serde_json::from_str(&json)?;
    checked(drill)
}

/// Export using the format implied by the file extension.
pub fn export(drill: &Drill, path: &Path) -> Result<()> {
    let result = match Format::from_path(path)? {
        Format::Yaml => export_yaml(drill, path),
        Format::Json => export_json(drill, path),
    };
    result.with_context(|| format!("Failed to export drill to {}", path.display()))
}

/// Import using the format implied by the file extension.
pub fn import(path: &Path) -> Result<Drill> {
    let result = match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    };
    result.with_context(|| format!("Failed to import drill from {}", path.display()))
}

fn checked(drill: Drill) -> Result<Drill> {
    drill
        .validate()
        .map_err(|e| anyhow!("Invalid drill document: {}", e))?;
    Ok(drill)
}
