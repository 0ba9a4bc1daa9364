// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Conversions between court coordinates (what the model stores) and
//! screen coordinates inside the rectangle the court is drawn into.

use crate::models::frame::Point;

/// Placement of the court on screen: origin plus uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl CourtTransform {
    /// Fit a court of the given size into an available area, centered and
    /// keeping the aspect ratio.
    pub fn fit(
        court_width: f64,
        court_height: f64,
        area_x: f64,
        area_y: f64,
        area_width: f64,
        area_height: f64,
    ) -> Self {
        let scale = (area_width / court_width).min(area_height / court_height).max(f64::EPSILON);
        Self {
            origin_x: area_x + (area_width - court_width * scale) / 2.0,
            origin_y: area_y + (area_height - court_height * scale) / 2.0,
            scale,
        }
    }

    /// Court coordinates to screen coordinates.
    pub fn to_screen(&self, point: &Point) -> (f64, f64) {
        (
            self.origin_x + point.x * self.scale,
            self.origin_y + point.y * self.scale,
        )
    }

    /// Screen coordinates to court coordinates.
    pub fn to_court(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.origin_x) / self.scale,
            (screen_y - self.origin_y) / self.scale,
        )
    }
}

/// Clamp a point to lie on the court.
pub fn clamp_to_court(point: Point, court_width: f64, court_height: f64) -> Point {
    Point::new(point.x.clamp(0.0, court_width), point.y.clamp(0.0, court_height))
}
