// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame and arrow data structures.
//!
//! A frame is one snapshot of the drill: where every actor stands and
//! which arrows are drawn at that moment. Arrows belong to exactly one
//! frame and are never carried over to the next.

use super::ids::{ActorId, ArrowId, FrameId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A 2D point in court coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which end of an arrow is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowHandle {
    Start,
    End,
}

/// A directional annotation drawn in a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub id: ArrowId,
    pub start: Point,
    pub end: Point,
    /// Actor the arrow is associated with, if any. Association only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_actor_id: Option<ActorId>,
}

impl Arrow {
    pub fn new(id: ArrowId, start: Point, end: Point) -> Self {
        Self {
            id,
            start,
            end,
            linked_actor_id: None,
        }
    }

    /// Get one endpoint.
    pub fn endpoint(&self, handle: ArrowHandle) -> Point {
        match handle {
            ArrowHandle::Start => self.start,
            ArrowHandle::End => self.end,
        }
    }

    /// Move one endpoint.
    pub fn set_endpoint(&mut self, handle: ArrowHandle, pos: Point) {
        match handle {
            ArrowHandle::Start => self.start = pos,
            ArrowHandle::End => self.end = pos,
        }
    }
}

/// One snapshot in the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    pub positions: BTreeMap<ActorId, Point>,
    #[serde(default)]
    pub arrows: Vec<Arrow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new(id: FrameId) -> Self {
        Self {
            id,
            positions: BTreeMap::new(),
            arrows: Vec::new(),
            notes: None,
        }
    }

    /// Create the frame that follows `previous`: same positions, no arrows.
    pub fn continuing(id: FrameId, previous: &Frame) -> Self {
        Self {
            id,
            positions: previous.positions.clone(),
            arrows: Vec::new(),
            notes: None,
        }
    }

    pub fn position(&self, actor: &ActorId) -> Option<Point> {
        self.positions.get(actor).copied()
    }

    pub fn arrow(&self, id: &ArrowId) -> Option<&Arrow> {
        self.arrows.iter().find(|a| a.id == *id)
    }

    pub fn arrow_mut(&mut self, id: &ArrowId) -> Option<&mut Arrow> {
        self.arrows.iter_mut().find(|a| a.id == *id)
    }

    /// Remove an arrow. Returns the removed arrow, if it was present.
    pub fn remove_arrow(&mut self, id: &ArrowId) -> Option<Arrow> {
        let idx = self.arrows.iter().position(|a| a.id == *id)?;
        Some(self.arrows.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::IdGenerator;

    #[test]
    fn test_continuing_frame_copies_positions_not_arrows() {
        let mut ids = IdGenerator::sequential();
        let actor = ActorId::generate(&mut ids);
        let mut first = Frame::new(FrameId::generate(&mut ids));
        first.positions.insert(actor, Point::new(10.0, 20.0));
        first.arrows.push(Arrow::new(
            ArrowId::generate(&mut ids),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        ));
        first.notes = Some("press".to_string());

        let next = Frame::continuing(FrameId::generate(&mut ids), &first);
        assert_eq!(next.positions, first.positions);
        assert!(next.arrows.is_empty());
        assert!(next.notes.is_none());
        assert_ne!(next.id, first.id);
    }

    #[test]
    fn test_arrow_endpoints() {
        let mut ids = IdGenerator::sequential();
        let mut arrow = Arrow::new(
            ArrowId::generate(&mut ids),
            Point::new(350.0, 200.0),
            Point::new(450.0, 200.0),
        );
        arrow.set_endpoint(ArrowHandle::End, Point::new(500.0, 250.0));
        assert_eq!(arrow.endpoint(ArrowHandle::Start), Point::new(350.0, 200.0));
        assert_eq!(arrow.endpoint(ArrowHandle::End), Point::new(500.0, 250.0));
    }

    #[test]
    fn test_remove_arrow() {
        let mut ids = IdGenerator::sequential();
        let mut frame = Frame::new(FrameId::generate(&mut ids));
        let id = ArrowId::generate(&mut ids);
        frame.arrows.push(Arrow::new(id, Point::new(0.0, 0.0), Point::new(1.0, 0.0)));

        assert!(frame.remove_arrow(&id).is_some());
        assert!(frame.remove_arrow(&id).is_none());
        assert!(frame.arrows.is_empty());
    }
}
