// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Actor data structures.
//!
//! Actors are the players and the ball. They exist for the whole drill;
//! where they stand is recorded per frame, not on the actor itself.

use super::ids::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Player,
    Ball,
}

/// Team a player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Letter used as the label prefix.
    pub fn letter(&self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// A persistent actor on the court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(default)]
    pub label: String,
}

impl Actor {
    /// Create a player. `ordinal` is the 1-based count within the team.
    pub fn player(id: ActorId, team: Team, ordinal: usize) -> Self {
        Self {
            id,
            kind: ActorKind::Player,
            team: Some(team),
            label: format!("{}{}", team.letter(), ordinal),
        }
    }

    /// Create the ball. Balls carry no team and no label.
    pub fn ball(id: ActorId) -> Self {
        Self {
            id,
            kind: ActorKind::Ball,
            team: None,
            label: String::new(),
        }
    }

    pub fn is_ball(&self) -> bool {
        matches!(self.kind, ActorKind::Ball)
    }
}
