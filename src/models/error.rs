// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Errors raised by the drill model.
//!
//! All of these are recoverable: a rejected operation leaves the drill
//! exactly as it was.

use super::ids::{ActorId, ArrowId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// An operation referenced an actor that is not in the registry.
    #[error("Unknown actor: {0}")]
    UnknownActor(ActorId),

    /// An arrow operation referenced an id absent from the current frame.
    #[error("Unknown arrow {arrow} in frame {frame}")]
    UnknownArrow { arrow: ArrowId, frame: usize },

    /// A frame index outside `[0, len)`.
    #[error("Frame index {index} out of range (frame count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Players must be created with a team.
    #[error("Player actors require a team")]
    MissingTeam,

    /// The operation would break a model invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type DrillResult<T> = Result<T, DrillError>;
