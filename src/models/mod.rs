// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drill data model: actors, frames, arrows, and the playback schedule.

pub mod actor;
pub mod drill;
pub mod error;
pub mod frame;
pub mod ids;
pub mod playback;

pub use actor::{Actor, ActorKind, Team};
pub use drill::{reduce, Action, Drill, Outcome};
pub use error::{DrillError, DrillResult};
pub use frame::{Arrow, ArrowHandle, Frame, Point};
pub use ids::{ActorId, ArrowId, FrameId, IdGenerator};
pub use playback::{Playback, PlaybackState, TickToken};
