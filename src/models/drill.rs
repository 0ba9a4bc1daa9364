// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The drill model.
//!
//! A [`Drill`] owns the actor registry, the ordered frames, the frame
//! cursor, and the playback schedule. All edits go through its methods
//! (or through [`Drill::apply`] with an [`Action`]), which check their
//! inputs before touching anything: a rejected edit leaves the drill
//! unchanged.
//!
//! Invariants maintained here:
//! - there is always at least one frame;
//! - the cursor is always a valid frame index;
//! - every actor has a position in every frame, and every position
//!   belongs to a registered actor.

use super::actor::{Actor, ActorKind, Team};
use super::error::{DrillError, DrillResult};
use super::frame::{Arrow, ArrowHandle, Frame, Point};
use super::ids::{ActorId, ArrowId, FrameId, IdGenerator};
use super::playback::{Playback, PlaybackState, TickToken};
use crate::config::EditorConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

pub const DEFAULT_TITLE: &str = "Untitled Drill";

/// Complete drill state. Serializes to the persisted document format;
/// playback state and the id generator are session-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    actors: Vec<Actor>,
    frames: Vec<Frame>,
    #[serde(default)]
    current_frame_index: usize,
    #[serde(skip)]
    playback: Playback,
    #[serde(skip)]
    ids: IdGenerator,
    #[serde(skip)]
    config: EditorConfig,
}

impl Default for Drill {
    fn default() -> Self {
        Self::new()
    }
}

impl Drill {
    /// Create an empty drill with a single empty frame.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_ids(config, IdGenerator::default())
    }

    pub fn with_ids(config: EditorConfig, mut ids: IdGenerator) -> Self {
        let first = Frame::new(FrameId::generate(&mut ids));
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            actors: Vec::new(),
            frames: vec![first],
            current_frame_index: 0,
            playback: Playback::new(config.playback_interval()),
            ids,
            config,
        }
    }

    /// Attach session settings to a drill, e.g. one just loaded from disk.
    /// Resets playback to stopped.
    pub fn configure(&mut self, config: EditorConfig) {
        self.playback = Playback::new(config.playback_interval());
        self.config = config;
    }

    // ---- read-only view ----

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == *id)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame_index]
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ---- metadata ----

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // ---- actors ----

    /// Register a new actor and place it at the default position in
    /// every existing frame. Team is required for players and ignored
    /// for the ball.
    pub fn add_actor(&mut self, kind: ActorKind, team: Option<Team>) -> DrillResult<ActorId> {
        match kind {
            ActorKind::Player => Ok(self.add_player(team.ok_or(DrillError::MissingTeam)?)),
            ActorKind::Ball => Ok(self.add_ball()),
        }
    }

    pub fn add_player(&mut self, team: Team) -> ActorId {
        let id = ActorId::generate(&mut self.ids);
        let same_team = self.actors.iter().filter(|a| a.team == Some(team)).count();
        self.register(Actor::player(id, team, same_team + 1))
    }

    pub fn add_ball(&mut self) -> ActorId {
        let id = ActorId::generate(&mut self.ids);
        self.register(Actor::ball(id))
    }

    fn register(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        let pos = self.config.default_actor_position;
        for frame in &mut self.frames {
            frame.positions.insert(id, pos);
        }
        log::info!(
            "Added {:?} '{}' ({}), total actors: {}",
            actor.kind,
            actor.label,
            id,
            self.actors.len() + 1
        );
        self.actors.push(actor);
        id
    }

    /// Move an actor in the current frame only.
    pub fn set_position(&mut self, actor_id: ActorId, pos: Point) -> DrillResult<()> {
        if self.actor(&actor_id).is_none() {
            return Err(DrillError::UnknownActor(actor_id));
        }
        let index = self.current_frame_index;
        self.frames[index].positions.insert(actor_id, pos);
        log::debug!("Moved actor {} to ({:.1}, {:.1}) in frame {}", actor_id, pos.x, pos.y, index);
        Ok(())
    }

    // ---- arrows (current frame) ----

    /// Add an arrow with the default endpoints to the current frame.
    pub fn add_arrow(&mut self) -> ArrowId {
        let id = ArrowId::generate(&mut self.ids);
        let arrow = Arrow::new(id, self.config.default_arrow_start, self.config.default_arrow_end);
        let index = self.current_frame_index;
        let frame = &mut self.frames[index];
        frame.arrows.push(arrow);
        log::info!("Added arrow {} to frame {}, arrows in frame: {}", id, index, frame.arrows.len());
        id
    }

    pub fn update_arrow_endpoint(
        &mut self,
        arrow_id: ArrowId,
        handle: ArrowHandle,
        pos: Point,
    ) -> DrillResult<()> {
        let arrow = self.current_arrow_mut(arrow_id)?;
        arrow.set_endpoint(handle, pos);
        log::debug!("Moved arrow {} {:?} to ({:.1}, {:.1})", arrow_id, handle, pos.x, pos.y);
        Ok(())
    }

    /// Associate an arrow in the current frame with an actor, or clear the
    /// association with `None`.
    pub fn link_arrow(&mut self, arrow_id: ArrowId, actor_id: Option<ActorId>) -> DrillResult<()> {
        if let Some(actor_id) = actor_id {
            if self.actor(&actor_id).is_none() {
                return Err(DrillError::UnknownActor(actor_id));
            }
        }
        self.current_arrow_mut(arrow_id)?.linked_actor_id = actor_id;
        Ok(())
    }

    pub fn delete_arrow(&mut self, arrow_id: ArrowId) -> DrillResult<()> {
        let index = self.current_frame_index;
        match self.frames[index].remove_arrow(&arrow_id) {
            Some(_) => {
                log::info!("Deleted arrow {} from frame {}", arrow_id, index);
                Ok(())
            }
            None => Err(DrillError::UnknownArrow {
                arrow: arrow_id,
                frame: index,
            }),
        }
    }

    fn current_arrow_mut(&mut self, arrow_id: ArrowId) -> DrillResult<&mut Arrow> {
        let index = self.current_frame_index;
        self.frames[index]
            .arrow_mut(&arrow_id)
            .ok_or(DrillError::UnknownArrow {
                arrow: arrow_id,
                frame: index,
            })
    }

    // ---- frames ----

    /// Append a frame continuing from the last one and make it current.
    pub fn add_frame(&mut self) -> FrameId {
        let id = FrameId::generate(&mut self.ids);
        let frame = match self.frames.last() {
            Some(last) => Frame::continuing(id, last),
            None => Frame::new(id),
        };
        self.frames.push(frame);
        self.current_frame_index = self.frames.len() - 1;
        self.playback.invalidate();
        log::info!("Added frame {}, total frames: {}", id, self.frames.len());
        id
    }

    /// Remove the frame at `index`. The last remaining frame cannot be
    /// removed.
    pub fn delete_frame(&mut self, index: usize) -> DrillResult<()> {
        self.check_index(index)?;
        if self.frames.len() <= 1 {
            return Err(DrillError::InvariantViolation(
                "cannot delete the only remaining frame".to_string(),
            ));
        }
        self.frames.remove(index);
        self.current_frame_index = self.current_frame_index.min(self.frames.len() - 1);
        self.playback.invalidate();
        log::info!("Deleted frame {}, total frames: {}", index, self.frames.len());
        Ok(())
    }

    /// Move the cursor. While playing, the next automatic advance is a
    /// full interval after this.
    pub fn set_current_frame(&mut self, index: usize) -> DrillResult<()> {
        self.check_index(index)?;
        self.current_frame_index = index;
        self.playback.invalidate();
        Ok(())
    }

    pub fn set_frame_notes(&mut self, index: usize, notes: Option<String>) -> DrillResult<()> {
        self.check_index(index)?;
        self.frames[index].notes = notes.filter(|n| !n.is_empty());
        Ok(())
    }

    fn check_index(&self, index: usize) -> DrillResult<()> {
        if index < self.frames.len() {
            Ok(())
        } else {
            Err(DrillError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })
        }
    }

    // ---- playback ----

    pub fn toggle_play(&mut self) -> PlaybackState {
        let state = self.playback.toggle();
        log::info!("Playback {:?}", state);
        state
    }

    /// Advance the cursor by one, wrapping to the first frame.
    pub fn advance_frame(&mut self) -> usize {
        self.current_frame_index = (self.current_frame_index + 1) % self.frames.len();
        self.current_frame_index
    }

    /// Manual single step. Like selecting a frame, it restarts the
    /// playback interval.
    pub fn step_frame(&mut self) -> usize {
        self.playback.invalidate();
        self.advance_frame()
    }

    /// Apply a scheduled tick. Tokens issued before the last start, stop,
    /// frame-count change, or cursor move are ignored.
    pub fn apply_tick(&mut self, token: TickToken) -> bool {
        if !self.playback.accepts(token) {
            log::debug!("Ignoring stale playback tick");
            return false;
        }
        let index = self.advance_frame();
        log::debug!("Playback advanced to frame {}", index);
        true
    }

    /// Drive playback from the event loop. Returns the new cursor if a
    /// tick fired.
    pub fn poll_playback(&mut self, now: Instant) -> Option<usize> {
        let token = self.playback.poll(now)?;
        self.apply_tick(token).then_some(self.current_frame_index)
    }

    // ---- validation ----

    /// Check every model invariant. Used after loading a drill from disk.
    pub fn validate(&self) -> DrillResult<()> {
        if self.frames.is_empty() {
            return Err(DrillError::InvariantViolation("drill has no frames".to_string()));
        }
        self.check_index(self.current_frame_index)?;

        let mut known = HashSet::new();
        for actor in &self.actors {
            if !known.insert(actor.id) {
                return Err(DrillError::InvariantViolation(format!(
                    "duplicate actor id {}",
                    actor.id
                )));
            }
            if actor.kind == ActorKind::Player && actor.team.is_none() {
                return Err(DrillError::MissingTeam);
            }
            if actor.is_ball() && (actor.team.is_some() || !actor.label.is_empty()) {
                return Err(DrillError::InvariantViolation(format!(
                    "ball {} carries a team or label",
                    actor.id
                )));
            }
        }

        let mut frame_ids = HashSet::new();
        for frame in &self.frames {
            if !frame_ids.insert(frame.id) {
                return Err(DrillError::InvariantViolation(format!(
                    "duplicate frame id {}",
                    frame.id
                )));
            }
        }

        for (index, frame) in self.frames.iter().enumerate() {
            if let Some(stray) = frame.positions.keys().find(|id| !known.contains(*id)) {
                return Err(DrillError::UnknownActor(*stray));
            }
            if let Some(missing) = self.actors.iter().find(|a| !frame.positions.contains_key(&a.id)) {
                return Err(DrillError::InvariantViolation(format!(
                    "actor {} has no position in frame {}",
                    missing.id, index
                )));
            }
            let mut arrow_ids = HashSet::new();
            for arrow in &frame.arrows {
                if !arrow_ids.insert(arrow.id) {
                    return Err(DrillError::InvariantViolation(format!(
                        "duplicate arrow id {} in frame {}",
                        arrow.id, index
                    )));
                }
                if let Some(linked) = arrow.linked_actor_id {
                    if !known.contains(&linked) {
                        return Err(DrillError::UnknownActor(linked));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A single edit to a drill.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTitle(String),
    SetDescription(String),
    AddActor { kind: ActorKind, team: Option<Team> },
    SetPosition { actor: ActorId, pos: Point },
    AddArrow,
    UpdateArrowEndpoint { arrow: ArrowId, handle: ArrowHandle, pos: Point },
    LinkArrow { arrow: ArrowId, actor: Option<ActorId> },
    DeleteArrow(ArrowId),
    AddFrame,
    DeleteFrame(usize),
    SetCurrentFrame(usize),
    SetFrameNotes { index: usize, notes: Option<String> },
    TogglePlay,
    /// Manual single-step, independent of the playback schedule.
    Tick,
}

/// What an applied action produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    ActorAdded(ActorId),
    ArrowAdded(ArrowId),
    FrameAdded(FrameId),
    FrameAdvanced(usize),
    Playback(PlaybackState),
}

impl Drill {
    /// Apply an action in place.
    pub fn apply(&mut self, action: Action) -> DrillResult<Outcome> {
        let outcome = match action {
            Action::SetTitle(title) => {
                self.set_title(title);
                Outcome::Applied
            }
            Action::SetDescription(description) => {
                self.set_description(description);
                Outcome::Applied
            }
            Action::AddActor { kind, team } => Outcome::ActorAdded(self.add_actor(kind, team)?),
            Action::SetPosition { actor, pos } => {
                self.set_position(actor, pos)?;
                Outcome::Applied
            }
            Action::AddArrow => Outcome::ArrowAdded(self.add_arrow()),
            Action::UpdateArrowEndpoint { arrow, handle, pos } => {
                self.update_arrow_endpoint(arrow, handle, pos)?;
                Outcome::Applied
            }
            Action::LinkArrow { arrow, actor } => {
                self.link_arrow(arrow, actor)?;
                Outcome::Applied
            }
            Action::DeleteArrow(arrow) => {
                self.delete_arrow(arrow)?;
                Outcome::Applied
            }
            Action::AddFrame => Outcome::FrameAdded(self.add_frame()),
            Action::DeleteFrame(index) => {
                self.delete_frame(index)?;
                Outcome::Applied
            }
            Action::SetCurrentFrame(index) => {
                self.set_current_frame(index)?;
                Outcome::Applied
            }
            Action::SetFrameNotes { index, notes } => {
                self.set_frame_notes(index, notes)?;
                Outcome::Applied
            }
            Action::TogglePlay => Outcome::Playback(self.toggle_play()),
            Action::Tick => Outcome::FrameAdvanced(self.step_frame()),
        };
        Ok(outcome)
    }
}

/// Pure transition: returns the next state, leaving `drill` untouched.
pub fn reduce(drill: &Drill, action: Action) -> DrillResult<(Drill, Outcome)> {
    let mut next = drill.clone();
    let outcome = next.apply(action)?;
    Ok((next, outcome))
}
