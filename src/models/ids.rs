// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Identifiers for actors, frames, and arrows.
//!
//! Ids are uuid tokens. They only need to be unique within a single
//! editing session, but uuids also survive a save/load cycle unchanged,
//! which keeps the per-frame position maps valid after reload.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Source of fresh identifiers.
#[derive(Debug, Clone, Default)]
pub enum IdGenerator {
    /// Random v4 uuids.
    #[default]
    Random,
    /// Monotonic counter, useful for reproducible tests.
    Sequential(u128),
}

impl IdGenerator {
    /// Create a generator that counts up from 1.
    pub fn sequential() -> Self {
        IdGenerator::Sequential(0)
    }

    /// Produce the next identifier.
    pub fn next(&mut self) -> Uuid {
        match self {
            IdGenerator::Random => Uuid::new_v4(),
            IdGenerator::Sequential(counter) => {
                *counter = counter.wrapping_add(1);
                Uuid::from_u128(*counter)
            }
        }
    }
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocate a new id from the given generator.
            pub fn generate(ids: &mut IdGenerator) -> Self {
                Self(ids.next())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a persistent actor (player or ball).
    ActorId
);
id_type!(
    /// Identifier of a frame in the timeline.
    FrameId
);
id_type!(
    /// Identifier of an arrow, unique within its frame.
    ArrowId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let mut ids = IdGenerator::sequential();
        assert_eq!(ids.next(), Uuid::from_u128(1));
        assert_eq!(ids.next(), Uuid::from_u128(2));
        assert_eq!(ActorId::generate(&mut ids), ActorId::from(Uuid::from_u128(3)));
    }

    #[test]
    fn test_random_ids_do_not_collide() {
        let mut ids = IdGenerator::Random;
        let a = ArrowId::generate(&mut ids);
        let b = ArrowId::generate(&mut ids);
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = FrameId::from(Uuid::from_u128(7));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::from_u128(7)));
        let back: FrameId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
