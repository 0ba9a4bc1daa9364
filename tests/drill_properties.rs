// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! End-to-end behaviour of the drill model: frame floor, position
//! completeness, cursor validity, continuity, frame isolation, and
//! playback wraparound.

use drillboard::config::EditorConfig;
use drillboard::models::{
    reduce, Action, ActorKind, ArrowHandle, Drill, DrillError, IdGenerator, Outcome, Point, Team,
};
use std::time::{Duration, Instant};

fn drill() -> Drill {
    Drill::with_ids(EditorConfig::default(), IdGenerator::sequential())
}

fn assert_cursor_valid(drill: &Drill) {
    assert!(
        drill.current_frame_index() < drill.frame_count(),
        "cursor {} out of {} frames",
        drill.current_frame_index(),
        drill.frame_count()
    );
}

#[test]
fn delete_frame_never_drops_below_one() {
    let mut drill = drill();
    for _ in 0..4 {
        drill.add_frame();
    }
    // Delete from the front, the back, and the cursor, then keep going
    // past the floor.
    for index in [0, 3, 1, 0, 0, 0, 0] {
        let len = drill.frame_count();
        let result = drill.delete_frame(index.min(len - 1));
        assert!(drill.frame_count() >= 1);
        assert_cursor_valid(&drill);
        if len == 1 {
            assert!(matches!(result, Err(DrillError::InvariantViolation(_))));
        }
    }
    assert_eq!(drill.frame_count(), 1);
}

#[test]
fn delete_only_frame_is_rejected() {
    let mut drill = drill();
    assert!(drill.delete_frame(0).is_err());
    assert_eq!(drill.frame_count(), 1);
    assert_eq!(drill.current_frame_index(), 0);
}

#[test]
fn every_actor_has_a_position_in_every_frame() {
    let mut drill = drill();
    let early = drill.add_player(Team::A);
    drill.add_frame();
    drill.add_frame();
    let late = drill.add_ball();
    drill.add_frame();
    let later = drill.add_player(Team::B);

    for frame in drill.frames() {
        for id in [early, late, later] {
            assert!(frame.positions.contains_key(&id));
        }
    }
    assert!(drill.validate().is_ok());
}

#[test]
fn adding_an_actor_reaches_all_existing_frames() {
    let mut drill = drill();
    drill.add_frame();
    assert_eq!(drill.frame_count(), 2);

    let id = drill.add_actor(ActorKind::Player, Some(Team::A)).unwrap();

    for frame in drill.frames() {
        assert_eq!(frame.position(&id), Some(Point::new(400.0, 200.0)));
    }
    assert_eq!(drill.actor(&id).unwrap().label, "A1");
}

#[test]
fn cursor_stays_valid_through_mixed_edits() {
    let mut drill = drill();
    let actions = vec![
        Action::AddFrame,
        Action::AddFrame,
        Action::SetCurrentFrame(2),
        Action::DeleteFrame(2),
        Action::Tick,
        Action::Tick,
        Action::AddFrame,
        Action::DeleteFrame(0),
        Action::SetCurrentFrame(7),
        Action::DeleteFrame(9),
        Action::DeleteFrame(1),
        Action::DeleteFrame(0),
        Action::DeleteFrame(0),
        Action::Tick,
    ];
    for action in actions {
        let _ = drill.apply(action);
        assert_cursor_valid(&drill);
    }
}

#[test]
fn new_frame_continues_positions_of_last_frame() {
    let mut drill = drill();
    let a = drill.add_player(Team::A);
    let b = drill.add_player(Team::B);
    drill.add_frame();
    drill.set_position(a, Point::new(120.0, 80.0)).unwrap();
    drill.add_arrow();

    // Cursor on the first frame: the copy still comes from the last one.
    drill.set_current_frame(0).unwrap();
    drill.set_position(b, Point::new(700.0, 300.0)).unwrap();

    let last = drill.frames().last().unwrap().clone();
    drill.add_frame();
    let added = drill.frames().last().unwrap();

    assert_eq!(added.positions, last.positions);
    assert!(added.arrows.is_empty());
    assert_eq!(drill.current_frame_index(), 2);
}

#[test]
fn edits_stay_in_their_frame() {
    let mut drill = drill();
    let p = drill.add_player(Team::A);
    drill.add_frame();
    drill.add_frame();
    drill.set_current_frame(1).unwrap();

    let arrow = drill.add_arrow();
    drill.update_arrow_endpoint(arrow, ArrowHandle::Start, Point::new(10.0, 10.0)).unwrap();
    drill.set_position(p, Point::new(55.0, 66.0)).unwrap();

    for (index, frame) in drill.frames().iter().enumerate() {
        if index == 1 {
            assert_eq!(frame.arrows.len(), 1);
            assert_eq!(frame.position(&p), Some(Point::new(55.0, 66.0)));
        } else {
            assert!(frame.arrows.is_empty());
            assert_eq!(frame.position(&p), Some(Point::new(400.0, 200.0)));
        }
    }
}

#[test]
fn arrow_lifecycle() {
    let mut drill = drill();
    let id = drill.add_arrow();
    {
        let arrow = drill.current_frame().arrow(&id).unwrap();
        assert_eq!(arrow.start, Point::new(350.0, 200.0));
        assert_eq!(arrow.end, Point::new(450.0, 200.0));
    }

    drill.update_arrow_endpoint(id, ArrowHandle::End, Point::new(500.0, 250.0)).unwrap();
    drill.add_frame();

    assert!(drill.frames()[1].arrows.is_empty());
    let kept = drill.frames()[0].arrow(&id).unwrap();
    assert_eq!(kept.end, Point::new(500.0, 250.0));
    assert_eq!(kept.start, Point::new(350.0, 200.0));
}

#[test]
fn playback_wraps_to_first_frame() {
    let mut drill = drill();
    drill.add_frame();
    drill.add_frame();
    assert_eq!(drill.frame_count(), 3);
    assert_eq!(drill.current_frame_index(), 2);

    assert_eq!(drill.apply(Action::Tick), Ok(Outcome::FrameAdvanced(0)));
}

#[test]
fn scheduled_playback_loops_until_stopped() {
    let config = EditorConfig {
        playback_interval_ms: 100,
        ..EditorConfig::default()
    };
    let mut drill = Drill::with_ids(config, IdGenerator::sequential());
    drill.add_frame();
    drill.add_frame();
    drill.set_current_frame(0).unwrap();
    drill.toggle_play();

    let t0 = Instant::now();
    let interval = Duration::from_millis(100);
    drill.poll_playback(t0);

    let seen: Vec<usize> = (1..=6)
        .filter_map(|n| drill.poll_playback(t0 + interval * n))
        .collect();
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);

    drill.toggle_play();
    assert_eq!(drill.poll_playback(t0 + interval * 20), None);
    assert_eq!(drill.current_frame_index(), 0);
}

#[test]
fn rejected_actions_leave_state_untouched() {
    let mut drill = drill();
    drill.add_player(Team::A);
    let before = serde_json::to_value(&drill).unwrap();

    let mut stranger_ids = IdGenerator::Random;
    let stranger = drillboard::models::ActorId::generate(&mut stranger_ids);
    let arrow = drillboard::models::ArrowId::generate(&mut stranger_ids);
    let rejected = [
        Action::SetPosition {
            actor: stranger,
            pos: Point::new(0.0, 0.0),
        },
        Action::DeleteArrow(arrow),
        Action::UpdateArrowEndpoint {
            arrow,
            handle: ArrowHandle::End,
            pos: Point::new(1.0, 1.0),
        },
        Action::SetCurrentFrame(3),
        Action::DeleteFrame(0),
        Action::AddActor {
            kind: ActorKind::Player,
            team: None,
        },
    ];
    for action in rejected {
        assert!(reduce(&drill, action.clone()).is_err());
        assert!(drill.apply(action).is_err());
    }

    assert_eq!(serde_json::to_value(&drill).unwrap(), before);
}
