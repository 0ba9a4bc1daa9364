// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Court canvas.
//!
//! Draws the current frame (actors and arrows) and turns drags into
//! model edits. Drag offsets are accumulated here while the pointer is
//! down and only the final court position is committed on release.

use drillboard::models::{Action, Actor, ActorId, Arrow, ArrowHandle, ArrowId, Drill, Point, Team};
use drillboard::util::geometry::{clamp_to_court, CourtTransform};

const PLAYER_RADIUS: f32 = 16.0;
const BALL_RADIUS: f32 = 10.0;
const HANDLE_RADIUS: f32 = 5.0;
const DELETE_RADIUS: f32 = 6.0;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Actor(ActorId),
    ArrowEnd(ArrowId, ArrowHandle),
}

/// Transient gesture state, owned by the app between frames.
#[derive(Debug, Clone, Copy)]
pub struct CourtDrag {
    pub target: DragTarget,
    /// Accumulated pointer movement in screen units.
    pub offset: egui::Vec2,
}

/// Display the court and handle pointer interactions.
pub fn show(ui: &mut egui::Ui, drill: &Drill, drag: &mut Option<CourtDrag>) -> Option<Action> {
    let config = drill.config();
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let area = response.rect.shrink(12.0);
    let transform = CourtTransform::fit(
        config.court_width,
        config.court_height,
        area.min.x as f64,
        area.min.y as f64,
        area.width() as f64,
        area.height() as f64,
    );

    draw_court(&painter, &transform, config.court_width, config.court_height);

    let mut action = None;
    let frame = drill.current_frame();

    for arrow in &frame.arrows {
        if let Some(a) = arrow_interactions(ui, &painter, &transform, arrow, drag, drill) {
            action = Some(a);
        }
    }

    for actor in drill.actors() {
        let Some(pos) = frame.position(&actor.id) else {
            continue;
        };
        let target = DragTarget::Actor(actor.id);
        let radius = if actor.is_ball() { BALL_RADIUS } else { PLAYER_RADIUS };
        let center = to_pos2(&transform, &pos);
        let rect = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
        let id = ui.id().with(("actor", actor.id));
        let resp = ui.interact(rect, id, egui::Sense::drag());

        if let Some(final_pos) = track_drag(&resp, target, drag, &transform, &pos) {
            action = Some(Action::SetPosition {
                actor: actor.id,
                pos: clamp_to_court(final_pos, config.court_width, config.court_height),
            });
        }
        let preview = center + preview_offset(drag, target);
        draw_actor(&painter, actor, preview, radius, resp.hovered());
    }

    if drill.actors().is_empty() && frame.arrows.is_empty() {
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "Add players, a ball, or arrows from the toolbar",
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(120),
        );
    }

    action
}

fn arrow_interactions(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    transform: &CourtTransform,
    arrow: &Arrow,
    drag: &mut Option<CourtDrag>,
    drill: &Drill,
) -> Option<Action> {
    let config = drill.config();
    let mut action = None;
    let mut ends = [egui::Pos2::ZERO; 2];

    for (slot, handle) in [ArrowHandle::Start, ArrowHandle::End].into_iter().enumerate() {
        let target = DragTarget::ArrowEnd(arrow.id, handle);
        let point = arrow.endpoint(handle);
        let center = to_pos2(transform, &point);
        let rect = egui::Rect::from_center_size(
            center,
            egui::vec2(HANDLE_RADIUS * 3.0, HANDLE_RADIUS * 3.0),
        );
        let resp = ui.interact(rect, ui.id().with(("arrow", arrow.id, slot)), egui::Sense::drag());
        if let Some(final_pos) = track_drag(&resp, target, drag, transform, &point) {
            action = Some(Action::UpdateArrowEndpoint {
                arrow: arrow.id,
                handle,
                pos: clamp_to_court(final_pos, config.court_width, config.court_height),
            });
        }
        ends[slot] = center + preview_offset(drag, target);
    }

    let [start, end] = ends;
    let stroke = egui::Stroke::new(2.0, egui::Color32::BLACK);
    painter.arrow(start, end - start, stroke);
    painter.circle_filled(start, HANDLE_RADIUS, egui::Color32::from_rgb(16, 185, 129));
    painter.circle_filled(end, HANDLE_RADIUS, egui::Color32::from_rgb(239, 68, 68));

    let middle = start + (end - start) / 2.0;
    let delete_rect = egui::Rect::from_center_size(
        middle,
        egui::vec2(DELETE_RADIUS * 2.0, DELETE_RADIUS * 2.0),
    );
    let delete = ui.interact(delete_rect, ui.id().with(("arrow-delete", arrow.id)), egui::Sense::click());
    let delete_color = if delete.hovered() {
        egui::Color32::from_rgb(220, 38, 38)
    } else {
        egui::Color32::from_rgba_unmultiplied(128, 128, 128, 128)
    };
    painter.circle_filled(middle, DELETE_RADIUS, delete_color);
    if delete.clicked() {
        action = Some(Action::DeleteArrow(arrow.id));
    }

    action
}

/// Update the drag state from a widget response. Returns the final
/// court position when the drag of `target` ends.
fn track_drag(
    resp: &egui::Response,
    target: DragTarget,
    drag: &mut Option<CourtDrag>,
    transform: &CourtTransform,
    origin: &Point,
) -> Option<Point> {
    if resp.drag_started() {
        *drag = Some(CourtDrag {
            target,
            offset: egui::Vec2::ZERO,
        });
    }
    if resp.dragged() {
        if let Some(active) = drag.as_mut().filter(|d| d.target == target) {
            active.offset += resp.drag_delta();
        }
    }
    if resp.drag_stopped() {
        if let Some(done) = drag.filter(|d| d.target == target) {
            *drag = None;
            let (sx, sy) = transform.to_screen(origin);
            return Some(transform.to_court(sx + done.offset.x as f64, sy + done.offset.y as f64));
        }
    }
    None
}

fn preview_offset(drag: &Option<CourtDrag>, target: DragTarget) -> egui::Vec2 {
    match drag {
        Some(active) if active.target == target => active.offset,
        _ => egui::Vec2::ZERO,
    }
}

fn to_pos2(transform: &CourtTransform, point: &Point) -> egui::Pos2 {
    let (x, y) = transform.to_screen(point);
    egui::pos2(x as f32, y as f32)
}

fn draw_court(painter: &egui::Painter, transform: &CourtTransform, width: f64, height: f64) {
    let min = to_pos2(transform, &Point::new(0.0, 0.0));
    let max = to_pos2(transform, &Point::new(width, height));
    let rect = egui::Rect::from_min_max(min, max);
    let line = egui::Stroke::new(2.0, egui::Color32::WHITE);

    painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(196, 140, 84));
    painter.rect_stroke(rect, 4.0, line);

    let top = to_pos2(transform, &Point::new(width / 2.0, 0.0));
    let bottom = to_pos2(transform, &Point::new(width / 2.0, height));
    painter.line_segment([top, bottom], line);
    let center_radius = (height * 0.15 * transform.scale) as f32;
    painter.circle_stroke(rect.center(), center_radius, line);
}

fn draw_actor(painter: &egui::Painter, actor: &Actor, center: egui::Pos2, radius: f32, hovered: bool) {
    let fill = match actor.team {
        _ if actor.is_ball() => egui::Color32::from_rgb(250, 204, 21),
        Some(Team::A) => egui::Color32::from_rgb(239, 68, 68),
        Some(Team::B) => egui::Color32::from_rgb(37, 99, 235),
        None => egui::Color32::GRAY,
    };
    let outline = if hovered { 3.0 } else { 2.0 };
    painter.circle_filled(center, radius, fill);
    painter.circle_stroke(center, radius, egui::Stroke::new(outline, egui::Color32::WHITE));
    if !actor.label.is_empty() {
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &actor.label,
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );
    }
}
