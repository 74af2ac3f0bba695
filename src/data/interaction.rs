//! Pointer interaction state machine for the canvas.
//!
//! Interprets pointer-down / move / up against the active tool to either
//! draft a new measurement or calibration line, or drag an existing line's
//! endpoint or body. All mutation of the calibration and the measurement
//! collection funnels through here; the canvas panel only translates egui
//! responses into these calls.

use egui::{Pos2, Vec2};

use super::calibration::Calibration;
use super::geometry::distance;
use super::measurement::{
    LineLook, MeasurementId, MeasurementLine, MeasurementUpdate, Measurements,
};

/// Grab radius around a line endpoint under the Move tool, in pixels.
pub const ENDPOINT_GRAB_RADIUS: f32 = 15.0;
/// Grab radius around a line midpoint under the Move tool, in pixels.
pub const CENTER_GRAB_RADIUS: f32 = 20.0;
/// Drags shorter than this are treated as accidental clicks and discarded.
pub const MIN_DRAG_PX: f32 = 5.0;

/// The tool governing pointer interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Ignores pointer-down entirely.
    Select,
    /// Draw a new measurement line.
    #[default]
    Line,
    /// Draw the calibration reference line.
    Calibrate,
    /// Drag an existing line's endpoint or body.
    Move,
}

/// Which part of a line a Move-tool drag grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabPart {
    Start,
    End,
    Center,
}

/// Transient, uncommitted line shown while the pointer button is held during
/// a Line or Calibrate gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftLine {
    pub start: Pos2,
    pub end: Pos2,
}

/// Transient record of the line being reshaped by a Move-tool drag.
///
/// `grab_offset` is only meaningful for center grabs: it preserves the
/// vector from the pointer to the midpoint at grab time so the segment
/// translates rigidly instead of snapping its midpoint onto the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: MeasurementId,
    pub part: GrabPart,
    pub grab_offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Drafting(DraftLine),
    Dragging(DragSession),
}

/// Result of a completed pointer-up, for side effects that live outside the
/// data model (scroll-into-view of the new list entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    None,
    LineAdded(MeasurementId),
    Calibrated,
}

/// The interaction state machine: `Idle`, `Drafting` or `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasInteraction {
    state: State,
}

impl Default for CanvasInteraction {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl CanvasInteraction {
    /// The in-progress draft, if a Line/Calibrate gesture is underway.
    pub fn draft(&self) -> Option<&DraftLine> {
        match &self.state {
            State::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    /// The active drag session, if a Move gesture is underway.
    pub fn drag(&self) -> Option<&DragSession> {
        match &self.state {
            State::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Pointer-button press at `pos`.
    ///
    /// Only acts from `Idle`: Line/Calibrate start a draft with
    /// `start == end == pos`; Move hit-tests the collection and starts a
    /// drag session on the first hit; Select stays idle.
    pub fn pointer_down(&mut self, pos: Pos2, tool: Tool, measurements: &Measurements) {
        if !self.is_idle() {
            return;
        }
        match tool {
            Tool::Line | Tool::Calibrate => {
                self.state = State::Drafting(DraftLine {
                    start: pos,
                    end: pos,
                });
            }
            Tool::Move => {
                if let Some((target, part, grab_offset)) = hit_test(pos, measurements) {
                    self.state = State::Dragging(DragSession {
                        target,
                        part,
                        grab_offset,
                    });
                }
            }
            Tool::Select => {}
        }
    }

    /// Pointer moved to `pos` with the button held.
    ///
    /// Drafting tracks the pointer with the draft's `end`; Dragging reshapes
    /// the grabbed line and recomputes its length via the calibration.
    pub fn pointer_moved(
        &mut self,
        pos: Pos2,
        measurements: &mut Measurements,
        cal: &Calibration,
    ) {
        match &mut self.state {
            State::Drafting(draft) => draft.end = pos,
            State::Dragging(session) => {
                let session = *session;
                let Some(line) = measurements.get(session.target) else {
                    // Target deleted mid-drag (sidebar delete); drop the session.
                    self.state = State::Idle;
                    return;
                };
                let (start, end) = match session.part {
                    GrabPart::Start => (pos, line.end),
                    GrabPart::End => (line.start, pos),
                    GrabPart::Center => {
                        let delta = (pos + session.grab_offset) - line.midpoint();
                        (line.start + delta, line.end + delta)
                    }
                };
                let target = session.target;
                measurements.apply(target, MeasurementUpdate::Geometry { start, end }, cal);
            }
            State::Idle => {}
        }
    }

    /// Pointer-button release (or pointer leaving the canvas).
    ///
    /// Drafts shorter than [`MIN_DRAG_PX`] are silently discarded. A kept
    /// Calibrate draft replaces the pixel reference only; a kept Line draft
    /// becomes a committed measurement with the active look and a frozen
    /// sequential label. Drag sessions always commit, however small.
    pub fn pointer_up(
        &mut self,
        tool: Tool,
        look: LineLook,
        measurements: &mut Measurements,
        cal: &mut Calibration,
    ) -> GestureOutcome {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Drafting(draft) => {
                let drag_distance = distance(draft.start, draft.end);
                if drag_distance < MIN_DRAG_PX {
                    return GestureOutcome::None;
                }
                match tool {
                    Tool::Calibrate => {
                        cal.set_reference_pixels(drag_distance);
                        GestureOutcome::Calibrated
                    }
                    _ => {
                        let length_cm = cal.to_cm(drag_distance);
                        let label = measurements.next_default_label();
                        let id = measurements.add(MeasurementLine::new(
                            draft.start,
                            draft.end,
                            length_cm,
                            look,
                            label,
                        ));
                        GestureOutcome::LineAdded(id)
                    }
                }
            }
            _ => GestureOutcome::None,
        }
    }
}

/// Hit-test `pos` against the collection in display order; first line that
/// matches wins. Per line the priority is start handle, end handle, then
/// center handle. Returns the grab offset to apply (zero for endpoints).
pub fn hit_test(pos: Pos2, measurements: &Measurements) -> Option<(MeasurementId, GrabPart, Vec2)> {
    for line in measurements.iter() {
        if distance(pos, line.start) <= ENDPOINT_GRAB_RADIUS {
            return Some((line.id, GrabPart::Start, Vec2::ZERO));
        }
        if distance(pos, line.end) <= ENDPOINT_GRAB_RADIUS {
            return Some((line.id, GrabPart::End, Vec2::ZERO));
        }
        let mid = line.midpoint();
        if distance(pos, mid) <= CENTER_GRAB_RADIUS {
            return Some((line.id, GrabPart::Center, mid - pos));
        }
    }
    None
}
