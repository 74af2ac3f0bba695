//! Measurement lines and the ordered collection that holds them.

use std::sync::atomic::{AtomicU64, Ordering};

use egui::{Color32, Pos2};

use super::calibration::Calibration;
use super::geometry::{self, distance};

/// Global monotonic counter that assigns unique IDs to measurement lines.
static MEASUREMENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a single measurement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasurementId(u64);

impl MeasurementId {
    fn next() -> Self {
        Self(MEASUREMENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Stroke style of a committed line. Drafts always render dashed regardless
/// of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Visual appearance of a measurement line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLook {
    pub color: Color32,
    pub style: LineStyle,
    pub thickness: f32,
}

impl Default for LineLook {
    fn default() -> Self {
        Self {
            color: crate::config::PALETTE[0],
            style: LineStyle::Solid,
            thickness: 2.5,
        }
    }
}

/// How a measurement's length is presented on the canvas and in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    Cm,
    Inch,
    #[default]
    Both,
}

impl UnitMode {
    /// Cycle in toolbar order: Both -> Cm -> Inch -> Both.
    pub fn cycled(self) -> Self {
        match self {
            UnitMode::Both => UnitMode::Cm,
            UnitMode::Cm => UnitMode::Inch,
            UnitMode::Inch => UnitMode::Both,
        }
    }

    /// Short toolbar caption for the current mode.
    pub fn caption(self) -> &'static str {
        match self {
            UnitMode::Cm => "cm",
            UnitMode::Inch => "inch",
            UnitMode::Both => "cm + in",
        }
    }

    /// Render a length in this mode, e.g. `"5 cm"`, `"1.97 in"` or
    /// `"5 cm / 1.97 in"`.
    pub fn format_length(self, length_cm: f32) -> String {
        let cm_text = format!("{} cm", geometry::format_value(length_cm));
        let inch_text = format!("{} in", geometry::format_value(geometry::cm_to_inch(length_cm)));
        match self {
            UnitMode::Cm => cm_text,
            UnitMode::Inch => inch_text,
            UnitMode::Both => format!("{} / {}", cm_text, inch_text),
        }
    }
}

/// A committed measurement line on the photo.
///
/// `length_cm` is normally derived from the endpoint geometry via the
/// calibration, but the sidebar may write it directly without moving the
/// endpoints (dual-write: see [`MeasurementUpdate`]). The next geometry drag
/// overwrites any such manual value.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    pub id: MeasurementId,
    pub start: Pos2,
    pub end: Pos2,
    pub length_cm: f32,
    pub look: LineLook,
    pub label: String,
}

impl MeasurementLine {
    pub fn new(start: Pos2, end: Pos2, length_cm: f32, look: LineLook, label: String) -> Self {
        Self {
            id: MeasurementId::next(),
            start,
            end,
            length_cm,
            look,
            label,
        }
    }

    pub fn midpoint(&self) -> Pos2 {
        Pos2::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }

    /// Pixel length of the segment.
    pub fn pixel_length(&self) -> f32 {
        distance(self.start, self.end)
    }
}

/// One mutation of a single measurement line.
///
/// Each variant carries its own consistency rule: `Geometry` always
/// recomputes `length_cm` from the new endpoints, while `LengthCm` /
/// `LengthInches` write the length directly and deliberately leave the
/// endpoints alone.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementUpdate {
    /// Move the endpoints; the stored length is recomputed via calibration.
    Geometry { start: Pos2, end: Pos2 },
    /// Write the length in centimeters without moving the endpoints.
    LengthCm(f32),
    /// Write the length in inches without moving the endpoints.
    LengthInches(f32),
    Label(String),
    Color(Color32),
    Style(LineStyle),
    Thickness(f32),
}

/// Ordered collection of measurement lines. Insertion order is display and
/// label-numbering order.
#[derive(Debug, Clone, Default)]
pub struct Measurements {
    lines: Vec<MeasurementLine>,
}

impl Measurements {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasurementLine> {
        self.lines.iter()
    }

    pub fn get(&self, id: MeasurementId) -> Option<&MeasurementLine> {
        self.lines.iter().find(|m| m.id == id)
    }

    /// Label assigned to the next line added: `"Measurement N"` with N equal
    /// to the current count plus one. Labels are frozen at creation and are
    /// not renumbered when earlier lines are deleted.
    pub fn next_default_label(&self) -> String {
        format!("Measurement {}", self.lines.len() + 1)
    }

    /// Append a line and return its id.
    pub fn add(&mut self, line: MeasurementLine) -> MeasurementId {
        let id = line.id;
        self.lines.push(line);
        id
    }

    /// Delete the matching line; no-op if absent.
    pub fn remove(&mut self, id: MeasurementId) {
        self.lines.retain(|m| m.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Apply one tagged update to the matching line; no-op if absent.
    ///
    /// Non-finite length writes and non-positive thicknesses are rejected,
    /// keeping the previous value.
    pub fn apply(&mut self, id: MeasurementId, update: MeasurementUpdate, cal: &Calibration) {
        let Some(line) = self.lines.iter_mut().find(|m| m.id == id) else {
            return;
        };
        match update {
            MeasurementUpdate::Geometry { start, end } => {
                line.start = start;
                line.end = end;
                line.length_cm = cal.to_cm(distance(start, end));
            }
            MeasurementUpdate::LengthCm(cm) => {
                if cm.is_finite() && cm >= 0.0 {
                    line.length_cm = cm;
                }
            }
            MeasurementUpdate::LengthInches(inches) => {
                if inches.is_finite() && inches >= 0.0 {
                    line.length_cm = geometry::inch_to_cm(inches);
                }
            }
            MeasurementUpdate::Label(label) => line.label = label,
            MeasurementUpdate::Color(color) => line.look.color = color,
            MeasurementUpdate::Style(style) => line.look.style = style,
            MeasurementUpdate::Thickness(thickness) => {
                if thickness.is_finite() && thickness > 0.0 {
                    line.look.thickness = thickness;
                }
            }
        }
    }
}
