use lyon::math::point;
use lyon::path::Path;
use planedit_core::units::{format_length, parse_length};
use planedit_core::{EditError, EventCallback, LengthUnit};
use tracing::debug;

use super::container::PointsContainer;
use crate::geometry::{distance, PlanPoint};

/// Distance of the opposite point assumed left of the start point when a
/// shape has only two points.
pub const SYNTHETIC_OPPOSITE_DISTANCE: f32 = 100.0;

/// What changed in a [`PointsModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsEventKind {
    IntervalAdded,
    IntervalRemoved,
    ContentsChanged,
}

/// A change notification covering the inclusive index range `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEvent {
    pub kind: PointsEventKind,
    pub start: usize,
    pub end: usize,
}

impl PointsEvent {
    pub fn new(kind: PointsEventKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Handle returned when registering a listener.
pub type ListenerId = usize;

/// Editable copy of the points of one container.
///
/// Every mutation is written back to the container at once and then
/// announced to the registered listeners.
pub struct PointsModel {
    points: Vec<PlanPoint>,
    target: Option<Box<dyn PointsContainer>>,
    unit: LengthUnit,
    decimals: usize,
    listeners: Vec<(ListenerId, EventCallback<PointsEvent>)>,
    next_listener: ListenerId,
}

impl Default for PointsModel {
    fn default() -> Self {
        Self::new(LengthUnit::default())
    }
}

impl std::fmt::Debug for PointsModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointsModel")
            .field("points", &self.points)
            .field("has_target", &self.target.is_some())
            .field("unit", &self.unit)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PointsModel {
    /// Creates a model without a target.
    pub fn new(unit: LengthUnit) -> Self {
        Self {
            points: Vec::new(),
            target: None,
            unit,
            decimals: unit.default_decimals(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Creates a model editing `target`.
    pub fn with_target(target: impl PointsContainer + 'static, unit: LengthUnit) -> Self {
        let mut model = Self::new(unit);
        model.set_target(Box::new(target));
        model
    }

    pub fn add_listener(&mut self, listener: impl Fn(&PointsEvent) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    fn fire(&self, kind: PointsEventKind, start: usize, end: usize) {
        let event = PointsEvent::new(kind, start, end);
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    fn fire_all_changed(&self) {
        if !self.points.is_empty() {
            self.fire(PointsEventKind::ContentsChanged, 0, self.points.len() - 1);
        }
    }

    fn write_back(&mut self) {
        if let Some(target) = self.target.as_mut() {
            target.set_points(&self.points);
        }
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditError::index(index, self.points.len()))
        }
    }

    fn check_finite(param: &str, value: f32) -> Result<(), EditError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(EditError::InvalidParameter {
                param: param.to_string(),
                reason: format!("{} is not a finite number", value),
            })
        }
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Changes the display unit; every element label changes with it.
    pub fn set_unit(&mut self, unit: LengthUnit) {
        self.unit = unit;
        self.decimals = unit.default_decimals();
        self.fire_all_changed();
    }

    pub fn set_decimals(&mut self, decimals: usize) {
        self.decimals = decimals;
        self.fire_all_changed();
    }

    pub fn target(&self) -> Option<&dyn PointsContainer> {
        self.target.as_deref()
    }

    /// Replaces the edited container, announcing the removal of the old
    /// points and the addition of the new ones.
    pub fn set_target(&mut self, target: Box<dyn PointsContainer>) {
        self.target = None;
        let old_len = self.points.len();
        if old_len > 0 {
            self.points.clear();
            self.fire(PointsEventKind::IntervalRemoved, 0, old_len - 1);
        }

        self.points = target.points();
        self.target = Some(target);
        if !self.points.is_empty() {
            self.fire(PointsEventKind::IntervalAdded, 0, self.points.len() - 1);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PlanPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Result<PlanPoint, EditError> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// The point at `index` relative to the point at `fixed`.
    pub fn relative_point(&self, index: usize, fixed: usize) -> Result<PlanPoint, EditError> {
        let [x, y] = self.point(index)?;
        let [fx, fy] = self.point(fixed)?;
        Ok([x - fx, y - fy])
    }

    pub fn set_relative_point(
        &mut self,
        index: usize,
        fixed: usize,
        [dx, dy]: PlanPoint,
    ) -> Result<(), EditError> {
        let [fx, fy] = self.point(fixed)?;
        self.set_point(index, fx + dx, fy + dy)
    }

    /// Moves every point by `(dx, dy)`.
    pub fn move_all(&mut self, dx: f32, dy: f32) {
        for point in &mut self.points {
            point[0] += dx;
            point[1] += dy;
        }
        self.write_back();
        self.fire_all_changed();
    }

    pub fn set_point(&mut self, index: usize, x: f32, y: f32) -> Result<(), EditError> {
        self.check_index(index)?;
        self.points[index] = [x, y];
        self.write_back();
        self.fire(PointsEventKind::ContentsChanged, index, index);
        Ok(())
    }

    pub fn set_x(&mut self, index: usize, x: f32) -> Result<(), EditError> {
        self.check_index(index)?;
        self.points[index][0] = x;
        self.write_back();
        self.fire(PointsEventKind::ContentsChanged, index, index);
        Ok(())
    }

    pub fn set_y(&mut self, index: usize, y: f32) -> Result<(), EditError> {
        self.check_index(index)?;
        self.points[index][1] = y;
        self.write_back();
        self.fire(PointsEventKind::ContentsChanged, index, index);
        Ok(())
    }

    /// Reads a length typed in the display unit, returning centimeters.
    /// Inches accept fractions like `2 3/8`; blank input reads as 0.
    pub fn parse_length(&self, param: &str, text: &str) -> Result<f32, EditError> {
        let value = parse_length(text, self.unit).map_err(|reason| EditError::InvalidParameter {
            param: param.to_string(),
            reason: format!("'{}': {}", text.trim(), reason),
        })?;
        Self::check_finite(param, value)?;
        Ok(value)
    }

    /// Sets a point from coordinates typed in the display unit. Nothing
    /// changes unless both parse.
    pub fn set_point_text(&mut self, index: usize, x: &str, y: &str) -> Result<(), EditError> {
        self.check_index(index)?;
        let x = self.parse_length("x", x)?;
        let y = self.parse_length("y", y)?;
        self.set_point(index, x, y)
    }

    /// Inserts a point before `index`; `index == len()` appends.
    pub fn add_point(&mut self, index: usize, x: f32, y: f32) -> Result<(), EditError> {
        if index > self.points.len() {
            return Err(EditError::index(index, self.points.len()));
        }
        let Some(target) = self.target.as_mut() else {
            return Err(EditError::NothingToEdit {
                reason: "no points container bound".to_string(),
            });
        };
        target.add_point(index, x, y);
        self.points = target.points();
        self.fire(PointsEventKind::IntervalAdded, index, index);
        Ok(())
    }

    pub fn remove_point(&mut self, index: usize) -> Result<(), EditError> {
        self.check_index(index)?;
        if let Some(target) = self.target.as_mut() {
            target.remove_point(index);
            self.points = target.points();
        }
        self.fire(PointsEventKind::IntervalRemoved, index, index);
        Ok(())
    }

    /// Moves the point at `from` to `to`, shifting the points in between.
    pub fn move_point(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let point = self.points.remove(from);
        self.points.insert(to, point);
        self.write_back();
        self.fire(PointsEventKind::ContentsChanged, from.min(to), from.max(to));
        Ok(())
    }

    /// The point formatted as `"x; y"` in the display unit.
    pub fn element_label(&self, index: usize) -> Result<String, EditError> {
        let [x, y] = self.point(index)?;
        Ok(format!(
            "{}; {}",
            format_length(x, self.unit, self.decimals),
            format_length(y, self.unit, self.decimals)
        ))
    }

    /// Distance between two points.
    pub fn segment_length(&self, start: usize, end: usize) -> Result<f32, EditError> {
        Ok(distance(self.point(start)?, self.point(end)?))
    }

    /// Starting at `toward`, walks around the ring and returns the first
    /// index whose point differs from the point at `from`.
    ///
    /// The walk goes forward if `toward` lies in the first half after
    /// `from`, backward otherwise. Returns `from` if every point coincides
    /// with it.
    pub fn nearest_distinct_point(&self, from: usize, toward: usize) -> Result<usize, EditError> {
        self.check_index(from)?;
        self.check_index(toward)?;
        Ok(self.distinct_point(from, toward))
    }

    fn distinct_point(&self, from: usize, toward: usize) -> usize {
        let n = self.points.len();
        let step = if (toward + n - from) % n < n / 2 { 1 } else { n - 1 };
        let origin = self.points[from];
        let mut index = toward;
        while index != from {
            if distance(origin, self.points[index]) > 0.0 {
                return index;
            }
            index = (index + step) % n;
        }
        index
    }

    /// The point the reference line of an angle at `start` comes from.
    fn opposite_point(&self, start: usize, opposite: usize) -> Option<PlanPoint> {
        let [x, y] = self.points[start];
        if self.points.len() == 2 {
            return Some([x - SYNTHETIC_OPPOSITE_DISTANCE, y]);
        }
        let index = self.distinct_point(start, opposite);
        if index == start {
            debug!("All points coincide with point {}, no reference line", start);
            return None;
        }
        Some(self.points[index])
    }

    /// Angle in degrees at `start` between the line coming from `opposite`
    /// and the line going to `end`, in `[0, 360)`.
    ///
    /// Degenerate input yields 0: fewer than two points, a zero-length
    /// `start -> end` line, or a ring whose points all coincide. A
    /// two-point shape measures against a horizontal line coming from the
    /// left.
    pub fn vector_angle(&self, start: usize, end: usize, opposite: usize) -> Result<f32, EditError> {
        if self.points.len() <= 1 {
            return Ok(0.0);
        }
        self.check_index(start)?;
        self.check_index(end)?;
        self.check_index(opposite)?;

        let start_point = self.points[start];
        let end_point = self.points[end];
        let end_length = distance(start_point, end_point);
        if end_length == 0.0 {
            return Ok(0.0);
        }
        let ex = (end_point[0] - start_point[0]) / end_length;
        let ey = (end_point[1] - start_point[1]) / end_length;

        let Some(opposite_point) = self.opposite_point(start, opposite) else {
            return Ok(0.0);
        };
        let start_length = distance(start_point, opposite_point);
        let sx = (start_point[0] - opposite_point[0]) / start_length;
        let sy = (start_point[1] - opposite_point[1]) / start_length;

        let turn = ((sx * ey - sy * ex) as f64).atan2((sx * ex + sy * ey) as f64);
        let angle = (180.0 - turn.to_degrees()) as f32;
        Ok(if angle >= 360.0 { 0.0 } else { angle })
    }

    /// Moves the point at `end` so that the line from `start` has the given
    /// length and [`PointsModel::vector_angle`] returns `angle` degrees.
    ///
    /// A zero length puts `end` onto `start`. Does nothing for shapes with
    /// fewer than two points or when no reference line exists.
    pub fn set_vector(
        &mut self,
        start: usize,
        end: usize,
        opposite: usize,
        length: f32,
        angle: f32,
    ) -> Result<(), EditError> {
        if self.points.len() <= 1 {
            return Ok(());
        }
        self.check_index(start)?;
        self.check_index(end)?;
        self.check_index(opposite)?;
        Self::check_finite("length", length)?;
        Self::check_finite("angle", angle)?;

        let start_point = self.points[start];
        let new_end = if length == 0.0 {
            start_point
        } else {
            let Some(opposite_point) = self.opposite_point(start, opposite) else {
                return Ok(());
            };
            let theta = (270.0 - angle as f64).to_radians()
                - ((start_point[0] - opposite_point[0]) as f64)
                    .atan2((start_point[1] - opposite_point[1]) as f64);
            let length = length as f64;
            [
                (start_point[0] as f64 + length * theta.cos()) as f32,
                (start_point[1] as f64 + length * theta.sin()) as f32,
            ]
        };

        self.points[end] = new_end;
        self.write_back();
        self.fire(PointsEventKind::ContentsChanged, end, end);
        Ok(())
    }

    /// A path through the points, closed if the container is closed.
    /// `None` without points.
    pub fn outline_shape(&self) -> Option<Path> {
        let (first, rest) = self.points.split_first()?;
        let closed = self.target.as_ref().is_some_and(|t| t.is_closed());

        let mut builder = Path::builder();
        builder.begin(point(first[0], first[1]));
        for p in rest {
            builder.line_to(point(p[0], p[1]));
        }
        builder.end(closed);
        Some(builder.build())
    }
}
