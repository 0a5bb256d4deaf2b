use planedit_core::{EditError, Shared};
use tracing::warn;

use crate::geometry::PlanPoint;
use crate::model::{ObjectId, ObjectKind, PlanObject, Polyline, Room};
use crate::plan::Plan;

/// An ordered vertex list that a [`super::PointsModel`] can edit.
pub trait PointsContainer {
    fn points(&self) -> Vec<PlanPoint>;

    fn set_points(&mut self, points: &[PlanPoint]);

    /// Inserts a point before `index`.
    fn add_point(&mut self, index: usize, x: f32, y: f32);

    fn remove_point(&mut self, index: usize);

    /// Whether the last point connects back to the first.
    fn is_closed(&self) -> bool;

    /// Whether the shape is drawn with a background.
    fn is_filled(&self) -> bool;
}

impl PointsContainer for Room {
    fn points(&self) -> Vec<PlanPoint> {
        Room::points(self).to_vec()
    }

    fn set_points(&mut self, points: &[PlanPoint]) {
        Room::set_points(self, points);
    }

    fn add_point(&mut self, index: usize, x: f32, y: f32) {
        Room::add_point(self, index, x, y);
    }

    fn remove_point(&mut self, index: usize) {
        Room::remove_point(self, index);
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn is_filled(&self) -> bool {
        true
    }
}

impl PointsContainer for Polyline {
    fn points(&self) -> Vec<PlanPoint> {
        Polyline::points(self).to_vec()
    }

    fn set_points(&mut self, points: &[PlanPoint]) {
        Polyline::set_points(self, points);
    }

    fn add_point(&mut self, index: usize, x: f32, y: f32) {
        Polyline::add_point(self, index, x, y);
    }

    fn remove_point(&mut self, index: usize) {
        Polyline::remove_point(self, index);
    }

    fn is_closed(&self) -> bool {
        self.closed_path
    }

    fn is_filled(&self) -> bool {
        false
    }
}

/// The points of a room or polyline living in a shared plan.
///
/// Every call borrows the plan, so the caller must not hold a borrow of
/// its own while editing through this container.
#[derive(Debug, Clone)]
pub struct PlanPoints {
    plan: Shared<Plan>,
    id: ObjectId,
    kind: ObjectKind,
}

impl PlanPoints {
    /// Binds to the room or polyline `id`.
    pub fn new(plan: Shared<Plan>, id: ObjectId) -> Result<Self, EditError> {
        let kind = match plan.borrow().get(id) {
            Some(PlanObject::Room(_)) => ObjectKind::Room,
            Some(PlanObject::Polyline(_)) => ObjectKind::Polyline,
            Some(other) => {
                return Err(EditError::WrongKind {
                    id,
                    expected: "room or polyline".to_string(),
                    actual: other.kind().to_string(),
                })
            }
            None => return Err(EditError::ObjectNotFound { id }),
        };
        Ok(Self { plan, id, kind })
    }

    /// Binds to the first selected room, or else the first selected
    /// polyline.
    pub fn for_selection(plan: Shared<Plan>) -> Result<Self, EditError> {
        let id = {
            let current = plan.borrow();
            let selected = current.selected_items();
            let first_of = |kind: ObjectKind| {
                selected
                    .iter()
                    .copied()
                    .find(|&id| current.kind(id) == Some(kind))
            };
            first_of(ObjectKind::Room).or_else(|| first_of(ObjectKind::Polyline))
        };
        match id {
            Some(id) => Self::new(plan, id),
            None => Err(EditError::NothingToEdit {
                reason: "no room or polyline selected".to_string(),
            }),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn plan(&self) -> &Shared<Plan> {
        &self.plan
    }

    fn with_target<R>(&self, default: R, f: impl FnOnce(&mut dyn PointsContainer) -> R) -> R {
        let mut plan = self.plan.borrow_mut();
        let target: Option<&mut dyn PointsContainer> = match self.kind {
            ObjectKind::Room => plan.room_mut(self.id).map(|r| r as &mut dyn PointsContainer),
            _ => plan
                .polyline_mut(self.id)
                .map(|p| p as &mut dyn PointsContainer),
        };
        match target {
            Some(target) => f(target),
            None => {
                warn!("Points of {} {} are gone from the plan", self.kind, self.id);
                default
            }
        }
    }
}

impl PointsContainer for PlanPoints {
    fn points(&self) -> Vec<PlanPoint> {
        self.with_target(Vec::new(), |target| target.points())
    }

    fn set_points(&mut self, points: &[PlanPoint]) {
        self.with_target((), |target| target.set_points(points));
    }

    fn add_point(&mut self, index: usize, x: f32, y: f32) {
        self.with_target((), |target| target.add_point(index, x, y));
    }

    fn remove_point(&mut self, index: usize) {
        self.with_target((), |target| target.remove_point(index));
    }

    fn is_closed(&self) -> bool {
        self.with_target(self.kind == ObjectKind::Room, |target| target.is_closed())
    }

    fn is_filled(&self) -> bool {
        self.kind == ObjectKind::Room
    }
}
