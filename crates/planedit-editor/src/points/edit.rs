use planedit_core::{EditError, LengthUnit};
use tracing::{debug, warn};

use crate::commands::Command;
use crate::geometry::PlanPoint;
use crate::model::{ObjectId, ObjectKind, PlanObject, Room};
use crate::plan::Plan;

fn read_points(plan: &Plan, id: ObjectId) -> Option<Vec<PlanPoint>> {
    match plan.get(id)? {
        PlanObject::Room(room) => Some(room.points().to_vec()),
        PlanObject::Polyline(polyline) => Some(polyline.points().to_vec()),
        _ => None,
    }
}

fn write_points(plan: &mut Plan, id: ObjectId, points: &[PlanPoint]) {
    match plan.get_mut(id) {
        Some(PlanObject::Room(room)) => room.set_points(points),
        Some(PlanObject::Polyline(polyline)) => polyline.set_points(points),
        _ => warn!("Cannot restore points of object {}: not a room or polyline", id),
    }
}

/// Undo boundary of a points editing session.
///
/// Open it before a [`super::PointsModel`] starts changing the object. If
/// the session is committed, post the edit to the undo stack; if it is
/// cancelled, call [`Command::undo`] once.
#[derive(Debug, Clone)]
pub struct PointsEdit {
    id: ObjectId,
    old_points: Vec<PlanPoint>,
    new_points: Vec<PlanPoint>,
}

impl PointsEdit {
    pub fn open(plan: &Plan, id: ObjectId) -> Result<Self, EditError> {
        let Some(object) = plan.get(id) else {
            return Err(EditError::ObjectNotFound { id });
        };
        let Some(points) = read_points(plan, id) else {
            return Err(EditError::WrongKind {
                id,
                expected: "room or polyline".to_string(),
                actual: object.kind().to_string(),
            });
        };
        Ok(Self {
            id,
            old_points: points.clone(),
            new_points: points,
        })
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn old_points(&self) -> &[PlanPoint] {
        &self.old_points
    }

    /// True if the object's points differ from the snapshot.
    pub fn has_changes(&self, plan: &Plan) -> bool {
        read_points(plan, self.id).is_some_and(|points| points != self.old_points)
    }
}

impl Command for PointsEdit {
    fn execute(&mut self, plan: &mut Plan) {
        write_points(plan, self.id, &self.new_points);
    }

    fn undo(&mut self, plan: &mut Plan) {
        if let Some(points) = read_points(plan, self.id) {
            self.new_points = points;
        }
        write_points(plan, self.id, &self.old_points);
    }

    fn name(&self) -> &str {
        "Edit points"
    }
}

/// Adds a square room with its corner at the origin and selects it.
#[derive(Debug, Clone)]
pub struct NewRoomCommand {
    side: f32,
    room: Option<ObjectId>,
    removed: Option<PlanObject>,
    previous_selection: Vec<ObjectId>,
}

impl NewRoomCommand {
    /// Side length used when nothing is configured: 500 cm, or 144 inches
    /// for inch users.
    pub fn default_side(unit: LengthUnit) -> f32 {
        match unit {
            LengthUnit::Inch => LengthUnit::Inch.unit_to_centimeter(144.0),
            _ => 500.0,
        }
    }

    pub fn new(side: f32) -> Result<Self, EditError> {
        if !side.is_finite() || side <= 0.0 {
            return Err(EditError::InvalidParameter {
                param: "side".to_string(),
                reason: format!("room side must be positive, got {}", side),
            });
        }
        Ok(Self {
            side,
            room: None,
            removed: None,
            previous_selection: Vec::new(),
        })
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    /// The id of the added room, once executed.
    pub fn room(&self) -> Option<ObjectId> {
        self.room
    }
}

impl Command for NewRoomCommand {
    fn execute(&mut self, plan: &mut Plan) {
        self.previous_selection = plan.selected_items().to_vec();
        let id = match (self.room, self.removed.take()) {
            (Some(id), Some(room)) => {
                plan.restore(id, room);
                id
            }
            (Some(id), None) if plan.kind(id) == Some(ObjectKind::Room) => id,
            _ => plan.add(Room::square(self.side)),
        };
        self.room = Some(id);
        plan.set_selected_items(vec![id]);
        debug!("Added room {} with side {}", id, self.side);
    }

    fn undo(&mut self, plan: &mut Plan) {
        plan.set_selected_items(self.previous_selection.clone());
        if let Some(id) = self.room {
            self.removed = plan.remove(id);
        }
    }

    fn name(&self) -> &str {
        "New room"
    }
}
