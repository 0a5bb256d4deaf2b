//! The plan: every object of a floor plan plus the current selection.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::geometry::PlanPoint;
use crate::model::{
    Camera, Compass, DimensionLine, Furniture, Label, ObjectId, ObjectKind, PlanObject, Polyline,
    Room, Wall, WallEnd,
};

/// Object store keyed by stable ids, kept in insertion order, with an
/// ordered selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    objects: HashMap<ObjectId, PlanObject>,
    draw_order: Vec<ObjectId>,
    selection: Vec<ObjectId>,
    next_id: ObjectId,
}

macro_rules! typed_accessors {
    ($($variant:ident => $get:ident, $get_mut:ident;)*) => {
        $(
            pub fn $get(&self, id: ObjectId) -> Option<&$variant> {
                match self.objects.get(&id) {
                    Some(PlanObject::$variant(o)) => Some(o),
                    _ => None,
                }
            }

            pub fn $get_mut(&mut self, id: ObjectId) -> Option<&mut $variant> {
                match self.objects.get_mut(&id) {
                    Some(PlanObject::$variant(o)) => Some(o),
                    _ => None,
                }
            }
        )*
    };
}

impl Plan {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    fn generate_id(&mut self) -> ObjectId {
        self.next_id = self.next_id.max(1);
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds an object at the end of the drawing order and returns its id.
    pub fn add(&mut self, object: impl Into<PlanObject>) -> ObjectId {
        let id = self.generate_id();
        self.objects.insert(id, object.into());
        self.draw_order.push(id);
        id
    }

    /// Puts back an object previously taken out with [`Plan::remove`],
    /// keeping its id.
    pub fn restore(&mut self, id: ObjectId, object: PlanObject) {
        if self.objects.insert(id, object).is_none() {
            self.draw_order.push(id);
        }
        self.next_id = self.next_id.max(id + 1);
    }

    /// Removes an object, unlinking walls joined to it and dropping it from
    /// the selection.
    pub fn remove(&mut self, id: ObjectId) -> Option<PlanObject> {
        let removed = self.objects.remove(&id)?;
        self.draw_order.retain(|&other| other != id);
        self.selection.retain(|&other| other != id);

        for object in self.objects.values_mut() {
            if let PlanObject::Wall(wall) = object {
                if wall.wall_at_start == Some(id) {
                    wall.wall_at_start = None;
                }
                if wall.wall_at_end == Some(id) {
                    wall.wall_at_end = None;
                }
            }
        }
        debug!("Removed {} {}", removed.kind(), id);
        Some(removed)
    }

    pub fn get(&self, id: ObjectId) -> Option<&PlanObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PlanObject> {
        self.objects.get_mut(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.objects.get(&id).map(PlanObject::kind)
    }

    typed_accessors! {
        Wall => wall, wall_mut;
        Room => room, room_mut;
        Polyline => polyline, polyline_mut;
        Label => label, label_mut;
        DimensionLine => dimension_line, dimension_line_mut;
        Furniture => furniture, furniture_mut;
        Camera => camera, camera_mut;
        Compass => compass, compass_mut;
    }

    /// Ids in drawing order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.draw_order.iter().copied()
    }

    /// Objects in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &PlanObject)> + '_ {
        self.draw_order
            .iter()
            .filter_map(|id| self.objects.get(id).map(|o| (*id, o)))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The selected ids in selection order.
    pub fn selected_items(&self) -> &[ObjectId] {
        &self.selection
    }

    /// Replaces the selection. Ids that are not in the plan are dropped.
    pub fn set_selected_items(&mut self, items: Vec<ObjectId>) {
        let mut selection = Vec::with_capacity(items.len());
        for id in items {
            if !self.objects.contains_key(&id) {
                debug!("Ignoring selection of missing object {}", id);
            } else if !selection.contains(&id) {
                selection.push(id);
            }
        }
        self.selection = selection;
    }

    /// Adds an object to the end of the selection.
    pub fn select(&mut self, id: ObjectId) {
        if self.objects.contains_key(&id) && !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Joins `first` at `first_end` with `second` at `second_end`.
    pub fn join_walls(
        &mut self,
        first: ObjectId,
        first_end: WallEnd,
        second: ObjectId,
        second_end: WallEnd,
    ) {
        if let Some(wall) = self.wall_mut(first) {
            wall.set_wall_at(first_end, Some(second));
        }
        if let Some(wall) = self.wall_mut(second) {
            wall.set_wall_at(second_end, Some(first));
        }
    }

    /// Moves one end of a wall. A wall joined at that end has its own joined
    /// end moved along, start taking precedence if it is joined at both.
    pub fn move_wall_point(&mut self, id: ObjectId, end: WallEnd, point: PlanPoint) {
        let Some(wall) = self.wall_mut(id) else {
            warn!("Cannot move point of missing wall {}", id);
            return;
        };
        wall.set_point(end, point);
        let Some(neighbor_id) = wall.wall_at(end) else {
            return;
        };

        match self.wall_mut(neighbor_id) {
            Some(neighbor) => {
                if let Some(neighbor_end) = neighbor.joined_end(id) {
                    neighbor.set_point(neighbor_end, point);
                }
            }
            None => debug!("Wall {} is joined to missing wall {}", id, neighbor_id),
        }
    }
}
