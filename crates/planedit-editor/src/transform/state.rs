use std::f32::consts::PI;

use tracing::warn;

use super::options::TransformOptions;
use crate::geometry::{direction, distance, midpoint, wrap_angle, BoundsPoints, PlanPoint};
use crate::model::{
    Camera, Compass, DimensionLine, Furniture, Label, ObjectId, ObjectKind, PlanItem, PlanObject,
    Texture, Wall, WallEnd,
};
use crate::plan::Plan;

fn warn_missing(id: ObjectId, kind: ObjectKind) {
    warn!("Skipping {} {}: no longer in the plan", kind, id);
}

/// The end of a neighbor wall joined to a captured wall, with its point at
/// capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedEnd {
    wall: ObjectId,
    end: WallEnd,
    point: PlanPoint,
}

impl JoinedEnd {
    fn capture(plan: &Plan, id: ObjectId, wall: &Wall, end: WallEnd) -> Option<Self> {
        let neighbor_id = wall.wall_at(end)?;
        let neighbor = plan.wall(neighbor_id)?;
        let neighbor_end = neighbor.joined_end(id)?;
        Some(Self {
            wall: neighbor_id,
            end: neighbor_end,
            point: neighbor.point(neighbor_end),
        })
    }
}

/// Snapshot of a wall: end points, side styles and the joined ends of its
/// neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct WallState {
    id: ObjectId,
    start: PlanPoint,
    end: PlanPoint,
    joined_at_start: Option<JoinedEnd>,
    joined_at_end: Option<JoinedEnd>,
    left_side_color: Option<u32>,
    left_side_texture: Option<Texture>,
    right_side_color: Option<u32>,
    right_side_texture: Option<Texture>,
}

impl WallState {
    pub fn capture(plan: &Plan, id: ObjectId, wall: &Wall) -> Self {
        Self {
            id,
            start: wall.start(),
            end: wall.end(),
            joined_at_start: JoinedEnd::capture(plan, id, wall, WallEnd::Start),
            joined_at_end: JoinedEnd::capture(plan, id, wall, WallEnd::End),
            left_side_color: wall.left_side_color,
            left_side_texture: wall.left_side_texture.clone(),
            right_side_color: wall.right_side_color,
            right_side_texture: wall.right_side_texture.clone(),
        }
    }

    fn write_sides(&self, plan: &mut Plan, swap_sides: bool) {
        let Some(wall) = plan.wall_mut(self.id) else {
            return;
        };
        let (left, right) = if swap_sides {
            (
                (self.right_side_color, &self.right_side_texture),
                (self.left_side_color, &self.left_side_texture),
            )
        } else {
            (
                (self.left_side_color, &self.left_side_texture),
                (self.right_side_color, &self.right_side_texture),
            )
        };
        wall.left_side_color = left.0;
        wall.left_side_texture = left.1.clone();
        wall.right_side_color = right.0;
        wall.right_side_texture = right.1.clone();
    }

    /// Moves both ends (and the joined ends of neighbor walls) and swaps the
    /// side styles under a mirroring transform.
    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        if plan.wall(self.id).is_none() {
            return warn_missing(self.id, ObjectKind::Wall);
        }
        plan.move_wall_point(self.id, WallEnd::Start, options.map_point(self.start));
        plan.move_wall_point(self.id, WallEnd::End, options.map_point(self.end));
        self.write_sides(plan, options.is_mirroring());
    }

    /// Writes back the captured points of this wall and of the neighbor ends
    /// joined to it, as they were, even where they did not coincide.
    pub fn reset(&self, plan: &mut Plan) {
        let Some(wall) = plan.wall_mut(self.id) else {
            return warn_missing(self.id, ObjectKind::Wall);
        };
        wall.set_point(WallEnd::Start, self.start);
        wall.set_point(WallEnd::End, self.end);

        for joined in [self.joined_at_start, self.joined_at_end].into_iter().flatten() {
            match plan.wall_mut(joined.wall) {
                Some(neighbor) => neighbor.set_point(joined.end, joined.point),
                None => warn_missing(joined.wall, ObjectKind::Wall),
            }
        }
        self.write_sides(plan, false);
    }
}

/// Snapshot of the name and area labels of a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTextState {
    center: PlanPoint,
    name_offset: PlanPoint,
    name_angle: f32,
    area_offset: PlanPoint,
    area_angle: f32,
}

/// Snapshot of a room or polyline vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonState {
    id: ObjectId,
    kind: ObjectKind,
    points: Vec<PlanPoint>,
    room_text: Option<RoomTextState>,
}

impl PolygonState {
    pub fn capture(id: ObjectId, object: &PlanObject) -> Option<Self> {
        match object {
            PlanObject::Room(room) => Some(Self {
                id,
                kind: ObjectKind::Room,
                points: room.points().to_vec(),
                room_text: Some(RoomTextState {
                    center: room.center(),
                    name_offset: [room.name_x_offset, room.name_y_offset],
                    name_angle: room.name_angle,
                    area_offset: [room.area_x_offset, room.area_y_offset],
                    area_angle: room.area_angle,
                }),
            }),
            PlanObject::Polyline(polyline) => Some(Self {
                id,
                kind: ObjectKind::Polyline,
                points: polyline.points().to_vec(),
                room_text: None,
            }),
            _ => None,
        }
    }

    pub fn points(&self) -> &[PlanPoint] {
        &self.points
    }

    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        let points: Vec<PlanPoint> = self.points.iter().map(|&p| options.map_point(p)).collect();

        match self.kind {
            ObjectKind::Room => {
                let Some(room) = plan.room_mut(self.id) else {
                    return warn_missing(self.id, self.kind);
                };
                room.set_points(&points);
                let Some(text) = &self.room_text else {
                    return;
                };
                let [cx, cy] = room.center();
                let label_offset = |offset: PlanPoint| -> PlanPoint {
                    let [x, y] = options
                        .map_point([text.center[0] + offset[0], text.center[1] + offset[1]]);
                    [x - cx, y - cy]
                };
                let [name_x, name_y] = label_offset(text.name_offset);
                let [area_x, area_y] = label_offset(text.area_offset);
                room.name_x_offset = name_x;
                room.name_y_offset = name_y;
                room.area_x_offset = area_x;
                room.area_y_offset = area_y;
                room.name_angle = options.transform_text_angle(text.name_angle);
                room.area_angle = options.transform_text_angle(text.area_angle);
            }
            _ => match plan.polyline_mut(self.id) {
                Some(polyline) => polyline.set_points(&points),
                None => warn_missing(self.id, self.kind),
            },
        }
    }

    pub fn reset(&self, plan: &mut Plan) {
        match self.kind {
            ObjectKind::Room => {
                let Some(room) = plan.room_mut(self.id) else {
                    return warn_missing(self.id, self.kind);
                };
                room.set_points(&self.points);
                if let Some(text) = &self.room_text {
                    [room.name_x_offset, room.name_y_offset] = text.name_offset;
                    [room.area_x_offset, room.area_y_offset] = text.area_offset;
                    room.name_angle = text.name_angle;
                    room.area_angle = text.area_angle;
                }
            }
            _ => match plan.polyline_mut(self.id) {
                Some(polyline) => polyline.set_points(&self.points),
                None => warn_missing(self.id, self.kind),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelState {
    id: ObjectId,
    anchor: PlanPoint,
    angle: f32,
}

impl LabelState {
    pub fn capture(id: ObjectId, label: &Label) -> Self {
        Self {
            id,
            anchor: label.anchor(),
            angle: label.angle,
        }
    }

    fn write(&self, plan: &mut Plan, [x, y]: PlanPoint, angle: f32) {
        match plan.label_mut(self.id) {
            Some(label) => {
                label.x = x;
                label.y = y;
                label.angle = angle;
            }
            None => warn_missing(self.id, ObjectKind::Label),
        }
    }

    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        let anchor = options.map_point(self.anchor);
        self.write(plan, anchor, options.transform_text_angle(self.angle));
    }

    pub fn reset(&self, plan: &mut Plan) {
        self.write(plan, self.anchor, self.angle);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionState {
    id: ObjectId,
    start: PlanPoint,
    end: PlanPoint,
    offset: f32,
}

impl DimensionState {
    pub fn capture(id: ObjectId, line: &DimensionLine) -> Self {
        Self {
            id,
            start: line.start(),
            end: line.end(),
            offset: line.offset,
        }
    }

    fn write(&self, plan: &mut Plan, start: PlanPoint, end: PlanPoint, offset: f32) {
        match plan.dimension_line_mut(self.id) {
            Some(line) => {
                line.set_start(start);
                line.set_end(end);
                line.offset = offset;
            }
            None => warn_missing(self.id, ObjectKind::DimensionLine),
        }
    }

    /// Maps both ends. The offset changes sign under mirroring, and the
    /// ends are swapped (negating the offset again) when the mapped start
    /// lies right of the mapped end, so the text keeps reading left to right.
    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        let mut start = options.map_point(self.start);
        let mut end = options.map_point(self.end);
        let mut offset = self.offset;
        if options.is_mirroring() {
            offset = -offset;
        }
        if start[0] > end[0] {
            std::mem::swap(&mut start, &mut end);
            offset = -offset;
        }
        self.write(plan, start, end, offset);
    }

    pub fn reset(&self, plan: &mut Plan) {
        self.write(plan, self.start, self.end, self.offset);
    }
}

/// Snapshot of a piece of furniture.
///
/// The right edge corners are computed at capture time; after mapping them
/// the new width, depth and angle are read back from their positions
/// relative to the mapped center.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureState {
    id: ObjectId,
    center: PlanPoint,
    angle: f32,
    width: f32,
    depth: f32,
    model_mirrored: bool,
    top_right: PlanPoint,
    bottom_right: PlanPoint,
}

impl FurnitureState {
    pub fn capture(id: ObjectId, furniture: &Furniture) -> Self {
        let (sin, cos) = (furniture.angle as f64).sin_cos();
        let half_width = furniture.width as f64 / 2.0;
        let half_depth = furniture.depth as f64 / 2.0;
        let (cx, cy) = (furniture.x as f64, furniture.y as f64);

        Self {
            id,
            center: furniture.center(),
            angle: furniture.angle,
            width: furniture.width,
            depth: furniture.depth,
            model_mirrored: furniture.model_mirrored,
            top_right: [
                (cos * half_width - sin * half_depth + cx) as f32,
                (sin * half_width + cos * half_depth + cy) as f32,
            ],
            bottom_right: [
                (cos * half_width + sin * half_depth + cx) as f32,
                (sin * half_width - cos * half_depth + cy) as f32,
            ],
        }
    }

    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        let Some(furniture) = plan.furniture_mut(self.id) else {
            return warn_missing(self.id, ObjectKind::Furniture);
        };

        let center = options.map_point(self.center);
        let top_right = options.map_point(self.top_right);
        let bottom_right = options.map_point(self.bottom_right);
        let right = midpoint(top_right, bottom_right);

        let mut angle = direction(center, right);
        let mut model_mirrored = self.model_mirrored;
        if options.is_mirroring() {
            angle += PI;
            model_mirrored = !model_mirrored;
        }

        [furniture.x, furniture.y] = center;
        furniture.depth = distance(top_right, bottom_right);
        furniture.width = distance(center, right) * 2.0;
        furniture.angle = wrap_angle(angle);
        furniture.model_mirrored = model_mirrored;
    }

    pub fn reset(&self, plan: &mut Plan) {
        let Some(furniture) = plan.furniture_mut(self.id) else {
            return warn_missing(self.id, ObjectKind::Furniture);
        };
        [furniture.x, furniture.y] = self.center;
        furniture.angle = self.angle;
        furniture.width = self.width;
        furniture.depth = self.depth;
        furniture.model_mirrored = self.model_mirrored;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    id: ObjectId,
    position: PlanPoint,
}

impl CameraState {
    pub fn capture(id: ObjectId, camera: &Camera) -> Self {
        Self {
            id,
            position: [camera.x, camera.y],
        }
    }

    fn write(&self, plan: &mut Plan, [x, y]: PlanPoint) {
        match plan.camera_mut(self.id) {
            Some(camera) => {
                camera.x = x;
                camera.y = y;
            }
            None => warn_missing(self.id, ObjectKind::Camera),
        }
    }

    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        self.write(plan, options.map_point(self.position));
    }

    pub fn reset(&self, plan: &mut Plan) {
        self.write(plan, self.position);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompassState {
    id: ObjectId,
    center: PlanPoint,
    diameter: f32,
    north_direction: f32,
    top_right: PlanPoint,
    bottom_right: PlanPoint,
}

impl CompassState {
    pub fn capture(id: ObjectId, compass: &Compass) -> Self {
        let radius = compass.diameter / 2.0;
        Self {
            id,
            center: compass.center(),
            diameter: compass.diameter,
            north_direction: compass.north_direction,
            top_right: [compass.x + radius, compass.y - radius],
            bottom_right: [compass.x + radius, compass.y + radius],
        }
    }

    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        let Some(compass) = plan.compass_mut(self.id) else {
            return warn_missing(self.id, ObjectKind::Compass);
        };

        let center = options.map_point(self.center);
        let right = midpoint(
            options.map_point(self.top_right),
            options.map_point(self.bottom_right),
        );

        [compass.x, compass.y] = center;
        compass.diameter = distance(center, right) * 2.0;
        compass.north_direction = wrap_angle(self.north_direction + direction(center, right));
    }

    pub fn reset(&self, plan: &mut Plan) {
        let Some(compass) = plan.compass_mut(self.id) else {
            return warn_missing(self.id, ObjectKind::Compass);
        };
        [compass.x, compass.y] = self.center;
        compass.diameter = self.diameter;
        compass.north_direction = self.north_direction;
    }
}

/// The captured pre-edit state of one plan object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectState {
    Wall(WallState),
    Polygon(PolygonState),
    Label(LabelState),
    Dimension(DimensionState),
    Furniture(FurnitureState),
    Camera(CameraState),
    Compass(CompassState),
}

impl ObjectState {
    /// Captures the current state of an object, or `None` if the id is not
    /// in the plan.
    pub fn capture(plan: &Plan, id: ObjectId) -> Option<Self> {
        let Some(object) = plan.get(id) else {
            warn!("Cannot capture object {}: not in the plan", id);
            return None;
        };
        let state = match object {
            PlanObject::Wall(wall) => ObjectState::Wall(WallState::capture(plan, id, wall)),
            PlanObject::Room(_) | PlanObject::Polyline(_) => {
                ObjectState::Polygon(PolygonState::capture(id, object)?)
            }
            PlanObject::Label(label) => ObjectState::Label(LabelState::capture(id, label)),
            PlanObject::DimensionLine(line) => {
                ObjectState::Dimension(DimensionState::capture(id, line))
            }
            PlanObject::Furniture(furniture) => {
                ObjectState::Furniture(FurnitureState::capture(id, furniture))
            }
            PlanObject::Camera(camera) => ObjectState::Camera(CameraState::capture(id, camera)),
            PlanObject::Compass(compass) => {
                ObjectState::Compass(CompassState::capture(id, compass))
            }
        };
        Some(state)
    }

    pub fn id(&self) -> ObjectId {
        match self {
            ObjectState::Wall(s) => s.id,
            ObjectState::Polygon(s) => s.id,
            ObjectState::Label(s) => s.id,
            ObjectState::Dimension(s) => s.id,
            ObjectState::Furniture(s) => s.id,
            ObjectState::Camera(s) => s.id,
            ObjectState::Compass(s) => s.id,
        }
    }

    /// The live points of the object used for bounds; empty if the object
    /// is gone.
    pub fn points(&self, plan: &Plan) -> BoundsPoints {
        plan.get(self.id())
            .map(|object| object.bounds_points())
            .unwrap_or_default()
    }

    /// Applies the transform to the captured geometry. The identity writes
    /// the snapshot back unchanged.
    pub fn transform(&self, plan: &mut Plan, options: &TransformOptions) {
        if options.is_identity() {
            return self.reset(plan);
        }
        match self {
            ObjectState::Wall(s) => s.transform(plan, options),
            ObjectState::Polygon(s) => s.transform(plan, options),
            ObjectState::Label(s) => s.transform(plan, options),
            ObjectState::Dimension(s) => s.transform(plan, options),
            ObjectState::Furniture(s) => s.transform(plan, options),
            ObjectState::Camera(s) => s.transform(plan, options),
            ObjectState::Compass(s) => s.transform(plan, options),
        }
    }

    /// Writes the captured state back.
    pub fn reset(&self, plan: &mut Plan) {
        match self {
            ObjectState::Wall(s) => s.reset(plan),
            ObjectState::Polygon(s) => s.reset(plan),
            ObjectState::Label(s) => s.reset(plan),
            ObjectState::Dimension(s) => s.reset(plan),
            ObjectState::Furniture(s) => s.reset(plan),
            ObjectState::Camera(s) => s.reset(plan),
            ObjectState::Compass(s) => s.reset(plan),
        }
    }
}
