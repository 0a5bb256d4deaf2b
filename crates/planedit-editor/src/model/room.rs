use super::PlanItem;
use crate::geometry::{Bounds, BoundsPoints, PlanPoint};

/// A room: a closed, filled polygon carrying a name and an area label.
///
/// Label positions are stored as offsets from the room center, which is
/// the center of the bounding box of the room points.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: Option<String>,
    points: Vec<PlanPoint>,
    pub name_x_offset: f32,
    pub name_y_offset: f32,
    pub name_angle: f32,
    pub area_x_offset: f32,
    pub area_y_offset: f32,
    pub area_angle: f32,
    pub area_visible: bool,
}

impl Room {
    pub fn new(points: Vec<PlanPoint>) -> Self {
        Self {
            name: None,
            points,
            name_x_offset: 0.0,
            name_y_offset: 0.0,
            name_angle: 0.0,
            area_x_offset: 0.0,
            area_y_offset: 0.0,
            area_angle: 0.0,
            area_visible: true,
        }
    }

    /// Creates an axis-aligned square room with its first corner at the origin.
    pub fn square(side: f32) -> Self {
        Self::new(vec![[0.0, 0.0], [side, 0.0], [side, side], [0.0, side]])
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn points(&self) -> &[PlanPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: &[PlanPoint]) {
        self.points = points.to_vec();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Inserts a point before `index`; an index past the end appends.
    pub fn add_point(&mut self, index: usize, x: f32, y: f32) {
        let index = index.min(self.points.len());
        self.points.insert(index, [x, y]);
    }

    /// Removes the point at `index`, ignoring indices past the end.
    pub fn remove_point(&mut self, index: usize) {
        if index < self.points.len() {
            self.points.remove(index);
        }
    }

    pub fn x_center(&self) -> f32 {
        Bounds::from_points(self.points.iter().copied()).center_x()
    }

    pub fn y_center(&self) -> f32 {
        Bounds::from_points(self.points.iter().copied()).center_y()
    }

    pub fn center(&self) -> PlanPoint {
        Bounds::from_points(self.points.iter().copied()).center()
    }

    /// Absolute area of the room polygon.
    pub fn area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0f64;
        for i in 0..n {
            let [x1, y1] = self.points[i];
            let [x2, y2] = self.points[(i + 1) % n];
            sum += x1 as f64 * y2 as f64 - x2 as f64 * y1 as f64;
        }
        (sum.abs() / 2.0) as f32
    }
}

impl PlanItem for Room {
    fn bounds_points(&self) -> BoundsPoints {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_center_and_area() {
        let room = Room::new(vec![[0.0, 0.0], [400.0, 0.0], [400.0, 300.0], [0.0, 300.0]]);
        assert_eq!(room.center(), [200.0, 150.0]);
        assert_eq!(room.area(), 120000.0);
    }

    #[test]
    fn test_add_and_remove_points() {
        let mut room = Room::square(100.0);
        room.add_point(1, 50.0, -10.0);
        assert_eq!(room.point_count(), 5);
        assert_eq!(room.points()[1], [50.0, -10.0]);
        room.remove_point(1);
        assert_eq!(room.points(), Room::square(100.0).points());
        room.remove_point(42);
        assert_eq!(room.point_count(), 4);
    }
}
